use rust_decimal::Decimal;
use serde::Serialize;

use super::accept::AcceptHeader;
use super::fitness::{FitnessQuality, fitness_and_quality};
use crate::media_type::{MediaType, MediaTypeError, Precision};

/// One available media type with its score and original position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked {
    #[serde(flatten)]
    pub score: FitnessQuality,
    pub index: usize,
    /// The available entry, verbatim
    pub media_type: String,
}

impl Ranked {
    pub fn is_acceptable(&self) -> bool {
        self.score.quality > Decimal::ZERO
    }
}

/// Selects the best available representation for a header.
///
/// Carries the numeric precision used for every parse it performs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Negotiator {
    precision: Precision,
}

impl Negotiator {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Scores every entry of `available` and sorts ascending by
    /// `(fitness, quality, index)`, so the last record is the winner.
    pub fn rank<S: AsRef<str>>(
        &self,
        available: &[S],
        header: &str,
    ) -> Result<Vec<Ranked>, MediaTypeError> {
        let accept = AcceptHeader::parse_with(header, self.precision)?;
        self.rank_against(available, &accept)
    }

    /// Like [`rank`](Self::rank) with an already parsed header.
    pub fn rank_against<S: AsRef<str>>(
        &self,
        available: &[S],
        accept: &AcceptHeader,
    ) -> Result<Vec<Ranked>, MediaTypeError> {
        let mut ranked = available
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let raw = raw.as_ref();
                let candidate = MediaType::parse_with(raw, self.precision)?;
                Ok(Ranked {
                    score: fitness_and_quality(&candidate, &accept.ranges),
                    index,
                    media_type: raw.to_string(),
                })
            })
            .collect::<Result<Vec<_>, MediaTypeError>>()?;

        ranked.sort_by_key(|entry| (entry.score, entry.index));
        Ok(ranked)
    }

    /// The winning entry, or `None` when its quality is zero or nothing was
    /// available.
    ///
    /// Entries with equal fitness and quality are resolved in favour of the
    /// one listed last in `available`.
    pub fn negotiate<S: AsRef<str>>(
        &self,
        available: &[S],
        header: &str,
    ) -> Result<Option<Ranked>, MediaTypeError> {
        let winner = self
            .rank(available, header)?
            .pop()
            .filter(Ranked::is_acceptable);

        match &winner {
            Some(entry) => tracing::debug!(
                header,
                media_type = %entry.media_type,
                fitness = entry.score.fitness,
                quality = %entry.score.quality,
                "Negotiated representation"
            ),
            None => tracing::debug!(header, candidates = available.len(), "No acceptable representation"),
        }

        Ok(winner)
    }

    /// The winning entry verbatim, or an empty string when nothing is
    /// acceptable (the caller's 406 Not Acceptable).
    pub fn best_match<S: AsRef<str>>(
        &self,
        available: &[S],
        header: &str,
    ) -> Result<String, MediaTypeError> {
        Ok(self
            .negotiate(available, header)?
            .map(|entry| entry.media_type)
            .unwrap_or_default())
    }
}

/// [`Negotiator::best_match`] with the default precision.
///
/// # Examples
///
/// ```
/// use mimeparser::negotiation::best_match;
///
/// let chosen = best_match(&["application/xbel+xml", "text/xml"], "text/*;q=0.5,*/*; q=0.1").unwrap();
/// assert_eq!(chosen, "text/xml");
///
/// let none = best_match(&["image/png"], "text/*").unwrap();
/// assert!(none.is_empty());
/// ```
pub fn best_match<S: AsRef<str>>(available: &[S], header: &str) -> Result<String, MediaTypeError> {
    Negotiator::default().best_match(available, header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_is_ascending() {
        let ranked = Negotiator::default()
            .rank(&["image/png", "text/html", "text/plain"], "text/html, text/*;q=0.5")
            .unwrap();
        let order: Vec<_> = ranked.iter().map(|r| r.media_type.as_str()).collect();
        assert_eq!(order, vec!["image/png", "text/plain", "text/html"]);
        assert_eq!(ranked[0].score, FitnessQuality::NO_MATCH);
    }

    #[test]
    fn test_ties_go_to_last_entry() {
        let chosen = best_match(&["text/html", "application/json"], "*/*").unwrap();
        assert_eq!(chosen, "application/json");
    }

    #[test]
    fn test_zero_quality_is_not_acceptable() {
        let chosen = best_match(&["text/html"], "text/html;q=0").unwrap();
        assert_eq!(chosen, "");
    }

    #[test]
    fn test_empty_available() {
        let available: [&str; 0] = [];
        assert_eq!(best_match(&available, "*/*").unwrap(), "");
    }

    #[test]
    fn test_negotiate_reports_winner() {
        let winner = Negotiator::default()
            .negotiate(&["text/html", "application/json"], "application/json;q=0.8, text/*;q=0.4")
            .unwrap()
            .unwrap();
        assert_eq!(winner.index, 1);
        assert_eq!(winner.score.fitness, 1110);
        assert_eq!(winner.score.quality, Decimal::new(8, 1));
    }

    #[test]
    fn test_malformed_available_entry_propagates() {
        let result = best_match(&["text/html;broken"], "*/*");
        assert!(matches!(result, Err(MediaTypeError::MalformedParameter { .. })));
    }

    #[test]
    fn test_precision_is_per_negotiator() {
        let coarse = Negotiator::new(Precision::new(1).unwrap());
        // 0.45 and 0.44 both round to 0.4, so the later entry wins the tie
        let chosen = coarse
            .best_match(&["text/html", "text/plain"], "text/html;q=0.45, text/plain;q=0.44")
            .unwrap();
        assert_eq!(chosen, "text/plain");

        let chosen = Negotiator::default()
            .best_match(&["text/html", "text/plain"], "text/html;q=0.45, text/plain;q=0.44")
            .unwrap();
        assert_eq!(chosen, "text/html");
    }
}
