//! Accept header parsing

use crate::media_type::{MediaType, MediaTypeError, Precision};

/// The media ranges of an `Accept`-style header, in header order
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptHeader {
    pub ranges: Vec<MediaType>,
}

impl AcceptHeader {
    /// Parses a comma-separated header with [`Precision::DEFAULT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparser::negotiation::AcceptHeader;
    ///
    /// let accept = AcceptHeader::parse("text/*;q=0.3, text/html;q=0.7, */*;q=0.5").unwrap();
    /// assert_eq!(accept.ranges.len(), 3);
    /// assert_eq!(accept.ranges[1].subtype, "html");
    /// ```
    pub fn parse(header: &str) -> Result<Self, MediaTypeError> {
        Self::parse_with(header, Precision::DEFAULT)
    }

    /// Every comma-separated segment becomes a range, blank ones included.
    /// Order is kept since earlier ranges win fitness ties.
    pub fn parse_with(header: &str, precision: Precision) -> Result<Self, MediaTypeError> {
        let ranges = header
            .split(',')
            .map(|segment| MediaType::parse_with(segment, precision))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { ranges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_keeps_order() {
        let accept = AcceptHeader::parse("text/html;q=0.1, application/json").unwrap();
        assert_eq!(accept.ranges[0].essence(), "text/html");
        assert_eq!(accept.ranges[1].essence(), "application/json");
        assert_eq!(accept.ranges[1].quality(), Decimal::ONE);
    }

    #[test]
    fn test_parse_blank_segment() {
        let accept = AcceptHeader::parse("text/html,").unwrap();
        assert_eq!(accept.ranges.len(), 2);
        assert_eq!(accept.ranges[1].type_, "");
    }

    #[test]
    fn test_parse_propagates_malformed_range() {
        assert!(AcceptHeader::parse("text/html, text/plain;format").is_err());
    }
}
