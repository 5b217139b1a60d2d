use rust_decimal::Decimal;
use serde::Serialize;

use crate::media_type::{MediaType, QUALITY, WILDCARD};

const TYPE_WEIGHT: i32 = 1000;
const SUBTYPE_WEIGHT: i32 = 100;
const SUFFIX_WEIGHT: i32 = 10;

/// How well a candidate matched a set of media ranges.
///
/// Ordered by `fitness` first and `quality` second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FitnessQuality {
    pub fitness: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub quality: Decimal,
}

impl FitnessQuality {
    /// Score of a candidate that no range structurally matches
    pub const NO_MATCH: FitnessQuality = FitnessQuality {
        fitness: -1,
        quality: Decimal::ZERO,
    };

    pub fn is_match(&self) -> bool {
        self.fitness >= 0
    }
}

/// Scores `candidate` against every range and keeps the fittest one.
///
/// A range matches when type, subtype and suffix each either agree or are
/// left open (`*` for type/subtype on either side, an empty suffix on either
/// side). Fitness only rewards literal agreement:
///
/// | component             | weight |
/// |-----------------------|--------|
/// | type                  | 1000   |
/// | subtype               | 100    |
/// | suffix                | 10     |
/// | each shared parameter | 1      |
///
/// `q` never counts as a shared parameter. On equal fitness the earlier range
/// keeps its quality.
pub fn fitness_and_quality(candidate: &MediaType, ranges: &[MediaType]) -> FitnessQuality {
    let mut best = FitnessQuality::NO_MATCH;

    for range in ranges.iter().filter(|range| matches(candidate, range)) {
        let mut fitness = shared_parameters(candidate, range);
        if range.type_ == candidate.type_ {
            fitness += TYPE_WEIGHT;
        }
        if range.subtype == candidate.subtype {
            fitness += SUBTYPE_WEIGHT;
        }
        if range.suffix == candidate.suffix {
            fitness += SUFFIX_WEIGHT;
        }

        if fitness > best.fitness {
            best = FitnessQuality {
                fitness,
                quality: range
                    .param(QUALITY)
                    .and_then(|q| q.as_number())
                    .unwrap_or(Decimal::ZERO),
            };
        }
    }

    best
}

fn matches(candidate: &MediaType, range: &MediaType) -> bool {
    let open = |a: &str, b: &str| a == b || a == WILDCARD || b == WILDCARD;

    open(&range.type_, &candidate.type_)
        && open(&range.subtype, &candidate.subtype)
        && (range.suffix == candidate.suffix
            || range.suffix.is_empty()
            || candidate.suffix.is_empty())
}

fn shared_parameters(candidate: &MediaType, range: &MediaType) -> i32 {
    let shared = candidate
        .parameters
        .iter()
        .filter(|(key, value)| {
            key.as_str() != QUALITY && range.parameters.get(key.as_str()) == Some(*value)
        })
        .count();
    i32::try_from(shared).unwrap_or(i32::MAX)
}
