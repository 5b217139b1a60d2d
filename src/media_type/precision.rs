use rust_decimal::{Decimal, RoundingStrategy};

use super::error::MediaTypeError;

/// Number of significant digits kept when a parameter value is read as a decimal.
///
/// Passed by value into every parse so concurrent callers never share a
/// rounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision(u32);

impl Precision {
    /// Three significant digits, enough for any RFC 7231 quality value.
    pub const DEFAULT: Precision = Precision(3);

    /// Upper bound imposed by the 96-bit mantissa of [`Decimal`].
    pub const MAX_DIGITS: u32 = 28;

    pub fn new(digits: u32) -> Result<Self, MediaTypeError> {
        if digits == 0 || digits > Self::MAX_DIGITS {
            return Err(MediaTypeError::InvalidPrecision {
                digits,
                max: Self::MAX_DIGITS,
            });
        }
        Ok(Self(digits))
    }

    pub fn digits(&self) -> u32 {
        self.0
    }

    /// Rounds `value` half-to-even to this many significant digits.
    ///
    /// Values that already fit are returned untouched, scale included,
    /// so `0.5` keeps printing as `0.5`. `None` when the rounded value no
    /// longer fits in a [`Decimal`].
    pub fn apply(&self, value: Decimal) -> Option<Decimal> {
        if value.is_zero() {
            return Some(value);
        }
        value.round_sf_with_strategy(self.0, RoundingStrategy::MidpointNearestEven)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}
