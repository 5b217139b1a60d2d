//! Media type (MIME) parsing
//!
//! Turns a raw media type or media range, as found in `Content-Type` and
//! `Accept` headers, into a [`MediaType`] record:
//!
//! ```text
//! application/vnd.api+json; version="2"; q=0.8
//! \_________/ \_____/ \__/  \___________________/
//!    type     subtype suffix     parameters
//! ```
//!
//! Relevant RFCs:
//! - RFC 4288 §3.2 (vendor tree)
//! - RFC 6839 (structured syntax suffixes)
//! - RFC 7231 §5.3.1 (quality values)
//!
//! Every parameter value is lower-cased, unquoted and, when it reads as a
//! number, stored as a [`Decimal`] rounded to the caller's [`Precision`].
//! The `q` parameter is always present after parsing and always lies in `[0, 1]`.

mod error;
mod precision;

pub use error::MediaTypeError;
pub use precision::Precision;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Name of the quality parameter
pub const QUALITY: &str = "q";

/// Wildcard accepted in the type and subtype positions of a media range
pub const WILDCARD: &str = "*";

/// A parameter value: either a decimal number or plain text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(#[serde(with = "rust_decimal::serde::float")] Decimal),
    Text(String),
}

impl ParamValue {
    /// Reads `value` as a number when possible, falling back to text.
    ///
    /// Numbers that cannot be represented once rounded to `precision` stay text.
    pub fn coerce(value: &str, precision: Precision) -> Self {
        match parse_decimal(value).and_then(|number| precision.apply(number)) {
            Some(number) => ParamValue::Number(number),
            None => ParamValue::Text(value.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            ParamValue::Number(number) => Some(*number),
            ParamValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            ParamValue::Number(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(number) => write!(f, "{number}"),
            ParamValue::Text(text) => f.write_str(text),
        }
    }
}

/// A parsed media type or media range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaType {
    #[serde(rename = "type")]
    pub type_: String,
    pub subtype: String,
    /// Structured syntax suffix without the `+`, empty when absent
    pub suffix: String,
    pub parameters: IndexMap<String, ParamValue>,
}

impl MediaType {
    /// Parses `raw` with [`Precision::DEFAULT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparser::media_type::MediaType;
    ///
    /// let parsed = MediaType::parse("application/xhtml+xml;q=0.5;ver=1").unwrap();
    /// assert_eq!(parsed.type_, "application");
    /// assert_eq!(parsed.subtype, "xhtml");
    /// assert_eq!(parsed.suffix, "xml");
    /// assert_eq!(parsed.to_string(), "application/xhtml+xml;q=0.5;ver=1");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, MediaTypeError> {
        Self::parse_with(raw, Precision::DEFAULT)
    }

    /// Parses `raw`, rounding numeric parameter values to `precision`.
    ///
    /// # Errors
    ///
    /// Returns [`MediaTypeError::MalformedParameter`] when a `;`-separated
    /// parameter segment has no `=`. Nothing is recovered from such input.
    pub fn parse_with(raw: &str, precision: Precision) -> Result<Self, MediaTypeError> {
        let mut segments = raw.split(';');
        let full_type = segments.next().unwrap_or_default();

        let mut parameters = IndexMap::new();
        for segment in segments {
            let (key, value) =
                segment
                    .split_once('=')
                    .ok_or_else(|| MediaTypeError::MalformedParameter {
                        media_type: raw.trim().to_string(),
                        segment: segment.trim().to_string(),
                    })?;

            let key = key.trim().to_lowercase();
            let value = value.trim().to_lowercase();
            parameters.insert(key, ParamValue::coerce(strip_quotes(&value), precision));
        }

        // Missing, non-numeric and out-of-range qualities all become 1
        let quality_in_domain = matches!(
            parameters.get(QUALITY),
            Some(ParamValue::Number(q)) if (Decimal::ZERO..=Decimal::ONE).contains(q)
        );
        if !quality_in_domain {
            parameters.insert(QUALITY.to_string(), ParamValue::Number(Decimal::ONE));
        }

        let mut full_type = full_type.trim().to_lowercase();
        if full_type == WILDCARD {
            full_type = "*/*".to_string();
        }

        let (type_, rest) = full_type.split_once('/').unwrap_or((full_type.as_str(), ""));
        let (subtype, suffix) = rest.split_once('+').unwrap_or((rest, ""));

        Ok(Self {
            type_: type_.trim().to_string(),
            subtype: subtype.trim().to_string(),
            suffix: suffix.trim().to_string(),
            parameters,
        })
    }

    /// The `q` parameter, or 1 for a hand-built value without one
    pub fn quality(&self) -> Decimal {
        self.parameters
            .get(QUALITY)
            .and_then(ParamValue::as_number)
            .unwrap_or(Decimal::ONE)
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.parameters.get(name)
    }

    /// `type/subtype[+suffix]` with parameters dropped
    pub fn essence(&self) -> String {
        if self.suffix.is_empty() {
            format!("{}/{}", self.type_, self.subtype)
        } else {
            format!("{}/{}+{}", self.type_, self.subtype, self.suffix)
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.type_ == WILDCARD || self.subtype == WILDCARD
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.essence())?;
        for (key, value) in &self.parameters {
            write!(f, ";{key}={value}")?;
        }
        Ok(())
    }
}

/// Removes one pair of matching enclosing quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Decimal literal: optional sign, digits with at most one point (either side
/// may be empty but not both), optional exponent.
fn parse_decimal(text: &str) -> Option<Decimal> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let sign = if negative { "-" } else { "" };
    let whole = if whole.is_empty() { "0" } else { whole };
    let literal = if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    };

    match exponent {
        None => Decimal::from_str(&literal).ok(),
        Some(exp) => {
            let digits = exp.strip_prefix(['-', '+']).unwrap_or(exp);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
            Decimal::from_scientific(&format!("{literal}e{exp}")).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_round_trip() {
        let raw = "application/xhtml+xml;q=0.5;ver=1";
        let parsed = MediaType::parse(raw).unwrap();
        assert_eq!(parsed.to_string(), raw);
    }

    #[test]
    fn test_parse_lowercases_and_trims() {
        let parsed = MediaType::parse(" Text/HTML ; Charset = UTF-8 ").unwrap();
        assert_eq!(parsed.type_, "text");
        assert_eq!(parsed.subtype, "html");
        assert_eq!(parsed.suffix, "");
        assert_eq!(parsed.param("charset"), Some(&ParamValue::Text("utf-8".into())));
    }

    #[test]
    fn test_quality_added_when_missing() {
        let parsed = MediaType::parse("text/html;level=1").unwrap();
        assert_eq!(parsed.quality(), Decimal::ONE);
        let keys: Vec<_> = parsed.parameters.keys().cloned().collect();
        assert_eq!(keys, vec!["level", "q"]);
    }

    #[test]
    fn test_quality_out_of_domain_is_one() {
        for raw in ["a/b;q=-1", "a/b;q=2", "a/b;q=no", "a/b;q=1.01"] {
            let parsed = MediaType::parse(raw).unwrap();
            assert_eq!(parsed.quality(), Decimal::ONE, "{raw}");
        }
    }

    #[test]
    fn test_quality_replaced_in_place() {
        let parsed = MediaType::parse("a/b;q=5;level=2").unwrap();
        assert_eq!(parsed.to_string(), "a/b;q=1;level=2");
    }

    #[test]
    fn test_quality_bounds_kept() {
        assert_eq!(MediaType::parse("a/b;q=0").unwrap().quality(), Decimal::ZERO);
        assert_eq!(MediaType::parse("a/b;q=1.0").unwrap().quality(), Decimal::ONE);
        assert_eq!(MediaType::parse("a/b;q=.25").unwrap().quality(), dec("0.25"));
    }

    #[test]
    fn test_single_asterisk_is_full_wildcard() {
        let parsed = MediaType::parse("*").unwrap();
        assert_eq!(parsed.type_, "*");
        assert_eq!(parsed.subtype, "*");
        assert!(parsed.is_wildcard());
    }

    #[test]
    fn test_quoted_values() {
        let parsed = MediaType::parse(r#"application/json;q=".9""#).unwrap();
        assert_eq!(parsed.quality(), dec("0.9"));

        let parsed = MediaType::parse(r#"application/json;charset="utf-8""#).unwrap();
        assert_eq!(parsed.param("charset").and_then(ParamValue::as_text), Some("utf-8"));

        let parsed = MediaType::parse("application/json;profile='a'").unwrap();
        assert_eq!(parsed.param("profile").and_then(ParamValue::as_text), Some("a"));
    }

    #[test]
    fn test_unbalanced_quote_is_kept() {
        let parsed = MediaType::parse(r#"a/b;x=""#).unwrap();
        assert_eq!(parsed.param("x").and_then(ParamValue::as_text), Some("\""));
    }

    #[test]
    fn test_numeric_parameters_use_precision() {
        let parsed = MediaType::parse("a/b;ver=1.23456").unwrap();
        assert_eq!(parsed.param("ver"), Some(&ParamValue::Number(dec("1.23"))));

        let parsed = MediaType::parse_with("a/b;ver=1.23456", Precision::new(5).unwrap()).unwrap();
        assert_eq!(parsed.param("ver"), Some(&ParamValue::Number(dec("1.2346"))));
    }

    #[test]
    fn test_unrepresentable_number_stays_text() {
        let raw = "a/b;x=99999999999999999999999999999";
        let parsed = MediaType::parse(raw).unwrap();
        assert_eq!(
            parsed.param("x").and_then(ParamValue::as_text),
            Some("99999999999999999999999999999")
        );

        let parsed = MediaType::parse("a/b;x=1e29").unwrap();
        assert_eq!(parsed.param("x").and_then(ParamValue::as_text), Some("1e29"));

        // q that overflows is non-numeric, hence 1
        let parsed = MediaType::parse("a/b;q=79228162514264337593543950335").unwrap();
        assert_eq!(parsed.quality(), Decimal::ONE);
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        let err = MediaType::parse("text/html;level").unwrap_err();
        assert_eq!(
            err,
            MediaTypeError::MalformedParameter {
                media_type: "text/html;level".into(),
                segment: "level".into(),
            }
        );
        assert!(MediaType::parse("text/html;").is_err());
    }

    #[test]
    fn test_value_may_contain_equals() {
        let parsed = MediaType::parse("a/b;token=x=y").unwrap();
        assert_eq!(parsed.param("token").and_then(ParamValue::as_text), Some("x=y"));
    }

    #[test]
    fn test_suffix_split_on_first_plus() {
        let parsed = MediaType::parse("application/vnd.a+b+json").unwrap();
        assert_eq!(parsed.subtype, "vnd.a");
        assert_eq!(parsed.suffix, "b+json");
        assert_eq!(parsed.essence(), "application/vnd.a+b+json");
    }

    #[test]
    fn test_missing_slash() {
        let parsed = MediaType::parse("text").unwrap();
        assert_eq!(parsed.type_, "text");
        assert_eq!(parsed.subtype, "");
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(parse_decimal(".9"), Some(dec("0.9")));
        assert_eq!(parse_decimal("-1"), Some(dec("-1")));
        assert_eq!(parse_decimal("+2"), Some(dec("2")));
        assert_eq!(parse_decimal("1."), Some(dec("1")));
        assert_eq!(parse_decimal("5e-1"), Some(dec("0.5")));
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("utf-8"), None);
        assert_eq!(parse_decimal("1e"), None);
        assert_eq!(parse_decimal("1_000"), None);
    }

    #[test]
    fn test_serialize_numbers_as_json_numbers() {
        let parsed = MediaType::parse("text/html;level=1;charset=utf-8").unwrap();
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["parameters"]["level"], 1.0);
        assert_eq!(json["parameters"]["charset"], "utf-8");
        assert_eq!(json["parameters"]["q"], 1.0);
    }
}
