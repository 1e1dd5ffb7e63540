//! Typed configuration of a single animated counter.
//!
//! The page marks counters with `data-target`, `data-prefix` and `data-suffix`
//! attributes. They are read once, when the counter first scrolls into view,
//! and turned into a [`CounterSpec`] that the animator consumes.

use crate::error::LandingError;

/// Target value used when the element carries no target attribute.
const MISSING_TARGET: &str = "0";

/// What the counter ends up displaying.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterTarget {
    /// Animate from zero to `value`, formatted with `decimals` fraction digits.
    Numeric { value: f64, decimals: usize },
    /// The raw target text is shown as is, without animation.
    Literal(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub target: CounterTarget,
    pub prefix: String,
    pub suffix: String,
}

impl CounterSpec {
    /// Builds the spec from the element's raw attributes.
    ///
    /// Parsing never fails: a target that does not start with a finite number
    /// becomes [`CounterTarget::Literal`] and is rendered verbatim.
    pub fn from_attributes(target: Option<&str>, prefix: Option<&str>, suffix: Option<&str>) -> Self {
        let raw = target.unwrap_or(MISSING_TARGET);
        let target = match parse_target(raw) {
            Ok(value) => CounterTarget::Numeric {
                value,
                decimals: infer_decimals(raw),
            },
            Err(_) => CounterTarget::Literal(raw.to_string()),
        };
        Self {
            target,
            prefix: prefix.unwrap_or_default().to_string(),
            suffix: suffix.unwrap_or_default().to_string(),
        }
    }

    /// Wraps an already formatted value with the prefix and suffix.
    pub fn decorate(&self, body: &str) -> String {
        format!("{}{}{}", self.prefix, body, self.suffix)
    }

    /// Text shown once the counter has settled.
    pub fn final_text(&self) -> String {
        match &self.target {
            CounterTarget::Numeric { value, decimals } => {
                self.decorate(&format_number(*value, *decimals))
            }
            CounterTarget::Literal(raw) => self.decorate(raw),
        }
    }
}

/// Parses the leading decimal number of `raw`, ignoring trailing text
/// (`"12+"` is 12). Fails when no finite number starts the string.
pub fn parse_target(raw: &str) -> Result<f64, LandingError> {
    let trimmed = raw.trim_start();
    let end = leading_number_len(trimmed);
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LandingError::NonNumericTarget(raw.to_string()))
}

/// Number of fraction digits implied by the literal target, i.e. the length of
/// whatever follows the first `.`.
pub fn infer_decimals(raw: &str) -> usize {
    raw.split('.').nth(1).map(str::len).unwrap_or(0)
}

/// Enough fraction digits to print any `f64` without rounding.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats `value` with a fixed number of fraction digits. With zero decimals
/// the value is rounded to the nearest integer and printed without a point.
///
/// Ties round away from zero in the fixed-point case, matching the browser's
/// `toFixed`, not to even.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if decimals > 0 {
        return to_fixed(value, decimals);
    }
    // Half-way values round up, and negative zero prints as "0".
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}

/// Rounds the exact decimal expansion of `value` at `decimals` digits.
fn to_fixed(value: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    if frac_part.as_bytes().get(decimals).is_some_and(|digit| *digit >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - decimals);
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(int_digits),
        String::from_utf8_lossy(frac_digits)
    )
}

fn leading_number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }
    let int_start = idx;
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    let mut digits = idx - int_start;
    if bytes.get(idx) == Some(&b'.') {
        let frac_start = idx + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            idx = frac_end;
        }
    }
    if digits == 0 {
        return 0;
    }
    if matches!(bytes.get(idx), Some(b'e') | Some(b'E')) {
        let mut exp = idx + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits_start = exp;
        while bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            exp += 1;
        }
        if exp > exp_digits_start {
            idx = exp;
        }
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_number() {
        assert_eq!(parse_target("48.0"), Ok(48.0));
        assert_eq!(parse_target(" 12+"), Ok(12.0));
        assert_eq!(parse_target(".5"), Ok(0.5));
        assert_eq!(parse_target("7."), Ok(7.0));
        assert_eq!(parse_target("1e3x"), Ok(1000.0));
        assert_eq!(parse_target("2e"), Ok(2.0));
        assert_eq!(parse_target("-3"), Ok(-3.0));
    }

    #[test]
    fn rejects_non_numeric_targets() {
        assert!(parse_target("N/A").is_err());
        assert!(parse_target("").is_err());
        assert!(parse_target(".").is_err());
        assert!(parse_target("-").is_err());
        assert!(parse_target("1e999").is_err());
    }

    #[test]
    fn decimals_follow_the_literal() {
        assert_eq!(infer_decimals("48.0"), 1);
        assert_eq!(infer_decimals("2.125"), 3);
        assert_eq!(infer_decimals("120"), 0);
        assert_eq!(infer_decimals("1.5k"), 2);
    }

    #[test]
    fn formats_fixed_and_rounded() {
        assert_eq!(format_number(48.0, 1), "48.0");
        assert_eq!(format_number(3.14159, 2), "3.14");
        assert_eq!(format_number(41.5, 0), "42");
        assert_eq!(format_number(-0.2, 0), "0");
        assert_eq!(format_number(f64::NAN, 2), "0");
    }

    #[test]
    fn integers_beyond_i64_print_in_full() {
        assert_eq!(format_number(1e20, 0), "100000000000000000000");
        let spec = CounterSpec::from_attributes(Some("99999999999999999999"), None, Some("+"));
        assert_eq!(spec.final_text(), "100000000000000000000+");
    }

    #[test]
    fn fixed_ties_round_away_from_zero() {
        assert_eq!(format_number(0.125, 2), "0.13");
        assert_eq!(format_number(2.5, 1), "2.5");
        assert_eq!(format_number(0.25, 1), "0.3");
        assert_eq!(format_number(-0.125, 2), "-0.13");
        // 2.675 is stored just below the tie.
        assert_eq!(format_number(2.675, 2), "2.67");
    }

    #[test]
    fn fixed_rounding_carries_into_integer_part() {
        assert_eq!(format_number(9.96, 1), "10.0");
        assert_eq!(format_number(99.999, 2), "100.00");
        assert_eq!(format_number(0.0, 3), "0.000");
    }

    #[test]
    fn missing_target_is_zero() {
        let spec = CounterSpec::from_attributes(None, None, None);
        assert_eq!(
            spec.target,
            CounterTarget::Numeric { value: 0.0, decimals: 0 }
        );
        assert_eq!(spec.final_text(), "0");
    }

    #[test]
    fn literal_target_keeps_raw_text() {
        let spec = CounterSpec::from_attributes(Some("N/A"), Some(""), Some("+"));
        assert_eq!(spec.target, CounterTarget::Literal("N/A".to_string()));
        assert_eq!(spec.final_text(), "N/A+");
    }
}
