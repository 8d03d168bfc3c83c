//! Conversions between decimal currency input and integer minor units.
//!
//! Amounts cross the API boundary as minor units (cents). Input fields accept
//! decimal major units; display rounds to whole major units.

use std::fmt;

/// Number of minor units in one major unit
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

pub const CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, PartialEq)]
pub enum MoneyInputError {
    Empty,
    NotANumber(String),
    NotFinite,
    Negative,
}

impl fmt::Display for MoneyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyInputError::Empty => write!(f, "Please enter an amount"),
            MoneyInputError::NotANumber(input) => write!(f, "'{}' is not a valid amount", input),
            MoneyInputError::NotFinite => write!(f, "Amount is out of range"),
            MoneyInputError::Negative => write!(f, "Amount cannot be negative"),
        }
    }
}

impl std::error::Error for MoneyInputError {}

/// Convert decimal input such as "2230.00" to minor units (223000).
///
/// Multiplies by 100 and rounds half away from zero. Thousands separators
/// are tolerated.
pub fn to_minor_units(input: &str) -> Result<i64, MoneyInputError> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(MoneyInputError::Empty);
    }

    let value = cleaned
        .parse::<f64>()
        .map_err(|_| MoneyInputError::NotANumber(input.trim().to_string()))?;
    if !value.is_finite() || value.abs() > (i64::MAX / MINOR_UNITS_PER_MAJOR) as f64 {
        return Err(MoneyInputError::NotFinite);
    }
    if value < 0.0 {
        return Err(MoneyInputError::Negative);
    }

    Ok((value * MINOR_UNITS_PER_MAJOR as f64).round() as i64)
}

/// Render minor units as an editable decimal string ("2230.00")
pub fn to_decimal_input(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    let per_major = MINOR_UNITS_PER_MAJOR as u64;
    format!("{}{}.{:02}", sign, abs / per_major, abs % per_major)
}

/// Format minor units for display, rounded to whole major units ("$2,230")
pub fn format_currency(minor: i64) -> String {
    let abs = minor.unsigned_abs();
    let per_major = MINOR_UNITS_PER_MAJOR as u64;
    let major = (abs + per_major / 2) / per_major;
    let sign = if minor < 0 && major > 0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, group_thousands(major))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Percentage of `part` in `whole`, 0 when `whole` is not positive
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units("2230.00"), Ok(223000));
        assert_eq!(to_minor_units("2230"), Ok(223000));
        assert_eq!(to_minor_units(" 19.99 "), Ok(1999));
        assert_eq!(to_minor_units("1,250.5"), Ok(125050));
        assert_eq!(to_minor_units("0"), Ok(0));
        // 0.285 * 100 is 28.499999... in binary floating point
        assert_eq!(to_minor_units("0.285"), Ok(28));
        assert_eq!(to_minor_units("0.125"), Ok(13));
    }

    #[test]
    fn test_to_minor_units_rejects_bad_input() {
        assert_eq!(to_minor_units(""), Err(MoneyInputError::Empty));
        assert_eq!(to_minor_units("   "), Err(MoneyInputError::Empty));
        assert_eq!(
            to_minor_units("abc"),
            Err(MoneyInputError::NotANumber("abc".to_string()))
        );
        assert_eq!(to_minor_units("-5"), Err(MoneyInputError::Negative));
        assert_eq!(to_minor_units("inf"), Err(MoneyInputError::NotFinite));
        assert_eq!(to_minor_units("NaN"), Err(MoneyInputError::NotFinite));
    }

    #[test]
    fn test_to_decimal_input() {
        assert_eq!(to_decimal_input(223000), "2230.00");
        assert_eq!(to_decimal_input(1999), "19.99");
        assert_eq!(to_decimal_input(5), "0.05");
        assert_eq!(to_decimal_input(-150), "-1.50");
    }

    #[test]
    fn test_decimal_input_converts_back() {
        for minor in [0, 1, 99, 100, 223000, 1_234_567] {
            assert_eq!(to_minor_units(&to_decimal_input(minor)), Ok(minor));
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(223000), "$2,230");
        assert_eq!(format_currency(300000000), "$3,000,000");
        assert_eq!(format_currency(12345), "$123");
        assert_eq!(format_currency(12350), "$124");
        assert_eq!(format_currency(-250000), "-$2,500");
        assert_eq!(format_currency(-20), "$0");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(25000, 50000), 50.0);
        assert_eq!(percentage(10, 0), 0.0);
        assert_eq!(percentage(10, -5), 0.0);
    }
}
