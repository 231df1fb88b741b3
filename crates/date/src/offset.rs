use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OffsetParseError {
    #[error("empty date offset")]
    Empty,
    #[error("invalid offset amount in {0:?}")]
    InvalidAmount(String),
    #[error("unknown offset unit {0:?}")]
    UnknownUnit(char),
}

/// Calendar unit of a [`DateOffset`], named by its format token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    /// `Y`
    Year,
    /// `m`
    Month,
    /// `d`
    Day,
    /// `H`
    Hour,
    /// `i`
    Minute,
    /// `s`
    Second,
}

impl DateUnit {
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'Y' => Some(DateUnit::Year),
            'm' => Some(DateUnit::Month),
            'd' => Some(DateUnit::Day),
            'H' => Some(DateUnit::Hour),
            'i' => Some(DateUnit::Minute),
            's' => Some(DateUnit::Second),
            _ => None,
        }
    }

    /// Fixed length in milliseconds; `None` for the calendar units.
    pub fn millis(self) -> Option<f64> {
        match self {
            DateUnit::Year | DateUnit::Month => None,
            DateUnit::Day => Some(86_400_000.0),
            DateUnit::Hour => Some(3_600_000.0),
            DateUnit::Minute => Some(60_000.0),
            DateUnit::Second => Some(1_000.0),
        }
    }
}

/// A signed step such as `1Y`, `-2m` or `1.5d`.
///
/// The amount is the longest decimal prefix (optional sign, fraction and
/// exponent); the unit is the last character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateOffset {
    pub amount: f64,
    pub unit: DateUnit,
}

impl FromStr for DateOffset {
    type Err = OffsetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let token = s.chars().last().ok_or(OffsetParseError::Empty)?;
        let unit = DateUnit::from_token(token).ok_or(OffsetParseError::UnknownUnit(token))?;
        let amount = leading_number(s).ok_or_else(|| OffsetParseError::InvalidAmount(s.to_string()))?;
        Ok(DateOffset { amount, unit })
    }
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Parse the longest prefix of `s` that reads as a decimal number.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = skip_digits(bytes, end);
    let mut digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - end - 1;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offsets() {
        assert_eq!(
            "1Y".parse::<DateOffset>(),
            Ok(DateOffset { amount: 1.0, unit: DateUnit::Year })
        );
        assert_eq!(
            " -2m ".parse::<DateOffset>(),
            Ok(DateOffset { amount: -2.0, unit: DateUnit::Month })
        );
        assert_eq!(
            "+1.5d".parse::<DateOffset>(),
            Ok(DateOffset { amount: 1.5, unit: DateUnit::Day })
        );
        assert_eq!(
            ".5H".parse::<DateOffset>(),
            Ok(DateOffset { amount: 0.5, unit: DateUnit::Hour })
        );
        assert_eq!(
            "2e1i".parse::<DateOffset>(),
            Ok(DateOffset { amount: 20.0, unit: DateUnit::Minute })
        );
    }

    #[test]
    fn test_parse_ignores_junk_before_unit() {
        assert_eq!(
            "3 seconds s".parse::<DateOffset>(),
            Ok(DateOffset { amount: 3.0, unit: DateUnit::Second })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<DateOffset>(), Err(OffsetParseError::Empty));
        assert_eq!("   ".parse::<DateOffset>(), Err(OffsetParseError::Empty));
        assert_eq!("5x".parse::<DateOffset>(), Err(OffsetParseError::UnknownUnit('x')));
        assert_eq!("d".parse::<DateOffset>(), Err(OffsetParseError::InvalidAmount("d".to_string())));
        assert_eq!("-.d".parse::<DateOffset>(), Err(OffsetParseError::InvalidAmount("-.d".to_string())));
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("12abc"), Some(12.0));
        assert_eq!(leading_number("5."), Some(5.0));
        assert_eq!(leading_number("1e"), Some(1.0));
        assert_eq!(leading_number("-0.25e-2x"), Some(-0.0025));
        assert_eq!(leading_number("abc"), None);
    }

    #[test]
    fn test_unit_millis() {
        assert_eq!(DateUnit::Day.millis(), Some(86_400_000.0));
        assert_eq!(DateUnit::Month.millis(), None);
    }
}
