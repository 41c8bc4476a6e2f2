//! Validation of the operator's build selection.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no selection entered")]
    Empty,
    #[error("selection must be a positive whole number")]
    NotNumeric,
    #[error("selection {input} is out of range 1..={count}")]
    OutOfRange { input: String, count: usize },
}

/// Validate a 1-based ordinal against a list of `count` entries and return
/// the zero-based index.
///
/// Accepts only a plain decimal literal: no sign, no decimal point, no
/// leading zeros (a lone `0` is lexically fine but out of range).
pub fn validate_ordinal(input: &str, count: usize) -> Result<usize, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError::Empty);
    }
    let all_digits = s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits || (s.len() > 1 && s.starts_with('0')) {
        return Err(ValidationError::NotNumeric);
    }
    match s.parse::<u64>() {
        Ok(n) if n >= 1 && n <= count as u64 => Ok((n - 1) as usize),
        // All-digit input that does not land in range, including values too
        // large to parse.
        _ => Err(ValidationError::OutOfRange {
            input: s.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_ordinals() {
        assert_eq!(validate_ordinal("3", 5), Ok(2));
        assert_eq!(validate_ordinal("1", 5), Ok(0));
        assert_eq!(validate_ordinal("5", 5), Ok(4));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            validate_ordinal("0", 5),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_ordinal("6", 5),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_ordinal("99999999999999999999999", 5),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(validate_ordinal("abc", 5), Err(ValidationError::NotNumeric));
        assert_eq!(validate_ordinal("1.5", 5), Err(ValidationError::NotNumeric));
        assert_eq!(validate_ordinal("+2", 5), Err(ValidationError::NotNumeric));
        assert_eq!(validate_ordinal("-2", 5), Err(ValidationError::NotNumeric));
        assert_eq!(validate_ordinal("03", 5), Err(ValidationError::NotNumeric));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(validate_ordinal("", 5), Err(ValidationError::Empty));
        assert_eq!(validate_ordinal("   \n", 5), Err(ValidationError::Empty));
    }
}
