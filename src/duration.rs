//! Compact duration strings ("2h", "90", "1w") to seconds.

/// Multipliers for the single-letter duration suffixes.
const SUFFIXES: &[(char, u64)] = &[
    ('w', 604_800),
    ('d', 86_400),
    ('h', 3_600),
    ('m', 60),
    ('s', 1),
];

#[derive(Debug, thiserror::Error)]
#[error("Invalid duration: {0}")]
pub struct DurationError(String);

/// Parse a duration of the form `<digits>[wdhms]` into seconds.
///
/// A bare number is already seconds. Anything else (sign, whitespace,
/// unknown suffix, empty input) is rejected rather than defaulted.
pub fn parse_duration(input: &str) -> Result<u64, DurationError> {
    let invalid = || DurationError(input.to_string());

    let (digits, suffix) = match input.chars().last() {
        Some(c) if c.is_ascii_digit() => (input, None),
        Some(c) => (&input[..input.len() - c.len_utf8()], Some(c)),
        None => return Err(invalid()),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: u64 = digits.parse().map_err(|_| invalid())?;

    let multiplier = match suffix {
        None => 1,
        Some(c) => {
            SUFFIXES
                .iter()
                .find(|(s, _)| *s == c)
                .map(|(_, m)| *m)
                .ok_or_else(invalid)?
        }
    };
    value.checked_mul(multiplier).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_is_seconds() {
        assert_eq!(parse_duration("90").unwrap(), 90);
    }

    #[test]
    fn hours_suffix() {
        assert_eq!(parse_duration("2h").unwrap(), 7200);
    }

    #[test]
    fn minutes_suffix() {
        assert_eq!(parse_duration("50m").unwrap(), 3000);
    }

    #[test]
    fn weeks_suffix() {
        assert_eq!(parse_duration("1w").unwrap(), 604_800);
    }

    #[test]
    fn days_suffix() {
        assert_eq!(parse_duration("3d").unwrap(), 259_200);
    }

    #[test]
    fn seconds_suffix() {
        assert_eq!(parse_duration("45s").unwrap(), 45);
    }

    #[test]
    fn zero_is_allowed() {
        assert_eq!(parse_duration("0").unwrap(), 0);
    }

    #[test]
    fn rejects_letters() {
        assert!(parse_duration("abc").is_err());
    }

    #[test]
    fn rejects_negative() {
        assert!(parse_duration("-5").is_err());
    }

    #[test]
    fn rejects_unknown_suffix() {
        assert!(parse_duration("5x").is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn rejects_suffix_without_digits() {
        assert!(parse_duration("h").is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(parse_duration(" 2h").is_err());
        assert!(parse_duration("2 h").is_err());
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_duration("99999999999999999999").is_err());
        assert!(parse_duration("18446744073709551615w").is_err());
    }

    #[test]
    fn error_names_the_input() {
        assert_eq!(
            parse_duration("5x").unwrap_err().to_string(),
            "Invalid duration: 5x"
        );
    }
}
