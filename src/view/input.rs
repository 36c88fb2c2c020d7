//! Parsing of raw text typed into input fields
//!
//! Integer fields are read leniently: leading whitespace and an optional
//! sign, then the longest run of ASCII digits. Trailing garbage is ignored,
//! so `"12abc"` reads as 12 and `"3.7"` as 3. Input without leading digits is
//! not a number.

/// Parse the integer prefix of `input`, or `None` if there is none
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// A balance must be a non-negative integer
pub fn parse_balance(input: &str) -> Option<i64> {
    parse_int(input).filter(|v| *v >= 0)
}

/// An expense amount must be a positive integer
pub fn parse_amount(input: &str) -> Option<i64> {
    parse_int(input).filter(|v| *v > 0)
}

/// A required text field; empty input is rejected, anything else is kept verbatim
pub fn non_empty(input: &str) -> Option<&str> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_plain() {
        assert_eq!(parse_int("1000"), Some(1000));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("-25"), Some(-25));
        assert_eq!(parse_int("+7"), Some(7));
    }

    #[test]
    fn test_parse_int_lenient_prefix() {
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("3.7"), Some(3));
        assert_eq!(parse_int("007"), Some(7));
    }

    #[test]
    fn test_parse_int_rejects_non_numbers() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(".5"), None);
        assert_eq!(parse_int("99999999999999999999"), None);
    }

    #[test]
    fn test_balance_and_amount_bounds() {
        assert_eq!(parse_balance("0"), Some(0));
        assert_eq!(parse_balance("-1"), None);
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("1"), Some(1));
        assert_eq!(parse_amount("-5"), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty(" food "), Some(" food "));
    }
}
