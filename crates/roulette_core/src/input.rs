/// Reads a group size from free-text input. Leading decimal digits are
/// taken ("12 people" is 12); empty, signed or non-numeric text is 0, which
/// leaves rolling disabled. Values too large for `usize` saturate.
pub fn parse_group_size(text: &str) -> usize {
    text.trim()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0usize, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(usize::from(digit - b'0'))
        })
}

#[cfg(test)]
mod tests {
    use super::parse_group_size;

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(parse_group_size(""), 0);
        assert_eq!(parse_group_size("   "), 0);
    }

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_group_size("4"), 4);
        assert_eq!(parse_group_size(" 12 "), 12);
        assert_eq!(parse_group_size("007"), 7);
    }

    #[test]
    fn takes_leading_digits_only() {
        assert_eq!(parse_group_size("3 people"), 3);
        assert_eq!(parse_group_size("5.9"), 5);
    }

    #[test]
    fn invalid_or_signed_input_is_zero() {
        assert_eq!(parse_group_size("abc"), 0);
        assert_eq!(parse_group_size("-3"), 0);
        assert_eq!(parse_group_size("+3"), 0);
    }

    #[test]
    fn huge_input_saturates() {
        assert_eq!(parse_group_size("99999999999999999999999999"), usize::MAX);
    }
}
