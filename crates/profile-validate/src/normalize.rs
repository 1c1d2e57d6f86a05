//! Full-width to half-width digit normalization.

use std::borrow::Cow;

/// Distance between a full-width form and its ASCII counterpart.
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Replace full-width digits `０`-`９` with ASCII `0`-`9`.
///
/// Every other character passes through unchanged, so the conversion is
/// idempotent. Borrows the input when it contains no full-width digit.
pub fn to_half_width_digits(value: &str) -> Cow<'_, str> {
    if !value.chars().any(is_full_width_digit) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(value.chars().map(to_half_width_digit).collect())
}

fn is_full_width_digit(ch: char) -> bool {
    matches!(ch, '０'..='９')
}

fn to_half_width_digit(ch: char) -> char {
    if !is_full_width_digit(ch) {
        return ch;
    }
    char::from_u32(ch as u32 - FULL_WIDTH_OFFSET).unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_full_width_digits() {
        assert_eq!(to_half_width_digits("０１２"), "012");
        assert_eq!(to_half_width_digits("０１２３４５６７８９"), "0123456789");
        assert_eq!(to_half_width_digits("abc０"), "abc0");
        assert_eq!(to_half_width_digits("３0"), "30");
    }

    #[test]
    fn leaves_other_characters() {
        assert_eq!(to_half_width_digits("ａｂｃ"), "ａｂｃ");
        assert_eq!(to_half_width_digits("三十"), "三十");
        assert_eq!(to_half_width_digits(""), "");
    }

    #[test]
    fn borrows_when_unchanged() {
        assert!(matches!(to_half_width_digits("30"), Cow::Borrowed("30")));
        assert!(matches!(to_half_width_digits("３０"), Cow::Owned(_)));
    }
}
