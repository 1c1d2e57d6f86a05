//! Character-class predicates for form text.
//!
//! Patterns are matched per Unicode scalar value, so multi-byte kana and
//! kanji are classified as single characters.

use std::sync::LazyLock;

use regex::Regex;

/// Anything except ASCII or full-width digits and the ASCII symbol ranges
/// `!`-`/`, `:`-`@`, `[`-`` ` ``, `{`-`~`. Empty input matches.
static JP_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^0-9０-９!-/:-@\[-`\{-~]*$").expect("Invalid name regex")
});

/// Full-width katakana ァ..ヴ, long-vowel mark, full-width space, and both
/// middle dots (U+30FB and half-width U+FF65).
static KANA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ァ-ヴー\x{3000}･・]+$").expect("Invalid kana regex"));

static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid digits regex"));

/// True if `value` has no digit (ASCII or full-width) and no ASCII symbol.
///
/// The empty string passes; callers treat emptiness separately.
pub fn is_jp_name(value: &str) -> bool {
    JP_NAME_REGEX.is_match(value)
}

/// True if `value` is non-empty and written only in full-width katakana.
pub fn is_kana(value: &str) -> bool {
    KANA_REGEX.is_match(value)
}

/// True if `value` is non-empty and made only of ASCII `0`-`9`.
pub fn is_digits(value: &str) -> bool {
    DIGITS_REGEX.is_match(value)
}
