//! Property-based tests for the character-class predicates and the digit
//! normalizer.

use profile_validate::{is_digits, is_jp_name, is_kana, to_half_width_digits};
use proptest::prelude::*;

/// Kanji, hiragana, katakana, and full-width space.
fn arb_japanese() -> impl Strategy<Value = String> {
    prop::string::string_regex("[\u{4E00}-\u{9FFF}ぁ-んァ-ヶー\u{3000}]{0,12}").unwrap()
}

fn arb_katakana() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ァ-ヴー\u{3000}・･]{1,12}").unwrap()
}

fn arb_digit_or_symbol() -> impl Strategy<Value = char> {
    prop::sample::select(
        ('!'..='/')
            .chain('0'..='9')
            .chain(':'..='@')
            .chain('['..='`')
            .chain('{'..='~')
            .chain('０'..='９')
            .collect::<Vec<_>>(),
    )
}

fn arb_non_katakana() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('ぁ', 'ん'),
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('ｦ', 'ﾟ'),
    ]
}

fn arb_mixed_digits() -> impl Strategy<Value = String> {
    prop::string::string_regex("[０-９0-9a-zあ-んＡ-Ｚ]{0,16}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..20).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn jp_name_accepts_japanese_text(name in arb_japanese()) {
        prop_assert!(is_jp_name(&name));
    }

    #[test]
    fn jp_name_rejects_any_digit_or_symbol(
        prefix in arb_japanese(),
        bad in arb_digit_or_symbol(),
        suffix in arb_japanese(),
    ) {
        let value = format!("{prefix}{bad}{suffix}");
        prop_assert!(!is_jp_name(&value), "accepted {value:?}");
    }

    #[test]
    fn kana_accepts_katakana_text(reading in arb_katakana()) {
        prop_assert!(is_kana(&reading));
    }

    #[test]
    fn kana_rejects_any_foreign_character(
        prefix in arb_katakana(),
        bad in arb_non_katakana(),
        suffix in arb_katakana(),
    ) {
        let value = format!("{prefix}{bad}{suffix}");
        prop_assert!(!is_kana(&value), "accepted {value:?}");
    }

    #[test]
    fn digits_matches_ascii_digit_definition(value in arb_unicode_string()) {
        let expected = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
        prop_assert_eq!(is_digits(&value), expected);
    }

    #[test]
    fn digits_accepts_digit_strings(value in "[0-9]{1,10}") {
        prop_assert!(is_digits(&value));
    }

    #[test]
    fn half_width_is_idempotent(value in arb_mixed_digits()) {
        let once = to_half_width_digits(&value).into_owned();
        let twice = to_half_width_digits(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn half_width_is_idempotent_on_any_text(value in arb_unicode_string()) {
        let once = to_half_width_digits(&value).into_owned();
        let twice = to_half_width_digits(&once).into_owned();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn half_width_preserves_length_and_removes_full_width_digits(value in arb_mixed_digits()) {
        let normalized = to_half_width_digits(&value);
        prop_assert_eq!(normalized.chars().count(), value.chars().count());
        prop_assert!(!normalized.chars().any(|c| ('０'..='９').contains(&c)));
    }

    #[test]
    fn full_width_digit_strings_become_digits(value in "[０-９]{1,8}") {
        prop_assert!(is_digits(&to_half_width_digits(&value)));
    }
}
