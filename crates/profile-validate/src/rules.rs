//! Field validation rules.
//!
//! Each field maps to one rule that decides how raw input is normalized
//! before it is stored and which check the stored value must pass.

use std::borrow::Cow;
use std::fmt;

use profile_model::{FieldError, FieldId, ValidationError};

use crate::classify::{is_digits, is_jp_name, is_kana};
use crate::normalize::to_half_width_digits;

/// Validation rule bound to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRule {
    /// Kanji/kana name: no ASCII digits or symbols.
    JapaneseName,
    /// Reading: full-width katakana only.
    Katakana,
    /// Full-width digits are converted, then only ASCII digits are accepted.
    HalfWidthDigits,
    /// Closed set of options; nothing to check.
    Choice,
}

/// Outcome of applying a rule to raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<'a> {
    /// The value to store. For [`FieldRule::HalfWidthDigits`] this is the
    /// normalized value and the error below is derived from it.
    pub value: Cow<'a, str>,
    pub error: FieldError,
}

impl FieldRule {
    pub fn for_field(field: FieldId) -> Self {
        match field {
            FieldId::LastName | FieldId::FirstName => FieldRule::JapaneseName,
            FieldId::LastNameKana | FieldId::FirstNameKana => FieldRule::Katakana,
            FieldId::Age => FieldRule::HalfWidthDigits,
            FieldId::Gender => FieldRule::Choice,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRule::JapaneseName => "japanese-name",
            FieldRule::Katakana => "katakana",
            FieldRule::HalfWidthDigits => "half-width-digits",
            FieldRule::Choice => "choice",
        }
    }

    /// The error reported when the check fails, if the rule has a check.
    pub fn failure(&self) -> Option<ValidationError> {
        match self {
            FieldRule::JapaneseName => Some(ValidationError::SymbolOrDigit),
            FieldRule::Katakana => Some(ValidationError::NotKatakana),
            FieldRule::HalfWidthDigits => Some(ValidationError::NotHalfWidthDigits),
            FieldRule::Choice => None,
        }
    }

    /// Map raw input to the form it is stored in.
    pub fn normalize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            FieldRule::HalfWidthDigits => to_half_width_digits(raw),
            FieldRule::JapaneseName | FieldRule::Katakana | FieldRule::Choice => {
                Cow::Borrowed(raw)
            }
        }
    }

    /// Check a stored value. Empty values never fail.
    pub fn check(&self, value: &str) -> FieldError {
        if value.is_empty() {
            return FieldError::Absent;
        }
        let passes = match self {
            FieldRule::JapaneseName => is_jp_name(value),
            FieldRule::Katakana => is_kana(value),
            FieldRule::HalfWidthDigits => is_digits(value),
            FieldRule::Choice => true,
        };
        match self.failure() {
            Some(error) => FieldError::when(!passes, error),
            None => FieldError::Absent,
        }
    }

    /// Normalize then check, so the error always describes the stored value.
    pub fn evaluate<'a>(&self, raw: &'a str) -> Evaluation<'a> {
        let value = self.normalize(raw);
        let error = self.check(&value);
        Evaluation { value, error }
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
