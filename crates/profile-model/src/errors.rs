//! Per-field validation errors.
//!
//! Every field carries an explicit [`FieldError`]; "no error" is the
//! `Absent` variant rather than a missing map entry.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::field::FieldId;

/// A format failure on a field's content. `Display` is the message shown
/// under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    /// A name contains a digit or an ASCII symbol.
    #[error("{}", self.message())]
    SymbolOrDigit,
    /// A reading contains something other than full-width katakana.
    #[error("{}", self.message())]
    NotKatakana,
    /// The age is not made of half-width digits after normalization.
    #[error("{}", self.message())]
    NotHalfWidthDigits,
}

impl ValidationError {
    /// Returns the user-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::SymbolOrDigit => "記号・数字は使用できません",
            ValidationError::NotKatakana => "カタカナで入力してください",
            ValidationError::NotHalfWidthDigits => "半角数字以外は使用できません",
        }
    }
}

/// Error state of a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldError {
    #[default]
    Absent,
    Present(ValidationError),
}

impl FieldError {
    /// `Present` when `failed` is true, `Absent` otherwise.
    pub fn when(failed: bool, error: ValidationError) -> Self {
        if failed {
            FieldError::Present(error)
        } else {
            FieldError::Absent
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, FieldError::Present(_))
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            FieldError::Absent => None,
            FieldError::Present(error) => Some(*error),
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.error().map(|error| error.message())
    }
}

impl From<Option<ValidationError>> for FieldError {
    fn from(value: Option<ValidationError>) -> Self {
        value.map_or(FieldError::Absent, FieldError::Present)
    }
}

/// Current error of every validated field.
///
/// Gender has no slot: reading it always yields `Absent` and writing it is
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    last_name: FieldError,
    first_name: FieldError,
    last_name_kana: FieldError,
    first_name_kana: FieldError,
    age: FieldError,
}

impl FormErrors {
    /// Errors with every field clear.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> FieldError {
        match field {
            FieldId::LastName => self.last_name,
            FieldId::FirstName => self.first_name,
            FieldId::LastNameKana => self.last_name_kana,
            FieldId::FirstNameKana => self.first_name_kana,
            FieldId::Gender => FieldError::Absent,
            FieldId::Age => self.age,
        }
    }

    /// Returns a copy with `field` set to `error`; all other fields are kept.
    #[must_use]
    pub fn with(mut self, field: FieldId, error: FieldError) -> Self {
        match field {
            FieldId::LastName => self.last_name = error,
            FieldId::FirstName => self.first_name = error,
            FieldId::LastNameKana => self.last_name_kana = error,
            FieldId::FirstNameKana => self.first_name_kana = error,
            FieldId::Gender => {}
            FieldId::Age => self.age = error,
        }
        self
    }

    /// Fields currently carrying an error, in display order.
    pub fn present(&self) -> impl Iterator<Item = (FieldId, ValidationError)> + '_ {
        FieldId::VALIDATED
            .into_iter()
            .filter_map(move |field| self.get(field).error().map(|error| (field, error)))
    }

    pub fn has_errors(&self) -> bool {
        self.present().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.present().count()
    }
}

impl Serialize for FormErrors {
    /// Serialized sparsely: `{ "<field>": "<message>" }` for present errors only.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.error_count()))?;
        for (field, error) in self.present() {
            map.serialize_entry(field.as_str(), error.message())?;
        }
        map.end()
    }
}
