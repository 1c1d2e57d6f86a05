use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::field::{FieldId, Gender};

/// Current value of every form field.
///
/// Text values are reference-counted so a copy made by [`FormState::with_text`]
/// shares every untouched field with the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    last_name: Arc<str>,
    first_name: Arc<str>,
    last_name_kana: Arc<str>,
    first_name_kana: Arc<str>,
    #[serde(serialize_with = "serialize_gender")]
    gender: Option<Gender>,
    age: Arc<str>,
}

impl FormState {
    /// A blank form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value as the rendering layer sees it.
    /// An unselected gender reads as `""`.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::LastName => self.last_name.as_ref(),
            FieldId::FirstName => self.first_name.as_ref(),
            FieldId::LastNameKana => self.last_name_kana.as_ref(),
            FieldId::FirstNameKana => self.first_name_kana.as_ref(),
            FieldId::Gender => self.gender.map_or("", |gender| gender.as_str()),
            FieldId::Age => self.age.as_ref(),
        }
    }

    /// Shared handle to a text field's value. `None` for gender.
    pub fn text(&self, field: FieldId) -> Option<&Arc<str>> {
        match field {
            FieldId::LastName => Some(&self.last_name),
            FieldId::FirstName => Some(&self.first_name),
            FieldId::LastNameKana => Some(&self.last_name_kana),
            FieldId::FirstNameKana => Some(&self.first_name_kana),
            FieldId::Gender => None,
            FieldId::Age => Some(&self.age),
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn is_filled(&self, field: FieldId) -> bool {
        !self.value(field).is_empty()
    }

    /// Returns a copy with a text field replaced.
    ///
    /// Gender is not a text field; use [`FormState::with_gender`]. Passing it
    /// here only clears the selection when `value` is empty.
    #[must_use]
    pub fn with_text(&self, field: FieldId, value: impl Into<Arc<str>>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            FieldId::LastName => next.last_name = value,
            FieldId::FirstName => next.first_name = value,
            FieldId::LastNameKana => next.last_name_kana = value,
            FieldId::FirstNameKana => next.first_name_kana = value,
            FieldId::Gender => {
                if value.is_empty() {
                    next.gender = None;
                }
            }
            FieldId::Age => next.age = value,
        }
        next
    }

    /// Returns a copy with the gender selection replaced.
    #[must_use]
    pub fn with_gender(&self, gender: Option<Gender>) -> Self {
        Self {
            gender,
            ..self.clone()
        }
    }

    /// Returns a copy with `field` set to empty.
    #[must_use]
    pub fn cleared(&self, field: FieldId) -> Self {
        match field {
            FieldId::Gender => self.with_gender(None),
            _ => self.with_text(field, ""),
        }
    }
}

fn serialize_gender<S: Serializer>(
    gender: &Option<Gender>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(gender.map_or("", |gender| gender.as_str()))
}
