//! Type-safe enumerations for the profile form.
//!
//! The form submits under the control `name` attributes (`lastName`,
//! `firstNameKana`, ...); these enums parse from and display as those
//! names so events coming from the rendering layer map one-to-one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// A field of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    /// 姓 (family name, kanji/kana).
    LastName,
    /// 名 (given name, kanji/kana).
    FirstName,
    /// Family name reading in katakana.
    LastNameKana,
    /// Given name reading in katakana.
    FirstNameKana,
    /// One of the radio options, or unselected.
    Gender,
    /// Age, kept as text so partial input survives typing.
    Age,
}

impl FieldId {
    /// All fields in display order. Every one of them is required.
    pub const ALL: [FieldId; 6] = [
        FieldId::LastName,
        FieldId::FirstName,
        FieldId::LastNameKana,
        FieldId::FirstNameKana,
        FieldId::Gender,
        FieldId::Age,
    ];

    /// Fields with a format check. Gender is a closed choice and has none.
    pub const VALIDATED: [FieldId; 5] = [
        FieldId::LastName,
        FieldId::FirstName,
        FieldId::LastNameKana,
        FieldId::FirstNameKana,
        FieldId::Age,
    ];

    /// Returns the control name as it appears in form events.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::LastName => "lastName",
            FieldId::FirstName => "firstName",
            FieldId::LastNameKana => "lastNameKana",
            FieldId::FirstNameKana => "firstNameKana",
            FieldId::Gender => "gender",
            FieldId::Age => "age",
        }
    }

    /// Returns the on-screen label.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::LastName => "姓",
            FieldId::FirstName => "名",
            FieldId::LastNameKana => "氏（カタカナ）",
            FieldId::FirstNameKana => "名（カタカナ）",
            FieldId::Gender => "性別",
            FieldId::Age => "年齢",
        }
    }

    /// Returns the form section the field is rendered in.
    pub fn section(&self) -> Section {
        match self {
            FieldId::LastName
            | FieldId::FirstName
            | FieldId::LastNameKana
            | FieldId::FirstNameKana => Section::Name,
            FieldId::Gender | FieldId::Age => Section::AgeAndGender,
        }
    }

    /// Returns true if the field content is subject to a format check.
    pub fn is_validated(&self) -> bool {
        !matches!(self, FieldId::Gender)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    /// Parse a control name. Matching is exact, as it is for DOM names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Visual grouping of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// 名前
    Name,
    /// 年齢・性別
    AgeAndGender,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Name => "名前",
            Section::AgeAndGender => "年齢・性別",
        }
    }
}

/// Gender radio option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    /// 無回答・その他 (no answer / other).
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Returns the option value submitted by the radio control.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Returns the on-screen label of the option.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男性",
            Gender::Female => "女性",
            Gender::Other => "無回答・その他",
        }
    }

    /// Parse a radio value where the empty string means "nothing selected".
    pub fn parse_selection(value: &str) -> Result<Option<Self>, FormError> {
        if value.is_empty() {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(FormError::UnknownGender(s.to_string())),
        }
    }
}

/// The kind of UI control an input event came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    #[default]
    Text,
    /// Numeric input. Reports an empty value while its content is not a number.
    Number,
    Radio,
}

impl ControlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Number => "number",
            ControlKind::Radio => "radio",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ControlKind {
    type Err = FormError;

    /// Parse an input `type` attribute (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ControlKind::Text),
            "number" => Ok(ControlKind::Number),
            "radio" => Ok(ControlKind::Radio),
            _ => Err(FormError::UnknownControl(s.to_string())),
        }
    }
}
