use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{ControlKind, FieldId, Gender};

/// A raw input event forwarded by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: FieldId,
    pub value: String,
    #[serde(default)]
    pub control: ControlKind,
}

impl FieldChange {
    pub fn new(field: FieldId, value: impl Into<String>, control: ControlKind) -> Self {
        Self {
            field,
            value: value.into(),
            control,
        }
    }

    /// Change from a text input.
    pub fn text(field: FieldId, value: impl Into<String>) -> Self {
        Self::new(field, value, ControlKind::Text)
    }

    /// Build a change from the `(name, value, type)` attributes of an input event.
    ///
    /// A gender value must be empty or one of the radio options.
    pub fn from_raw(name: &str, value: impl Into<String>, control: &str) -> Result<Self> {
        let change = Self::new(name.parse()?, value, control.parse()?);
        if change.field == FieldId::Gender {
            Gender::parse_selection(&change.value)?;
        }
        Ok(change)
    }

    /// True for the "numeric control reports empty" case, which clears the
    /// field without running any check.
    pub fn is_empty_number(&self) -> bool {
        self.control == ControlKind::Number && self.value.is_empty()
    }
}
