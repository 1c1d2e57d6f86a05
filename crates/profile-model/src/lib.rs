pub mod change;
pub mod error;
pub mod errors;
pub mod field;
pub mod state;

pub use change::FieldChange;
pub use error::{FormError, Result};
pub use errors::{FieldError, FormErrors, ValidationError};
pub use field::{ControlKind, FieldId, Gender, Section};
pub use state::FormState;

/// Value and error state of the form, replaced as a unit on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub state: FormState,
    pub errors: FormErrors,
}

impl FormSnapshot {
    /// A blank form with no errors.
    pub fn new() -> Self {
        Self::default()
    }
}
