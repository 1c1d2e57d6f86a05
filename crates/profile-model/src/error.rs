use thiserror::Error;

/// Errors raised at the boundary where raw strings become model values.
///
/// Validation failures on field content are not errors of this kind; they
/// are stored alongside the value as a [`crate::FieldError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown control type: {0}")]
    UnknownControl(String),
    #[error("unknown gender option: {0}")]
    UnknownGender(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
