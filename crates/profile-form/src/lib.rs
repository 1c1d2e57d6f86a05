//! Profile form state.
//!
//! The form is a single [`FormSnapshot`](profile_model::FormSnapshot) that is
//! replaced, never edited in place, each time an input event arrives.

pub mod session;
pub mod transition;

pub use session::{OnComplete, ProfileForm, SubmitOutcome};
pub use transition::apply_field_change;
