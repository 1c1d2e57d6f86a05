//! Validation for the profile form.
//!
//! - [`classify`]: character-class predicates
//! - [`normalize`]: full-width digit conversion
//! - [`rules`]: per-field normalization and check
//! - [`gate`]: submit readiness

pub mod classify;
pub mod gate;
pub mod normalize;
pub mod rules;

pub use classify::{is_digits, is_jp_name, is_kana};
pub use gate::{Blocker, GateReport, can_submit, evaluate_gate};
pub use normalize::to_half_width_digits;
pub use rules::{Evaluation, FieldRule};
