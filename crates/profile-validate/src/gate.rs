//! Submit gate.
//!
//! The form may be submitted only when every field is filled and no
//! validated field carries an error. [`can_submit`] keeps that as a plain
//! boolean; [`evaluate_gate`] also reports which conditions are unmet.

use std::fmt;

use profile_model::{FieldId, FormErrors, FormState, ValidationError};
use tracing::debug;

/// A condition keeping the gate closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blocker {
    /// The field has no value.
    Missing(FieldId),
    /// The field has a value that failed its check.
    Invalid(FieldId, ValidationError),
}

impl Blocker {
    pub fn field(&self) -> FieldId {
        match self {
            Blocker::Missing(field) | Blocker::Invalid(field, _) => *field,
        }
    }
}

impl fmt::Display for Blocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocker::Missing(field) => write!(f, "{field}: missing"),
            Blocker::Invalid(field, error) => write!(f, "{field}: {error}"),
        }
    }
}

/// Unmet submit conditions, in field order. Empty means the gate is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateReport {
    pub blockers: Vec<Blocker>,
}

impl GateReport {
    pub fn is_ready(&self) -> bool {
        self.blockers.is_empty()
    }

    pub fn missing(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.blockers.iter().filter_map(|blocker| match blocker {
            Blocker::Missing(field) => Some(*field),
            Blocker::Invalid(..) => None,
        })
    }

    pub fn invalid(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.blockers.iter().filter_map(|blocker| match blocker {
            Blocker::Invalid(field, _) => Some(*field),
            Blocker::Missing(_) => None,
        })
    }
}

/// Collect every unmet submit condition.
pub fn evaluate_gate(state: &FormState, errors: &FormErrors) -> GateReport {
    let mut blockers = Vec::new();

    for field in FieldId::ALL {
        if !state.is_filled(field) {
            blockers.push(Blocker::Missing(field));
        }
        if let Some(error) = errors.get(field).error() {
            blockers.push(Blocker::Invalid(field, error));
        }
    }

    let report = GateReport { blockers };
    debug!(
        ready = report.is_ready(),
        blockers = report.blockers.len(),
        "evaluated submit gate"
    );
    report
}

/// True iff all six fields are filled and none of the validated fields has
/// an error.
pub fn can_submit(state: &FormState, errors: &FormErrors) -> bool {
    evaluate_gate(state, errors).is_ready()
}
