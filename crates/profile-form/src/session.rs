//! A live form instance.
//!
//! [`ProfileForm`] owns the current snapshot and is its only writer. The
//! rendering layer forwards input events to [`ProfileForm::apply`] (or
//! [`ProfileForm::apply_raw`] for untyped attributes) and reads state back
//! after each one.

use profile_model::{FieldChange, FormErrors, FormSnapshot, FormState, Result};
use profile_validate::{GateReport, evaluate_gate};
use tracing::info;

use crate::transition::apply_field_change;

/// Receives the finished form when a submit passes the gate.
pub trait OnComplete {
    fn complete(&mut self, state: &FormState);
}

impl<F> OnComplete for F
where
    F: FnMut(&FormState),
{
    fn complete(&mut self, state: &FormState) {
        self(state);
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The gate was open and the completion handler ran.
    Completed,
    /// The gate was closed. Nothing happened; the field errors already on
    /// screen are the only feedback.
    NotReady,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    snapshot: FormSnapshot,
}

impl ProfileForm {
    /// A blank form with no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one input event.
    pub fn apply(&mut self, change: &FieldChange) -> &FormSnapshot {
        self.snapshot = apply_field_change(&self.snapshot, change);
        &self.snapshot
    }

    /// Apply an event given as the raw `(name, value, type)` attributes.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown field name, control type, or gender
    /// option; the form is left untouched.
    pub fn apply_raw(&mut self, name: &str, value: &str, control: &str) -> Result<&FormSnapshot> {
        let change = FieldChange::from_raw(name, value, control)?;
        Ok(self.apply(&change))
    }

    pub fn state(&self) -> &FormState {
        &self.snapshot.state
    }

    pub fn errors(&self) -> &FormErrors {
        &self.snapshot.errors
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    /// Unmet submit conditions.
    pub fn gate(&self) -> GateReport {
        evaluate_gate(&self.snapshot.state, &self.snapshot.errors)
    }

    /// Whether the "next" action is enabled.
    pub fn can_submit(&self) -> bool {
        self.gate().is_ready()
    }

    /// Re-check the gate and hand the finished state to `on_complete` if it
    /// is open. A closed gate is a silent no-op.
    pub fn submit<C: OnComplete>(&self, mut on_complete: C) -> SubmitOutcome {
        let gate = self.gate();
        if !gate.is_ready() {
            info!(blockers = gate.blockers.len(), "submit ignored, form not ready");
            return SubmitOutcome::NotReady;
        }
        info!("form complete");
        on_complete.complete(&self.snapshot.state);
        SubmitOutcome::Completed
    }
}
