//! The single state transition of the form.

use profile_model::{FieldChange, FieldError, FieldId, FormSnapshot, Gender};
use profile_validate::FieldRule;
use tracing::{debug, warn};

/// Apply one input event and return the next snapshot.
///
/// Only the targeted field's value and error change. Values are never
/// rejected: invalid text is stored together with its error. The one
/// exception is a gender value outside the radio options, which cannot be
/// represented and leaves the snapshot as it was.
pub fn apply_field_change(snapshot: &FormSnapshot, change: &FieldChange) -> FormSnapshot {
    let field = change.field;

    if change.is_empty_number() {
        debug!(%field, control = %change.control, "numeric control reported empty value");
        return FormSnapshot {
            state: snapshot.state.cleared(field),
            errors: snapshot.errors.with(field, FieldError::Absent),
        };
    }

    let rule = FieldRule::for_field(field);
    let evaluation = rule.evaluate(&change.value);

    let state = match field {
        FieldId::Gender => match Gender::parse_selection(&evaluation.value) {
            Ok(gender) => snapshot.state.with_gender(gender),
            Err(_) => {
                warn!(
                    %field,
                    control = %change.control,
                    "dropped change with unknown gender option"
                );
                return snapshot.clone();
            }
        },
        _ => snapshot.state.with_text(field, evaluation.value),
    };
    let errors = snapshot.errors.with(field, evaluation.error);

    debug!(
        %field,
        control = %change.control,
        %rule,
        error = ?evaluation.error.error(),
        "applied field change"
    );
    FormSnapshot { state, errors }
}
