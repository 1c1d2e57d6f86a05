//! End-to-end behaviour of a form instance driven by input events.

use std::sync::Arc;

use profile_form::{ProfileForm, SubmitOutcome, apply_field_change};
use profile_model::{
    ControlKind, FieldChange, FieldError, FieldId, FormError, FormSnapshot, FormState, Gender,
};

fn filled_form() -> ProfileForm {
    let mut form = ProfileForm::new();
    form.apply(&FieldChange::text(FieldId::LastName, "田中"));
    form.apply(&FieldChange::text(FieldId::FirstName, "太郎"));
    form.apply(&FieldChange::text(FieldId::LastNameKana, "タナカ"));
    form.apply(&FieldChange::text(FieldId::FirstNameKana, "タロウ"));
    form.apply(&FieldChange::new(FieldId::Gender, "male", ControlKind::Radio));
    form.apply(&FieldChange::text(FieldId::Age, "３０"));
    form
}

#[test]
fn full_width_age_is_stored_half_width() {
    let mut form = ProfileForm::new();
    form.apply(&FieldChange::text(FieldId::Age, "３０"));
    assert_eq!(form.state().value(FieldId::Age), "30");
    assert_eq!(form.errors().get(FieldId::Age), FieldError::Absent);
}

#[test]
fn name_with_any_digit_is_rejected() {
    let mut form = ProfileForm::new();
    form.apply(&FieldChange::text(FieldId::LastName, "田中１"));
    assert_eq!(
        form.errors().get(FieldId::LastName).message(),
        Some("記号・数字は使用できません")
    );

    form.apply(&FieldChange::text(FieldId::LastName, "田中1"));
    assert_eq!(
        form.errors().get(FieldId::LastName).message(),
        Some("記号・数字は使用できません")
    );

    form.apply(&FieldChange::text(FieldId::LastName, "田中"));
    assert_eq!(form.errors().get(FieldId::LastName), FieldError::Absent);
}

#[test]
fn kana_reading_must_be_katakana() {
    let mut form = ProfileForm::new();
    form.apply(&FieldChange::text(FieldId::LastNameKana, "たなか"));
    assert_eq!(
        form.errors().get(FieldId::LastNameKana).message(),
        Some("カタカナで入力してください")
    );
    form.apply(&FieldChange::text(FieldId::LastNameKana, "タナカ"));
    assert_eq!(form.errors().get(FieldId::LastNameKana), FieldError::Absent);
}

#[test]
fn clearing_a_field_removes_its_error() {
    let mut form = ProfileForm::new();
    form.apply(&FieldChange::text(FieldId::FirstNameKana, "taro"));
    assert!(form.errors().has_errors());
    form.apply(&FieldChange::text(FieldId::FirstNameKana, ""));
    assert!(!form.errors().has_errors());
}

#[test]
fn complete_form_can_submit() {
    let form = filled_form();
    assert!(form.can_submit());

    let mut completed = Vec::new();
    let outcome = form.submit(|state: &FormState| completed.push(state.clone()));
    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].value(FieldId::Age), "30");
    assert_eq!(completed[0].gender(), Some(Gender::Male));
}

#[test]
fn clearing_any_required_field_closes_the_gate() {
    for field in FieldId::ALL {
        let mut form = filled_form();
        form.apply(&FieldChange::text(field, ""));
        assert!(!form.can_submit(), "gate open after clearing {field}");
    }
}

#[test]
fn invalid_field_closes_the_gate_and_submit_is_silent() {
    let mut form = filled_form();
    form.apply(&FieldChange::text(FieldId::Age, "30歳"));
    assert!(!form.can_submit());

    let mut called = false;
    let outcome = form.submit(|_: &FormState| called = true);
    assert_eq!(outcome, SubmitOutcome::NotReady);
    assert!(!called);
}

#[test]
fn a_change_never_touches_other_fields() {
    let base = filled_form().snapshot().clone();
    let inputs = [
        (FieldId::LastName, "山田!"),
        (FieldId::FirstName, "花子"),
        (FieldId::LastNameKana, "やまだ"),
        (FieldId::FirstNameKana, "ハナコ"),
        (FieldId::Gender, "other"),
        (FieldId::Age, "x"),
    ];

    for (target, value) in inputs {
        let next = apply_field_change(&base, &FieldChange::text(target, value));
        for other in FieldId::ALL.into_iter().filter(|field| *field != target) {
            assert_eq!(next.state.value(other), base.state.value(other), "{target} -> {other}");
            assert_eq!(next.errors.get(other), base.errors.get(other), "{target} -> {other}");
            if let (Some(before), Some(after)) = (base.state.text(other), next.state.text(other)) {
                assert!(Arc::ptr_eq(before, after), "{target} reallocated {other}");
            }
        }
    }
}

#[test]
fn previous_snapshot_is_not_modified() {
    let before = FormSnapshot::new();
    let after = apply_field_change(&before, &FieldChange::text(FieldId::LastName, "1"));
    assert_eq!(before, FormSnapshot::new());
    assert_ne!(after, before);
}

#[test]
fn raw_events_are_parsed() {
    let mut form = ProfileForm::new();
    form.apply_raw("age", "４２", "text").unwrap();
    assert_eq!(form.state().value(FieldId::Age), "42");

    form.apply_raw("age", "", "number").unwrap();
    assert_eq!(form.state().value(FieldId::Age), "");

    let result = form.apply_raw("email", "a@example.com", "text");
    assert!(matches!(result, Err(FormError::UnknownField(name)) if name == "email"));
}

#[test]
fn raw_gender_outside_options_is_an_error() {
    let mut form = ProfileForm::new();
    form.apply_raw("gender", "female", "radio").unwrap();

    let result = form.apply_raw("gender", "robot", "radio");
    assert!(matches!(result, Err(FormError::UnknownGender(value)) if value == "robot"));
    assert_eq!(form.state().gender(), Some(Gender::Female));
}

#[test]
fn gate_report_names_unmet_conditions() {
    let mut form = ProfileForm::new();
    form.apply(&FieldChange::text(FieldId::LastName, "田中"));
    form.apply(&FieldChange::text(FieldId::FirstName, "太郎"));
    form.apply(&FieldChange::text(FieldId::LastNameKana, "タナカ"));
    form.apply(&FieldChange::text(FieldId::FirstNameKana, "たろう"));

    let gate = form.gate();
    assert_eq!(
        gate.missing().collect::<Vec<_>>(),
        vec![FieldId::Gender, FieldId::Age]
    );
    assert_eq!(gate.invalid().collect::<Vec<_>>(), vec![FieldId::FirstNameKana]);
}
