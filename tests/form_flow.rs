//! Full form lifecycle sequences through the public API.

use serde_json::{Value, json};

use ampdeck::{
    domain::VehicleRecord,
    form::{FieldKey, FormMode, FormState, SubmitRequest, Submission},
};

fn persisted_record() -> VehicleRecord {
    VehicleRecord {
        id: 7,
        amp_number: "A1".to_string(),
        driver_name: "Jo".to_string(),
        status: "Active".to_string(),
        position: String::new(),
        cargo: String::new(),
        alert: String::new(),
    }
}

fn type_into(form: &mut FormState, text: &str) {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    for ch in text.chars() {
        form.handle_key(&KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
    }
}

#[test]
fn create_then_succeed_then_create_again() {
    let mut form = FormState::new();
    type_into(&mut form, "A1");
    form.focus_next_field();
    type_into(&mut form, "Jo");
    form.focus_next_field();
    type_into(&mut form, "  "); // blank status stays out of the payload

    let Some(SubmitRequest::Create(payload)) = form.prepare_submit() else {
        panic!("expected a create request");
    };
    assert_eq!(
        Value::Object(payload),
        json!({"amp_number": "A1", "driver_name": "Jo"})
    );

    form.submission_succeeded();
    assert_eq!(form.mode(), FormMode::Create);
    assert_eq!(form.submission(), &Submission::Success);
    assert!(form.fields().iter().all(|field| field.value().is_empty()));

    // The form is immediately usable for the next record.
    type_into(&mut form, "A2");
    form.focus_prev_field(); // wraps to the last field
    assert_eq!(form.field(FieldKey::AmpNumber).value(), "A2");
}

#[test]
fn edit_submit_unchanged_sends_every_field() {
    let mut form = FormState::new();
    form.select_for_edit(&persisted_record());
    let Some(SubmitRequest::Update { id, payload }) = form.prepare_submit() else {
        panic!("expected an update request");
    };
    assert_eq!(id, 7);
    let object = Value::Object(payload);
    assert_eq!(
        object,
        json!({
            "id": 7,
            "amp_number": "A1",
            "driver_name": "Jo",
            "status": "Active",
            "position": "",
            "cargo": "",
            "alert": ""
        })
    );
}

#[test]
fn edit_clear_optional_then_submit_sends_the_blank() {
    let mut form = FormState::new();
    let mut record = persisted_record();
    record.cargo = "grain".to_string();
    form.select_for_edit(&record);

    // Move to the cargo field and wipe it.
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    while form.focused_field().key != FieldKey::Cargo {
        form.focus_next_field();
    }
    form.handle_key(&KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));

    let Some(SubmitRequest::Update { payload, .. }) = form.prepare_submit() else {
        panic!("expected an update request");
    };
    assert_eq!(payload.get("cargo"), Some(&Value::String(String::new())));
}

#[test]
fn failed_edit_keeps_mode_and_values_for_correction() {
    let mut form = FormState::new();
    form.select_for_edit(&persisted_record());
    assert!(form.prepare_submit().is_some());
    form.submission_failed("Vehicle not found");

    assert_eq!(form.mode(), FormMode::Edit(7));
    assert_eq!(form.field(FieldKey::DriverName).value(), "Jo");
    assert_eq!(
        form.submission(),
        &Submission::Failed("Vehicle not found".to_string())
    );

    // Correcting a field drops the failure banner and reopens the gate.
    type_into(&mut form, "x"); // focus is on the locked AMP field, no change
    assert_eq!(form.field(FieldKey::AmpNumber).value(), "A1");
    form.focus_next_field();
    type_into(&mut form, "e");
    assert_eq!(form.submission(), &Submission::Idle);
    assert!(form.prepare_submit().is_some());
}

#[test]
fn validation_failure_touches_only_the_blank_required_fields() {
    let mut form = FormState::new();
    type_into(&mut form, "A1");
    assert!(form.prepare_submit().is_none());
    assert!(form.field(FieldKey::AmpNumber).error().is_none());
    assert_eq!(form.field(FieldKey::DriverName).error(), Some("Required"));
    assert_eq!(form.error_count(), 1);
}
