use crossterm::event::KeyEvent;
use serde_json::{Map, Value};

use crate::domain::VehicleRecord;

use super::field::{FieldKey, FieldState};

/// What the form is currently for: a new record, or an identified existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Outcome of the last submission attempt.
///
/// `InFlight` doubles as the duplicate-submission gate: while a request is
/// unresolved, further submits are refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Idle,
    InFlight,
    Success,
    Failed(String),
}

/// The outgoing request a valid submission produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(Map<String, Value>),
    Update { id: i64, payload: Map<String, Value> },
}

/// Transient add/edit form state: six text fields, a mode, and the
/// submission sub-state. Never holds a record id as a field; in edit mode
/// the target id lives in `FormMode::Edit`.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FieldState>,
    focus: usize,
    mode: FormMode,
    submission: Submission,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldKey::ALL.iter().map(|key| FieldState::new(*key)).collect(),
            focus: 0,
            mode: FormMode::Create,
            submission: Submission::Idle,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, key: FieldKey) -> &FieldState {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .unwrap_or(&self.fields[0])
    }

    fn field_mut(&mut self, key: FieldKey) -> &mut FieldState {
        let index = self
            .fields
            .iter()
            .position(|field| field.key == key)
            .unwrap_or(0);
        &mut self.fields[index]
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> &FieldState {
        &self.fields[self.focus]
    }

    pub fn focus_next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev_field(&mut self) {
        if self.focus == 0 {
            self.focus = self.fields.len() - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Route a key press to the focused field. An accepted edit clears that
    /// field's error and drops the last submission result, so stale banners
    /// never outlive the input they described. An in-flight submission is
    /// not reset; the gate stays closed until it resolves.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let field = &mut self.fields[self.focus];
        if !field.handle_key(key) {
            return false;
        }
        field.clear_error();
        if self.submission != Submission::InFlight {
            self.submission = Submission::Idle;
        }
        true
    }

    /// Load an existing record for editing. Replaces every field value,
    /// locks the AMP number, and clears errors and the last result.
    pub fn select_for_edit(&mut self, record: &VehicleRecord) {
        for field in &mut self.fields {
            let value = match field.key {
                FieldKey::AmpNumber => &record.amp_number,
                FieldKey::DriverName => &record.driver_name,
                FieldKey::Status => &record.status,
                FieldKey::Position => &record.position,
                FieldKey::Cargo => &record.cargo,
                FieldKey::Alert => &record.alert,
            };
            field.set_value(value.clone());
            field.clear_error();
            field.set_locked(field.key == FieldKey::AmpNumber);
        }
        self.mode = FormMode::Edit(record.id);
        self.submission = Submission::Idle;
        self.focus = 0;
    }

    /// Leave edit mode without saving: empty fields, create mode, no banner.
    pub fn cancel_edit(&mut self) {
        if !self.is_editing() {
            return;
        }
        self.reset_fields();
        self.mode = FormMode::Create;
        self.submission = Submission::Idle;
    }

    /// Validate and, when valid and no submission is already in flight,
    /// produce the outgoing request and close the gate. Validation failure
    /// marks the failing field(s) and never reaches the network.
    pub fn prepare_submit(&mut self) -> Option<SubmitRequest> {
        if self.submission == Submission::InFlight {
            return None;
        }
        if !self.validate() {
            return None;
        }
        let request = match self.mode {
            FormMode::Create => SubmitRequest::Create(self.create_payload()),
            FormMode::Edit(id) => SubmitRequest::Update {
                id,
                payload: self.update_payload(id),
            },
        };
        self.submission = Submission::InFlight;
        Some(request)
    }

    /// The request resolved successfully: clear the form and fall back to
    /// create mode. A create keeps the mode it already had.
    pub fn submission_succeeded(&mut self) {
        self.reset_fields();
        self.mode = FormMode::Create;
        self.submission = Submission::Success;
        self.focus = 0;
    }

    /// The request failed: keep mode and field values so the user can
    /// correct and resubmit.
    pub fn submission_failed(&mut self, message: impl Into<String>) {
        self.submission = Submission::Failed(message.into());
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|field| field.error().is_some()).count()
    }

    fn validate(&mut self) -> bool {
        let mut ok = true;
        for key in FieldKey::ALL {
            if !key.is_required() {
                continue;
            }
            if self.field(key).is_blank() {
                self.field_mut(key).set_error("Required");
                ok = false;
            } else {
                self.field_mut(key).clear_error();
            }
        }
        ok
    }

    /// Create payload: only fields whose trimmed value is non-empty, values
    /// sent verbatim. Blank optionals are omitted entirely so the service
    /// assigns its own defaults.
    pub fn create_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        for field in &self.fields {
            if !field.is_blank() {
                payload.insert(
                    field.key.name().to_string(),
                    Value::String(field.value().to_string()),
                );
            }
        }
        payload
    }

    /// Update payload: every field verbatim, blanks included, plus the id.
    /// Sending an explicit blank is the only way to clear a stored optional,
    /// so the asymmetry with `create_payload` is deliberate.
    pub fn update_payload(&self, id: i64) -> Map<String, Value> {
        let mut payload = Map::new();
        for field in &self.fields {
            payload.insert(
                field.key.name().to_string(),
                Value::String(field.value().to_string()),
            );
        }
        payload.insert("id".to_string(), Value::from(id));
        payload
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }
}
