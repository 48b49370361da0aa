use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The six record fields the form edits, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    AmpNumber,
    DriverName,
    Status,
    Position,
    Cargo,
    Alert,
}

impl FieldKey {
    pub const ALL: [FieldKey; 6] = [
        FieldKey::AmpNumber,
        FieldKey::DriverName,
        FieldKey::Status,
        FieldKey::Position,
        FieldKey::Cargo,
        FieldKey::Alert,
    ];

    /// Wire name, matching the service's JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            FieldKey::AmpNumber => "amp_number",
            FieldKey::DriverName => "driver_name",
            FieldKey::Status => "status",
            FieldKey::Position => "position",
            FieldKey::Cargo => "cargo",
            FieldKey::Alert => "alert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::AmpNumber => "AMP Number",
            FieldKey::DriverName => "Driver Name",
            FieldKey::Status => "Status",
            FieldKey::Position => "Position",
            FieldKey::Cargo => "Cargo",
            FieldKey::Alert => "Alert",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            FieldKey::AmpNumber => "business identifier, unique",
            FieldKey::DriverName => "required",
            FieldKey::Status => "e.g. Active, Pending, Blocked",
            FieldKey::Position => "last known checkpoint",
            FieldKey::Cargo => "cargo type",
            FieldKey::Alert => "alert type (if any)",
        }
    }

    /// Only these two are validated client-side.
    pub fn is_required(self) -> bool {
        matches!(self, FieldKey::AmpNumber | FieldKey::DriverName)
    }
}

/// One text field of the form: its buffer, validation error, and lock flag.
///
/// `locked` covers the AMP number in edit mode, which is immutable once a
/// record exists.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub key: FieldKey,
    buffer: String,
    error: Option<String>,
    locked: bool,
}

impl FieldState {
    pub fn new(key: FieldKey) -> Self {
        Self {
            key,
            buffer: String::new(),
            error: None,
            locked: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Apply a key press to the buffer. Returns true when the value changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.locked {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                self.buffer.push(ch);
                true
            }
            KeyCode::Backspace => self.buffer.pop().is_some(),
            KeyCode::Delete => {
                if self.buffer.is_empty() {
                    false
                } else {
                    self.buffer.clear();
                    true
                }
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.error = None;
        self.locked = false;
    }
}
