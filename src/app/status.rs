/// Tone of the current status line, mapped to a banner color by the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    severity: Severity,
}

pub const READY_STATUS: &str = "Ready. Enter submits, Ctrl+R refreshes, Ctrl+Q quits.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
            severity: Severity::Info,
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
        self.severity = Severity::Info;
    }

    pub fn refreshing(&mut self) {
        self.message = "Loading records...".to_string();
        self.severity = Severity::Info;
    }

    pub fn refreshed(&mut self, count: usize) {
        self.message = format!("{count} record(s) loaded");
        self.severity = Severity::Info;
    }

    pub fn submitting(&mut self) {
        self.message = "Saving...".to_string();
        self.severity = Severity::Info;
    }

    pub fn deleting(&mut self) {
        self.message = "Deleting...".to_string();
        self.severity = Severity::Info;
    }

    pub fn record_added(&mut self) {
        self.message = "Vehicle added!".to_string();
        self.severity = Severity::Success;
    }

    pub fn record_updated(&mut self) {
        self.message = "Vehicle updated!".to_string();
        self.severity = Severity::Success;
    }

    pub fn record_deleted(&mut self) {
        self.message = "Vehicle deleted".to_string();
        self.severity = Severity::Success;
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}. Esc cancels.");
        self.severity = Severity::Info;
    }

    pub fn failure(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.severity = Severity::Error;
    }

    pub fn validation_failed(&mut self, count: usize) {
        self.message = format!("{count} field(s) need attention");
        self.severity = Severity::Error;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
