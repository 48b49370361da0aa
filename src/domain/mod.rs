use serde::{Deserialize, Serialize};

/// A vehicle record as stored by the registry service.
///
/// `id` is assigned by the service; a record without one never reaches the
/// store. The four trailing fields are optional, with the empty string as the
/// "unset" sentinel, so absent fields deserialize as unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: i64,
    pub amp_number: String,
    pub driver_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub cargo: String,
    #[serde(default)]
    pub alert: String,
}

impl VehicleRecord {
    pub fn display_label(&self) -> &str {
        if self.amp_number.trim().is_empty() {
            "<unnamed>"
        } else {
            &self.amp_number
        }
    }
}
