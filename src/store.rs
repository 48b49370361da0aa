use crate::domain::VehicleRecord;

/// Read-through cache of the registry's record list.
///
/// The service is the source of truth: every mutation round-trips through it
/// and lands here via a full refresh. `replace` swaps the whole sequence, so
/// the cache is never left half-updated.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<VehicleRecord>,
    selected: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, records: Vec<VehicleRecord>) {
        self.records = records;
        self.normalize_selection();
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&VehicleRecord> {
        self.records.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.records.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn normalize_selection(&mut self) {
        if self.records.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.records.len() {
            self.selected = self.records.len() - 1;
        }
    }
}
