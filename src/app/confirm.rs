use crate::{domain::VehicleRecord, presentation::ConfirmRender};

const OPTIONS: [&str; 2] = ["Cancel", "Delete"];

/// Blocking confirmation gate for a pending delete. The DELETE request is
/// only issued once the user lands on "Delete" and accepts.
pub(crate) struct ConfirmDelete {
    target_id: i64,
    title: String,
    selected: usize,
}

impl ConfirmDelete {
    pub(crate) fn for_record(record: &VehicleRecord) -> Self {
        Self {
            target_id: record.id,
            title: format!("Delete vehicle {}?", record.display_label()),
            selected: 0,
        }
    }

    pub(crate) fn target_id(&self) -> i64 {
        self.target_id
    }

    pub(crate) fn select_previous(&mut self) {
        if self.selected == 0 {
            self.selected = OPTIONS.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub(crate) fn select_next(&mut self) {
        self.selected = (self.selected + 1) % OPTIONS.len();
    }

    pub(crate) fn affirm(&mut self) {
        self.selected = 1;
    }

    pub(crate) fn is_affirmed(&self) -> bool {
        self.selected == 1
    }

    pub(crate) fn as_render(&self) -> ConfirmRender<'_> {
        ConfirmRender {
            title: &self.title,
            options: &OPTIONS,
            selected: self.selected,
        }
    }
}
