use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    api::{ApiEvent, ApiHandle, MutationKind},
    form::FormState,
    presentation::{self, UiContext},
    store::RecordStore,
};

use super::{
    confirm::ConfirmDelete,
    input::{KeyCommand, classify},
    options::UiOptions,
    status::{Severity, StatusLine},
    terminal::TerminalGuard,
};

const FORM_HELP: &str =
    "Tab/↑↓ move, Enter submit, Esc cancel edit, Ctrl+L list, Ctrl+R refresh, Ctrl+Q quit";
const LIST_HELP: &str =
    "↑↓ select, Enter/e edit, d delete, Ctrl+L form, Ctrl+R refresh, Ctrl+Q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Form,
    List,
}

/// The UI loop. Owns every piece of state; background requests report back
/// through the api event channel and are drained once per tick, so nothing
/// is mutated from two places.
pub struct App {
    store: RecordStore,
    form: FormState,
    api: ApiHandle,
    events: UnboundedReceiver<ApiEvent>,
    options: UiOptions,
    status: StatusLine,
    focus: Focus,
    confirm: Option<ConfirmDelete>,
    should_quit: bool,
}

impl App {
    pub fn new(api: ApiHandle, events: UnboundedReceiver<ApiEvent>, options: UiOptions) -> Self {
        Self {
            store: RecordStore::new(),
            form: FormState::new(),
            api,
            events,
            options,
            status: StatusLine::new(),
            focus: Focus::Form,
            confirm: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        self.status.refreshing();
        self.api.refresh();
        while !self.should_quit {
            self.drain_api_events();
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(())
    }

    fn drain_api_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_api_event(event);
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = if self.options.show_help {
            Some(match self.focus {
                Focus::Form => FORM_HELP,
                Focus::List => LIST_HELP,
            })
        } else {
            None
        };
        presentation::draw(
            frame,
            UiContext {
                form: &self.form,
                records: self.store.records(),
                selected: self.store.selected_index(),
                form_focused: self.focus == Focus::Form,
                status_message: self.status.message(),
                severity: self.status.severity(),
                help,
                confirm: self.confirm.as_ref().map(|confirm| confirm.as_render()),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_confirm_key(&key) {
            return;
        }
        match classify(&key) {
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::Refresh => {
                self.status.refreshing();
                self.api.refresh();
            }
            KeyCommand::SwitchPane => self.toggle_focus(),
            KeyCommand::Submit => self.submit(),
            KeyCommand::DeleteEntry => {
                if self.focus == Focus::List {
                    self.request_delete();
                }
            }
            KeyCommand::Next => match self.focus {
                Focus::Form => self.form.focus_next_field(),
                Focus::List => self.store.select_next(),
            },
            KeyCommand::Prev => match self.focus {
                Focus::Form => self.form.focus_prev_field(),
                Focus::List => self.store.select_prev(),
            },
            KeyCommand::Cancel => {
                if self.focus == Focus::Form && self.form.is_editing() {
                    self.form.cancel_edit();
                }
                self.status.ready();
            }
            KeyCommand::Accept => match self.focus {
                Focus::Form => self.submit(),
                Focus::List => self.edit_selected(),
            },
            KeyCommand::Edit(key) => match self.focus {
                Focus::Form => {
                    self.form.handle_key(&key);
                }
                Focus::List => match key.code {
                    KeyCode::Char('e') | KeyCode::Char('E') => self.edit_selected(),
                    KeyCode::Char('d') | KeyCode::Char('D') => self.request_delete(),
                    _ => {}
                },
            },
            KeyCommand::None => {}
        }
    }

    /// An open confirmation popup swallows all input until it is resolved.
    fn handle_confirm_key(&mut self, key: &KeyEvent) -> bool {
        let Some(confirm) = &mut self.confirm else {
            return false;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.confirm = None;
                self.status.ready();
            }
            KeyCode::Up | KeyCode::Left => confirm.select_previous(),
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => confirm.select_next(),
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                confirm.affirm();
                self.apply_confirm();
            }
            KeyCode::Enter => self.apply_confirm(),
            _ => {}
        }
        true
    }

    fn apply_confirm(&mut self) {
        let Some(confirm) = self.confirm.take() else {
            return;
        };
        if confirm.is_affirmed() {
            self.status.deleting();
            self.api.delete(confirm.target_id());
        } else {
            self.status.ready();
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
    }

    fn submit(&mut self) {
        if let Some(request) = self.form.prepare_submit() {
            self.status.submitting();
            self.api.submit(request);
        } else if self.form.error_count() > 0 {
            self.status.validation_failed(self.form.error_count());
        }
    }

    fn edit_selected(&mut self) {
        let Some(record) = self.store.selected_record().cloned() else {
            return;
        };
        self.form.select_for_edit(&record);
        self.focus = Focus::Form;
        self.status.editing(record.display_label());
    }

    fn request_delete(&mut self) {
        let Some(record) = self.store.selected_record() else {
            return;
        };
        if self.options.confirm_delete {
            self.confirm = Some(ConfirmDelete::for_record(record));
        } else {
            let id = record.id;
            self.status.deleting();
            self.api.delete(id);
        }
    }

    fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Refreshed(Ok(records)) => {
                self.store.replace(records);
                // Keep a fresh success or failure banner; a routine refresh
                // completion only replaces an informational status.
                if self.status.severity() == Severity::Info {
                    self.status.refreshed(self.store.len());
                }
            }
            ApiEvent::Refreshed(Err(err)) => {
                log::error!("refresh failed: {err}");
                self.status.failure(err.banner_message());
            }
            ApiEvent::Submitted {
                kind,
                result: Ok(()),
            } => {
                self.form.submission_succeeded();
                match kind {
                    MutationKind::Create => self.status.record_added(),
                    MutationKind::Update => self.status.record_updated(),
                }
                self.api.refresh();
            }
            ApiEvent::Submitted {
                kind,
                result: Err(err),
            } => {
                log::error!("{kind:?} submission failed: {err}");
                self.form.submission_failed(err.banner_message());
            }
            ApiEvent::Deleted(result) => {
                match result {
                    Ok(()) => self.status.record_deleted(),
                    Err(err) => {
                        log::error!("delete failed: {err}");
                        self.status.failure(err.banner_message());
                    }
                }
                // The refresh happens regardless of the delete's outcome.
                self.api.refresh();
            }
        }
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn form_for_test(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub(crate) fn store_for_test(&self) -> &RecordStore {
        &self.store
    }

    pub(crate) fn status_for_test(&self) -> &StatusLine {
        &self.status
    }

    pub(crate) fn confirm_open_for_test(&self) -> bool {
        self.confirm.is_some()
    }

    pub(crate) fn handle_key_for_test(&mut self, key: KeyEvent) {
        self.handle_key(key);
    }

    pub(crate) fn handle_api_event_for_test(&mut self, event: ApiEvent) {
        self.handle_api_event(event);
    }

    pub(crate) fn events_for_test(&mut self) -> &mut UnboundedReceiver<ApiEvent> {
        &mut self.events
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyModifiers;

    use crate::{
        api::{ApiError, RegistryClient},
        domain::VehicleRecord,
        form::{FormMode, Submission},
    };

    use super::*;

    fn record(id: i64, amp: &str) -> VehicleRecord {
        VehicleRecord {
            id,
            amp_number: amp.to_string(),
            driver_name: "Jo".to_string(),
            status: "Active".to_string(),
            position: String::new(),
            cargo: String::new(),
            alert: String::new(),
        }
    }

    fn test_app() -> App {
        // Port 9 is never listening; tasks spawned against it fail fast and
        // the tests that care await the resulting event instead.
        let client = RegistryClient::new("http://127.0.0.1:9").unwrap();
        let (api, events) = ApiHandle::channel(client);
        App::new(api, events, UiOptions::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn refresh_success_replaces_the_cache() {
        let mut app = test_app();
        app.handle_api_event_for_test(ApiEvent::Refreshed(Ok(vec![record(1, "A1")])));
        app.handle_api_event_for_test(ApiEvent::Refreshed(Ok(vec![
            record(2, "A2"),
            record(3, "A3"),
        ])));
        assert_eq!(app.store_for_test().len(), 2);
        assert_eq!(app.store_for_test().records()[0].id, 2);
    }

    #[test]
    fn refresh_failure_leaves_the_cache_untouched() {
        let mut app = test_app();
        app.handle_api_event_for_test(ApiEvent::Refreshed(Ok(vec![record(1, "A1")])));
        app.handle_api_event_for_test(ApiEvent::Refreshed(Err(ApiError::Status(
            "boom".to_string(),
        ))));
        assert_eq!(app.store_for_test().len(), 1);
        assert_eq!(app.status_for_test().severity(), Severity::Error);
        assert_eq!(app.status_for_test().message(), "boom");
    }

    #[test]
    fn list_enter_loads_the_selected_record_into_the_form() {
        let mut app = test_app();
        app.handle_api_event_for_test(ApiEvent::Refreshed(Ok(vec![record(7, "A7")])));
        app.handle_key_for_test(ctrl('l'));
        app.handle_key_for_test(press(KeyCode::Enter));
        assert_eq!(app.form_for_test().mode(), FormMode::Edit(7));
        assert!(app.form_for_test().is_editing());
    }

    #[test]
    fn escape_cancels_an_edit_back_to_an_empty_create_form() {
        let mut app = test_app();
        app.handle_api_event_for_test(ApiEvent::Refreshed(Ok(vec![record(7, "A7")])));
        app.handle_key_for_test(ctrl('l'));
        app.handle_key_for_test(press(KeyCode::Enter));
        app.handle_key_for_test(press(KeyCode::Esc));
        assert_eq!(app.form_for_test().mode(), FormMode::Create);
        assert!(
            app.form_for_test()
                .fields()
                .iter()
                .all(|field| field.value().is_empty())
        );
    }

    #[test]
    fn delete_requires_confirmation_and_escape_dismisses_it() {
        let mut app = test_app();
        app.handle_api_event_for_test(ApiEvent::Refreshed(Ok(vec![record(7, "A7")])));
        app.handle_key_for_test(ctrl('l'));
        app.handle_key_for_test(press(KeyCode::Char('d')));
        assert!(app.confirm_open_for_test());
        app.handle_key_for_test(press(KeyCode::Esc));
        assert!(!app.confirm_open_for_test());
    }

    #[test]
    fn confirming_on_cancel_issues_no_delete() {
        let mut app = test_app();
        app.handle_api_event_for_test(ApiEvent::Refreshed(Ok(vec![record(7, "A7")])));
        app.handle_key_for_test(ctrl('l'));
        app.handle_key_for_test(press(KeyCode::Char('d')));
        // Default selection is "Cancel"; Enter must not issue the request.
        app.handle_key_for_test(press(KeyCode::Enter));
        assert!(!app.confirm_open_for_test());
        assert_eq!(app.status_for_test().message(), super::super::status::READY_STATUS);
    }

    #[tokio::test]
    async fn affirmed_delete_issues_the_request() {
        let mut app = test_app();
        app.handle_api_event_for_test(ApiEvent::Refreshed(Ok(vec![record(7, "A7")])));
        app.handle_key_for_test(ctrl('l'));
        app.handle_key_for_test(press(KeyCode::Char('d')));
        app.handle_key_for_test(press(KeyCode::Down));
        app.handle_key_for_test(press(KeyCode::Enter));
        assert!(!app.confirm_open_for_test());
        assert_eq!(app.status_for_test().message(), "Deleting...");
        let event = tokio::time::timeout(Duration::from_secs(5), app.events_for_test().recv())
            .await
            .expect("delete task should resolve")
            .expect("channel open");
        assert!(matches!(event, ApiEvent::Deleted(Err(_))));
    }

    #[tokio::test]
    async fn successful_update_clears_the_form_and_triggers_a_refresh() {
        let mut app = test_app();
        app.form_for_test().select_for_edit(&record(7, "A7"));
        assert!(app.form_for_test().prepare_submit().is_some());
        app.handle_api_event_for_test(ApiEvent::Submitted {
            kind: MutationKind::Update,
            result: Ok(()),
        });
        assert_eq!(app.form_for_test().mode(), FormMode::Create);
        assert_eq!(app.form_for_test().submission(), &Submission::Success);
        assert_eq!(app.status_for_test().message(), "Vehicle updated!");
        let event = tokio::time::timeout(Duration::from_secs(5), app.events_for_test().recv())
            .await
            .expect("refresh task should resolve")
            .expect("channel open");
        assert!(matches!(event, ApiEvent::Refreshed(_)));
    }

    #[tokio::test]
    async fn failed_delete_surfaces_the_error_and_still_refreshes() {
        let mut app = test_app();
        app.handle_api_event_for_test(ApiEvent::Deleted(Err(ApiError::Status(
            "Vehicle not found".to_string(),
        ))));
        assert_eq!(app.status_for_test().severity(), Severity::Error);
        assert_eq!(app.status_for_test().message(), "Vehicle not found");
        let event = tokio::time::timeout(Duration::from_secs(5), app.events_for_test().recv())
            .await
            .expect("refresh task should resolve")
            .expect("channel open");
        assert!(matches!(event, ApiEvent::Refreshed(_)));
    }

    #[test]
    fn failed_submission_keeps_the_entered_values() {
        let mut app = test_app();
        app.form_for_test().select_for_edit(&record(7, "A7"));
        assert!(app.form_for_test().prepare_submit().is_some());
        app.handle_api_event_for_test(ApiEvent::Submitted {
            kind: MutationKind::Update,
            result: Err(ApiError::Status("amp_number already exists".to_string())),
        });
        assert_eq!(
            app.form_for_test().submission(),
            &Submission::Failed("amp_number already exists".to_string())
        );
        assert_eq!(app.form_for_test().mode(), FormMode::Edit(7));
        assert_eq!(
            app.form_for_test().fields()[0].value(),
            "A7",
            "field values survive a failed submission"
        );
    }
}
