//! Application state and core logic

use crate::platform;
use crate::state::{ContactForm, Focus, SubmitBlocked};
use crate::submit::{EntrySubmitter, PendingSubmission};
use crate::ui::layout::FormLayout;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Contact form state
    pub form: ContactForm,
    /// Endpoint the entries are posted to
    submitter: Arc<dyn EntrySubmitter>,
    /// Request in flight, if any
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(submitter: Arc<dyn EntrySubmitter>) -> Self {
        Self {
            form: ContactForm::new(),
            submitter,
            pending: None,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        if self.pending.is_some() {
            tracing::warn!("quitting with a submission still in flight");
        }
        self.quit = true;
    }

    /// Whether something on screen is moving and needs fast redraws
    pub fn is_animating(&self) -> bool {
        let now = Instant::now();
        let underline_moving = self.form.underline.is_some_and(|u| !u.is_settled(now));
        let banner_moving = self
            .form
            .status
            .as_ref()
            .is_some_and(|b| b.slide_offset(now, 1) > 0);
        underline_moving || banner_moving || self.form.submitting
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = platform::is_action(key.modifiers);

        match key.code {
            KeyCode::Char('n') if action => self.form = self.form.add_entry(),
            KeyCode::Char('d') if action => {
                if let Some(index) = self.form.focus.entry_index() {
                    self.form = self.form.remove_entry(index);
                }
            }
            KeyCode::Char('s') if action => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.form = self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form = self.form.focus_prev(),
            KeyCode::Esc => self.form = self.form.blur(),
            KeyCode::Enter => self.activate(),
            KeyCode::Char(' ') if !matches!(self.form.focus, Focus::Field { .. }) => {
                self.activate()
            }
            KeyCode::Char(c) if !action => self.form = self.form.input_char(c),
            KeyCode::Backspace => self.form = self.form.backspace(),
            _ => {}
        }
    }

    /// Trigger whatever the focused control does
    fn activate(&mut self) {
        match self.form.focus {
            // Enter inside an input submits the form
            Focus::Field { .. } | Focus::SubmitButton => self.submit(),
            Focus::AddButton => self.form = self.form.add_entry(),
            Focus::Remove(index) => self.form = self.form.remove_entry(index),
            Focus::None => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = self.layout();
                match layout.hit_test(mouse.column, mouse.row, &self.form) {
                    Some(Focus::AddButton) => self.form = self.form.add_entry(),
                    Some(Focus::SubmitButton) => {
                        if self.form.submit_enabled() {
                            self.submit();
                        }
                    }
                    Some(Focus::Remove(index)) => self.form = self.form.remove_entry(index),
                    Some(Focus::Field { index, field }) => {
                        self.form = self.form.focus_field(index, field)
                    }
                    Some(Focus::None) => {}
                    None => self.form = self.form.blur(),
                }
            }
            MouseEventKind::ScrollDown => self.form = self.form.focus_next(),
            MouseEventKind::ScrollUp => self.form = self.form.focus_prev(),
            _ => {}
        }
    }

    /// Layout for the current terminal size
    fn layout(&self) -> FormLayout {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        FormLayout::compute(Rect::new(0, 0, width, height), self.form.entries().len())
    }

    /// Start a submission unless one is running or an input is empty
    fn submit(&mut self) {
        let (next, payload) = self.form.begin_submit();
        self.form = next;
        match payload {
            Ok(entries) => {
                tracing::info!(entries = entries.len(), "submitting entries");
                self.pending = Some(PendingSubmission::spawn(self.submitter.clone(), entries));
            }
            Err(SubmitBlocked::InFlight) => {
                tracing::debug!("submit ignored while a submission is in flight");
            }
            Err(blocked @ SubmitBlocked::Invalid { .. }) => {
                tracing::debug!(reason = %blocked, "submit blocked by required field");
            }
        }
    }

    /// Apply the outcome of the in-flight submission once it has settled
    pub fn poll_submission(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        if let Some(outcome) = pending.poll() {
            self.pending = None;
            self.form = self.form.finish_submit(&outcome);
        }
    }

    /// Wait for the in-flight submission and apply its outcome
    #[cfg(test)]
    pub async fn settle_submission(&mut self) {
        if let Some(pending) = self.pending.take() {
            let outcome = pending.wait().await;
            self.form = self.form.finish_submit(&outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Entry, EntryField, FormState};
    use crate::submit::{MockEntrySubmitter, SubmitError};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(mock: MockEntrySubmitter) -> App {
        let mut app = App::new(Arc::new(mock));
        app.terminal_size = Some((30, 80));
        app
    }

    fn alice_app(mock: MockEntrySubmitter) -> App {
        let mut app = app_with(mock);
        type_text(&mut app, "Alice");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "a@x.com");
        app
    }

    fn rejected() -> SubmitError {
        SubmitError::Rejected {
            endpoint: "http://test/users".to_string(),
            status: 500,
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_inputs() {
            let app = alice_app(MockEntrySubmitter::new());
            assert_eq!(app.form.entries(), &[Entry::new("Alice", "a@x.com")]);
        }

        #[test]
        fn test_ctrl_n_adds_entry() {
            let mut app = app_with(MockEntrySubmitter::new());
            app.handle_key(ctrl('n'));
            app.handle_key(ctrl('n'));
            assert_eq!(app.form.entries().len(), 3);
            assert_eq!(app.form.active_entry(), Some(2));
        }

        #[test]
        fn test_ctrl_d_removes_focused_entry() {
            let mut app = alice_app(MockEntrySubmitter::new());
            app.handle_key(ctrl('n'));
            type_text(&mut app, "Bob");
            app.form = app.form.focus_field(0, EntryField::Name);
            app.handle_key(ctrl('d'));
            assert_eq!(app.form.entries(), &[Entry::new("Bob", "")]);
        }

        #[test]
        fn test_ctrl_d_on_single_entry_is_noop() {
            let mut app = alice_app(MockEntrySubmitter::new());
            app.handle_key(ctrl('d'));
            assert_eq!(app.form.entries(), &[Entry::new("Alice", "a@x.com")]);
        }

        #[test]
        fn test_enter_on_remove_control() {
            let mut app = alice_app(MockEntrySubmitter::new());
            app.handle_key(ctrl('n'));
            app.form = app.form.focus_field(0, EntryField::Email).focus_next();
            assert_eq!(app.form.focus, Focus::Remove(0));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.form.entries(), &[Entry::default()]);
        }

        #[test]
        fn test_space_on_add_button_adds() {
            let mut app = app_with(MockEntrySubmitter::new());
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.form.focus, Focus::AddButton);
            app.handle_key(key(KeyCode::Char(' ')));
            assert_eq!(app.form.entries().len(), 2);
        }

        #[test]
        fn test_space_in_input_is_typed() {
            let mut app = app_with(MockEntrySubmitter::new());
            type_text(&mut app, "Ada L");
            assert_eq!(app.form.entries()[0].name, "Ada L");
        }

        #[test]
        fn test_esc_blurs() {
            let mut app = app_with(MockEntrySubmitter::new());
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.form.active_entry(), None);
        }
    }

    mod mouse {
        use super::*;
        use pretty_assertions::assert_eq;

        fn click(column: u16, row: u16) -> MouseEvent {
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }
        }

        #[test]
        fn test_click_add_button() {
            let mut app = app_with(MockEntrySubmitter::new());
            let button = app.layout().add_button;
            app.handle_mouse(click(button.x + 2, button.y + 1));
            assert_eq!(app.form.entries().len(), 2);
        }

        #[test]
        fn test_click_email_input_focuses_it() {
            let mut app = app_with(MockEntrySubmitter::new());
            let entry = app.layout().entry_area(0);
            app.handle_mouse(click(entry.x + 3, entry.y + 2));
            assert_eq!(
                app.form.focus,
                Focus::Field {
                    index: 0,
                    field: EntryField::Email
                }
            );
        }

        #[test]
        fn test_click_outside_blurs() {
            let mut app = app_with(MockEntrySubmitter::new());
            app.handle_mouse(click(0, 0));
            assert_eq!(app.form.active_entry(), None);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_resets_form() {
            let mut mock = MockEntrySubmitter::new();
            mock.expect_submit()
                .withf(|entries| entries.len() == 1 && entries[0].name == "Alice")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = alice_app(mock);

            app.handle_key(key(KeyCode::Enter));
            assert!(app.form.submitting);
            assert_eq!(app.form.submit_label(), "Submitting...");

            app.settle_submission().await;
            assert_eq!(app.form.form, FormState::new());
            assert!(app.form.status.as_ref().is_some_and(|s| s.is_success()));
            assert!(!app.form.submitting);
        }

        #[tokio::test]
        async fn test_rejection_keeps_entries() {
            let mut mock = MockEntrySubmitter::new();
            mock.expect_submit().times(1).returning(|_| Err(rejected()));
            let mut app = alice_app(mock);

            app.handle_key(ctrl('s'));
            app.settle_submission().await;

            assert_eq!(app.form.entries(), &[Entry::new("Alice", "a@x.com")]);
            assert!(app.form.status.as_ref().is_some_and(|s| !s.is_success()));
            assert!(!app.form.submitting);
        }

        #[tokio::test]
        async fn test_empty_input_never_reaches_submitter() {
            let mut mock = MockEntrySubmitter::new();
            mock.expect_submit().never();
            let mut app = app_with(mock);
            type_text(&mut app, "Alice");

            app.handle_key(key(KeyCode::Enter));

            assert!(!app.form.submitting);
            assert_eq!(app.form.validation, Some((0, EntryField::Email)));
            assert!(app.pending.is_none());
        }

        #[tokio::test]
        async fn test_second_submit_while_in_flight_is_ignored() {
            let mut mock = MockEntrySubmitter::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = alice_app(mock);

            app.handle_key(ctrl('s'));
            app.handle_key(ctrl('s'));
            assert!(app.form.submitting);

            app.settle_submission().await;
            assert!(!app.form.submitting);
        }

        #[tokio::test]
        async fn test_poll_applies_outcome_once_settled() {
            let mut mock = MockEntrySubmitter::new();
            mock.expect_submit().returning(|_| Err(rejected()));
            let mut app = alice_app(mock);

            app.handle_key(ctrl('s'));
            for _ in 0..100 {
                app.poll_submission();
                if !app.form.submitting {
                    break;
                }
                tokio::task::yield_now().await;
            }

            assert!(!app.form.submitting);
            assert!(app.pending.is_none());
            assert!(app.form.status.is_some());
        }

        #[test]
        fn test_quit_flag() {
            let mut app = app_with(MockEntrySubmitter::new());
            assert!(!app.should_quit());
            app.request_quit();
            assert!(app.should_quit());
        }
    }
}
