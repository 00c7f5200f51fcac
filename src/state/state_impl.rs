use super::error::StateError;
use super::navigation::{Focus, FocusState};
use super::notifications::Notifications;
use crate::app::SubmissionEventSender;
use crate::config::Hotkeys;
use crate::events::submission::Event as SubmissionEvent;
use crate::form::orchestrator::{self, Prepared, SubmitOutcome};
use crate::form::{
    ContactMethod, ContactMethodChooser, Dropdown, DropdownEvent, DropdownOption, Field,
    FormStore, Urgency,
};
use crate::logger::LogBuffer;
use crate::transport::SubmitError;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use tui_textarea::{Input, TextArea};

const URGENCY_ID: &str = "urgency";
const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(4000);

/// Houses data representative of application state.
///
pub struct State {
    submission_sender: Option<SubmissionEventSender>,
    terminal_size: Rect,
    spinner_index: usize,
    form: FormStore,
    focus: FocusState,
    message_textarea: TextArea<'static>, // Multi-line editor backing the message field
    contact_method: ContactMethodChooser,
    urgency: Dropdown,
    notifications: Notifications,
    live_region: String, // Latest announcement for assistive output
    log_buffer: LogBuffer,
    show_log: bool,
    theme: Theme,
    hotkeys: Hotkeys,
    // Screen areas from the last render, for pointer hit testing
    urgency_trigger_area: Rect,
    urgency_listbox_area: Rect,
}

fn urgency_dropdown() -> Dropdown {
    let options = Urgency::ALL
        .iter()
        .map(|u| DropdownOption::new(u.value(), u.label()))
        .collect();
    Dropdown::new(
        URGENCY_ID,
        "Urgency",
        options,
        Some(Urgency::default().value().to_string()),
    )
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let form = FormStore::new();
        State {
            submission_sender: None,
            terminal_size: Rect::default(),
            spinner_index: 0,
            contact_method: ContactMethodChooser::new(form.data().contact_method),
            form,
            focus: FocusState::default(),
            message_textarea: TextArea::default(),
            urgency: urgency_dropdown(),
            notifications: Notifications::new(DEFAULT_NOTIFICATION_TTL),
            live_region: String::new(),
            log_buffer: LogBuffer::default(),
            show_log: false,
            theme: Theme::default(),
            hotkeys: Hotkeys::default(),
            urgency_trigger_area: Rect::default(),
            urgency_listbox_area: Rect::default(),
        }
    }
}

impl State {
    pub fn new(
        submission_sender: SubmissionEventSender,
        log_buffer: LogBuffer,
        theme: Theme,
        hotkeys: Hotkeys,
        notification_ttl: Duration,
    ) -> Self {
        State {
            submission_sender: Some(submission_sender),
            log_buffer,
            theme,
            hotkeys,
            notifications: Notifications::new(notification_ttl),
            ..State::default()
        }
    }

    /// Hand an event to the submission worker.
    ///
    pub fn dispatch(&self, event: SubmissionEvent) -> Result<(), StateError> {
        debug!("Dispatching submission event '{:?}'...", event);
        self.submission_sender
            .as_ref()
            .ok_or(StateError::SubmissionChannelNotSet)?
            .send(event)
            .map_err(|_| StateError::SubmissionChannelClosed)
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Advance the spinner and expire old notifications.
    ///
    pub fn tick(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self.notifications.expire(Instant::now());
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn form(&self) -> &FormStore {
        &self.form
    }

    pub fn current_focus(&self) -> Focus {
        self.focus.current()
    }

    pub fn focus_next(&mut self) -> &mut Self {
        let next = self.focus.current().next();
        self.move_focus(next)
    }

    pub fn focus_previous(&mut self) -> &mut Self {
        let previous = self.focus.current().previous();
        self.move_focus(previous)
    }

    /// Move focus, dismissing the urgency listbox if focus leaves it.
    ///
    pub fn move_focus(&mut self, focus: Focus) -> &mut Self {
        if focus != Focus::Urgency && self.urgency.is_open() {
            self.urgency_event(DropdownEvent::ClickOutside);
        }
        self.focus.set(focus);
        self
    }

    /// Type a character into the focused text field.
    ///
    pub fn input_char(&mut self, c: char) -> &mut Self {
        match self.focus.current() {
            Focus::Field(Field::Message) => {
                self.message_textarea.insert_char(c);
                self.sync_message();
            }
            Focus::Field(field) => {
                let mut value = self.form.data().get(field).to_string();
                value.push(c);
                self.form.set_field(field, value);
            }
            _ => {}
        }
        self
    }

    /// Delete the last character of the focused text field.
    ///
    pub fn backspace(&mut self) -> &mut Self {
        match self.focus.current() {
            Focus::Field(Field::Message) => {
                if self.message_textarea.delete_char() {
                    self.sync_message();
                }
            }
            Focus::Field(field) => {
                let mut value = self.form.data().get(field).to_string();
                if value.pop().is_some() {
                    self.form.set_field(field, value);
                }
            }
            _ => {}
        }
        self
    }

    /// Forward editing input (cursor movement, newlines) to the message editor.
    ///
    pub fn input_message(&mut self, input: impl Into<Input>) -> &mut Self {
        if self.message_textarea.input(input) {
            self.sync_message();
        }
        self
    }

    fn sync_message(&mut self) {
        let message = self.message_textarea.lines().join("\n");
        if message != self.form.data().message {
            self.form.set_field(Field::Message, message);
        }
    }

    pub fn message_textarea(&mut self) -> &mut TextArea<'static> {
        &mut self.message_textarea
    }

    pub fn toggle_newsletter(&mut self) -> &mut Self {
        let newsletter = !self.form.data().newsletter;
        self.form.set_newsletter(newsletter);
        self.announce(if newsletter {
            "Newsletter subscription on"
        } else {
            "Newsletter subscription off"
        });
        self
    }

    pub fn next_contact_method(&mut self) -> &mut Self {
        let method = self.contact_method.next();
        self.commit_contact_method(method)
    }

    pub fn previous_contact_method(&mut self) -> &mut Self {
        let method = self.contact_method.previous();
        self.commit_contact_method(method)
    }

    pub fn select_contact_method(&mut self, index: usize) -> &mut Self {
        let method = self.contact_method.select(index);
        self.commit_contact_method(method)
    }

    fn commit_contact_method(&mut self, method: ContactMethod) -> &mut Self {
        self.form.set_contact_method(method);
        let announcement = self.contact_method.announcement().to_string();
        self.announce(announcement)
    }

    pub fn contact_method(&self) -> &ContactMethodChooser {
        &self.contact_method
    }

    /// Feed an event to the urgency dropdown and commit any selection.
    /// Every state change is announced.
    ///
    pub fn urgency_event(&mut self, event: DropdownEvent) -> &mut Self {
        let before = self.urgency.state().clone();
        if let Some(value) = self.urgency.handle(event, &mut self.focus) {
            match Urgency::from_value(&value) {
                Some(urgency) => {
                    self.form.set_urgency(urgency);
                }
                None => warn!("Ignoring unknown urgency value '{}'.", value),
            }
        }
        if self.urgency.state() != &before {
            let announcement = self.urgency.announcement().to_string();
            self.announce(announcement);
        }
        self
    }

    pub fn urgency(&self) -> &Dropdown {
        &self.urgency
    }

    pub fn urgency_listbox_state(&mut self) -> &mut ListState {
        self.focus.listbox()
    }

    /// Remember where the urgency widget was drawn.
    ///
    pub fn set_urgency_areas(&mut self, trigger: Rect, listbox: Rect) -> &mut Self {
        self.urgency_trigger_area = trigger;
        self.urgency_listbox_area = listbox;
        self
    }

    /// Route a left click. Outside clicks only reach the dropdown while its
    /// listbox is open.
    ///
    pub fn click(&mut self, column: u16, row: u16) -> &mut Self {
        let on_trigger = contains(self.urgency_trigger_area, column, row);
        if self.urgency.listens_for_outside_clicks() {
            let listbox = self.urgency_listbox_area;
            if contains(listbox, column, row) {
                // Rows inside the border map onto the scrolled list.
                let offset = self.focus.listbox().offset();
                if row > listbox.y && row + 1 < listbox.y + listbox.height {
                    let index = (row - listbox.y - 1) as usize + offset;
                    self.urgency_event(DropdownEvent::Select(index));
                }
            } else if on_trigger {
                self.urgency_event(DropdownEvent::Toggle);
            } else {
                self.urgency_event(DropdownEvent::ClickOutside);
            }
        } else if on_trigger {
            self.focus.set(Focus::Urgency);
            self.urgency_event(DropdownEvent::Toggle);
        }
        self
    }

    /// Start a submission. Returns the outcome when the attempt ended
    /// immediately, or `None` while the payload is with the worker.
    ///
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        if self.urgency.is_open() {
            self.urgency_event(DropdownEvent::ClickOutside);
        }
        let prepared = orchestrator::prepare(
            &mut self.form,
            &mut self.notifications,
            &mut self.focus,
        );
        let outcome = match prepared {
            Prepared::Done(outcome) => Some(outcome),
            Prepared::Ready(payload) => match self.dispatch(SubmissionEvent::Submit { payload }) {
                Ok(()) => None,
                Err(e) => {
                    error!("Failed to dispatch submission: {}", e);
                    Some(self.complete_submission(Err(SubmitError::WorkerUnavailable)))
                }
            },
        };
        self.announce_latest_notification();
        outcome
    }

    /// Apply the worker's result.
    ///
    pub fn complete_submission(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        let outcome = orchestrator::complete(
            &mut self.form,
            result,
            &mut self.notifications,
            &mut self.focus,
        );
        if outcome == SubmitOutcome::Sent {
            self.sync_widgets();
        }
        self.announce_latest_notification();
        outcome
    }

    /// Bring widget-local state back in line with the store after a reset.
    ///
    fn sync_widgets(&mut self) {
        let data = self.form.data();
        self.message_textarea = TextArea::from(data.message.lines().map(String::from));
        self.contact_method.sync(data.contact_method);
        let urgency = data.urgency.value().to_string();
        self.urgency.set_value(Some(urgency));
    }

    pub fn is_submitting(&self) -> bool {
        self.form.is_submitting()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    fn announce_latest_notification(&mut self) {
        if let Some(message) = self.notifications.latest().map(|n| n.message.clone()) {
            self.announce(message);
        }
    }

    pub fn announce(&mut self, message: impl Into<String>) -> &mut Self {
        self.live_region = message.into();
        self
    }

    pub fn live_region(&self) -> &str {
        &self.live_region
    }

    pub fn log_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_hotkeys(&self) -> &Hotkeys {
        &self.hotkeys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::orchestrator::{SUBMITTING_MESSAGE, SUCCESS_MESSAGE};
    use crate::form::{DropdownKey, NotificationKind};
    use std::sync::mpsc;

    fn type_str(state: &mut State, text: &str) {
        for c in text.chars() {
            state.input_char(c);
        }
    }

    fn fill_valid(state: &mut State) {
        for (field, value) in [
            (Field::FirstName, "Ada"),
            (Field::LastName, "Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::Subject, "Engines"),
            (Field::Message, "The analytical engine weaves patterns."),
        ] {
            state.move_focus(Focus::Field(field));
            type_str(state, value);
        }
    }

    fn connected_state() -> (State, mpsc::Receiver<SubmissionEvent>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(
            tx,
            LogBuffer::default(),
            Theme::default(),
            Hotkeys::default(),
            Duration::from_secs(4),
        );
        (state, rx)
    }

    #[test]
    fn test_input_char_updates_focused_field() {
        let mut state = State::default();
        type_str(&mut state, "Ada");
        assert_eq!(state.form().data().first_name, "Ada");
        state.backspace();
        assert_eq!(state.form().data().first_name, "Ad");
    }

    #[test]
    fn test_message_goes_through_textarea() {
        let mut state = State::default();
        state.move_focus(Focus::Field(Field::Message));
        type_str(&mut state, "Hello");
        assert_eq!(state.form().data().message, "Hello");
        state.message_textarea().insert_newline();
        state.input_char('x');
        assert_eq!(state.form().data().message, "Hello\nx");
    }

    #[test]
    fn test_editing_clears_inline_error() {
        let mut state = State::default();
        assert_eq!(state.submit(), Some(SubmitOutcome::Invalid));
        assert!(state.form().errors().contains(Field::FirstName));
        assert_eq!(state.current_focus(), Focus::Field(Field::FirstName));
        state.input_char('A');
        assert!(!state.form().errors().contains(Field::FirstName));
        assert!(state.form().errors().contains(Field::LastName));
    }

    #[test]
    fn test_invalid_submit_announces_summary() {
        let mut state = State::default();
        state.submit();
        assert_eq!(state.notifications().items().len(), 1);
        assert!(state
            .live_region()
            .starts_with("Please fix the following errors: First name is required"));
    }

    #[test]
    fn test_valid_submit_dispatches_payload() {
        let (mut state, rx) = connected_state();
        fill_valid(&mut state);
        assert_eq!(state.submit(), None);
        assert!(state.is_submitting());
        assert_eq!(state.live_region(), SUBMITTING_MESSAGE);
        match rx.try_recv() {
            Ok(SubmissionEvent::Submit { payload }) => assert_eq!(payload.first_name, "Ada"),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(state.submit(), Some(SubmitOutcome::AlreadySubmitting));
    }

    #[test]
    fn test_successful_completion_resets_widgets() {
        let (mut state, _rx) = connected_state();
        fill_valid(&mut state);
        state.move_focus(Focus::ContactMethod);
        state.next_contact_method();
        state.move_focus(Focus::Urgency);
        state.urgency_event(DropdownEvent::Toggle);
        state.urgency_event(DropdownEvent::Key(DropdownKey::End));
        state.urgency_event(DropdownEvent::Key(DropdownKey::Enter));
        assert_eq!(state.form().data().urgency, Urgency::Urgent);
        assert_eq!(state.form().data().contact_method, ContactMethod::Phone);

        state.submit();
        assert_eq!(state.complete_submission(Ok(())), SubmitOutcome::Sent);

        assert_eq!(state.form(), &FormStore::default());
        assert_eq!(state.urgency().value(), Some("medium"));
        assert_eq!(state.contact_method().selected(), ContactMethod::Email);
        assert!(state.message_textarea().lines().iter().all(|l| l.is_empty()));
        assert_eq!(state.current_focus(), Focus::Field(Field::FirstName));
        assert_eq!(state.live_region(), SUCCESS_MESSAGE);
        assert_eq!(
            state.notifications().latest().map(|n| n.kind),
            Some(NotificationKind::Success)
        );
    }

    #[test]
    fn test_submit_without_worker_fails_cleanly() {
        let mut state = State::default();
        fill_valid(&mut state);
        let outcome = state.submit();
        assert_eq!(
            outcome,
            Some(SubmitOutcome::Failed(SubmitError::WorkerUnavailable))
        );
        assert!(!state.is_submitting());
        assert_eq!(state.form().data().first_name, "Ada");
    }

    #[test]
    fn test_urgency_keyboard_selection_announces() {
        let mut state = State::default();
        state.move_focus(Focus::Urgency);
        state.urgency_event(DropdownEvent::Key(DropdownKey::ArrowDown));
        assert_eq!(
            state.live_region(),
            "4 options available, use arrow keys to navigate."
        );
        assert_eq!(state.urgency_listbox_state().selected(), Some(1));
        state.urgency_event(DropdownEvent::Key(DropdownKey::ArrowDown));
        assert_eq!(state.live_region(), "High");
        assert_eq!(state.urgency_listbox_state().selected(), Some(2));
        state.urgency_event(DropdownEvent::Key(DropdownKey::Escape));
        assert_eq!(state.live_region(), "Selection cancelled.");
        assert_eq!(state.form().data().urgency, Urgency::Medium);
    }

    #[test]
    fn test_leaving_urgency_closes_listbox() {
        let mut state = State::default();
        state.move_focus(Focus::Urgency);
        state.urgency_event(DropdownEvent::Toggle);
        assert!(state.urgency().is_open());
        state.focus_next();
        assert!(!state.urgency().is_open());
        assert_eq!(state.current_focus(), Focus::Submit);
        assert_eq!(state.live_region(), "Selection cancelled.");
    }

    #[test]
    fn test_click_routing() {
        let mut state = State::default();
        state.set_urgency_areas(Rect::new(10, 10, 20, 3), Rect::new(10, 13, 20, 6));

        // Outside clicks are ignored while closed.
        state.click(0, 0);
        assert!(!state.urgency().is_open());

        state.click(12, 11);
        assert!(state.urgency().is_open());
        assert_eq!(state.current_focus(), Focus::Urgency);

        // Second row inside the listbox border is the first option.
        state.click(12, 14);
        assert!(!state.urgency().is_open());
        assert_eq!(state.form().data().urgency, Urgency::Low);

        state.click(12, 11);
        state.urgency_event(DropdownEvent::Key(DropdownKey::ArrowDown));
        assert_eq!(state.live_region(), "Medium");
        state.click(0, 0);
        assert!(!state.urgency().is_open());
        assert_eq!(state.live_region(), "Selection cancelled.");
        assert_eq!(state.form().data().urgency, Urgency::Low);
    }

    #[test]
    fn test_newsletter_and_contact_method_announce() {
        let mut state = State::default();
        state.toggle_newsletter();
        assert!(state.form().data().newsletter);
        assert_eq!(state.live_region(), "Newsletter subscription on");
        state.previous_contact_method();
        assert_eq!(state.form().data().contact_method, ContactMethod::Either);
        assert_eq!(state.live_region(), "Selected: Either");
        state.select_contact_method(1);
        assert_eq!(state.form().data().contact_method, ContactMethod::Phone);
    }
}
