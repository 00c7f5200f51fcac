use crate::config::HotkeyAction;
use crate::form::{DropdownEvent, DropdownKey, Field};
use crate::state::{Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match poll_next(tick_rate) {
                    Ok(Some(event)) => {
                        if tx_clone.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => (),
                    Err(e) => error!("Failed to read terminal event: {}", e),
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        let event = self.rx.recv()?;
        Ok(handle(event, state))
    }
}

/// Wait up to the tick rate for a key press or mouse event.
///
fn poll_next(timeout: Duration) -> std::io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        _ => None,
    })
}

/// Apply a terminal event to state. Returns false if exit was requested.
///
pub fn handle(event: Event, state: &mut State) -> bool {
    match event {
        Event::Key(key) => return handle_key(key, state),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            state.click(column, row);
        }
        Event::Mouse(_) => (),
        Event::Tick => {
            state.tick();
        }
    }
    true
}

fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if let Some(action) = state.get_hotkeys().action_for(&key) {
        debug!("Processing hotkey '{:?}'...", action);
        match action {
            HotkeyAction::Quit => return false,
            HotkeyAction::Submit => {
                state.submit();
            }
            HotkeyAction::ToggleLog => {
                state.toggle_log();
            }
            HotkeyAction::NextField => {
                state.focus_next();
            }
            HotkeyAction::PrevField => {
                state.focus_previous();
            }
        }
        return true;
    }

    match state.current_focus() {
        Focus::Field(Field::Message) => {
            state.input_message(key);
        }
        Focus::Field(_) => match key {
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                ..
            } if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                state.input_char(c);
            }
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => {
                state.backspace();
            }
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => {
                state.focus_next();
            }
            _ => (),
        },
        Focus::Newsletter => {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                state.toggle_newsletter();
            }
        }
        Focus::ContactMethod => match key.code {
            KeyCode::Right | KeyCode::Down => {
                state.next_contact_method();
            }
            KeyCode::Left | KeyCode::Up => {
                state.previous_contact_method();
            }
            _ => (),
        },
        Focus::Urgency => {
            if let Some(key) = dropdown_key(key.code) {
                state.urgency_event(DropdownEvent::Key(key));
            }
        }
        Focus::Submit => {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                state.submit();
            }
        }
    }
    true
}

/// Map a terminal key onto the keys the dropdown understands.
///
fn dropdown_key(code: KeyCode) -> Option<DropdownKey> {
    match code {
        KeyCode::Down => Some(DropdownKey::ArrowDown),
        KeyCode::Up => Some(DropdownKey::ArrowUp),
        KeyCode::Home => Some(DropdownKey::Home),
        KeyCode::End => Some(DropdownKey::End),
        KeyCode::Esc => Some(DropdownKey::Escape),
        KeyCode::Enter => Some(DropdownKey::Enter),
        KeyCode::Char(' ') => Some(DropdownKey::Space),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{ContactMethod, Urgency};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_str(state: &mut State, text: &str) {
        for c in text.chars() {
            assert!(handle(press(KeyCode::Char(c)), state));
        }
    }

    #[test]
    fn test_quit_hotkey_requests_exit() {
        let mut state = State::default();
        assert!(!handle(ctrl('c'), &mut state));
    }

    #[test]
    fn test_typing_and_tabbing() {
        let mut state = State::default();
        type_str(&mut state, "Ada");
        handle(press(KeyCode::Tab), &mut state);
        type_str(&mut state, "Lovelace");
        handle(press(KeyCode::Backspace), &mut state);
        assert_eq!(state.form().data().first_name, "Ada");
        assert_eq!(state.form().data().last_name, "Lovelac");

        handle(
            Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            &mut state,
        );
        assert_eq!(state.current_focus(), Focus::Field(Field::FirstName));
    }

    #[test]
    fn test_shifted_characters_are_typed() {
        let mut state = State::default();
        handle(
            Event::Key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            &mut state,
        );
        assert_eq!(state.form().data().first_name, "A");
    }

    #[test]
    fn test_enter_in_message_inserts_newline() {
        let mut state = State::default();
        state.move_focus(Focus::Field(Field::Message));
        type_str(&mut state, "one");
        handle(press(KeyCode::Enter), &mut state);
        type_str(&mut state, "two");
        assert_eq!(state.form().data().message, "one\ntwo");
        assert_eq!(state.current_focus(), Focus::Field(Field::Message));
    }

    #[test]
    fn test_enter_in_single_line_field_advances() {
        let mut state = State::default();
        handle(press(KeyCode::Enter), &mut state);
        assert_eq!(state.current_focus(), Focus::Field(Field::LastName));
    }

    #[test]
    fn test_widget_keys() {
        let mut state = State::default();
        state.move_focus(Focus::Newsletter);
        handle(press(KeyCode::Char(' ')), &mut state);
        assert!(state.form().data().newsletter);

        state.move_focus(Focus::ContactMethod);
        handle(press(KeyCode::Right), &mut state);
        assert_eq!(state.form().data().contact_method, ContactMethod::Phone);

        state.move_focus(Focus::Urgency);
        handle(press(KeyCode::Enter), &mut state);
        assert!(state.urgency().is_open());
        handle(press(KeyCode::Home), &mut state);
        handle(press(KeyCode::Char(' ')), &mut state);
        assert!(!state.urgency().is_open());
        assert_eq!(state.form().data().urgency, Urgency::Low);
    }

    #[test]
    fn test_submit_button_validates() {
        let mut state = State::default();
        state.move_focus(Focus::Submit);
        handle(press(KeyCode::Enter), &mut state);
        assert_eq!(state.current_focus(), Focus::Field(Field::FirstName));
        assert!(!state.form().errors().is_empty());
    }

    #[test]
    fn test_toggle_log_hotkey() {
        let mut state = State::default();
        handle(ctrl('l'), &mut state);
        assert!(state.is_log_visible());
    }

    #[test]
    fn test_mouse_click_opens_urgency() {
        let mut state = State::default();
        state.set_urgency_areas(
            ratatui::layout::Rect::new(0, 20, 30, 3),
            ratatui::layout::Rect::new(0, 23, 30, 6),
        );
        handle(
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 2,
                row: 21,
                modifiers: KeyModifiers::NONE,
            }),
            &mut state,
        );
        assert!(state.urgency().is_open());
        assert_eq!(state.current_focus(), Focus::Urgency);
    }
}
