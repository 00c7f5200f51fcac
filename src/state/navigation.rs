//! Navigation-related state types.
//!
//! This module contains the focus ring of the form and the focus controller
//! the widgets use to move focus and keep the focused option visible.

use crate::form::{Field, FocusController, FocusTarget};
use ratatui::widgets::ListState;

/// Specifying the focusable elements in tab order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Field(Field),
    Newsletter,
    ContactMethod,
    Urgency,
    Submit,
}

impl Focus {
    pub const ORDER: [Focus; 10] = [
        Focus::Field(Field::FirstName),
        Focus::Field(Field::LastName),
        Focus::Field(Field::Email),
        Focus::Field(Field::Phone),
        Focus::Field(Field::Subject),
        Focus::Field(Field::Message),
        Focus::Newsletter,
        Focus::ContactMethod,
        Focus::Urgency,
        Focus::Submit,
    ];

    fn position(&self) -> usize {
        Focus::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Focus {
        Focus::ORDER[(self.position() + 1) % Focus::ORDER.len()]
    }

    pub fn previous(&self) -> Focus {
        let len = Focus::ORDER.len();
        Focus::ORDER[(self.position() + len - 1) % len]
    }
}

/// Tracks the focused element and the urgency listbox scroll position.
///
#[derive(Debug)]
pub struct FocusState {
    current: Focus,
    listbox: ListState,
}

impl Default for FocusState {
    fn default() -> Self {
        FocusState {
            current: Focus::Field(Field::FirstName),
            listbox: ListState::default(),
        }
    }
}

impl FocusState {
    pub fn current(&self) -> Focus {
        self.current
    }

    pub fn set(&mut self, focus: Focus) -> &mut Self {
        self.current = focus;
        self
    }

    pub fn listbox(&mut self) -> &mut ListState {
        &mut self.listbox
    }

    pub fn listbox_selected(&self) -> Option<usize> {
        self.listbox.selected()
    }
}

impl FocusController for FocusState {
    fn focus(&mut self, target: FocusTarget) {
        self.current = match target {
            FocusTarget::Field(field) => Focus::Field(field),
            FocusTarget::DropdownTrigger(_) | FocusTarget::DropdownOption { .. } => Focus::Urgency,
        };
    }

    fn scroll_into_view(&mut self, target: FocusTarget) {
        // The list widget scrolls its viewport to the selected row on render.
        if let FocusTarget::DropdownOption { index, .. } = target {
            self.listbox.select(Some(index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(Focus::Submit.next(), Focus::Field(Field::FirstName));
        assert_eq!(Focus::Field(Field::FirstName).previous(), Focus::Submit);
        assert_eq!(Focus::Field(Field::Message).next(), Focus::Newsletter);
    }

    #[test]
    fn test_focus_controller() {
        let mut state = FocusState::default();
        state.focus(FocusTarget::Field(Field::Email));
        assert_eq!(state.current(), Focus::Field(Field::Email));
        state.focus(FocusTarget::DropdownTrigger("urgency".to_string()));
        assert_eq!(state.current(), Focus::Urgency);
    }

    #[test]
    fn test_scroll_into_view_selects_row() {
        let mut state = FocusState::default();
        state.scroll_into_view(FocusTarget::DropdownOption {
            id: "urgency".to_string(),
            index: 3,
        });
        assert_eq!(state.listbox_selected(), Some(3));
        state.scroll_into_view(FocusTarget::Field(Field::Email));
        assert_eq!(state.listbox_selected(), Some(3));
    }
}
