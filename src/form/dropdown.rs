//! Accessible dropdown (combobox).
//!
//! The widget is modelled as a pure transition function over
//! [`DropdownState`]. A transition yields the next state plus the side
//! effects the host must perform (moving focus back to the trigger, scrolling
//! the focused option into view, committing a value). [`Dropdown`] wraps the
//! state for a single instance and forwards those effects to an injected
//! [`FocusController`].
//!
//! Every change that opens, closes or moves the focused option also updates
//! the announcement text read out through the live region.

use super::focus::{FocusController, FocusTarget};
use log::*;

/// Single selectable entry.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        DropdownOption {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Transient state of one dropdown instance.
///
/// `focused_index` is only meaningful while open; closing leaves it as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub is_open: bool,
    pub focused_index: Option<usize>,
    pub announcement: String,
}

/// Specifying keys the listbox reacts to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKey {
    ArrowDown,
    ArrowUp,
    Home,
    End,
    Escape,
    Enter,
    Space,
}

/// Specifying the inputs of the state machine.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Trigger activated (click or keyboard on the closed trigger).
    Toggle,
    /// Option chosen directly, e.g. by clicking it.
    Select(usize),
    /// Pointer interaction outside both the trigger and the listbox.
    ClickOutside,
    Key(DropdownKey),
}

/// Side effects requested by a transition.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FocusTrigger,
    ScrollIntoView(usize),
    Commit(String),
}

/// Result of feeding one event to the state machine.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DropdownState,
    pub effects: Vec<Effect>,
}

/// Announcement used when the listbox opens.
///
pub fn options_available(count: usize) -> String {
    format!("{} options available, use arrow keys to navigate.", count)
}

pub const SELECTION_CANCELLED: &str = "Selection cancelled.";

/// Compute the next state for an event.
///
/// Out-of-range indices are clamped and keys that make no sense in the
/// current state leave it untouched.
pub fn transition(
    state: &DropdownState,
    options: &[DropdownOption],
    selected: Option<&str>,
    event: DropdownEvent,
) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();
    let last = options.len().checked_sub(1);

    if !state.is_open {
        match event {
            DropdownEvent::Toggle
            | DropdownEvent::Key(DropdownKey::ArrowDown)
            | DropdownEvent::Key(DropdownKey::Enter)
            | DropdownEvent::Key(DropdownKey::Space) => {
                let focused = last.map(|_| {
                    selected
                        .and_then(|value| options.iter().position(|o| o.value == value))
                        .unwrap_or(0)
                });
                next.is_open = true;
                next.focused_index = focused;
                next.announcement = options_available(options.len());
                if let Some(index) = focused {
                    effects.push(Effect::ScrollIntoView(index));
                }
            }
            _ => {}
        }
        return Transition {
            state: next,
            effects,
        };
    }

    let move_to = |index: usize, next: &mut DropdownState, effects: &mut Vec<Effect>| {
        next.focused_index = Some(index);
        next.announcement = options[index].label.clone();
        effects.push(Effect::ScrollIntoView(index));
    };
    let select = |index: usize, next: &mut DropdownState, effects: &mut Vec<Effect>| {
        next.is_open = false;
        match last {
            Some(last) => {
                let option = &options[index.min(last)];
                next.announcement = format!("Selected: {}", option.label);
                effects.push(Effect::Commit(option.value.clone()));
            }
            None => next.announcement = SELECTION_CANCELLED.to_string(),
        }
        effects.push(Effect::FocusTrigger);
    };
    let focused = state.focused_index.zip(last).map(|(i, last)| i.min(last));

    match event {
        DropdownEvent::Select(index) => select(index, &mut next, &mut effects),
        DropdownEvent::Toggle | DropdownEvent::Key(DropdownKey::Escape) => {
            next.is_open = false;
            next.announcement = SELECTION_CANCELLED.to_string();
            effects.push(Effect::FocusTrigger);
        }
        DropdownEvent::ClickOutside => {
            next.is_open = false;
            next.announcement = SELECTION_CANCELLED.to_string();
        }
        DropdownEvent::Key(DropdownKey::ArrowDown) => {
            if let (Some(i), Some(last)) = (focused, last) {
                move_to((i + 1).min(last), &mut next, &mut effects);
            }
        }
        DropdownEvent::Key(DropdownKey::ArrowUp) => {
            if let Some(i) = focused {
                move_to(i.saturating_sub(1), &mut next, &mut effects);
            }
        }
        DropdownEvent::Key(DropdownKey::Home) => {
            if last.is_some() {
                move_to(0, &mut next, &mut effects);
            }
        }
        DropdownEvent::Key(DropdownKey::End) => {
            if let Some(last) = last {
                move_to(last, &mut next, &mut effects);
            }
        }
        DropdownEvent::Key(DropdownKey::Enter) | DropdownEvent::Key(DropdownKey::Space) => {
            if let Some(i) = focused {
                select(i, &mut next, &mut effects);
            }
        }
    }

    Transition {
        state: next,
        effects,
    }
}

/// A single dropdown instance keyed by its own id.
///
#[derive(Debug, Clone)]
pub struct Dropdown {
    id: String,
    label: String,
    options: Vec<DropdownOption>,
    value: Option<String>,
    state: DropdownState,
}

impl Dropdown {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<DropdownOption>,
        value: Option<String>,
    ) -> Self {
        Dropdown {
            id: id.into(),
            label: label.into(),
            options,
            value,
            state: DropdownState::default(),
        }
    }

    /// Feed an event through the state machine and perform its effects.
    /// Returns the committed value when the event selected an option.
    ///
    pub fn handle(
        &mut self,
        event: DropdownEvent,
        focus: &mut dyn FocusController,
    ) -> Option<String> {
        let Transition { state, effects } =
            transition(&self.state, &self.options, self.value.as_deref(), event);
        self.state = state;

        let mut committed = None;
        for effect in effects {
            match effect {
                Effect::FocusTrigger => focus.focus(FocusTarget::DropdownTrigger(self.id.clone())),
                Effect::ScrollIntoView(index) => focus.scroll_into_view(FocusTarget::DropdownOption {
                    id: self.id.clone(),
                    index,
                }),
                Effect::Commit(value) => {
                    debug!("Dropdown '{}' committed value '{}'.", self.id, value);
                    self.value = Some(value.clone());
                    committed = Some(value);
                }
            }
        }
        committed
    }

    /// Whether pointer events outside the widget should be delivered.
    ///
    pub fn listens_for_outside_clicks(&self) -> bool {
        self.state.is_open
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) -> &mut Self {
        self.value = value;
        self
    }

    pub fn selected_option(&self) -> Option<&DropdownOption> {
        let value = self.value.as_deref()?;
        self.options.iter().find(|o| o.value == value)
    }

    pub fn state(&self) -> &DropdownState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Focused option index, only while open.
    ///
    pub fn focused_index(&self) -> Option<usize> {
        self.state.focused_index.filter(|_| self.state.is_open)
    }

    pub fn announcement(&self) -> &str {
        &self.state.announcement
    }
}
