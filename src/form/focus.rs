//! Focus and notification capabilities injected into the form widgets.
//!
//! The widgets never touch the terminal directly. Moving focus, scrolling an
//! option into view and raising a notification are requested through these
//! traits so the state machines stay testable without a rendering surface.

use super::data::Field;

/// Specifying elements that can receive focus or be scrolled into view.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    Field(Field),
    DropdownTrigger(String),
    DropdownOption { id: String, index: usize },
}

/// Moves keyboard focus and keeps focused elements visible.
///
pub trait FocusController {
    fn focus(&mut self, target: FocusTarget);
    fn scroll_into_view(&mut self, target: FocusTarget);
}

/// Specifying notification severities.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// Fire-and-forget channel for transient user notifications.
///
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: NotificationKind);
}
