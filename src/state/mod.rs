//! Application state management module.
//!
//! This module contains the state shared between the render loop, the
//! terminal event handler and the submission worker:
//! - Main `State` struct wiring the form core to the terminal
//! - Focus ring and focus controller
//! - Transient notifications
//! - State error handling

mod error;
mod navigation;
mod notifications;
mod state_impl;

pub use error::StateError;
pub use navigation::{Focus, FocusState};
pub use notifications::{Notification, Notifications};
pub use state_impl::State;
