//! An accessible contact form for the terminal.
//!
//! The form core (`form`) is independent of any rendering surface; the
//! remaining modules host it in a `ratatui` terminal user interface.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod logger;
pub mod state;
pub mod transport;
pub mod ui;
