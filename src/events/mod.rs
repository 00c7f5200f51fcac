//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Submission events: handing the form payload to the submit collaborator
//! - Terminal events: User input and terminal interactions

pub mod submission;
pub mod terminal;
