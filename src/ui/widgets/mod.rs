//! Reusable UI widget components.
//!
//! This module contains the spinner frames and shared styling helpers.

pub mod spinner;
pub mod styling;
