//! Contact form core.
//!
//! This module contains everything that does not depend on a rendering
//! surface:
//! - Form data model and validated fields
//! - Field validator and error map
//! - Form state store (reducer)
//! - Accessible dropdown state machine
//! - Contact method chooser
//! - Submission orchestrator

pub mod chooser;
pub mod data;
pub mod dropdown;
pub mod focus;
pub mod orchestrator;
pub mod store;
pub mod validator;

pub use chooser::ContactMethodChooser;
pub use data::{ContactMethod, Field, FormData, Urgency};
pub use dropdown::{Dropdown, DropdownEvent, DropdownKey, DropdownOption, DropdownState};
pub use focus::{FocusController, FocusTarget, NotificationKind, Notifier};
pub use orchestrator::{Prepared, SubmitOutcome};
pub use store::{FormAction, FormStore};
pub use validator::{validate, ErrorMap, ValidationError};
