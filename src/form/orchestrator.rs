//! Submission orchestration.
//!
//! This is the only place where the validation rules and the submit
//! collaborator meet. The flow is split in two synchronous halves so a host
//! that keeps the store behind a lock can release it while the collaborator
//! runs:
//!
//! - [`prepare`] guards against double submission, validates once and either
//!   reports the errors or marks the store as submitting.
//! - [`complete`] maps the collaborator's outcome to notifications, focus
//!   and a store reset, and always clears the submitting flag.
//!
//! [`submit`] composes both for callers that own the store outright.

use super::data::{Field, FormData};
use super::focus::{FocusController, FocusTarget, NotificationKind, Notifier};
use super::store::FormStore;
use super::validator::validate;
use crate::transport::{SubmitError, Submitter};
use log::*;

pub const SUBMITTING_MESSAGE: &str = "Submitting your message...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
pub const VALIDATION_PREFIX: &str = "Please fix the following errors: ";

/// Specifying the terminal result of a submission attempt.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Invalid,
    Failed(SubmitError),
    AlreadySubmitting,
}

/// Result of the synchronous first half of a submission.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// Payload ready to hand to the collaborator.
    Ready(FormData),
    /// Nothing to send; the attempt already ended.
    Done(SubmitOutcome),
}

/// Validate and, if valid, mark the store as submitting.
///
pub fn prepare(
    store: &mut FormStore,
    notifier: &mut dyn Notifier,
    focus: &mut dyn FocusController,
) -> Prepared {
    if store.is_submitting() {
        warn!("Ignoring submit request while a submission is outstanding.");
        return Prepared::Done(SubmitOutcome::AlreadySubmitting);
    }

    let errors = validate(store.data());
    if let Some(first) = errors.first_invalid() {
        info!("Form has {} invalid field(s).", errors.len());
        let message = format!("{}{}", VALIDATION_PREFIX, errors.summary());
        store.set_errors(errors);
        focus.focus(FocusTarget::Field(first));
        notifier.notify(&message, NotificationKind::Error);
        return Prepared::Done(SubmitOutcome::Invalid);
    }

    store.set_errors(errors).set_submitting(true);
    notifier.notify(SUBMITTING_MESSAGE, NotificationKind::Info);
    Prepared::Ready(store.data().clone())
}

/// Apply the collaborator's result to the store.
///
pub fn complete(
    store: &mut FormStore,
    result: Result<(), SubmitError>,
    notifier: &mut dyn Notifier,
    focus: &mut dyn FocusController,
) -> SubmitOutcome {
    let outcome = match result {
        Ok(()) => {
            info!("Message sent.");
            notifier.notify(SUCCESS_MESSAGE, NotificationKind::Success);
            store.reset();
            focus.focus(FocusTarget::Field(Field::FirstName));
            SubmitOutcome::Sent
        }
        Err(e) => {
            error!("Failed to send message: {}", e);
            notifier.notify(FAILURE_MESSAGE, NotificationKind::Error);
            SubmitOutcome::Failed(e)
        }
    };
    store.set_submitting(false);
    outcome
}

/// Run a whole submission against a store the caller owns.
///
pub async fn submit<S: Submitter>(
    store: &mut FormStore,
    submitter: &S,
    notifier: &mut dyn Notifier,
    focus: &mut dyn FocusController,
) -> SubmitOutcome {
    match prepare(store, notifier, focus) {
        Prepared::Done(outcome) => outcome,
        Prepared::Ready(payload) => {
            let result = submitter.submit(payload).await;
            complete(store, result, notifier, focus)
        }
    }
}
