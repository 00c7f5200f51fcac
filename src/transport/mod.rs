//! Submission transport.
//!
//! The form hands its payload to a [`Submitter`]. The only implementation
//! shipped is [`SimulatedSubmitter`], which waits for a configurable delay and
//! then succeeds or, with a configurable probability, fails.

mod error;
mod simulated;

pub use error::SubmitError;
pub use simulated::SimulatedSubmitter;

use crate::form::FormData;
use std::future::Future;

/// Delivers a completed form somewhere. Any timeout policy belongs to the
/// implementation.
///
pub trait Submitter {
    fn submit(&self, payload: FormData) -> impl Future<Output = Result<(), SubmitError>> + Send;
}
