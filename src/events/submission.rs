use crate::form::FormData;
use crate::state::State;
use crate::transport::Submitter;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different submission event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Submit { payload: FormData },
}

/// Specify struct for completing submissions against state.
///
pub struct Handler<'a, S: Submitter> {
    state: &'a Arc<Mutex<State>>,
    submitter: &'a S,
}

impl<'a, S: Submitter> Handler<'a, S> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, submitter: &'a S) -> Self {
        Handler { state, submitter }
    }

    /// Handle submission events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Submit { payload } => self.submit(payload).await?,
        }
        Ok(())
    }

    /// Deliver the payload without holding the state lock, then apply the
    /// result to state.
    ///
    async fn submit(&mut self, payload: FormData) -> Result<()> {
        info!(
            "Sending message '{}' from {} {}...",
            payload.subject, payload.first_name, payload.last_name
        );
        match serde_json::to_string(&payload) {
            Ok(json) => debug!("Submission payload: {}", json),
            Err(e) => warn!("Failed to render submission payload for the log: {}", e),
        }
        let result = self.submitter.submit(payload).await;
        if let Err(e) = &result {
            warn!("Submit collaborator reported an error: {}", e);
        }
        let mut state = self.state.lock().await;
        state.complete_submission(result);
        Ok(())
    }
}
