use super::{SubmitError, Submitter};
use crate::form::FormData;
use log::*;
use rand::Rng;
use std::time::Duration;

/// Stand-in for a real endpoint: sleeps, then resolves.
///
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedSubmitter {
    /// Returns a new instance. The failure rate is clamped to `[0, 1]`.
    ///
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        SimulatedSubmitter {
            delay,
            failure_rate,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, payload: FormData) -> Result<(), SubmitError> {
        debug!(
            "Simulating delivery of message from '{}' in {}ms...",
            payload.email,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        let failed = self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate);
        if failed {
            return Err(SubmitError::SubmissionFailed(
                "simulated transport error".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_succeeds_without_failure_rate() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1), 0.0);
        for _ in 0..10 {
            assert!(submitter.submit(FormData::default()).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_always_fails_at_full_failure_rate() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1), 1.0);
        let result = submitter.submit(FormData::default()).await;
        assert!(matches!(result, Err(SubmitError::SubmissionFailed(_))));
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        assert_eq!(SimulatedSubmitter::new(Duration::ZERO, 3.0).failure_rate(), 1.0);
        assert_eq!(SimulatedSubmitter::new(Duration::ZERO, -1.0).failure_rate(), 0.0);
        assert_eq!(SimulatedSubmitter::new(Duration::ZERO, f64::NAN).failure_rate(), 0.0);
    }
}
