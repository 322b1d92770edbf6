use crate::{PredictionResult, SubmitError};

#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Pending,
    Success(PredictionResult),
    Failure(String),
}

/// Submission state owned by the root controller.
///
/// `result`, `loading` and `error` are projections of a single outcome slot, so
/// every transition replaces the previous state as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    outcome: Option<RequestOutcome>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> Option<&RequestOutcome> {
        self.outcome.as_ref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.outcome {
            Some(RequestOutcome::Success(result)) => Some(result),
            _ => None,
        }
    }

    pub fn loading(&self) -> bool {
        matches!(self.outcome, Some(RequestOutcome::Pending))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Some(RequestOutcome::Failure(message)) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Starts a submission. Returns false when one is already in flight or a
    /// result is on screen, in which case nothing changes.
    pub fn begin(&mut self) -> bool {
        match self.outcome {
            Some(RequestOutcome::Pending) | Some(RequestOutcome::Success(_)) => false,
            _ => {
                self.outcome = Some(RequestOutcome::Pending);
                true
            }
        }
    }

    /// Applies the settlement of the in-flight submission. Returns false when
    /// nothing was pending.
    pub fn settle(&mut self, settled: Result<PredictionResult, SubmitError>) -> bool {
        if !self.loading() {
            log::warn!("Ignoring settlement with no submission in flight");
            return false;
        }

        self.outcome = Some(match settled {
            Ok(result) => RequestOutcome::Success(result),
            Err(e) => RequestOutcome::Failure(e.to_string()),
        });
        true
    }

    /// Back to an empty upload screen. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        self.outcome.take().is_some()
    }
}
