//! Titled messages handed to the presentation layer

use crate::estimator::EstimationResult;
use crate::time::ClockStyle;

/// Title shown above a computed bedtime
pub const SUCCESS_TITLE: &str = "Your ideal bedtime is";

/// Title shown above the failure message
pub const ERROR_TITLE: &str = "Error";

/// A title and body pair, one per estimation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    /// Alert title
    pub title: String,
    /// Alert body
    pub body: String,
}

impl AlertMessage {
    /// Build the message for an estimation result
    pub fn from_result(result: &EstimationResult, clock: ClockStyle) -> Self {
        match result {
            EstimationResult::Success { bedtime } => Self {
                title: SUCCESS_TITLE.to_string(),
                body: clock.format(*bedtime),
            },
            EstimationResult::Failure { reason } => Self {
                title: ERROR_TITLE.to_string(),
                body: reason.clone(),
            },
        }
    }

    /// Whether this message reports a failure
    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE
    }
}
