//! Trait abstraction for the submit handler to enable injection and mocking

use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// What the handler reports back to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: String,
}

/// Receives the form values once every rule passes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Handle a validated sign-up
    async fn submit(&self, values: &FormValues) -> Result<SubmitOutcome>;
}
