//! Placeholder handler that echoes the submitted values

use super::traits::{SubmitHandler, SubmitOutcome};
use crate::state::FormValues;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Echoes the values back as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoSubmitHandler;

#[async_trait]
impl SubmitHandler for EchoSubmitHandler {
    async fn submit(&self, values: &FormValues) -> Result<SubmitOutcome> {
        let message =
            serde_json::to_string_pretty(values).context("Failed to serialize form values")?;
        tracing::debug!("Sign-up submitted for {}", values.username);
        Ok(SubmitOutcome { message })
    }
}
