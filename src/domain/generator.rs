//! Generator trait definition
//!
//! The contract for turning a prompt into raw model text.
//! Implementations live in the integrations module.

use async_trait::async_trait;

use super::DomainError;

/// Text generation backend used by the dream service
#[async_trait]
pub trait InterpretationGenerator: Send + Sync {
    /// Send one prompt upstream and return the first candidate's text.
    ///
    /// Exactly one outbound call per invocation, no retries.
    async fn generate(&self, prompt: &str, api_key: &str) -> Result<String, DomainError>;
}
