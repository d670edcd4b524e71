use std::sync::Arc;

use crate::domain::{DomainError, InterpretationGenerator};
use crate::dream::models::{AnalysisResult, DreamInput};
use crate::dream::parser::ResponseParser;
use crate::dream::prompt::PromptBuilder;

/// Runs one dream analysis: key check, validation, prompt, upstream call, parse.
#[derive(Clone)]
pub struct DreamService {
    generator: Arc<dyn InterpretationGenerator>,
    api_key: Option<String>,
}

impl DreamService {
    pub fn new(generator: Arc<dyn InterpretationGenerator>, api_key: Option<String>) -> Self {
        Self { generator, api_key }
    }

    /// Analyze an untyped request body.
    ///
    /// The API key is checked before the body is looked at, so a
    /// misconfigured deployment reports 500 even for empty input.
    pub async fn analyze(&self, body: &[u8]) -> Result<AnalysisResult, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(DomainError::missing_api_key)?;

        let dream = DreamInput::from_body(body).map_err(|e| {
            tracing::debug!("Rejecting request body: {}", e);
            DomainError::malformed_body()
        })?;

        self.analyze_dream(&dream, api_key).await
    }

    async fn analyze_dream(
        &self,
        dream: &DreamInput,
        api_key: &str,
    ) -> Result<AnalysisResult, DomainError> {
        if !dream.has_content() {
            return Err(DomainError::empty_dream());
        }

        let prompt = PromptBuilder::build(dream);
        let raw = self.generator.generate(&prompt, api_key).await?;

        Ok(ResponseParser::parse(&raw))
    }
}
