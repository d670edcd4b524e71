//! Application state shared across handlers

use std::sync::Arc;

use crate::domain::InterpretationGenerator;
use crate::dream::DreamService;
use crate::infrastructure::config::Config;
use crate::modules::integrations::GeminiClient;

#[derive(Clone)]
pub struct AppState {
    pub dream_service: DreamService,
}

impl AppState {
    /// Production state: Gemini upstream, key taken from `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_generator(Arc::new(GeminiClient::new()), config.gemini_api_key.clone())
    }

    /// State with an explicit generator (tests, alternate upstreams).
    pub fn with_generator(
        generator: Arc<dyn InterpretationGenerator>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            dream_service: DreamService::new(generator, api_key),
        }
    }
}
