pub mod models;
pub mod parser;
pub mod prompt;
pub mod service;

pub use models::{AnalysisResult, DreamInput, ErrorBody};
pub use parser::ResponseParser;
pub use prompt::PromptBuilder;
pub use service::DreamService;
