//! Domain error types
//!
//! These errors are framework-agnostic. The `Display` output is the exact
//! message returned to the caller in the `error` field.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required configuration (the upstream API key) is missing
    Configuration(String),
    /// Request input rejected at the boundary
    Validation(String),
    /// Generation API failure: bad status, empty reply, transport error
    Upstream(String),
    /// HTTP method other than POST / OPTIONS
    MethodNotAllowed,
}

impl DomainError {
    pub fn missing_api_key() -> Self {
        DomainError::Configuration("GEMINI_API_KEY 환경 변수가 설정되지 않았습니다.".to_string())
    }

    pub fn empty_dream() -> Self {
        DomainError::Validation("꿈 정보가 제공되지 않았습니다.".to_string())
    }

    pub fn malformed_body() -> Self {
        DomainError::Validation("요청 본문이 올바른 JSON 형식이 아닙니다.".to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Configuration(msg) => write!(f, "{}", msg),
            DomainError::Validation(msg) => write!(f, "{}", msg),
            DomainError::Upstream(msg) => write!(f, "{}", msg),
            DomainError::MethodNotAllowed => write!(f, "Method not allowed"),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Upstream(format!("Gemini API 요청 실패: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        assert_eq!(
            DomainError::empty_dream().to_string(),
            "꿈 정보가 제공되지 않았습니다."
        );
        assert_eq!(
            DomainError::MethodNotAllowed.to_string(),
            "Method not allowed"
        );
        assert_eq!(
            DomainError::Upstream("Gemini API 오류: 429".to_string()).to_string(),
            "Gemini API 오류: 429"
        );
    }
}
