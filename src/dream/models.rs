use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A dream as submitted by the client. Every field is optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DreamInput {
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub symbols: Option<String>,
    #[serde(default)]
    pub emotion: Option<String>,
}

impl DreamInput {
    /// Parse an untyped request body. Zero bytes count as `{}`; anything
    /// other than a JSON object (arrays included) is rejected.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            other => Err(serde::de::Error::custom(format!(
                "expected an object, found {}",
                other
            ))),
        }
    }

    /// True when at least one field carries a non-empty string.
    pub fn has_content(&self) -> bool {
        [&self.story, &self.symbols, &self.emotion]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

/// Two-part interpretation returned to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    #[serde(default)]
    pub psychology: String,
    #[serde(default)]
    pub prophecy: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_an_empty_dream() {
        let input = DreamInput::from_body(b"").unwrap();
        assert_eq!(input, DreamInput::default());
        assert!(!input.has_content());
    }

    #[test]
    fn empty_strings_do_not_count() {
        let input = DreamInput::from_body(br#"{"story":"","symbols":null}"#).unwrap();
        assert!(!input.has_content());
    }

    #[test]
    fn any_single_field_is_enough() {
        let input = DreamInput::from_body(r#"{"emotion":"불안"}"#.as_bytes()).unwrap();
        assert!(input.has_content());
        assert_eq!(input.emotion.as_deref(), Some("불안"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let input = DreamInput::from_body(br#"{"story":"flying","mood":"calm"}"#).unwrap();
        assert_eq!(input.story.as_deref(), Some("flying"));
    }

    #[test]
    fn array_body_is_rejected() {
        assert!(DreamInput::from_body(br#"["flying", "", ""]"#).is_err());
        assert!(DreamInput::from_body(br#"["flying"]"#).is_err());
    }

    #[test]
    fn scalar_body_is_rejected() {
        assert!(DreamInput::from_body(b"null").is_err());
        assert!(DreamInput::from_body(br#""flying""#).is_err());
    }

    #[test]
    fn non_string_field_is_rejected() {
        assert!(DreamInput::from_body(br#"{"story":42}"#).is_err());
        assert!(DreamInput::from_body(b"not json").is_err());
    }
}
