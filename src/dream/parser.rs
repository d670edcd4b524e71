//! Parsing of raw model output into an [`AnalysisResult`].
//!
//! The model is asked for a bare JSON object but does not always comply, so
//! parsing walks a fixed ladder and never fails:
//!
//! 1. interior of a ```` ```json ```` fence, else
//! 2. first `{` through last `}`, else
//! 3. the raw text itself,
//!
//! is tried as JSON. On failure the raw text is split at the first prophecy
//! section marker, and if there is none the whole text becomes `psychology`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::models::AnalysisResult;

/// Returned as `prophecy` when the text cannot be split.
pub const UNSPLITTABLE_PROPHECY: &str = "예언적 해석을 분리할 수 없습니다.";

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("fence pattern"));

static BRACE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("brace pattern"));

static PROPHECY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)제2해석|미래의 속삭임").expect("marker pattern"));

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(raw: &str) -> AnalysisResult {
        match parse_object(candidate_json(raw)) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("Model reply is not a JSON object ({}), splitting text", e);
                split_text(raw)
            }
        }
    }
}

/// Only an object qualifies; arrays and scalars are treated as parse failures.
fn parse_object(candidate: &str) -> Result<AnalysisResult, serde_json::Error> {
    match serde_json::from_str::<Value>(candidate)? {
        object @ Value::Object(_) => serde_json::from_value(object),
        other => Err(serde::de::Error::custom(format!(
            "expected an object, found {}",
            other
        ))),
    }
}

fn candidate_json(raw: &str) -> &str {
    if let Some(inner) = JSON_FENCE.captures(raw).and_then(|caps| caps.get(1)) {
        return inner.as_str();
    }
    if let Some(span) = BRACE_SPAN.find(raw) {
        return span.as_str();
    }
    raw
}

fn split_text(raw: &str) -> AnalysisResult {
    match PROPHECY_MARKER.find(raw) {
        Some(marker) if marker.start() > 0 => {
            let (psychology, prophecy) = raw.split_at(marker.start());
            AnalysisResult {
                psychology: psychology.trim().to_string(),
                prophecy: prophecy.trim().to_string(),
            }
        }
        _ => AnalysisResult {
            psychology: raw.to_string(),
            prophecy: UNSPLITTABLE_PROPHECY.to_string(),
        },
    }
}
