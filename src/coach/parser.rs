use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{clamp_score, InsightResult};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no JSON object found")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("missing key: {0}")]
    MissingKey(&'static str),

    #[error("invalid value for {0}")]
    InvalidField(&'static str),

    #[error("invalid discipline_score: {0}")]
    InvalidScore(String),
}

/// Extract an insight from untrusted generator output.
///
/// The object is taken from the first `{` to the last `}` so that prose
/// around it is ignored. `discipline_score` is clamped into [1, 10].
pub fn parse_insight(raw: &str) -> Result<InsightResult, ParseError> {
    let start = raw.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = raw
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(ParseError::NoJsonObject)?;

    let value: Value = serde_json::from_str(&raw[start..=end])
        .map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    let obj = value
        .as_object()
        .ok_or_else(|| ParseError::InvalidJson("expected an object".to_string()))?;

    for key in ["insight", "risk_pattern", "discipline_score", "coaching_tip"] {
        if !obj.contains_key(key) {
            return Err(ParseError::MissingKey(key));
        }
    }

    Ok(InsightResult {
        insight: text_field(obj, "insight")?,
        risk_pattern: text_field(obj, "risk_pattern")?,
        discipline_score: score_field(obj)?,
        coaching_tip: text_field(obj, "coaching_tip")?,
    })
}

fn text_field(obj: &Map<String, Value>, key: &'static str) -> Result<String, ParseError> {
    match obj.get(key) {
        None => Err(ParseError::MissingKey(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
        Some(_) => Err(ParseError::InvalidField(key)),
    }
}

fn score_field(obj: &Map<String, Value>) -> Result<u8, ParseError> {
    let raw = match obj.get("discipline_score") {
        None => return Err(ParseError::MissingKey("discipline_score")),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(other) => return Err(ParseError::InvalidScore(other.to_string())),
    };

    match raw {
        Some(score) if score.is_finite() => Ok(clamp_score(score)),
        _ => Err(ParseError::InvalidScore(
            obj.get("discipline_score")
                .map(Value::to_string)
                .unwrap_or_default(),
        )),
    }
}
