use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_DISCIPLINE_SCORE: u8 = 1;
pub const MAX_DISCIPLINE_SCORE: u8 = 10;

/// Behavioral coaching artifact attached to a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightResult {
    pub insight: String,
    pub risk_pattern: String,
    pub discipline_score: u8,
    pub coaching_tip: String,
}

/// Clamp into [1, 10], then truncate toward zero.
pub fn clamp_score(raw: f64) -> u8 {
    raw.clamp(MIN_DISCIPLINE_SCORE as f64, MAX_DISCIPLINE_SCORE as f64)
        .trunc() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    Remote,
    Fallback,
}

impl fmt::Display for InsightSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightSource::Remote => write!(f, "remote"),
            InsightSource::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightRecord {
    pub trade_id: u64,
    pub result: InsightResult,
    pub source: InsightSource,
    pub generated_at: DateTime<Utc>,
}
