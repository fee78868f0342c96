pub mod insight;
pub mod trade;

pub use insight::{clamp_score, InsightRecord, InsightResult, InsightSource};
pub use trade::{Emotion, Entry, TradeAttributes};
