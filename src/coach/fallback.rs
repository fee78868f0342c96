use crate::models::{clamp_score, Emotion, InsightResult, TradeAttributes};

const PROFIT_BASE: f64 = 7.0;
const LOSS_BASE: f64 = 4.0;
const RATIO_WEIGHT: f64 = 3.0;

/// Network-free insight computed from trade attributes alone.
///
/// Profitable trades score 7-10 and losing (or flat) trades score 1-4,
/// scaled by the share of discipline rules followed. Never fails.
///
/// A zero or absent rule total counts as one rule; the followed count is
/// kept as recorded, so followed rules against no defined rules push the
/// loss branch to its floor.
pub fn fallback_insight(trade: &TradeAttributes) -> InsightResult {
    let followed = trade.rules_followed_count.unwrap_or(0);
    let total = trade.rules_total.unwrap_or(0).max(1);
    let ratio = followed as f64 / total as f64;

    if trade.is_profitable() {
        InsightResult {
            insight: format!(
                "You maintained discipline with {followed}/{total} rules followed, leading to a profitable trade."
            ),
            risk_pattern: "None".to_string(),
            discipline_score: clamp_score(PROFIT_BASE + ratio * RATIO_WEIGHT),
            coaching_tip: "Keep using your checklist to avoid FOMO entries.".to_string(),
        }
    } else {
        let pre = trade.pre_trade_emotion.unwrap_or(Emotion::Neutral);
        let post = trade.post_trade_emotion.unwrap_or(Emotion::Neutral);
        InsightResult {
            insight: format!(
                "Emotional shift from {pre} to {post} suggests impulsive entry."
            ),
            risk_pattern: "Revenge trading".to_string(),
            discipline_score: clamp_score((LOSS_BASE - ratio * RATIO_WEIGHT).max(1.0)),
            coaching_tip:
                "Pause for 10 minutes after a loss. Recheck your rules before re-entering."
                    .to_string(),
        }
    }
}
