use std::fmt::Display;

use crate::models::TradeAttributes;

/// Placeholder for fields the journal did not record.
pub const MISSING: &str = "missing";

/// System message for chat-style backends.
pub const SYSTEM_PROMPT: &str =
    "You are TradeMind AI, a behavioral finance coach for traders. Respond in strict JSON.";

fn or_missing<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// Build the single prompt sent to a remote text generator.
///
/// The JSON contract spelled out here is what `parse_insight` relies on.
pub fn build_prompt(trade: &TradeAttributes) -> String {
    let reason = if trade.reason.trim().is_empty() {
        MISSING.to_string()
    } else {
        format!("\"{}\"", trade.reason.trim())
    };

    format!(
        r#"You are TradeMind AI, a behavioral finance psychologist for traders.
Analyze this trade and return ONLY a valid JSON object with exactly these four keys:

{{
  "insight": "1 sentence on emotional/behavioral leak",
  "risk_pattern": "1 phrase: e.g., 'Revenge trading', 'FOMO entry', or 'None'",
  "discipline_score": <integer from 1 to 10>,
  "coaching_tip": "1 actionable tip, supportive tone"
}}

Trade Details:
- Entry: {entry}
- Pair: {pair}
- Profit: {profit}
- Loss: {loss}
- Pre-Trade Emotion: {pre}
- Post-Trade Emotion: {post}
- Rules Followed: {followed}/{total}
- Journal Reason: {reason}

Rules:
- Be clinical, concise, and trader-focused.
- Use terms: discipline, emotional leakage, risk, edge.
- discipline_score must be an integer between 1 and 10.
- No markdown, no explanations, no text before or after the JSON.
- Return ONLY JSON."#,
        entry = trade.entry,
        pair = trade.pair,
        profit = or_missing(trade.profit),
        loss = or_missing(trade.loss),
        pre = or_missing(trade.pre_trade_emotion),
        post = or_missing(trade.post_trade_emotion),
        followed = or_missing(trade.rules_followed_count),
        total = or_missing(trade.rules_total),
        reason = reason,
    )
}
