use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entry {
    #[serde(rename = "BUY", alias = "buy")]
    Buy,
    #[serde(rename = "SELL", alias = "sell")]
    Sell,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Buy => write!(f, "BUY"),
            Entry::Sell => write!(f, "SELL"),
        }
    }
}

/// Emotional state a trader tags before or after a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Fear,
    Angry,
    Sad,
    Neutral,
    Happy,
    Chill,
}

impl Emotion {
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Fear => "Fear",
            Emotion::Angry => "Angry",
            Emotion::Sad => "Sad",
            Emotion::Neutral => "Neutral",
            Emotion::Happy => "Happy",
            Emotion::Chill => "Chill",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Attributes of one journaled trade, as handed over by the journal layer.
///
/// Profit and loss are independent options: either, both or neither may be
/// recorded, and an absent amount is not the same as an amount of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeAttributes {
    pub entry: Entry,
    pub pair: String,
    #[serde(default)]
    pub profit: Option<f64>,
    #[serde(default)]
    pub loss: Option<f64>,
    #[serde(default)]
    pub pre_trade_emotion: Option<Emotion>,
    #[serde(default)]
    pub post_trade_emotion: Option<Emotion>,
    #[serde(default)]
    pub rules_followed_count: Option<u32>,
    #[serde(default)]
    pub rules_total: Option<u32>,
    #[serde(default)]
    pub reason: String,
}

impl TradeAttributes {
    /// A profit that is recorded and non-zero. A zero profit does not count.
    pub fn is_profitable(&self) -> bool {
        matches!(self.profit, Some(p) if p != 0.0)
    }
}
