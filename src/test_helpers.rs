use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, GeneratorKind};
use crate::generator::{TextGenerator, Unavailable};
use crate::models::{Emotion, Entry, TradeAttributes};

pub fn default_test_config() -> Config {
    Config {
        generator: GeneratorKind::HuggingFace,
        hf_api_key: Some("hf_test".to_string()),
        hf_model: "test/model".to_string(),
        hf_endpoint: "http://127.0.0.1:9/models/test/model".to_string(),
        deepseek_api_key: None,
        deepseek_model: "deepseek-chat".to_string(),
        deepseek_endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        request_timeout_secs: 2,
        max_new_tokens: 300,
        temperature: 0.6,
        log_level: "debug".to_string(),
    }
}

/// A BUY on BTC/USD closed in profit, calm before and after.
pub fn profitable_trade(profit: f64, followed: u32, total: u32) -> TradeAttributes {
    TradeAttributes {
        entry: Entry::Buy,
        pair: "BTC/USD".to_string(),
        profit: Some(profit),
        loss: None,
        pre_trade_emotion: Some(Emotion::Chill),
        post_trade_emotion: Some(Emotion::Happy),
        rules_followed_count: Some(followed),
        rules_total: Some(total),
        reason: "Waited for the retest".to_string(),
    }
}

/// A SELL on ETH/USD closed at a loss, angry going in.
pub fn losing_trade(loss: f64, followed: u32, total: u32) -> TradeAttributes {
    TradeAttributes {
        entry: Entry::Sell,
        pair: "ETH/USD".to_string(),
        profit: None,
        loss: Some(loss),
        pre_trade_emotion: Some(Emotion::Angry),
        post_trade_emotion: Some(Emotion::Fear),
        rules_followed_count: Some(followed),
        rules_total: Some(total),
        reason: "Wanted to win back the morning loss".to_string(),
    }
}

/// Generator that returns a canned reply and counts calls.
pub struct ScriptedGenerator {
    reply: Result<String, Unavailable>,
    configured: bool,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedGenerator {
    pub fn replying(reply: Result<String, Unavailable>) -> Self {
        Self {
            reply,
            configured: true,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::replying(Err(Unavailable::NotConfigured))
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, _prompt: &str) -> Result<String, Unavailable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone()
    }
}
