use tracing::{info, warn};

use crate::coach::parser::parse_insight;
use crate::coach::prompt::build_prompt;
use crate::config::Config;
use crate::generator::{self, truncate, TextGenerator, Unavailable};
use crate::models::{InsightResult, TradeAttributes};

/// Prompt, one remote call, parse. Holds no state between calls.
pub struct RemoteInsightClient {
    generator: Box<dyn TextGenerator>,
}

impl RemoteInsightClient {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(generator::from_config(cfg))
    }

    pub fn backend(&self) -> &'static str {
        self.generator.name()
    }

    pub async fn fetch(&self, trade: &TradeAttributes) -> Result<InsightResult, Unavailable> {
        if !self.generator.is_configured() {
            info!("{} not configured, skipping remote insight", self.backend());
            return Err(Unavailable::NotConfigured);
        }

        let prompt = build_prompt(trade);
        let raw = self.generator.generate(&prompt).await?;

        parse_insight(&raw).map_err(|e| {
            warn!("Parse error: {}, raw: {}", e, truncate(&raw, 300));
            Unavailable::MalformedResponse(e.to_string())
        })
    }
}
