use tracing::{info, warn};

use crate::coach::fallback::fallback_insight;
use crate::coach::remote::RemoteInsightClient;
use crate::config::Config;
use crate::generator::Unavailable;
use crate::models::{InsightResult, InsightSource, TradeAttributes};

/// Remote generator first, deterministic heuristic otherwise.
///
/// `get_insight` always returns a result; no remote failure escapes it and
/// the remote path is tried at most once per call.
pub struct InsightCoach {
    remote: Option<RemoteInsightClient>,
}

impl InsightCoach {
    pub fn new(remote: RemoteInsightClient) -> Self {
        Self {
            remote: Some(remote),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(RemoteInsightClient::from_config(cfg))
    }

    /// Skip the remote path entirely.
    pub fn fallback_only() -> Self {
        Self { remote: None }
    }

    pub async fn get_insight(&self, trade: &TradeAttributes) -> InsightResult {
        self.get_insight_with_source(trade).await.0
    }

    pub async fn get_insight_with_source(
        &self,
        trade: &TradeAttributes,
    ) -> (InsightResult, InsightSource) {
        let Some(remote) = &self.remote else {
            return (fallback_insight(trade), InsightSource::Fallback);
        };

        match remote.fetch(trade).await {
            Ok(result) => {
                info!(
                    "Remote insight from {} for {} ({}/10)",
                    remote.backend(),
                    trade.pair,
                    result.discipline_score
                );
                (result, InsightSource::Remote)
            }
            Err(reason) => {
                match &reason {
                    Unavailable::NotConfigured => {
                        info!("Using fallback insight: {}", reason)
                    }
                    _ => warn!("Using fallback insight: {}", reason),
                }
                (fallback_insight(trade), InsightSource::Fallback)
            }
        }
    }
}
