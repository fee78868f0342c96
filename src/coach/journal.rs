use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

use crate::coach::orchestrator::InsightCoach;
use crate::models::{InsightRecord, TradeAttributes};

/// Insights keyed by trade id, computed on first access.
///
/// Concurrent first accesses for one trade share a single computation.
/// Entries are never evicted; a long-lived host must bound the trade ids it
/// passes in or persist records elsewhere.
pub struct InsightJournal {
    coach: InsightCoach,
    entries: Mutex<HashMap<u64, Arc<OnceCell<InsightRecord>>>>,
}

impl InsightJournal {
    pub fn new(coach: InsightCoach) -> Self {
        Self {
            coach,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn insight_for(&self, trade_id: u64, trade: &TradeAttributes) -> InsightRecord {
        let cell = {
            let mut entries = self.entries.lock().await;
            entries
                .entry(trade_id)
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let record = cell
            .get_or_init(|| async {
                debug!("Computing insight for trade {}", trade_id);
                let (result, source) = self.coach.get_insight_with_source(trade).await;
                InsightRecord {
                    trade_id,
                    result,
                    source,
                    generated_at: Utc::now(),
                }
            })
            .await
            .clone();
        record
    }

    pub async fn get(&self, trade_id: u64) -> Option<InsightRecord> {
        let entries = self.entries.lock().await;
        entries.get(&trade_id).and_then(|cell| cell.get().cloned())
    }

    pub async fn len(&self) -> usize {
        let entries = self.entries.lock().await;
        entries.values().filter(|cell| cell.initialized()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
