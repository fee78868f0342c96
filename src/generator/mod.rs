pub mod deepseek;
pub mod huggingface;

pub use deepseek::DeepSeekGenerator;
pub use huggingface::HuggingFaceGenerator;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{Config, GeneratorKind};

/// Why a remote generator produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unavailable {
    #[error("not configured")]
    NotConfigured,

    #[error("transient: endpoint warming")]
    TransientUnavailable,

    #[error("transport/endpoint error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// A remote text generator reached over HTTP.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    /// False when no credential is present; callers must not expect I/O then.
    fn is_configured(&self) -> bool;

    /// One outbound call. Returns the newly generated text.
    async fn generate(&self, prompt: &str) -> Result<String, Unavailable>;
}

/// Build the backend selected by configuration.
pub fn from_config(cfg: &Config) -> Box<dyn TextGenerator> {
    match cfg.generator {
        GeneratorKind::HuggingFace => Box::new(HuggingFaceGenerator::new(cfg)),
        GeneratorKind::DeepSeek => Box::new(DeepSeekGenerator::new(cfg)),
    }
}

/// POST `payload` and return the body of a 2xx response.
///
/// 503 means the model is still loading and is reported as transient; any
/// other non-2xx, connection failure or timeout is a transport error.
pub(crate) async fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    backend: &str,
    endpoint: &str,
    api_key: &str,
    timeout: Duration,
    payload: &T,
) -> Result<String, Unavailable> {
    debug!("Calling {} at {}", backend, endpoint);

    let resp = client
        .post(endpoint)
        .bearer_auth(api_key)
        .timeout(timeout)
        .json(payload)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                warn!("{} timed out after {:?}", backend, timeout);
            } else {
                warn!("{} request failed: {}", backend, e);
            }
            Unavailable::Transport(e.to_string())
        })?;

    let status = resp.status();
    debug!("{} response status: {}", backend, status);

    if status == StatusCode::SERVICE_UNAVAILABLE {
        warn!("{} model is loading, try again in 30-60 seconds", backend);
        return Err(Unavailable::TransientUnavailable);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        warn!("{} returned {}: {}", backend, status, truncate(&body, 200));
        return Err(Unavailable::Transport(format!("{backend} {status}")));
    }

    resp.text()
        .await
        .map_err(|e| Unavailable::Transport(format!("{backend} body read failed: {e}")))
}

pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
