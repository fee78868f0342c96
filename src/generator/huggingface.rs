use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::config::Config;
use crate::generator::{post_json, truncate, TextGenerator, Unavailable};

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f64,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

/// Hugging Face text-generation inference endpoint.
pub struct HuggingFaceGenerator {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    timeout: Duration,
    max_new_tokens: u32,
    temperature: f64,
}

impl HuggingFaceGenerator {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: cfg.hf_api_key.clone(),
            endpoint: cfg.hf_endpoint.clone(),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
            max_new_tokens: cfg.max_new_tokens,
            temperature: cfg.temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceGenerator {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, Unavailable> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("HF_API_KEY not set");
            return Err(Unavailable::NotConfigured);
        };

        let payload = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: self.max_new_tokens,
                temperature: self.temperature,
                return_full_text: false,
            },
        };

        let body = post_json(
            &self.client,
            self.name(),
            &self.endpoint,
            api_key,
            self.timeout,
            &payload,
        )
        .await?;

        let generations: Vec<Generation> = serde_json::from_str(&body).map_err(|e| {
            warn!("Unexpected Hugging Face body: {}", truncate(&body, 200));
            Unavailable::MalformedResponse(format!("unexpected body: {e}"))
        })?;

        generations
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| Unavailable::MalformedResponse("no generations returned".to_string()))
    }
}
