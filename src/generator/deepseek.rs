use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::coach::prompt::SYSTEM_PROMPT;
use crate::config::Config;
use crate::generator::{post_json, truncate, TextGenerator, Unavailable};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: String,
}

/// DeepSeek chat-completions API (OpenAI-compatible).
pub struct DeepSeekGenerator {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    timeout: Duration,
    max_tokens: u32,
    temperature: f64,
}

impl DeepSeekGenerator {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: cfg.deepseek_api_key.clone(),
            model: cfg.deepseek_model.clone(),
            endpoint: cfg.deepseek_endpoint.clone(),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
            max_tokens: cfg.max_new_tokens,
            temperature: cfg.temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for DeepSeekGenerator {
    fn name(&self) -> &'static str {
        "deepseek"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, Unavailable> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("DEEPSEEK_API_KEY not set");
            return Err(Unavailable::NotConfigured);
        };

        let payload = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
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

        let reply: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Unexpected DeepSeek body: {}", truncate(&body, 200));
            Unavailable::MalformedResponse(format!("unexpected body: {e}"))
        })?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Unavailable::MalformedResponse("no choices returned".to_string()))
    }
}
