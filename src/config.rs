use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

const DEFAULT_HF_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct";
const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";
const DEFAULT_DEEPSEEK_ENDPOINT: &str = "https://api.deepseek.com/v1/chat/completions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    HuggingFace,
    DeepSeek,
}

impl FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(GeneratorKind::HuggingFace),
            "deepseek" => Ok(GeneratorKind::DeepSeek),
            other => Err(format!("Unknown text generator: {other}")),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::HuggingFace => write!(f, "huggingface"),
            GeneratorKind::DeepSeek => write!(f, "deepseek"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Backend selection
    pub generator: GeneratorKind,

    // Hugging Face
    pub hf_api_key: Option<String>,
    pub hf_model: String,
    pub hf_endpoint: String,

    // DeepSeek
    pub deepseek_api_key: Option<String>,
    pub deepseek_model: String,
    pub deepseek_endpoint: String,

    // Generation
    pub request_timeout_secs: u64,
    pub max_new_tokens: u32,
    pub temperature: f64,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };
        // An empty key is the same as no key.
        let secret = |key: &str| -> Option<String> {
            std::env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let hf_model = env("HF_MODEL", DEFAULT_HF_MODEL);
        let hf_endpoint = env("HF_ENDPOINT", &hf_endpoint_for(&hf_model));

        Config {
            generator: parse_generator(&env("TRADEMIND_GENERATOR", "huggingface")),
            hf_api_key: secret("HF_API_KEY"),
            hf_model,
            hf_endpoint,
            deepseek_api_key: secret("DEEPSEEK_API_KEY"),
            deepseek_model: env("DEEPSEEK_MODEL", DEFAULT_DEEPSEEK_MODEL),
            deepseek_endpoint: env("DEEPSEEK_ENDPOINT", DEFAULT_DEEPSEEK_ENDPOINT),
            request_timeout_secs: env("INSIGHT_TIMEOUT_SECS", "10").parse().unwrap_or(10),
            max_new_tokens: env("INSIGHT_MAX_TOKENS", "300").parse().unwrap_or(300),
            temperature: env("INSIGHT_TEMPERATURE", "0.6").parse().unwrap_or(0.6),
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    /// Whether the selected backend has a credential to call with.
    pub fn generator_configured(&self) -> bool {
        match self.generator {
            GeneratorKind::HuggingFace => self.hf_api_key.is_some(),
            GeneratorKind::DeepSeek => self.deepseek_api_key.is_some(),
        }
    }
}

fn parse_generator(raw: &str) -> GeneratorKind {
    raw.parse().unwrap_or_else(|e| {
        warn!("{}, defaulting to huggingface", e);
        GeneratorKind::HuggingFace
    })
}

fn hf_endpoint_for(model: &str) -> String {
    format!("https://api-inference.huggingface.co/models/{model}")
}
