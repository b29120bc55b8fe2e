use serde::Deserialize;
use std::env;
use std::fs;

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StockDetailsConfig {
    pub base_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LlmConfig {
    /// Usually left unset here and supplied via OPENROUTER_API_KEY.
    pub api_key: Option<String>,
    /// OpenAI-compatible api base (OpenRouter in production).
    pub base_url: Option<String>,
    pub model: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub stock_details: StockDetailsConfig,
    pub llm: LlmConfig,
}

impl AppConfig {
    pub fn load() -> Self {
        let config_path = "config.yaml";
        let content = fs::read_to_string(config_path).expect("Failed to read config.yaml");

        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        serde_yaml::from_str(content).expect("Failed to parse config.yaml")
    }

    /// Config value wins; the environment (loaded from .env) is the usual
    /// source.
    pub fn openrouter_api_key(&self) -> String {
        self.llm
            .api_key
            .clone()
            .or_else(|| env::var("OPENROUTER_API_KEY").ok())
            .unwrap_or_default()
    }
}
