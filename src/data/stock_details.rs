//! HTTP client for the external StockDetails provider.
//!
//! Every endpoint returns loosely-schemed JSON, so responses are handled as
//! `serde_json::Value` and field extraction is defensive.

use reqwest::Client;
use serde_json::Value;

use crate::error::ProviderError;

#[derive(Clone)]
pub struct StockDetailsClient {
    client: Client,
    base_url: String,
}

impl StockDetailsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.get(&url).send().await?;
        let value = resp.error_for_status()?.json().await?;
        Ok(value)
    }

    /// Latest traded price, e.g. `{"price": 123.45, "timestamp": "..."}`.
    pub async fn live_price(&self, symbol: &str) -> Result<Value, ProviderError> {
        self.get_json(&format!("/api/price/{symbol}/live")).await
    }

    /// Today's trading range, e.g. `{"high": ..., "low": ...}`.
    pub async fn day_range(&self, symbol: &str) -> Result<Value, ProviderError> {
        self.get_json(&format!("/api/price/{symbol}/today")).await
    }

    /// 52-week range; field names vary between deployments (`week52High`
    /// vs plain `high`), so callers extract via [`pick_f64`].
    pub async fn week52_range(&self, symbol: &str) -> Result<Value, ProviderError> {
        self.get_json(&format!("/api/price/{symbol}/52week")).await
    }

    /// Raw fundamentals payload, passed through untouched.
    pub async fn fundamentals(&self, symbol: &str) -> Result<Value, ProviderError> {
        self.get_json(&format!("/api/fundamentals/{symbol}")).await
    }

    /// Latest reading for one indicator spec, e.g. `rsi` or `sma:20`.
    pub async fn indicator(&self, symbol: &str, spec: &str) -> Result<Value, ProviderError> {
        self.get_json(&format!("/api/indicators/{symbol}/{spec}"))
            .await
    }
}

/// Ordered field-name fallback: the first candidate key holding a number
/// wins. Mirrors the interpreter's defensive extraction policy.
pub fn pick_f64(node: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| node.get(key).and_then(Value::as_f64))
}
