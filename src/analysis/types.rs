//! Domain types shared by the interpreter, combiner, and API layers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Categorical trading signal. Unavailable data always maps to `Hold`,
/// never to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "HOLD")]
    Hold,
}

impl Recommendation {
    /// Signed unit score used by the weighted combiner.
    pub fn signed_unit(self) -> f64 {
        match self {
            Recommendation::Buy => 1.0,
            Recommendation::Sell => -1.0,
            Recommendation::Hold => 0.0,
        }
    }
}

/// One interpreted indicator reading: the extracted raw value (a number,
/// or the full node for MACD), a human-readable meaning, and a signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDetail {
    pub value: Value,
    pub meaning: String,
    pub recommendation: Recommendation,
}

/// The aggregated rule-based analysis for one symbol. Any fetched field may
/// be absent when the corresponding provider call failed or lacked the
/// expected key; absence never aborts assembly of the rest of the record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAnalysis {
    pub symbol: String,
    pub live_price: Option<f64>,
    pub day_high: Option<f64>,
    pub day_low: Option<f64>,
    pub week52_high: Option<f64>,
    pub week52_low: Option<f64>,
    /// Raw fundamentals payload passed through untouched.
    pub fundamentals: Option<Value>,
    /// Keys: `rsi`, `sma_20`, `ema_14`, `macd`.
    #[serde(default)]
    pub indicators: HashMap<String, IndicatorDetail>,
    #[serde(default)]
    pub overall_decision: String,
}

/// AI-refined decision produced by the escalation step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub symbol: String,
    pub decision: Recommendation,
    pub reasoning: String,
}
