//! Weighted-voting combiner over per-indicator verdicts.
//!
//! Stateless and order-independent: a fold over `(name, verdict)` pairs.
//! Adding an indicator only requires a new weight in [`weight_for`].

use std::collections::HashMap;

use crate::analysis::types::IndicatorDetail;
use crate::constants::{indicators, thresholds, weights};

/// Fixed weight per indicator key. Unknown keys carry no weight.
fn weight_for(name: &str) -> f64 {
    match name {
        indicators::KEY_RSI => weights::RSI,
        indicators::KEY_SMA => weights::SMA,
        indicators::KEY_EMA => weights::EMA,
        indicators::KEY_MACD => weights::MACD,
        _ => 0.0,
    }
}

/// Weighted score over the indicators actually present. Absent indicators
/// contribute zero; there is no re-normalization.
pub fn weighted_score(indicators: &HashMap<String, IndicatorDetail>) -> f64 {
    indicators
        .iter()
        .map(|(name, detail)| weight_for(name) * detail.recommendation.signed_unit())
        .sum()
}

/// Combine all present verdicts into the overall rule-based decision.
/// Total over any subset of indicators, including the empty map (score 0).
pub fn combine(indicators: &HashMap<String, IndicatorDetail>) -> String {
    let score = weighted_score(indicators);

    if score >= thresholds::BUY_SCORE {
        "Overall: BUY (weighted indicators bullish)".to_string()
    } else if score <= thresholds::SELL_SCORE {
        "Overall: SELL (weighted indicators bearish)".to_string()
    } else {
        "Overall: HOLD (mixed or neutral signals)".to_string()
    }
}
