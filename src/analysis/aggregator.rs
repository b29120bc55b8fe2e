//! Orchestrates the per-symbol fan-out against the StockDetails provider
//! and assembles the aggregated analysis record.

use serde_json::Value;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::analysis::interpreter::{
    extract_numeric, interpret_ema, interpret_macd, interpret_rsi, interpret_sma,
};
use crate::analysis::strategy;
use crate::analysis::types::StockAnalysis;
use crate::constants::indicators;
use crate::data::stock_details::{pick_f64, StockDetailsClient};
use crate::error::ProviderError;

/// Raw provider payloads for one symbol, after per-field degradation.
/// `None` means the fetch failed or the provider returned nothing usable.
#[derive(Debug, Default)]
pub(crate) struct RawFetches {
    pub live: Option<Value>,
    pub today: Option<Value>,
    pub week52: Option<Value>,
    pub fundamentals: Option<Value>,
    pub rsi: Option<Value>,
    pub sma: Option<Value>,
    pub ema: Option<Value>,
    pub macd: Option<Value>,
}

pub struct Aggregator {
    provider: StockDetailsClient,
}

impl Aggregator {
    pub fn new(provider: StockDetailsClient) -> Self {
        Self { provider }
    }

    /// Rule-based analysis for one symbol.
    ///
    /// All provider fetches run concurrently and degrade individually: a
    /// failed fetch only blanks its own field. The single error case is the
    /// provider being unreachable for every fetch at once.
    pub async fn analyze(&self, symbol: &str) -> Result<StockAnalysis, ProviderError> {
        info!("Aggregating analysis for {}", symbol);

        let (live, today, week52, fundamentals, rsi, sma, ema, macd) = tokio::join!(
            self.provider.live_price(symbol),
            self.provider.day_range(symbol),
            self.provider.week52_range(symbol),
            self.provider.fundamentals(symbol),
            self.provider.indicator(symbol, indicators::SPEC_RSI),
            self.provider.indicator(symbol, indicators::SPEC_SMA),
            self.provider.indicator(symbol, indicators::SPEC_EMA),
            self.provider.indicator(symbol, indicators::SPEC_MACD),
        );

        let all_failed = [
            &live,
            &today,
            &week52,
            &fundamentals,
            &rsi,
            &sma,
            &ema,
            &macd,
        ]
        .iter()
        .all(|r| r.is_err());
        if all_failed {
            return Err(ProviderError::Unavailable {
                symbol: symbol.to_string(),
            });
        }

        let raw = RawFetches {
            live: settle(symbol, "live price", live),
            today: settle(symbol, "day range", today),
            week52: settle(symbol, "52-week range", week52),
            fundamentals: settle(symbol, "fundamentals", fundamentals),
            rsi: settle(symbol, "rsi", rsi),
            sma: settle(symbol, "sma", sma),
            ema: settle(symbol, "ema", ema),
            macd: settle(symbol, "macd", macd),
        };

        Ok(assemble(symbol, raw))
    }
}

fn settle(symbol: &str, field: &str, result: Result<Value, ProviderError>) -> Option<Value> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Fetch of {} for {} failed, field degrades to absent: {}", field, symbol, err);
            None
        }
    }
}

/// Pure assembly of the analysis record from the settled payloads:
/// interpret each present indicator reading, then combine the verdicts.
pub(crate) fn assemble(symbol: &str, raw: RawFetches) -> StockAnalysis {
    let live_price = raw.live.as_ref().and_then(|v| pick_f64(v, &["price"]));
    let day_high = raw.today.as_ref().and_then(|v| pick_f64(v, &["high"]));
    let day_low = raw.today.as_ref().and_then(|v| pick_f64(v, &["low"]));
    let week52_high = raw
        .week52
        .as_ref()
        .and_then(|v| pick_f64(v, &["week52High", "high"]));
    let week52_low = raw
        .week52
        .as_ref()
        .and_then(|v| pick_f64(v, &["week52Low", "low"]));

    let mut verdicts = HashMap::new();
    if let Some(node) = &raw.rsi {
        verdicts.insert(
            indicators::KEY_RSI.to_string(),
            interpret_rsi(extract_numeric(node)),
        );
    }
    if let Some(node) = &raw.sma {
        verdicts.insert(
            indicators::KEY_SMA.to_string(),
            interpret_sma(extract_numeric(node), live_price),
        );
    }
    if let Some(node) = &raw.ema {
        verdicts.insert(
            indicators::KEY_EMA.to_string(),
            interpret_ema(extract_numeric(node), live_price),
        );
    }
    if let Some(node) = &raw.macd {
        verdicts.insert(indicators::KEY_MACD.to_string(), interpret_macd(node));
    }

    let overall_decision = strategy::combine(&verdicts);

    StockAnalysis {
        symbol: symbol.to_string(),
        live_price,
        day_high,
        day_low,
        week52_high,
        week52_low,
        fundamentals: raw.fundamentals,
        indicators: verdicts,
        overall_decision,
    }
}
