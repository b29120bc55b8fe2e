//! Pure per-indicator interpretation.
//!
//! Every function here is a total transformation: any raw reading, however
//! malformed, resolves to a valid [`IndicatorDetail`]. Missing or
//! unparsable data degrades to HOLD with an explanatory meaning.

use serde_json::{json, Value};

use crate::analysis::types::{IndicatorDetail, Recommendation};

/// Extract a usable numeric value from a provider reading.
///
/// Probes a fixed list of candidate keys in order, then falls back to the
/// node itself being a bare number.
pub fn extract_numeric(node: &Value) -> Option<f64> {
    for key in ["value", "price", "close", "macd"] {
        if let Some(v) = node.get(key).and_then(Value::as_f64) {
            return Some(v);
        }
    }
    node.as_f64()
}

/// RSI oscillator (0-100). Oversold below 40, overbought above 70.
pub fn interpret_rsi(value: Option<f64>) -> IndicatorDetail {
    let Some(v) = value else {
        return IndicatorDetail {
            value: Value::Null,
            meaning: "RSI not available".to_string(),
            recommendation: Recommendation::Hold,
        };
    };

    let (meaning, recommendation) = if v < 30.0 {
        (
            format!("RSI {v:.2}: Deep/strong oversold conditions often indicate a potential bullish reversal. Contrarian traders may see buying opportunity."),
            Recommendation::Buy,
        )
    } else if v < 40.0 {
        (
            format!("RSI {v:.2}: Mildly oversold; watch for reversal signals and confirm with volume and other indicators."),
            Recommendation::Buy,
        )
    } else if v <= 60.0 {
        (
            format!("RSI {v:.2}: Neutral zone - the market is balanced between buyers and sellers."),
            Recommendation::Hold,
        )
    } else if v <= 70.0 {
        (
            format!("RSI {v:.2}: Mildly overbought; monitor for weakening momentum."),
            Recommendation::Hold,
        )
    } else {
        (
            format!("RSI {v:.2}: Overbought conditions suggest possible pullback or correction; risk of near-term selling."),
            Recommendation::Sell,
        )
    };

    IndicatorDetail {
        value: json!(v),
        meaning,
        recommendation,
    }
}

/// Simple moving average compared against the live price.
pub fn interpret_sma(sma: Option<f64>, price: Option<f64>) -> IndicatorDetail {
    let (Some(sma), Some(price)) = (sma, price) else {
        return IndicatorDetail {
            value: Value::Null,
            meaning: "SMA or price not available".to_string(),
            recommendation: Recommendation::Hold,
        };
    };

    let (meaning, recommendation) = if price > sma {
        (
            format!("Price ({price:.2}) above SMA ({sma:.2}): short-to-mid-term momentum is bullish."),
            Recommendation::Buy,
        )
    } else if price < sma {
        (
            format!("Price ({price:.2}) below SMA ({sma:.2}): short-to-mid-term momentum is bearish."),
            Recommendation::Sell,
        )
    } else {
        (
            "Price equals SMA: neutral trend.".to_string(),
            Recommendation::Hold,
        )
    };

    IndicatorDetail {
        value: json!(sma),
        meaning,
        recommendation,
    }
}

/// Exponential moving average compared against the live price.
pub fn interpret_ema(ema: Option<f64>, price: Option<f64>) -> IndicatorDetail {
    let (Some(ema), Some(price)) = (ema, price) else {
        return IndicatorDetail {
            value: Value::Null,
            meaning: "EMA or price not available".to_string(),
            recommendation: Recommendation::Hold,
        };
    };

    let (meaning, recommendation) = if price > ema {
        (
            format!("Price ({price:.2}) above EMA ({ema:.2}): recent momentum bullish."),
            Recommendation::Buy,
        )
    } else if price < ema {
        (
            format!("Price ({price:.2}) below EMA ({ema:.2}): recent momentum bearish."),
            Recommendation::Sell,
        )
    } else {
        (
            "Price equals EMA: neutral short-term momentum.".to_string(),
            Recommendation::Hold,
        )
    };

    IndicatorDetail {
        value: json!(ema),
        meaning,
        recommendation,
    }
}

/// MACD crossover. The reading may carry `macd`, `signal`, and `histogram`;
/// a missing `signal` defaults to 0 and a missing `histogram` to
/// `macd - signal`. The verdict keeps the raw node as its value.
pub fn interpret_macd(node: &Value) -> IndicatorDetail {
    let macd = node
        .get("macd")
        .and_then(Value::as_f64)
        .or_else(|| node.as_f64());

    let Some(macd) = macd else {
        return IndicatorDetail {
            value: node.clone(),
            meaning: "MACD not available".to_string(),
            recommendation: Recommendation::Hold,
        };
    };

    let signal = node.get("signal").and_then(Value::as_f64).unwrap_or(0.0);
    let hist = node
        .get("histogram")
        .and_then(Value::as_f64)
        .unwrap_or(macd - signal);

    let mut meaning = format!("MACD = {macd:.4}, Signal = {signal:.4}, Histogram = {hist:.4}. ");

    let recommendation = if macd > signal && hist > 0.0 {
        meaning.push_str(
            "MACD above signal and positive histogram indicates bullish momentum and potential continuation.",
        );
        Recommendation::Buy
    } else if macd < signal && hist < 0.0 {
        meaning.push_str(
            "MACD below signal and negative histogram indicates bearish momentum and potential continuation.",
        );
        Recommendation::Sell
    } else {
        meaning.push_str("Mixed MACD signals; treat with caution and confirm with other indicators.");
        Recommendation::Hold
    };

    IndicatorDetail {
        value: node.clone(),
        meaning,
        recommendation,
    }
}
