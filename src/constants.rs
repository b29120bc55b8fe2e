//! Application-wide constants
//!
//! Centralizes the fixed business numbers of the decision engine so they are
//! tuned in one place.

/// Indicator weights for the combined decision score.
///
/// Trend-confirmation indicators outweigh momentum oscillators; the values
/// are fixed business constants, not derived quantities.
pub mod weights {
    pub const RSI: f64 = 1.0;
    pub const SMA: f64 = 1.5;
    pub const EMA: f64 = 1.2;
    pub const MACD: f64 = 1.8;
}

/// Decision thresholds for the weighted score.
///
/// Deliberately asymmetric from zero: a single indicator at the maximum
/// weight (1.8) cannot alone trigger BUY or SELL.
pub mod thresholds {
    pub const BUY_SCORE: f64 = 2.0;
    pub const SELL_SCORE: f64 = -2.0;
}

/// Indicator request specs and map keys.
pub mod indicators {
    /// Map key for the RSI verdict.
    pub const KEY_RSI: &str = "rsi";
    /// Map key for the 20-period simple moving average verdict.
    pub const KEY_SMA: &str = "sma_20";
    /// Map key for the 14-period exponential moving average verdict.
    pub const KEY_EMA: &str = "ema_14";
    /// Map key for the MACD verdict.
    pub const KEY_MACD: &str = "macd";

    /// Provider path specs for the indicator endpoints.
    pub const SPEC_RSI: &str = "rsi";
    pub const SPEC_SMA: &str = "sma:20";
    pub const SPEC_EMA: &str = "ema:14";
    pub const SPEC_MACD: &str = "macd:12:26:9";
}
