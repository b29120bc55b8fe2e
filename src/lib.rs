//! Stock Aggregator - indicator interpretation and weighted-decision engine
//!
//! Aggregates price, fundamentals, and technical-indicator data for one
//! symbol from the StockDetails provider, interprets each raw reading into
//! a verdict, combines the verdicts with fixed weights into one overall
//! recommendation, and optionally escalates the aggregated record to an
//! LLM for a reasoned final decision.

pub mod analysis;
pub mod api;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod llm;

// Re-export commonly used types
pub use analysis::aggregator::Aggregator;
pub use analysis::types::{AiAnalysis, IndicatorDetail, Recommendation, StockAnalysis};
pub use config::AppConfig;
pub use error::{AiError, ProviderError};
