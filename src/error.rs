//! Custom error types for the aggregation service
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>.
//! Field-level fetch failures and malformed AI replies are recovered
//! locally and never appear here; these variants cover the genuine
//! collaborator-outage cases only.

use thiserror::Error;

/// Errors from the StockDetails market-data provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("StockDetails API unreachable for {symbol}: every fetch failed")]
    Unavailable { symbol: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors from the AI escalation path.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("LLM request failed: {0}")]
    Request(#[from] async_openai::error::OpenAIError),

    #[error("Failed to serialize analysis for the AI prompt: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Aggregation failed before AI escalation: {0}")]
    Provider(#[from] ProviderError),
}
