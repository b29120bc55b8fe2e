//! AI escalation: forwards an aggregated analysis to the LLM and parses
//! the constrained JSON reply into a final decision.
//!
//! Malformed replies never surface as errors; they fall back to a HOLD
//! decision carrying the raw text for diagnostics.

use tracing::warn;

use crate::analysis::types::{AiAnalysis, Recommendation, StockAnalysis};
use crate::error::AiError;
use crate::llm::LlmClient;

const SYSTEM_PROMPT: &str = "You are a senior institutional equity analyst.";

pub struct Analyst {
    llm: LlmClient,
}

impl Analyst {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Ask the model for a final decision over the aggregated record.
    ///
    /// Errors only on transport/serialization failures; a reply that is not
    /// strict JSON resolves to the HOLD fallback via [`parse_reply`].
    pub async fn ask_for_decision(&self, analysis: &StockAnalysis) -> Result<AiAnalysis, AiError> {
        let payload = serde_json::to_string(analysis)?;
        let user_prompt = format!(
            "You are an advanced financial analyst. Given the following stock analysis JSON, \
             return ONLY a JSON object in this exact format (no extra text): \
             {{\"symbol\":\"<symbol>\", \"decision\":\"BUY|SELL|HOLD\", \"reasoning\":\"<detailed explanation>\"}}. \
             Use the data to produce a single concise decision and a clear reasoning that references \
             fundamentals and indicators. Now here is the data: {payload}"
        );

        let reply = self.llm.chat(SYSTEM_PROMPT, &user_prompt).await?;
        Ok(parse_reply(&analysis.symbol, &reply))
    }
}

/// Parse the model reply into an [`AiAnalysis`], stripping a Markdown code
/// fence if present. Any parse failure yields the safe HOLD fallback with
/// the raw text preserved in the reasoning.
pub fn parse_reply(symbol: &str, reply: &str) -> AiAnalysis {
    let cleaned = trim_code_fences(reply);
    match serde_json::from_str::<AiAnalysis>(cleaned) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("AI reply for {} was not strict JSON ({}); falling back to HOLD", symbol, err);
            AiAnalysis {
                symbol: symbol.to_string(),
                decision: Recommendation::Hold,
                reasoning: format!("AI did not return strict JSON. Raw response: {cleaned}"),
            }
        }
    }
}

/// Strip a wrapping Markdown code fence (with or without a language tag).
pub fn trim_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
