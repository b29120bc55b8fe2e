//! HTTP presentation boundary.
//!
//! Exposes the rule-based aggregation and the AI escalation over axum.
//! Provider/LLM outages map to 502; malformed AI content is not an error
//! (the escalation layer already degraded it to a HOLD fallback).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::analysis::aggregator::Aggregator;
use crate::analysis::types::StockAnalysis;
use crate::llm::Analyst;

pub struct AppState {
    pub aggregator: Aggregator,
    pub analyst: Analyst,
}

pub async fn run_server(state: Arc<AppState>, bind_addr: &str) {
    let app = Router::new()
        .route("/analysis/{symbol}", get(analyze))
        .route("/ai-analysis/{symbol}", get(ai_analyze))
        .route("/ai-analysis", post(ai_analyze_record))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await.unwrap();
    info!("API server listening on {}", bind_addr);
    axum::serve(listener, app).await.unwrap();
}

/// Rule-based aggregation (no AI) - returns the merged analysis record.
async fn analyze(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> impl IntoResponse {
    match state.aggregator.analyze(&symbol).await {
        Ok(analysis) => Json(analysis).into_response(),
        Err(err) => {
            error!("Rule-based analysis failed for {}: {}", symbol, err);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

/// Aggregate, then escalate to the AI for the final decision.
async fn ai_analyze(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> impl IntoResponse {
    let analysis = match state.aggregator.analyze(&symbol).await {
        Ok(analysis) => analysis,
        Err(err) => {
            error!("Aggregation failed for {}: {}", symbol, err);
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response();
        }
    };

    match state.analyst.ask_for_decision(&analysis).await {
        Ok(decision) => Json(decision).into_response(),
        Err(err) => {
            error!("AI escalation failed for {}: {}", symbol, err);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

/// Escalate a caller-supplied record (testing hook).
async fn ai_analyze_record(
    State(state): State<Arc<AppState>>,
    Json(analysis): Json<StockAnalysis>,
) -> impl IntoResponse {
    match state.analyst.ask_for_decision(&analysis).await {
        Ok(decision) => Json(decision).into_response(),
        Err(err) => {
            error!("AI escalation failed for {}: {}", analysis.symbol, err);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
