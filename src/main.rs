use std::sync::Arc;
use tracing::info;

use stock_aggregator::analysis::aggregator::Aggregator;
use stock_aggregator::api::{run_server, AppState};
use stock_aggregator::config::AppConfig;
use stock_aggregator::data::stock_details::StockDetailsClient;
use stock_aggregator::llm::{Analyst, LlmClient};

#[tokio::main]
async fn main() {
    // Setup Logging
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Secrets come from .env / environment
    dotenvy::dotenv().ok();

    info!("Starting Stock Aggregator...");

    // Load Configuration
    let config = AppConfig::load();
    info!("StockDetails base URL: {}", config.stock_details.base_url);
    if let Some(url) = &config.llm.base_url {
        info!("Using custom OpenAI-compatible base URL: {}", url);
    }
    info!("Using LLM model: {}", config.llm.model);

    // Initialize Clients
    let llm_client = LlmClient::new(
        config.openrouter_api_key(),
        config.llm.base_url.clone(),
        config.llm.model.clone(),
    );
    let provider = StockDetailsClient::new(config.stock_details.base_url.clone());

    let state = Arc::new(AppState {
        aggregator: Aggregator::new(provider),
        analyst: Analyst::new(llm_client),
    });

    // Start API Server
    info!("Initializing API server...");
    run_server(state, &config.server.bind_addr).await;
}
