use financial_insights_agent::{
    agent::FinancialAgent, api::start_server, tools::create_default_registry,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let api_port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("API_PORT"))
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;

    info!("Financial Insights Agent - API Server");
    info!("Port: {}", api_port);

    let agent = Arc::new(FinancialAgent::from_env());
    let registry = Arc::new(create_default_registry());

    info!("Agent initialized");
    info!("Starting API server...");

    start_server(agent, registry, api_port).await?;

    Ok(())
}
