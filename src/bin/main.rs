use financial_insights_agent::agent::FinancialAgent;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let country = std::env::args().nth(1).unwrap_or_else(|| "Japan".to_string());

    info!(country = %country, "Financial Insights Agent starting");

    let agent = FinancialAgent::from_env();

    match agent.query(&country).await {
        Ok(reply) => {
            println!("{}", reply.answer);
            Ok(())
        }
        Err(e) => {
            eprintln!("Resolution failed: {}", e);
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}
