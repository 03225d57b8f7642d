//! Tool trait and registry
//!
//! Tools expose the resolvers as agent-callable operations with JSON
//! parameter schemas, so an LLM (or any other caller) can invoke them by
//! name with a parameter object.

use crate::error::AgentError;
use crate::models::{ToolInput, ToolOutput};
use crate::providers::{default_quote_fetcher, default_rate_fetcher};
use crate::resolvers::{CurrencyResolver, LocationResolver, MarketResolver};
use crate::Result;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for a single tool (deterministic execution)
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn parameters_schema(&self) -> Value;
    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput>;
}

/// Tool registry for looking up and executing tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn list(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Tool descriptors (name, description, parameter schema), sorted by
    /// name for a stable listing.
    pub fn descriptors(&self) -> Vec<Value> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_by_key(|t| t.name());
        tools
            .into_iter()
            .map(|t| {
                json!({
                    "name": t.name(),
                    "description": t.description(),
                    "parameters": t.parameters_schema(),
                })
            })
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn string_param_schema(param: &'static str, description: &'static str) -> Value {
    json!({
        "type": "object",
        "properties": {
            param: {
                "type": "string",
                "description": description,
            }
        },
        "required": [param]
    })
}

fn require_param(input: &ToolInput, key: &str) -> Result<String> {
    if !input.parameters.is_object() {
        return Err(AgentError::InvalidToolInput(
            "tool parameters must be a JSON object".to_string(),
        ));
    }

    input
        .parameters
        .get(key)
        .and_then(|v| v.as_str())
        .or_else(|| input.parameters.get("query").and_then(|v| v.as_str()))
        .map(|s| s.to_string())
        .ok_or_else(|| {
            AgentError::InvalidToolInput(format!("Expected '{}' (or 'query') in tool input", key))
        })
}

pub struct CurrencyInfoTool {
    resolver: Arc<CurrencyResolver>,
}

impl CurrencyInfoTool {
    pub fn new(resolver: Arc<CurrencyResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait::async_trait]
impl Tool for CurrencyInfoTool {
    fn name(&self) -> &'static str {
        "get_currency_info"
    }

    fn description(&self) -> &'static str {
        "Get currency and exchange rate information for a country. Returns currency name, code, and real-time exchange rates to USD, EUR, GBP, and INR."
    }

    fn parameters_schema(&self) -> Value {
        string_param_schema(
            "country_name",
            "Name of the country (e.g., 'Japan', 'India', 'United States')",
        )
    }

    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput> {
        let country = require_param(input, "country_name")?;
        let report = self.resolver.resolve(&country).await?;

        Ok(ToolOutput {
            success: true,
            data: serde_json::to_value(report)?,
            error: None,
        })
    }
}

pub struct StockMarketTool {
    resolver: Arc<MarketResolver>,
}

impl StockMarketTool {
    pub fn new(resolver: Arc<MarketResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait::async_trait]
impl Tool for StockMarketTool {
    fn name(&self) -> &'static str {
        "get_stock_market_info"
    }

    fn description(&self) -> &'static str {
        "Get stock market information for a country including exchanges, major indices, and current index values from Yahoo Finance."
    }

    fn parameters_schema(&self) -> Value {
        string_param_schema(
            "country_name",
            "Name of the country (e.g., 'Japan', 'India', 'United States')",
        )
    }

    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput> {
        let country = require_param(input, "country_name")?;
        let report = self.resolver.resolve(&country).await?;

        Ok(ToolOutput {
            success: true,
            data: serde_json::to_value(report)?,
            error: None,
        })
    }
}

pub struct ExchangeLocationTool {
    resolver: Arc<LocationResolver>,
}

impl ExchangeLocationTool {
    pub fn new(resolver: Arc<LocationResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait::async_trait]
impl Tool for ExchangeLocationTool {
    fn name(&self) -> &'static str {
        "get_exchange_location"
    }

    fn description(&self) -> &'static str {
        "Get the headquarters location and map embed URL for a stock exchange."
    }

    fn parameters_schema(&self) -> Value {
        string_param_schema(
            "exchange_name",
            "Name of the stock exchange (e.g., 'Tokyo Stock Exchange', 'New York Stock Exchange')",
        )
    }

    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput> {
        let exchange = require_param(input, "exchange_name")?;
        let report = self.resolver.resolve(&exchange)?;

        Ok(ToolOutput {
            success: true,
            data: serde_json::to_value(report)?,
            error: None,
        })
    }
}

/// Create the default registry with the three resolver-backed tools, wired
/// to the environment-configured providers.
pub fn create_default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(CurrencyInfoTool::new(Arc::new(
        CurrencyResolver::new(default_rate_fetcher()),
    ))));
    registry.register(Arc::new(StockMarketTool::new(Arc::new(
        MarketResolver::new(default_quote_fetcher()),
    ))));
    registry.register(Arc::new(ExchangeLocationTool::new(Arc::new(
        LocationResolver::from_env(),
    ))));

    registry
}
