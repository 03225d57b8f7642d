//! Yahoo Finance quote client
//!
//! One-shot pass-through to the v8 chart endpoint; the quote is built from
//! the chart metadata. Yahoo rejects requests without a browser User-Agent.

use super::QuoteFetcher;
use crate::error::AgentError;
use crate::models::QuoteSnapshot;
use crate::Result;
use chrono::{DateTime, Utc};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

pub struct YahooFinanceClient {
    client: Client,
    base_url: String,
}

impl YahooFinanceClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    symbol: String,
    regular_market_price: Option<f64>,
    chart_previous_close: Option<f64>,
    previous_close: Option<f64>,
    regular_market_time: Option<i64>,
}

#[async_trait::async_trait]
impl QuoteFetcher for YahooFinanceClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<QuoteSnapshot> {
        let url = format!("{}/{}", self.base_url, symbol);

        debug!(symbol, "Fetching index quote");

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                AgentError::FetchFailure(format!("quote request failed for {}: {}", symbol, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::FetchFailure(format!(
                "quote provider returned {} for {}",
                status, symbol
            )));
        }

        let body: ChartResponse = response
            .json()
            .await
            .map_err(|e| AgentError::FetchFailure(format!("invalid quote response: {}", e)))?;

        if let Some(error) = body.chart.error {
            return Err(AgentError::FetchFailure(format!(
                "quote provider error for {}: {}",
                symbol, error
            )));
        }

        let meta = body
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0).meta)
                }
            })
            .ok_or_else(|| {
                AgentError::FetchFailure(format!("no chart data for symbol {}", symbol))
            })?;

        quote_from_meta(meta)
    }
}

fn quote_from_meta(meta: ChartMeta) -> Result<QuoteSnapshot> {
    let current_value = meta.regular_market_price.ok_or_else(|| {
        AgentError::FetchFailure(format!("no market price for symbol {}", meta.symbol))
    })?;

    let previous_close = meta
        .chart_previous_close
        .or(meta.previous_close)
        .unwrap_or(current_value);

    let change = current_value - previous_close;
    let change_percent = if previous_close != 0.0 {
        (change / previous_close) * 100.0
    } else {
        0.0
    };

    let as_of = meta
        .regular_market_time
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or(DateTime::UNIX_EPOCH);

    Ok(QuoteSnapshot {
        symbol: meta.symbol,
        current_value,
        previous_close,
        change,
        change_percent,
        as_of,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(price: Option<f64>, prev: Option<f64>) -> ChartMeta {
        ChartMeta {
            symbol: "^N225".to_string(),
            regular_market_price: price,
            chart_previous_close: prev,
            previous_close: None,
            regular_market_time: Some(1700000000),
        }
    }

    #[test]
    fn test_quote_change_computation() {
        let quote = quote_from_meta(meta(Some(33000.0), Some(32500.0))).unwrap();
        assert_eq!(quote.current_value, 33000.0);
        assert_eq!(quote.previous_close, 32500.0);
        assert!((quote.change - 500.0).abs() < f64::EPSILON);
        assert!((quote.change_percent - 1.5384615384615385).abs() < 1e-9);
    }

    #[test]
    fn test_quote_without_previous_close() {
        let quote = quote_from_meta(meta(Some(100.0), None)).unwrap();
        assert_eq!(quote.previous_close, 100.0);
        assert_eq!(quote.change, 0.0);
        assert_eq!(quote.change_percent, 0.0);
    }

    #[test]
    fn test_quote_without_price_fails() {
        assert!(quote_from_meta(meta(None, Some(100.0))).is_err());
    }

    #[test]
    fn test_chart_response_parsing() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": "^GSPC",
                        "regularMarketPrice": 5000.25,
                        "chartPreviousClose": 4980.0,
                        "regularMarketTime": 1700000000
                    }
                }],
                "error": null
            }
        }"#;
        let body: ChartResponse = serde_json::from_str(json).unwrap();
        let meta = &body.chart.result.unwrap()[0].meta;
        assert_eq!(meta.symbol, "^GSPC");
        assert_eq!(meta.regular_market_price, Some(5000.25));
    }
}
