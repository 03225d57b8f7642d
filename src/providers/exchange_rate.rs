//! ExchangeRate-API client
//!
//! One-shot pass-through to the v6 `latest` endpoint. Uses a long-lived
//! reqwest::Client for connection pooling.

use super::RateFetcher;
use crate::error::AgentError;
use crate::models::ExchangeRateSnapshot;
use crate::Result;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

pub struct ExchangeRateClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ExchangeRateClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build a client from `EXCHANGERATE_API_KEY`, or None when unset.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("EXCHANGERATE_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        Some(Self::new(api_key))
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
    time_last_update_unix: Option<i64>,
}

#[async_trait::async_trait]
impl RateFetcher for ExchangeRateClient {
    async fn fetch_rates(&self, base: &str, targets: &[&str]) -> Result<ExchangeRateSnapshot> {
        let url = format!("{}/{}/latest/{}", self.base_url, self.api_key, base);

        debug!(base_currency = base, "Fetching exchange rates");

        let response = self.client.get(&url).send().await.map_err(|e| {
            AgentError::FetchFailure(format!("exchange rate request failed for {}: {}", base, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::FetchFailure(format!(
                "exchange rate provider returned {} for {}",
                status, base
            )));
        }

        let body: LatestRatesResponse = response.json().await.map_err(|e| {
            AgentError::FetchFailure(format!("invalid exchange rate response: {}", e))
        })?;

        if body.result != "success" {
            return Err(AgentError::FetchFailure(format!(
                "exchange rate provider error: {}",
                body.error_type.as_deref().unwrap_or("unknown error")
            )));
        }

        let rates = body
            .conversion_rates
            .into_iter()
            .filter(|(code, _)| targets.contains(&code.as_str()))
            .collect();

        Ok(ExchangeRateSnapshot {
            base_currency: base.to_string(),
            rates,
            as_of: body
                .time_last_update_unix
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "result": "success",
            "time_last_update_unix": 1700000000,
            "conversion_rates": {"USD": 0.0067, "EUR": 0.0062, "GBP": 0.0053}
        }"#;
        let body: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.result, "success");
        assert_eq!(body.conversion_rates.len(), 3);
        assert_eq!(body.time_last_update_unix, Some(1700000000));
    }

    #[test]
    fn test_error_response_parsing() {
        let json = r#"{"result": "error", "error-type": "invalid-key"}"#;
        let body: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.result, "error");
        assert_eq!(body.error_type.as_deref(), Some("invalid-key"));
        assert!(body.conversion_rates.is_empty());
    }
}
