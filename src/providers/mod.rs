//! External data provider clients
//!
//! Each provider is reached through a one-shot fetch trait so resolvers can
//! be exercised against canned data. HTTP-backed implementations hold a
//! long-lived pooled client.

use crate::models::{ExchangeRateSnapshot, QuoteSnapshot};
use crate::error::AgentError;
use crate::Result;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

pub mod exchange_rate;
pub mod yahoo;

pub use exchange_rate::ExchangeRateClient;
pub use yahoo::YahooFinanceClient;

/// One-shot exchange-rate fetch: (base currency, target codes) → snapshot.
#[async_trait::async_trait]
pub trait RateFetcher: Send + Sync {
    async fn fetch_rates(&self, base: &str, targets: &[&str]) -> Result<ExchangeRateSnapshot>;
}

/// One-shot index quote fetch, called once per ticker symbol.
#[async_trait::async_trait]
pub trait QuoteFetcher: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<QuoteSnapshot>;
}

/// Rate fetcher from the environment, or an unavailable stand-in when the
/// provider key is missing so the resolver still returns identity fields.
pub fn default_rate_fetcher() -> Arc<dyn RateFetcher> {
    match ExchangeRateClient::from_env() {
        Some(client) => Arc::new(client),
        None => Arc::new(UnavailableProvider::new(
            "EXCHANGERATE_API_KEY is not configured",
        )),
    }
}

/// Quote fetcher for the default registry. Yahoo needs no API key.
pub fn default_quote_fetcher() -> Arc<dyn QuoteFetcher> {
    Arc::new(YahooFinanceClient::new())
}

/// Stand-in for a provider that cannot be reached, e.g. because its API key
/// is not configured. Keeps the resolvers functional; every fetch fails with
/// the configured reason.
pub struct UnavailableProvider {
    reason: String,
}

impl UnavailableProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl RateFetcher for UnavailableProvider {
    async fn fetch_rates(&self, _base: &str, _targets: &[&str]) -> Result<ExchangeRateSnapshot> {
        Err(AgentError::FetchFailure(self.reason.clone()))
    }
}

#[async_trait::async_trait]
impl QuoteFetcher for UnavailableProvider {
    async fn fetch_quote(&self, _symbol: &str) -> Result<QuoteSnapshot> {
        Err(AgentError::FetchFailure(self.reason.clone()))
    }
}

/// Canned rate responses for tests and offline runs.
pub struct StaticRateFetcher {
    rates: BTreeMap<String, f64>,
    as_of: Option<chrono::DateTime<chrono::Utc>>,
}

impl StaticRateFetcher {
    pub fn new(rates: &[(&str, f64)], as_of: Option<chrono::DateTime<chrono::Utc>>) -> Self {
        Self {
            rates: rates
                .iter()
                .map(|&(code, rate)| (code.to_string(), rate))
                .collect(),
            as_of,
        }
    }
}

#[async_trait::async_trait]
impl RateFetcher for StaticRateFetcher {
    async fn fetch_rates(&self, base: &str, targets: &[&str]) -> Result<ExchangeRateSnapshot> {
        let rates = self
            .rates
            .iter()
            .filter(|(code, _)| targets.contains(&code.as_str()))
            .map(|(code, rate)| (code.clone(), *rate))
            .collect();
        Ok(ExchangeRateSnapshot {
            base_currency: base.to_string(),
            rates,
            as_of: self.as_of,
        })
    }
}

/// Canned quote responses for tests and offline runs. Symbols without an
/// entry fail, which is how tests simulate a partial provider outage.
pub struct StaticQuoteFetcher {
    quotes: HashMap<String, QuoteSnapshot>,
}

impl StaticQuoteFetcher {
    pub fn new(quotes: Vec<QuoteSnapshot>) -> Self {
        Self {
            quotes: quotes
                .into_iter()
                .map(|q| (q.symbol.clone(), q))
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl QuoteFetcher for StaticQuoteFetcher {
    async fn fetch_quote(&self, symbol: &str) -> Result<QuoteSnapshot> {
        self.quotes
            .get(symbol)
            .cloned()
            .ok_or_else(|| AgentError::FetchFailure(format!("no data for symbol {}", symbol)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_provider_fails_every_fetch() {
        let provider = UnavailableProvider::new("EXCHANGERATE_API_KEY is not configured");

        let rates = tokio_test::block_on(provider.fetch_rates("JPY", &["USD"]));
        assert!(matches!(rates, Err(AgentError::FetchFailure(_))));

        let quote = tokio_test::block_on(provider.fetch_quote("^N225"));
        assert!(matches!(quote, Err(AgentError::FetchFailure(_))));
    }

    #[test]
    fn test_static_rate_fetcher_filters_targets() {
        let fetcher = StaticRateFetcher::new(
            &[("USD", 0.0067), ("EUR", 0.0062), ("CHF", 0.0059)],
            None,
        );
        let snapshot = tokio_test::block_on(fetcher.fetch_rates("JPY", &["USD", "EUR"])).unwrap();
        assert_eq!(snapshot.rates.len(), 2);
        assert!(snapshot.rates.contains_key("USD"));
        assert!(!snapshot.rates.contains_key("CHF"));
    }
}
