//! Market resolver: country → exchanges, indices, and live index values

use crate::error::AgentError;
use crate::knowledge;
use crate::models::{IndexQuote, MarketReport};
use crate::providers::QuoteFetcher;
use crate::Result;
use std::sync::Arc;
use tracing::warn;

pub struct MarketResolver {
    fetcher: Arc<dyn QuoteFetcher>,
}

impl MarketResolver {
    pub fn new(fetcher: Arc<dyn QuoteFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolve a country to its market facts and live index quotes.
    ///
    /// Quote fetches run concurrently, one per index symbol, and are awaited
    /// in table order so the result sequence is deterministic. A failing
    /// symbol is dropped; it never blocks the other indices.
    pub async fn resolve(&self, country: &str) -> Result<MarketReport> {
        let info = knowledge::market_for(country)
            .ok_or_else(|| AgentError::UnknownCountry(country.trim().to_string()))?;

        let mut fetches = Vec::with_capacity(info.indices.len());
        for index in &info.indices {
            let fetcher = Arc::clone(&self.fetcher);
            let symbol = index.symbol;
            fetches.push((
                index.name,
                tokio::spawn(async move { fetcher.fetch_quote(symbol).await }),
            ));
        }

        let mut indices = Vec::with_capacity(fetches.len());
        for (name, handle) in fetches {
            match handle.await {
                Ok(Ok(quote)) => indices.push(IndexQuote::from_snapshot(name, quote)),
                Ok(Err(e)) => {
                    warn!(index = name, error = %e, "Index quote fetch failed; omitting");
                }
                Err(e) => {
                    warn!(index = name, error = %e, "Index quote task failed; omitting");
                }
            }
        }

        Ok(MarketReport {
            country: knowledge::title_case(&knowledge::normalize(country)),
            exchanges: info.exchanges.iter().map(|e| e.to_string()).collect(),
            primary_exchange: info.primary_exchange.to_string(),
            hq_location: info.hq_location.to_string(),
            indices,
        })
    }
}
