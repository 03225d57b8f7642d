//! Aggregator: combines the three resolvers into one report per country
//!
//! The currency and market resolvers run concurrently. The location resolver
//! needs the primary-exchange name from the market table lookup, which is
//! synchronous and cheap, so it never waits on the market network fetch.

use crate::error::AgentError;
use crate::knowledge;
use crate::models::{ReportSection, ResolvedCountryReport, SectionError};
use crate::resolvers::{CurrencyResolver, LocationResolver, MarketResolver};
use crate::Result;
use tracing::{debug, info};

pub struct Aggregator {
    currency: CurrencyResolver,
    market: MarketResolver,
    location: LocationResolver,
}

impl Aggregator {
    pub fn new(
        currency: CurrencyResolver,
        market: MarketResolver,
        location: LocationResolver,
    ) -> Self {
        Self {
            currency,
            market,
            location,
        }
    }

    /// Aggregator wired to the environment-configured providers.
    pub fn from_env() -> Self {
        Self::new(
            CurrencyResolver::new(crate::providers::default_rate_fetcher()),
            MarketResolver::new(crate::providers::default_quote_fetcher()),
            LocationResolver::from_env(),
        )
    }

    /// Resolve one country into a report. Fails only when the country is
    /// absent from every knowledge table; otherwise each failed section is
    /// recorded and the rest of the report is returned.
    pub async fn resolve(&self, country: &str) -> Result<ResolvedCountryReport> {
        let in_currency_table = knowledge::currency_for(country).is_some();
        let market_entry = knowledge::market_for(country);

        if !in_currency_table && market_entry.is_none() {
            return Err(AgentError::UnknownCountry(country.trim().to_string()));
        }

        info!(country, "Resolving country report");

        // Location only needs the table-lookup side of the market resolver.
        let location_result = match market_entry {
            Some(market) => self.location.resolve(market.primary_exchange),
            None => Err(AgentError::UnknownCountry(country.trim().to_string())),
        };

        let (currency_result, market_result) = tokio::join!(
            self.currency.resolve(country),
            self.market.resolve(country),
        );

        let mut report = ResolvedCountryReport {
            country: knowledge::title_case(&knowledge::normalize(country)),
            currency: None,
            market: None,
            location: None,
            errors: Vec::new(),
        };

        match currency_result {
            Ok(currency) => report.currency = Some(currency),
            Err(e) => report.errors.push(SectionError {
                section: ReportSection::Currency,
                message: e.to_string(),
            }),
        }

        match market_result {
            Ok(market) => report.market = Some(market),
            Err(e) => report.errors.push(SectionError {
                section: ReportSection::Market,
                message: e.to_string(),
            }),
        }

        match location_result {
            Ok(location) => report.location = Some(location),
            Err(e) => report.errors.push(SectionError {
                section: ReportSection::Location,
                message: e.to_string(),
            }),
        }

        debug!(
            country = %report.country,
            sections_failed = report.errors.len(),
            "Country report assembled"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteSnapshot;
    use crate::providers::{StaticQuoteFetcher, StaticRateFetcher, UnavailableProvider};
    use chrono::{DateTime, Utc};
    use std::sync::Arc;

    fn quote(symbol: &str, value: f64) -> QuoteSnapshot {
        QuoteSnapshot {
            symbol: symbol.to_string(),
            current_value: value,
            previous_close: value,
            change: 0.0,
            change_percent: 0.0,
            as_of: DateTime::<Utc>::from_timestamp(1700000000, 0).unwrap(),
        }
    }

    fn offline_aggregator() -> Aggregator {
        Aggregator::new(
            CurrencyResolver::new(Arc::new(UnavailableProvider::new("offline"))),
            MarketResolver::new(Arc::new(UnavailableProvider::new("offline"))),
            LocationResolver::new(None),
        )
    }

    fn static_aggregator() -> Aggregator {
        let rates = StaticRateFetcher::new(
            &[("USD", 0.0067), ("EUR", 0.0062), ("GBP", 0.0053), ("INR", 0.56)],
            Some(DateTime::<Utc>::from_timestamp(1700000000, 0).unwrap()),
        );
        let quotes = StaticQuoteFetcher::new(vec![
            quote("^N225", 33000.0),
            quote("^TOPX", 2400.0),
            quote("^JPN400", 21000.0),
        ]);
        Aggregator::new(
            CurrencyResolver::new(Arc::new(rates)),
            MarketResolver::new(Arc::new(quotes)),
            LocationResolver::new(None),
        )
    }

    #[tokio::test]
    async fn test_unknown_country_is_a_single_failure() {
        let aggregator = offline_aggregator();
        let result = aggregator.resolve("Atlantis").await;
        match result {
            Err(AgentError::UnknownCountry(name)) => assert_eq!(name, "Atlantis"),
            other => panic!("expected UnknownCountry, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_known_country_with_dead_providers_keeps_identity_fields() {
        let aggregator = offline_aggregator();
        let report = aggregator.resolve("Japan").await.unwrap();

        let currency = report.currency.unwrap();
        assert_eq!(currency.currency_code, "JPY");
        assert!(currency.rates.is_empty());

        let market = report.market.unwrap();
        assert_eq!(market.primary_exchange, "Tokyo Stock Exchange");
        assert!(market.indices.is_empty());

        // Location is table-only, so it resolves even fully offline.
        let location = report.location.unwrap();
        assert_eq!(location.exchange, "Tokyo Stock Exchange");
        assert!(report.errors.is_empty());
    }

    #[tokio::test]
    async fn test_full_report() {
        let aggregator = static_aggregator();
        let report = aggregator.resolve("japan").await.unwrap();

        assert_eq!(report.country, "Japan");
        let currency = report.currency.as_ref().unwrap();
        assert_eq!(currency.rates.len(), 4);
        let market = report.market.as_ref().unwrap();
        assert_eq!(market.indices.len(), 3);
        let location = report.location.as_ref().unwrap();
        assert_eq!(location.exchange, "Tokyo Stock Exchange");
    }

    #[tokio::test]
    async fn test_one_sided_knowledge_yields_partial_report() {
        // The Netherlands has a market entry but no currency entry; the
        // report carries the market and location sections plus one
        // currency section error, not an UnknownCountry failure.
        let aggregator = offline_aggregator();
        let report = aggregator.resolve("Netherlands").await.unwrap();

        assert!(report.currency.is_none());
        assert!(report.market.is_some());
        assert!(report.location.is_some());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].section, ReportSection::Currency);
    }

    #[tokio::test]
    async fn test_identical_inputs_serialize_identically() {
        let aggregator = static_aggregator();
        let first = aggregator.resolve("Japan").await.unwrap();
        let second = aggregator.resolve("Japan").await.unwrap();

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[tokio::test]
    async fn test_location_follows_primary_exchange_for_every_country() {
        let aggregator = offline_aggregator();
        for alias in knowledge::known_countries() {
            if knowledge::market_for(alias).is_some() {
                let report = aggregator.resolve(alias).await.unwrap();
                assert!(
                    report.location.is_some(),
                    "location section missing for {:?}",
                    alias
                );
            }
        }
    }
}
