//! Currency resolver: country → currency identity + live exchange rates

use crate::error::AgentError;
use crate::knowledge;
use crate::models::CurrencyReport;
use crate::providers::RateFetcher;
use crate::Result;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Fixed set of rate targets; the base currency is excluded per request.
pub const TARGET_CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "INR"];

pub struct CurrencyResolver {
    fetcher: Arc<dyn RateFetcher>,
}

impl CurrencyResolver {
    pub fn new(fetcher: Arc<dyn RateFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolve a country to its currency and whatever rates were obtainable.
    /// Fails only when the country is absent from the currency table; a
    /// failed rate fetch returns the identity fields with empty rates.
    pub async fn resolve(&self, country: &str) -> Result<CurrencyReport> {
        let info = knowledge::currency_for(country)
            .ok_or_else(|| AgentError::UnknownCountry(country.trim().to_string()))?;

        let targets: Vec<&str> = TARGET_CURRENCIES
            .iter()
            .filter(|&&target| target != info.code)
            .copied()
            .collect();

        let mut report = CurrencyReport {
            country: knowledge::title_case(&knowledge::normalize(country)),
            currency_code: info.code.to_string(),
            currency_name: info.name.to_string(),
            rates: BTreeMap::new(),
            rates_as_of: None,
        };

        match self.fetcher.fetch_rates(info.code, &targets).await {
            Ok(snapshot) => {
                report.rates = snapshot.rates;
                report.rates_as_of = snapshot.as_of;
            }
            Err(e) => {
                warn!(country, error = %e, "Rate fetch failed; returning identity fields only");
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{StaticRateFetcher, UnavailableProvider};

    #[tokio::test]
    async fn test_resolve_with_rates() {
        let fetcher = StaticRateFetcher::new(
            &[("USD", 0.0067), ("EUR", 0.0062), ("GBP", 0.0053), ("INR", 0.56)],
            None,
        );
        let resolver = CurrencyResolver::new(Arc::new(fetcher));

        let report = resolver.resolve("Japan").await.unwrap();
        assert_eq!(report.country, "Japan");
        assert_eq!(report.currency_code, "JPY");
        assert_eq!(report.currency_name, "Japanese Yen");
        assert_eq!(report.rates.len(), 4);
    }

    #[tokio::test]
    async fn test_base_currency_excluded_from_targets() {
        let fetcher = StaticRateFetcher::new(
            &[("USD", 0.012), ("EUR", 0.011), ("GBP", 0.0095), ("INR", 1.0)],
            None,
        );
        let resolver = CurrencyResolver::new(Arc::new(fetcher));

        let report = resolver.resolve("India").await.unwrap();
        assert_eq!(report.currency_code, "INR");
        assert!(!report.rates.contains_key("INR"));
        assert_eq!(report.rates.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_identity_fields() {
        let resolver = CurrencyResolver::new(Arc::new(UnavailableProvider::new("offline")));

        let report = resolver.resolve("japan").await.unwrap();
        assert_eq!(report.currency_code, "JPY");
        assert!(report.rates.is_empty());
        assert!(report.rates_as_of.is_none());
    }

    #[tokio::test]
    async fn test_unknown_country_fails() {
        let resolver = CurrencyResolver::new(Arc::new(UnavailableProvider::new("offline")));

        let result = resolver.resolve("Atlantis").await;
        assert!(matches!(result, Err(AgentError::UnknownCountry(_))));
    }
}
