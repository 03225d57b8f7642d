//! Financial information agent
//!
//! Classifies the incoming query, runs the aggregator for country lookups,
//! and renders the answer. When a Gemini client is configured the rendered
//! data is narrated by the LLM; the deterministic markdown template is the
//! fallback, so the agent stays functional without any LLM key.

use crate::aggregator::Aggregator;
use crate::classifier::{InteractionClassifier, InteractionType};
use crate::gemini::GeminiClient;
use crate::knowledge;
use crate::models::{
    AgentReply, AnswerSource, CurrencyReport, LocationReport, MarketReport, ResolvedCountryReport,
};
use crate::Result;
use tracing::{info, warn};

pub mod prompts;

pub struct FinancialAgent {
    aggregator: Aggregator,
    gemini: Option<GeminiClient>,
}

impl FinancialAgent {
    pub fn new(aggregator: Aggregator, gemini: Option<GeminiClient>) -> Self {
        Self { aggregator, gemini }
    }

    /// Agent wired to the environment-configured providers and LLM.
    pub fn from_env() -> Self {
        Self::new(Aggregator::from_env(), GeminiClient::from_env())
    }

    /// Resolve a country directly, bypassing classification and narration.
    pub async fn report(&self, country: &str) -> Result<ResolvedCountryReport> {
        self.aggregator.resolve(country).await
    }

    /// Process a free-text user query.
    pub async fn query(&self, user_input: &str) -> Result<AgentReply> {
        match InteractionClassifier::classify(user_input) {
            InteractionType::CountryLookup(country) => {
                info!(country = %country, "Handling country lookup");

                let report = self.aggregator.resolve(&country).await?;
                let rendered = render_report(&report);

                if let Some(gemini) = &self.gemini {
                    let report_json = serde_json::to_string_pretty(&report)?;
                    let prompt = prompts::narration_prompt(&report.country, &report_json);
                    match gemini.generate(prompts::SYSTEM_PROMPT, &prompt).await {
                        Ok((answer, _confidence)) => {
                            return Ok(AgentReply {
                                answer,
                                source: AnswerSource::Gemini,
                                report: Some(report),
                            });
                        }
                        Err(e) => {
                            warn!(error = %e, "LLM narration failed; using template answer");
                        }
                    }
                }

                Ok(AgentReply {
                    answer: rendered,
                    source: AnswerSource::Template,
                    report: Some(report),
                })
            }
            InteractionType::GeneralQuery => {
                info!("Handling general query");

                if let Some(gemini) = &self.gemini {
                    match gemini.generate(prompts::SYSTEM_PROMPT, user_input).await {
                        Ok((answer, _confidence)) => {
                            return Ok(AgentReply {
                                answer,
                                source: AnswerSource::Gemini,
                                report: None,
                            });
                        }
                        Err(e) => {
                            warn!(error = %e, "LLM answer failed; asking for a country name");
                        }
                    }
                }

                Ok(AgentReply {
                    answer: "Please specify a country name in your query (e.g. 'Japan', \
                             'India', 'United States')."
                        .to_string(),
                    source: AnswerSource::Template,
                    report: None,
                })
            }
        }
    }
}

/// Render the deterministic markdown answer for a resolved report.
pub fn render_report(report: &ResolvedCountryReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Financial Information for {}\n\n", report.country));

    if let Some(currency) = &report.currency {
        render_currency(&mut out, currency);
    }
    if let Some(market) = &report.market {
        render_market(&mut out, market);
    }
    if let Some(location) = &report.location {
        render_location(&mut out, location);
    }

    for error in &report.errors {
        out.push_str(&format!(
            "_{} information unavailable: {}_\n\n",
            knowledge::title_case(&error.section.to_string()),
            error.message
        ));
    }

    out
}

fn render_currency(out: &mut String, currency: &CurrencyReport) {
    out.push_str(&format!(
        "**Currency Information for {}**\n\n",
        currency.country
    ));
    out.push_str(&format!(
        "Currency: {} ({})\n\n",
        currency.currency_name, currency.currency_code
    ));

    if currency.rates.is_empty() {
        out.push_str("Exchange rates: Not available\n\n");
    } else {
        out.push_str(&format!(
            "**Exchange Rates (1 {} = ):**\n",
            currency.currency_code
        ));
        for (code, rate) in &currency.rates {
            out.push_str(&format!("- {}: {:.4}\n", code, rate));
        }
        if let Some(as_of) = currency.rates_as_of {
            out.push_str(&format!("\nLast Updated: {}\n", as_of.to_rfc3339()));
        }
        out.push('\n');
    }
}

fn render_market(out: &mut String, market: &MarketReport) {
    out.push_str(&format!(
        "**Stock Market Information for {}**\n\n",
        market.country
    ));

    out.push_str("**Stock Exchanges:**\n");
    for exchange in &market.exchanges {
        out.push_str(&format!("- {}\n", exchange));
    }
    out.push_str(&format!("\n**Primary Exchange:** {}\n", market.primary_exchange));
    out.push_str(&format!(
        "**Headquarters Location:** {}\n\n",
        market.hq_location
    ));

    if market.indices.is_empty() {
        out.push_str("Index values: Not available\n\n");
        return;
    }

    out.push_str("**Major Stock Indices:**\n\n");
    for index in &market.indices {
        let change_symbol = if index.change >= 0.0 { "▲" } else { "▼" };
        out.push_str(&format!("**{}** ({})\n", index.name, index.symbol));
        out.push_str(&format!(
            "- Current Value: {}\n",
            format_thousands(index.current_value)
        ));
        out.push_str(&format!(
            "- Change: {} {} ({:+.2}%)\n",
            change_symbol,
            format_thousands(index.change.abs()),
            index.change_percent
        ));
        out.push_str(&format!(
            "- Previous Close: {}\n",
            format_thousands(index.previous_close)
        ));
        out.push_str(&format!("- Last Updated: {}\n\n", index.as_of.to_rfc3339()));
    }
}

fn render_location(out: &mut String, location: &LocationReport) {
    out.push_str("---\n\n**Stock Exchange Location:**\n\n");
    out.push_str(&format!("Exchange: {}\n\n", location.exchange));
    out.push_str(&format!("Address: {}\n\n", location.address));
    out.push_str(&format!(
        "Coordinates: {}, {}\n\n",
        location.latitude, location.longitude
    ));
    out.push_str(&format!("Map: {}\n\n", location.map_url));
}

/// Format a value with two decimals and thousands separators (33000.5 →
/// "33,000.50").
fn format_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, decimals) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteSnapshot;
    use crate::providers::{StaticQuoteFetcher, StaticRateFetcher, UnavailableProvider};
    use crate::resolvers::{CurrencyResolver, LocationResolver, MarketResolver};
    use chrono::{DateTime, Utc};
    use std::sync::Arc;

    fn offline_agent() -> FinancialAgent {
        let aggregator = Aggregator::new(
            CurrencyResolver::new(Arc::new(UnavailableProvider::new("offline"))),
            MarketResolver::new(Arc::new(UnavailableProvider::new("offline"))),
            LocationResolver::new(None),
        );
        FinancialAgent::new(aggregator, None)
    }

    fn static_agent() -> FinancialAgent {
        let rates = StaticRateFetcher::new(
            &[("USD", 0.0067), ("EUR", 0.0062), ("GBP", 0.0053), ("INR", 0.56)],
            Some(DateTime::<Utc>::from_timestamp(1700000000, 0).unwrap()),
        );
        let quotes = StaticQuoteFetcher::new(vec![QuoteSnapshot {
            symbol: "^N225".to_string(),
            current_value: 33000.5,
            previous_close: 32500.0,
            change: 500.5,
            change_percent: 1.54,
            as_of: DateTime::<Utc>::from_timestamp(1700000000, 0).unwrap(),
        }]);
        let aggregator = Aggregator::new(
            CurrencyResolver::new(Arc::new(rates)),
            MarketResolver::new(Arc::new(quotes)),
            LocationResolver::new(None),
        );
        FinancialAgent::new(aggregator, None)
    }

    #[tokio::test]
    async fn test_query_renders_template_without_llm() {
        let agent = static_agent();
        let reply = agent.query("give me details for Japan").await.unwrap();

        assert_eq!(reply.source, AnswerSource::Template);
        assert!(reply.answer.contains("# Financial Information for Japan"));
        assert!(reply.answer.contains("Japanese Yen (JPY)"));
        assert!(reply.answer.contains("**Nikkei 225** (^N225)"));
        assert!(reply.answer.contains("33,000.50"));
        assert!(reply.answer.contains("Tokyo Stock Exchange"));
        assert!(reply.report.is_some());
    }

    #[tokio::test]
    async fn test_unrecognized_input_falls_back_to_hint() {
        let agent = offline_agent();
        // "Atlantis" is not a known country, so this is a general query that
        // falls back to the country-name hint without an LLM.
        let reply = agent.query("Atlantis").await.unwrap();
        assert_eq!(reply.source, AnswerSource::Template);
        assert!(reply.answer.contains("specify a country name"));
        assert!(reply.report.is_none());
    }

    #[tokio::test]
    async fn test_offline_report_still_renders_identity_fields() {
        let agent = offline_agent();
        let reply = agent.query("India").await.unwrap();

        assert!(reply.answer.contains("Indian Rupee (INR)"));
        assert!(reply.answer.contains("Exchange rates: Not available"));
        assert!(reply.answer.contains("Index values: Not available"));
        assert!(reply.answer.contains("National Stock Exchange of India"));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(33000.5), "33,000.50");
        assert_eq!(format_thousands(999.999), "1,000.00");
        assert_eq!(format_thousands(5.0), "5.00");
        assert_eq!(format_thousands(-1234.5), "-1,234.50");
        assert_eq!(format_thousands(1234567.0), "1,234,567.00");
    }
}
