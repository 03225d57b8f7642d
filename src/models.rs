//! Core data models for the financial insights agent

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

//
// ================= Provider Snapshots =================
//

/// Live exchange rates for one base currency, as returned by the rate provider.
/// Fetched per request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRateSnapshot {
    pub base_currency: String,
    /// target currency code → rate. BTreeMap keeps serialization order stable.
    pub rates: BTreeMap<String, f64>,
    pub as_of: Option<DateTime<Utc>>,
}

/// A single index quote as returned by the market-data provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub symbol: String,
    pub current_value: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
    pub as_of: DateTime<Utc>,
}

/// A quote tagged with the index display name from the market table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexQuote {
    pub name: String,
    pub symbol: String,
    pub current_value: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
    pub as_of: DateTime<Utc>,
}

impl IndexQuote {
    pub fn from_snapshot(name: &str, quote: QuoteSnapshot) -> Self {
        Self {
            name: name.to_string(),
            symbol: quote.symbol,
            current_value: quote.current_value,
            previous_close: quote.previous_close,
            change: quote.change,
            change_percent: quote.change_percent,
            as_of: quote.as_of,
        }
    }
}

//
// ================= Section Reports =================
//

/// Currency identity merged with whatever rate snapshot was obtainable.
/// `rates` may be empty when the rate fetch failed; identity fields are
/// always present for a known country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyReport {
    pub country: String,
    pub currency_code: String,
    pub currency_name: String,
    pub rates: BTreeMap<String, f64>,
    pub rates_as_of: Option<DateTime<Utc>>,
}

/// Exchange and index identity merged with the quotes that resolved.
/// `indices` holds only successfully fetched quotes, in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReport {
    pub country: String,
    pub exchanges: Vec<String>,
    pub primary_exchange: String,
    pub hq_location: String,
    pub indices: Vec<IndexQuote>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationReport {
    pub exchange: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub map_url: String,
}

//
// ================= Aggregate Report =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportSection {
    Currency,
    Market,
    Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionError {
    pub section: ReportSection,
    pub message: String,
}

/// The structured answer for one country. Each section is independently
/// optional; an absent section has a matching entry in `errors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedCountryReport {
    pub country: String,
    pub currency: Option<CurrencyReport>,
    pub market: Option<MarketReport>,
    pub location: Option<LocationReport>,
    pub errors: Vec<SectionError>,
}

//
// ================= Tool I/O =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInput {
    pub tool_name: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub success: bool,
    pub data: serde_json::Value,
    pub error: Option<String>,
}

//
// ================= Agent Reply =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    Gemini,
    Template,
}

/// Response from the agent layer: a rendered markdown answer plus the raw
/// report when the query resolved to a country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReply {
    pub answer: String,
    pub source: AnswerSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ResolvedCountryReport>,
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportSection::Currency => "currency",
            ReportSection::Market => "market",
            ReportSection::Location => "location",
        };
        write!(f, "{}", s)
    }
}
