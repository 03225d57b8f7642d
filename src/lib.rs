//! Financial Insights Agent
//!
//! Looks up a country and returns its currency with live exchange rates,
//! its stock exchanges with current index values, and the map location of
//! its primary stock exchange:
//! - Static knowledge tables resolve names to identity facts
//! - Three resolvers combine table lookups with external provider fetches
//! - An aggregator merges the resolver outputs into one report, tolerating
//!   partial provider failures
//! - A tool registry and an agent layer expose the resolvers to LLM-driven
//!   callers and to a REST API

pub mod aggregator;
pub mod agent;
pub mod api;
pub mod classifier;
pub mod error;
pub mod gemini;
pub mod knowledge;
pub mod models;
pub mod providers;
pub mod resolvers;
pub mod tools;

pub use error::Result;

// Re-export common types
pub use classifier::{InteractionClassifier, InteractionType};
pub use models::*;
