//! Name → structured fact resolvers
//!
//! Each resolver combines a knowledge-table lookup with an optional external
//! fetch. Table misses are hard failures; fetch failures degrade to partial
//! data so the caller can still show identity fields.

mod currency;
mod location;
mod market;

pub use currency::{CurrencyResolver, TARGET_CURRENCIES};
pub use location::LocationResolver;
pub use market::MarketResolver;
