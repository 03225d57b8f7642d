//! Country → currency table (ISO 4217)

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Identifying facts for a country's official currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
}

const fn info(code: &'static str, name: &'static str) -> CurrencyInfo {
    CurrencyInfo { code, name }
}

lazy_static! {
    static ref COUNTRY_CURRENCIES: HashMap<&'static str, CurrencyInfo> = {
        let mut m = HashMap::new();
        m.insert("japan", info("JPY", "Japanese Yen"));
        m.insert("india", info("INR", "Indian Rupee"));
        m.insert("united states", info("USD", "US Dollar"));
        m.insert("usa", info("USD", "US Dollar"));
        m.insert("united kingdom", info("GBP", "British Pound Sterling"));
        m.insert("uk", info("GBP", "British Pound Sterling"));
        m.insert("south korea", info("KRW", "South Korean Won"));
        m.insert("korea", info("KRW", "South Korean Won"));
        m.insert("china", info("CNY", "Chinese Yuan"));
        m.insert("germany", info("EUR", "Euro"));
        m.insert("france", info("EUR", "Euro"));
        m.insert("italy", info("EUR", "Euro"));
        m.insert("spain", info("EUR", "Euro"));
        m.insert("canada", info("CAD", "Canadian Dollar"));
        m.insert("australia", info("AUD", "Australian Dollar"));
        m.insert("brazil", info("BRL", "Brazilian Real"));
        m.insert("mexico", info("MXN", "Mexican Peso"));
        m.insert("switzerland", info("CHF", "Swiss Franc"));
        m.insert("singapore", info("SGD", "Singapore Dollar"));
        m.insert("hong kong", info("HKD", "Hong Kong Dollar"));
        m.insert("russia", info("RUB", "Russian Ruble"));
        m.insert("south africa", info("ZAR", "South African Rand"));
        m.insert("turkey", info("TRY", "Turkish Lira"));
        m.insert("saudi arabia", info("SAR", "Saudi Riyal"));
        m.insert("uae", info("AED", "UAE Dirham"));
        m.insert("thailand", info("THB", "Thai Baht"));
        m.insert("malaysia", info("MYR", "Malaysian Ringgit"));
        m.insert("indonesia", info("IDR", "Indonesian Rupiah"));
        m.insert("philippines", info("PHP", "Philippine Peso"));
        m.insert("vietnam", info("VND", "Vietnamese Dong"));
        m.insert("poland", info("PLN", "Polish Zloty"));
        m.insert("sweden", info("SEK", "Swedish Krona"));
        m.insert("norway", info("NOK", "Norwegian Krone"));
        m.insert("denmark", info("DKK", "Danish Krone"));
        m.insert("new zealand", info("NZD", "New Zealand Dollar"));
        m.insert("argentina", info("ARS", "Argentine Peso"));
        m.insert("chile", info("CLP", "Chilean Peso"));
        m.insert("colombia", info("COP", "Colombian Peso"));
        m.insert("egypt", info("EGP", "Egyptian Pound"));
        m.insert("israel", info("ILS", "Israeli Shekel"));
        m.insert("pakistan", info("PKR", "Pakistani Rupee"));
        m.insert("bangladesh", info("BDT", "Bangladeshi Taka"));
        m.insert("nigeria", info("NGN", "Nigerian Naira"));
        m.insert("kenya", info("KES", "Kenyan Shilling"));
        m
    };
}

/// Look up the currency for a country name (case-insensitive, trimmed).
pub fn currency_for(country: &str) -> Option<&'static CurrencyInfo> {
    COUNTRY_CURRENCIES.get(super::normalize(country).as_str())
}

pub(super) fn countries() -> impl Iterator<Item = &'static str> {
    COUNTRY_CURRENCIES.keys().copied()
}
