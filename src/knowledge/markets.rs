//! Country → stock market table
//!
//! Exchange names, major indices with their Yahoo Finance tickers, and the
//! primary exchange whose headquarters the location table can place on a map.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// A major index: display name plus provider ticker symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDef {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Stock market facts for one country. `indices` keeps table order.
#[derive(Debug, Clone)]
pub struct MarketInfo {
    pub exchanges: Vec<&'static str>,
    pub indices: Vec<IndexDef>,
    pub primary_exchange: &'static str,
    pub hq_location: &'static str,
}

fn market(
    exchanges: &[&'static str],
    indices: &[(&'static str, &'static str)],
    primary_exchange: &'static str,
    hq_location: &'static str,
) -> MarketInfo {
    MarketInfo {
        exchanges: exchanges.to_vec(),
        indices: indices
            .iter()
            .map(|&(name, symbol)| IndexDef { name, symbol })
            .collect(),
        primary_exchange,
        hq_location,
    }
}

lazy_static! {
    static ref STOCK_MARKETS: HashMap<&'static str, MarketInfo> = {
        let mut m = HashMap::new();
        m.insert(
            "japan",
            market(
                &["Tokyo Stock Exchange (TSE)", "Osaka Exchange (OSE)"],
                &[
                    ("Nikkei 225", "^N225"),
                    ("TOPIX", "^TOPX"),
                    ("JPX-Nikkei 400", "^JPN400"),
                ],
                "Tokyo Stock Exchange",
                "Tokyo, Japan",
            ),
        );
        m.insert(
            "india",
            market(
                &[
                    "National Stock Exchange (NSE)",
                    "Bombay Stock Exchange (BSE)",
                ],
                &[
                    ("NIFTY 50", "^NSEI"),
                    ("SENSEX", "^BSESN"),
                    ("NIFTY Bank", "^NSEBANK"),
                ],
                "National Stock Exchange of India",
                "Mumbai, Maharashtra, India",
            ),
        );
        m.insert(
            "united states",
            market(
                &["New York Stock Exchange (NYSE)", "NASDAQ", "CBOE"],
                &[
                    ("S&P 500", "^GSPC"),
                    ("Dow Jones", "^DJI"),
                    ("NASDAQ Composite", "^IXIC"),
                    ("Russell 2000", "^RUT"),
                ],
                "New York Stock Exchange",
                "New York, NY, USA",
            ),
        );
        m.insert(
            "usa",
            market(
                &["New York Stock Exchange (NYSE)", "NASDAQ", "CBOE"],
                &[
                    ("S&P 500", "^GSPC"),
                    ("Dow Jones", "^DJI"),
                    ("NASDAQ Composite", "^IXIC"),
                    ("Russell 2000", "^RUT"),
                ],
                "New York Stock Exchange",
                "New York, NY, USA",
            ),
        );
        m.insert(
            "united kingdom",
            market(
                &["London Stock Exchange (LSE)"],
                &[
                    ("FTSE 100", "^FTSE"),
                    ("FTSE 250", "^FTMC"),
                    ("FTSE All-Share", "^FTAS"),
                ],
                "London Stock Exchange",
                "London, United Kingdom",
            ),
        );
        m.insert(
            "uk",
            market(
                &["London Stock Exchange (LSE)"],
                &[("FTSE 100", "^FTSE"), ("FTSE 250", "^FTMC")],
                "London Stock Exchange",
                "London, United Kingdom",
            ),
        );
        m.insert(
            "south korea",
            market(
                &["Korea Exchange (KRX)"],
                &[("KOSPI", "^KS11"), ("KOSDAQ", "^KQ11")],
                "Korea Exchange",
                "Seoul, South Korea",
            ),
        );
        m.insert(
            "korea",
            market(
                &["Korea Exchange (KRX)"],
                &[("KOSPI", "^KS11"), ("KOSDAQ", "^KQ11")],
                "Korea Exchange",
                "Seoul, South Korea",
            ),
        );
        m.insert(
            "china",
            market(
                &[
                    "Shanghai Stock Exchange (SSE)",
                    "Shenzhen Stock Exchange (SZSE)",
                    "Hong Kong Stock Exchange (HKEX)",
                ],
                &[
                    ("SSE Composite", "000001.SS"),
                    ("Shenzhen Component", "399001.SZ"),
                    ("Hang Seng", "^HSI"),
                ],
                "Shanghai Stock Exchange",
                "Shanghai, China",
            ),
        );
        m.insert(
            "germany",
            market(
                &["Frankfurt Stock Exchange (FWB)"],
                &[
                    ("DAX", "^GDAXI"),
                    ("MDAX", "^MDAXI"),
                    ("TecDAX", "^TECDAX"),
                ],
                "Frankfurt Stock Exchange",
                "Frankfurt, Germany",
            ),
        );
        m.insert(
            "france",
            market(
                &["Euronext Paris"],
                &[("CAC 40", "^FCHI")],
                "Euronext Paris",
                "Paris, France",
            ),
        );
        m.insert(
            "canada",
            market(
                &["Toronto Stock Exchange (TSX)"],
                &[
                    ("S&P/TSX Composite", "^GSPTSE"),
                    ("S&P/TSX 60", "^TX60"),
                ],
                "Toronto Stock Exchange",
                "Toronto, Ontario, Canada",
            ),
        );
        m.insert(
            "australia",
            market(
                &["Australian Securities Exchange (ASX)"],
                &[("ASX 200", "^AXJO"), ("All Ordinaries", "^AORD")],
                "Australian Securities Exchange",
                "Sydney, NSW, Australia",
            ),
        );
        m.insert(
            "hong kong",
            market(
                &["Hong Kong Stock Exchange (HKEX)"],
                &[("Hang Seng", "^HSI"), ("Hang Seng Tech", "^HSTECH")],
                "Hong Kong Stock Exchange",
                "Hong Kong",
            ),
        );
        m.insert(
            "singapore",
            market(
                &["Singapore Exchange (SGX)"],
                &[("Straits Times Index", "^STI")],
                "Singapore Exchange",
                "Singapore",
            ),
        );
        m.insert(
            "brazil",
            market(
                &["B3 - Brasil Bolsa Balcão"],
                &[("Bovespa", "^BVSP")],
                "B3 - Brasil Bolsa Balcão",
                "São Paulo, Brazil",
            ),
        );
        m.insert(
            "switzerland",
            market(
                &["SIX Swiss Exchange"],
                &[("SMI", "^SSMI")],
                "SIX Swiss Exchange",
                "Zurich, Switzerland",
            ),
        );
        m.insert(
            "spain",
            market(
                &["Bolsa de Madrid"],
                &[("IBEX 35", "^IBEX")],
                "Bolsa de Madrid",
                "Madrid, Spain",
            ),
        );
        m.insert(
            "italy",
            market(
                &["Borsa Italiana"],
                &[("FTSE MIB", "FTSEMIB.MI")],
                "Borsa Italiana",
                "Milan, Italy",
            ),
        );
        m.insert(
            "netherlands",
            market(
                &["Euronext Amsterdam"],
                &[("AEX", "^AEX")],
                "Euronext Amsterdam",
                "Amsterdam, Netherlands",
            ),
        );
        m.insert(
            "sweden",
            market(
                &["Nasdaq Stockholm"],
                &[("OMX Stockholm 30", "^OMX")],
                "Nasdaq Stockholm",
                "Stockholm, Sweden",
            ),
        );
        m.insert(
            "russia",
            market(
                &["Moscow Exchange (MOEX)"],
                &[("MOEX Russia Index", "IMOEX.ME")],
                "Moscow Exchange",
                "Moscow, Russia",
            ),
        );
        m.insert(
            "mexico",
            market(
                &["Mexican Stock Exchange (BMV)"],
                &[("IPC", "^MXX")],
                "Mexican Stock Exchange",
                "Mexico City, Mexico",
            ),
        );
        m.insert(
            "thailand",
            market(
                &["Stock Exchange of Thailand (SET)"],
                &[("SET Index", "^SET.BK")],
                "Stock Exchange of Thailand",
                "Bangkok, Thailand",
            ),
        );
        m.insert(
            "indonesia",
            market(
                &["Indonesia Stock Exchange (IDX)"],
                &[("Jakarta Composite", "^JKSE")],
                "Indonesia Stock Exchange",
                "Jakarta, Indonesia",
            ),
        );
        m.insert(
            "malaysia",
            market(
                &["Bursa Malaysia"],
                &[("KLCI", "^KLSE")],
                "Bursa Malaysia",
                "Kuala Lumpur, Malaysia",
            ),
        );
        m
    };
}

/// Look up the market facts for a country name (case-insensitive, trimmed).
pub fn market_for(country: &str) -> Option<&'static MarketInfo> {
    STOCK_MARKETS.get(super::normalize(country).as_str())
}

pub(super) fn countries() -> impl Iterator<Item = &'static str> {
    STOCK_MARKETS.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_japan_market() {
        let japan = market_for("Japan").unwrap();
        assert_eq!(japan.primary_exchange, "Tokyo Stock Exchange");
        let names: Vec<_> = japan.indices.iter().map(|i| i.name).collect();
        assert!(names.contains(&"Nikkei 225"));
        assert!(names.contains(&"TOPIX"));
    }

    #[test]
    fn test_india_market() {
        let india = market_for("india").unwrap();
        assert_eq!(india.primary_exchange, "National Stock Exchange of India");
        let names: Vec<_> = india.indices.iter().map(|i| i.name).collect();
        assert!(names.contains(&"NIFTY 50"));
        assert!(names.contains(&"SENSEX"));
    }

    #[test]
    fn test_index_order_is_table_order() {
        let us = market_for("united states").unwrap();
        let names: Vec<_> = us.indices.iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec!["S&P 500", "Dow Jones", "NASDAQ Composite", "Russell 2000"]
        );
    }

    #[test]
    fn test_unknown_country_misses() {
        assert!(market_for("atlantis").is_none());
    }
}
