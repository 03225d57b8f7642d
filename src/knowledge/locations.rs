//! Exchange → headquarters location table

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Headquarters facts for a stock exchange. `query` is the place search
/// string used when building a map embed URL.
#[derive(Debug, Clone)]
pub struct ExchangeLocation {
    pub address: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub query: &'static str,
}

fn loc(address: &'static str, lat: f64, lng: f64, query: &'static str) -> ExchangeLocation {
    ExchangeLocation {
        address,
        lat,
        lng,
        query,
    }
}

lazy_static! {
    static ref EXCHANGE_LOCATIONS: HashMap<&'static str, ExchangeLocation> = {
        let mut m = HashMap::new();
        m.insert(
            "Tokyo Stock Exchange",
            loc(
                "Tokyo Stock Exchange, 2-1 Nihonbashi-Kabutocho, Chuo City, Tokyo, Japan",
                35.6809,
                139.7776,
                "Tokyo Stock Exchange",
            ),
        );
        m.insert(
            "National Stock Exchange of India",
            loc(
                "Exchange Plaza, Bandra Kurla Complex, Bandra East, Mumbai, Maharashtra 400051, India",
                19.0633,
                72.8706,
                "National Stock Exchange of India, Mumbai",
            ),
        );
        m.insert(
            "New York Stock Exchange",
            loc(
                "11 Wall St, New York, NY 10005, United States",
                40.7074,
                -74.0113,
                "New York Stock Exchange",
            ),
        );
        m.insert(
            "London Stock Exchange",
            loc(
                "10 Paternoster Square, London EC4M 7LS, United Kingdom",
                51.5142,
                -0.0991,
                "London Stock Exchange",
            ),
        );
        m.insert(
            "Korea Exchange",
            loc(
                "76 Yeouinaru-ro, Yeongdeungpo-gu, Seoul, South Korea",
                37.5262,
                126.9282,
                "Korea Exchange, Seoul",
            ),
        );
        m.insert(
            "Shanghai Stock Exchange",
            loc(
                "528 Pudong South Road, Pudong, Shanghai, China",
                31.2385,
                121.5007,
                "Shanghai Stock Exchange",
            ),
        );
        m.insert(
            "Frankfurt Stock Exchange",
            loc(
                "Börsenplatz 4, 60313 Frankfurt am Main, Germany",
                50.1135,
                8.6762,
                "Frankfurt Stock Exchange",
            ),
        );
        m.insert(
            "Euronext Paris",
            loc(
                "39 Rue Cambon, 75001 Paris, France",
                48.8675,
                2.3265,
                "Euronext Paris",
            ),
        );
        m.insert(
            "Toronto Stock Exchange",
            loc(
                "The Exchange Tower, 130 King St W, Toronto, ON M5X 1J2, Canada",
                43.6478,
                -79.3813,
                "Toronto Stock Exchange",
            ),
        );
        m.insert(
            "Australian Securities Exchange",
            loc(
                "20 Bridge St, Sydney NSW 2000, Australia",
                -33.8646,
                151.2101,
                "Australian Securities Exchange, Sydney",
            ),
        );
        m.insert(
            "Hong Kong Stock Exchange",
            loc(
                "8 Finance St, Central, Hong Kong",
                22.2845,
                114.1580,
                "Hong Kong Stock Exchange",
            ),
        );
        m.insert(
            "Singapore Exchange",
            loc(
                "2 Shenton Way, Singapore 068804",
                1.2789,
                103.8497,
                "Singapore Exchange",
            ),
        );
        m.insert(
            "B3 - Brasil Bolsa Balcão",
            loc(
                "Praça Antonio Prado, 48 - Centro Histórico de São Paulo, São Paulo, Brazil",
                -23.5449,
                -46.6342,
                "B3 Stock Exchange, São Paulo",
            ),
        );
        m.insert(
            "SIX Swiss Exchange",
            loc(
                "Pfingstweidstrasse 110, 8005 Zürich, Switzerland",
                47.3897,
                8.5162,
                "SIX Swiss Exchange, Zurich",
            ),
        );
        m.insert(
            "Bolsa de Madrid",
            loc(
                "Plaza de la Lealtad, 1, 28014 Madrid, Spain",
                40.4169,
                -3.6943,
                "Bolsa de Madrid",
            ),
        );
        m.insert(
            "Borsa Italiana",
            loc(
                "Piazza Affari, 6, 20123 Milano MI, Italy",
                45.4654,
                9.1859,
                "Borsa Italiana, Milan",
            ),
        );
        m.insert(
            "Euronext Amsterdam",
            loc(
                "Beursplein 5, 1012 JW Amsterdam, Netherlands",
                52.3736,
                4.8936,
                "Euronext Amsterdam",
            ),
        );
        m.insert(
            "Nasdaq Stockholm",
            loc(
                "Tullvaktsvägen 15, 115 56 Stockholm, Sweden",
                59.3326,
                18.0824,
                "Nasdaq Stockholm",
            ),
        );
        m.insert(
            "Moscow Exchange",
            loc(
                "13 Bolshoy Kislovsky Lane, Moscow, Russia",
                55.7595,
                37.6028,
                "Moscow Exchange",
            ),
        );
        m.insert(
            "Mexican Stock Exchange",
            loc(
                "Paseo de la Reforma 255, Cuauhtémoc, Mexico City, Mexico",
                19.4284,
                -99.1677,
                "Mexican Stock Exchange, Mexico City",
            ),
        );
        m.insert(
            "Stock Exchange of Thailand",
            loc(
                "93 Ratchadaphisek Road, Din Daeng, Bangkok, Thailand",
                13.7649,
                100.5630,
                "Stock Exchange of Thailand, Bangkok",
            ),
        );
        m.insert(
            "Indonesia Stock Exchange",
            loc(
                "Jl. Jend. Sudirman Kav 52-53, Jakarta 12190, Indonesia",
                -6.2258,
                106.8086,
                "Indonesia Stock Exchange, Jakarta",
            ),
        );
        m.insert(
            "Bursa Malaysia",
            loc(
                "15 Jalan Semantan, Bukit Damansara, 50490 Kuala Lumpur, Malaysia",
                3.1520,
                101.6695,
                "Bursa Malaysia, Kuala Lumpur",
            ),
        );
        m
    };
}

/// Look up an exchange location. Tries a literal key match first, then a
/// case-insensitive substring match in either direction so that names with
/// an abbreviation suffix ("Tokyo Stock Exchange (TSE)") still resolve.
/// When several keys match, the longest (most specific) wins.
pub fn location_for(exchange: &str) -> Option<(&'static str, &'static ExchangeLocation)> {
    if let Some((key, location)) = EXCHANGE_LOCATIONS.get_key_value(exchange) {
        return Some((*key, location));
    }

    let needle = super::normalize(exchange);
    if needle.is_empty() {
        return None;
    }

    let mut candidates: Vec<(&'static str, &'static ExchangeLocation)> = EXCHANGE_LOCATIONS
        .iter()
        .filter(|(key, _)| {
            let key_norm = super::normalize(key);
            key_norm.contains(&needle) || needle.contains(&key_norm)
        })
        .map(|(key, location)| (*key, location))
        .collect();

    candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
    candidates.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let (key, location) = location_for("Tokyo Stock Exchange").unwrap();
        assert_eq!(key, "Tokyo Stock Exchange");
        assert!(location.address.contains("Nihonbashi-Kabutocho"));
    }

    #[test]
    fn test_substring_match_with_suffix() {
        let (key, _) = location_for("Tokyo Stock Exchange (TSE)").unwrap();
        assert_eq!(key, "Tokyo Stock Exchange");

        let (key, _) = location_for("korea exchange (krx)").unwrap();
        assert_eq!(key, "Korea Exchange");
    }

    #[test]
    fn test_partial_name_match() {
        let (key, _) = location_for("euronext paris").unwrap();
        assert_eq!(key, "Euronext Paris");
    }

    #[test]
    fn test_unknown_exchange_misses() {
        assert!(location_for("Atlantis Stock Exchange").is_none());
        assert!(location_for("").is_none());
    }
}
