//! Offline sample data for demo mode and screenshots.

use std::collections::BTreeMap;

use crate::models::{Country, CountryName, Currency};

#[allow(clippy::too_many_arguments)]
fn country(
    common: &str,
    official: &str,
    capital: &str,
    region: &str,
    subregion: &str,
    population: u64,
    area: f64,
    continents: &[&str],
    timezones: &[&str],
    languages: &[(&str, &str)],
    currency: (&str, &str, &str),
    cca2: &str,
) -> Country {
    let mut currencies = BTreeMap::new();
    currencies.insert(
        currency.0.to_string(),
        Currency {
            name: currency.1.to_string(),
            symbol: Some(currency.2.to_string()),
        },
    );

    let mut c = Country {
        name: CountryName {
            common: common.to_string(),
            official: official.to_string(),
        },
        capital: vec![capital.to_string()],
        region: region.to_string(),
        subregion: Some(subregion.to_string()),
        population,
        area,
        continents: continents.iter().map(ToString::to_string).collect(),
        timezones: timezones.iter().map(ToString::to_string).collect(),
        languages: languages
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
        currencies,
        ..Country::default()
    };
    c.flags.png = format!("https://flagcdn.com/w320/{cca2}.png");
    c.flags.svg = format!("https://flagcdn.com/{cca2}.svg");
    c.car.side = "right".to_string();
    c
}

/// A small, already-sorted set of real countries for offline browsing.
pub fn demo_countries() -> Vec<Country> {
    vec![
        country(
            "Australia",
            "Commonwealth of Australia",
            "Canberra",
            "Oceania",
            "Australia and New Zealand",
            25_687_041,
            7_692_024.0,
            &["Oceania"],
            &["UTC+05:00", "UTC+08:00", "UTC+10:00"],
            &[("eng", "English")],
            ("AUD", "Australian dollar", "$"),
            "au",
        ),
        country(
            "Brazil",
            "Federative Republic of Brazil",
            "Brasília",
            "Americas",
            "South America",
            212_559_409,
            8_515_767.0,
            &["South America"],
            &["UTC-05:00", "UTC-03:00", "UTC-02:00"],
            &[("por", "Portuguese")],
            ("BRL", "Brazilian real", "R$"),
            "br",
        ),
        country(
            "Ghana",
            "Republic of Ghana",
            "Accra",
            "Africa",
            "Western Africa",
            31_072_945,
            238_533.0,
            &["Africa"],
            &["UTC"],
            &[("eng", "English")],
            ("GHS", "Ghanaian cedi", "₵"),
            "gh",
        ),
        country(
            "Iceland",
            "Iceland",
            "Reykjavik",
            "Europe",
            "Northern Europe",
            366_425,
            103_000.0,
            &["Europe"],
            &["UTC"],
            &[("isl", "Icelandic")],
            ("ISK", "Icelandic króna", "kr"),
            "is",
        ),
        country(
            "India",
            "Republic of India",
            "New Delhi",
            "Asia",
            "Southern Asia",
            1_380_004_385,
            3_287_590.0,
            &["Asia"],
            &["UTC+05:30"],
            &[("eng", "English"), ("hin", "Hindi"), ("tam", "Tamil")],
            ("INR", "Indian rupee", "₹"),
            "in",
        ),
        country(
            "Japan",
            "Japan",
            "Tokyo",
            "Asia",
            "Eastern Asia",
            125_836_021,
            377_930.0,
            &["Asia"],
            &["UTC+09:00"],
            &[("jpn", "Japanese")],
            ("JPY", "Japanese yen", "¥"),
            "jp",
        ),
        country(
            "Mexico",
            "United Mexican States",
            "Mexico City",
            "Americas",
            "North America",
            128_932_753,
            1_964_375.0,
            &["North America"],
            &["UTC-08:00", "UTC-07:00", "UTC-06:00"],
            &[("spa", "Spanish")],
            ("MXN", "Mexican peso", "$"),
            "mx",
        ),
        country(
            "Peru",
            "Republic of Peru",
            "Lima",
            "Americas",
            "South America",
            32_971_854,
            1_285_216.0,
            &["South America"],
            &["UTC-05:00"],
            &[("aym", "Aymara"), ("que", "Quechua"), ("spa", "Spanish")],
            ("PEN", "Peruvian sol", "S/ "),
            "pe",
        ),
        country(
            "Portugal",
            "Portuguese Republic",
            "Lisbon",
            "Europe",
            "Southern Europe",
            10_305_564,
            92_090.0,
            &["Europe"],
            &["UTC-01:00", "UTC"],
            &[("por", "Portuguese")],
            ("EUR", "Euro", "€"),
            "pt",
        ),
        country(
            "South Africa",
            "Republic of South Africa",
            "Pretoria",
            "Africa",
            "Southern Africa",
            59_308_690,
            1_221_037.0,
            &["Africa"],
            &["UTC+02:00"],
            &[("afr", "Afrikaans"), ("eng", "English"), ("zul", "Zulu")],
            ("ZAR", "South African rand", "R"),
            "za",
        ),
        country(
            "Switzerland",
            "Swiss Confederation",
            "Bern",
            "Europe",
            "Western Europe",
            8_654_622,
            41_284.0,
            &["Europe"],
            &["UTC+01:00"],
            &[("fra", "French"), ("gsw", "Swiss German"), ("ita", "Italian")],
            ("CHF", "Swiss franc", "Fr."),
            "ch",
        ),
        country(
            "Vietnam",
            "Socialist Republic of Vietnam",
            "Hanoi",
            "Asia",
            "South-Eastern Asia",
            97_338_583,
            331_212.0,
            &["Asia"],
            &["UTC+07:00"],
            &[("vie", "Vietnamese")],
            ("VND", "Vietnamese đồng", "₫"),
            "vn",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_countries_presorted() {
        let countries = demo_countries();
        let mut sorted = countries.clone();
        sorted.sort_by(|a, b| {
            a.name
                .common
                .to_lowercase()
                .cmp(&b.name.common.to_lowercase())
        });
        let names: Vec<_> = countries.iter().map(|c| &c.name.common).collect();
        let sorted_names: Vec<_> = sorted.iter().map(|c| &c.name.common).collect();
        assert_eq!(names, sorted_names);
    }
}
