//! Country model (restcountries v3.1 schema)

use std::collections::BTreeMap;

use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A country record as returned by the REST Countries API.
///
/// Received verbatim from the API and treated as immutable input; the
/// filter engine only looks at `name.common`, `continents` and `timezones`,
/// everything else is passthrough display data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Common and official names
    pub name: CountryName,
    /// Capital cities (usually one, sometimes none)
    #[serde(default)]
    pub capital: Vec<String>,
    /// Region (e.g. "Americas")
    #[serde(default)]
    pub region: String,
    /// Subregion (e.g. "South America")
    #[serde(default)]
    pub subregion: Option<String>,
    /// Population count
    #[serde(default)]
    pub population: u64,
    /// Flag image URLs
    #[serde(default)]
    pub flags: Flags,
    /// Coat of arms image URLs (may be absent)
    #[serde(default)]
    pub coat_of_arms: CoatOfArms,
    /// Currencies keyed by ISO code
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    /// Languages keyed by ISO code
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Bordering countries (ISO alpha-3 codes)
    #[serde(default)]
    pub borders: Vec<String>,
    /// Land area in km²
    #[serde(default)]
    pub area: f64,
    /// Timezone labels (`UTC`, `UTC+05:30`, ...)
    #[serde(default)]
    pub timezones: Vec<String>,
    /// Continent names
    #[serde(default)]
    pub continents: Vec<String>,
    /// Car/driving info
    #[serde(default)]
    pub car: Car,
    /// International dialing data
    #[serde(default)]
    pub idd: Idd,
    /// Latitude/longitude pair
    #[serde(default)]
    pub latlng: Vec<f64>,
    /// Map links
    #[serde(default)]
    pub maps: Maps,
}

/// Country name variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    /// Common display name, unique within a single fetch result
    pub common: String,
    /// Official long-form name
    #[serde(default)]
    pub official: String,
}

/// Flag image URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    /// PNG flag URL
    #[serde(default)]
    pub png: String,
    /// SVG flag URL
    #[serde(default)]
    pub svg: String,
}

/// Coat of arms image URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoatOfArms {
    /// PNG URL, absent for some countries
    #[serde(default)]
    pub png: Option<String>,
    /// SVG URL
    #[serde(default)]
    pub svg: Option<String>,
}

/// A currency entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// Currency name (e.g. "Euro")
    #[serde(default)]
    pub name: String,
    /// Currency symbol (e.g. "€")
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Driving info
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Driving side ("left" or "right")
    #[serde(default)]
    pub side: String,
}

/// International direct dialing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Idd {
    /// Dialing root (e.g. "+5")
    #[serde(default)]
    pub root: String,
    /// Dialing suffixes (e.g. ["1"])
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// Map service links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    /// Google Maps URL
    #[serde(default)]
    pub google_maps: String,
    /// OpenStreetMap URL
    #[serde(default)]
    pub open_street_maps: String,
}

impl Country {
    /// Primary capital, if any
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    /// Languages joined for display ("Aymara, Quechua, Spanish")
    pub fn languages_display(&self) -> Option<String> {
        if self.languages.is_empty() {
            return None;
        }
        Some(
            self.languages
                .values()
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// First currency for display ("Peruvian sol (S/)")
    pub fn currency_display(&self) -> Option<String> {
        self.currencies.values().next().map(|c| match &c.symbol {
            Some(sym) if !sym.is_empty() => format!("{} ({})", c.name, sym),
            _ => c.name.clone(),
        })
    }

    /// International calling code ("+51"), root plus single suffix if present
    pub fn calling_code(&self) -> Option<String> {
        if self.idd.root.is_empty() {
            return None;
        }
        // Countries with many suffixes (e.g. NANP) just show the root
        match self.idd.suffixes.as_slice() {
            [single] => Some(format!("{}{}", self.idd.root, single)),
            _ => Some(self.idd.root.clone()),
        }
    }

    /// Primary timezone label, if any
    pub fn primary_timezone(&self) -> Option<&str> {
        self.timezones.first().map(String::as_str)
    }

    /// Current local time in the country's primary timezone ("14:05"),
    /// derived from the `UTC±HH:MM` label
    pub fn local_time(&self) -> Option<String> {
        let offset = parse_utc_offset(self.primary_timezone()?)?;
        Some(Utc::now().with_timezone(&offset).format("%H:%M").to_string())
    }

    /// Best map URL (Google Maps preferred)
    pub fn map_url(&self) -> Option<&str> {
        if !self.maps.google_maps.is_empty() {
            Some(&self.maps.google_maps)
        } else if !self.maps.open_street_maps.is_empty() {
            Some(&self.maps.open_street_maps)
        } else {
            None
        }
    }

    /// Population with thousands separators ("33,715,471")
    pub fn population_display(&self) -> String {
        format_thousands(self.population)
    }

    /// Area with thousands separators and unit ("1,285,216 km²")
    pub fn area_display(&self) -> String {
        format!("{} km²", format_thousands(self.area.round() as u64))
    }
}

/// Parse a `UTC`, `UTC+05:30` or `UTC-03:00` timezone label into an offset.
pub fn parse_utc_offset(label: &str) -> Option<FixedOffset> {
    let rest = label.strip_prefix("UTC")?;
    if rest.is_empty() {
        return FixedOffset::east_opt(0);
    }

    let (sign, hhmm) = match rest.as_bytes().first()? {
        b'+' => (1i32, &rest[1..]),
        b'-' => (-1i32, &rest[1..]),
        _ => return None,
    };

    let (hours, minutes) = match hhmm.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None => (hhmm.parse::<i32>().ok()?, 0),
    };

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "name": { "common": "Peru", "official": "Republic of Peru" },
            "capital": ["Lima"],
            "region": "Americas",
            "subregion": "South America",
            "population": 32971854,
            "flags": { "png": "https://flagcdn.com/w320/pe.png", "svg": "https://flagcdn.com/pe.svg" },
            "coatOfArms": { "png": "https://mainfacts.com/media/images/coats_of_arms/pe.png" },
            "currencies": { "PEN": { "name": "Peruvian sol", "symbol": "S/ " } },
            "languages": { "aym": "Aymara", "que": "Quechua", "spa": "Spanish" },
            "borders": ["BOL", "BRA", "CHL", "COL", "ECU"],
            "area": 1285216.0,
            "timezones": ["UTC-05:00"],
            "continents": ["South America"],
            "car": { "side": "right" },
            "idd": { "root": "+5", "suffixes": ["1"] },
            "latlng": [-10.0, -76.0],
            "maps": {
                "googleMaps": "https://goo.gl/maps/uDWEUaXNcZTng1fP6",
                "openStreetMaps": "https://www.openstreetmap.org/relation/288247"
            }
        }"#
    }

    #[test]
    fn test_deserialize_camel_case() {
        let country: Country = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(country.name.common, "Peru");
        assert_eq!(country.primary_capital(), Some("Lima"));
        assert_eq!(
            country.coat_of_arms.png.as_deref(),
            Some("https://mainfacts.com/media/images/coats_of_arms/pe.png")
        );
        assert_eq!(
            country.maps.google_maps,
            "https://goo.gl/maps/uDWEUaXNcZTng1fP6"
        );
    }

    #[test]
    fn test_missing_optional_fields() {
        // Minimal record; everything but name is optional on the wire
        let country: Country =
            serde_json::from_str(r#"{ "name": { "common": "Atlantis" } }"#).unwrap();
        assert_eq!(country.name.common, "Atlantis");
        assert!(country.capital.is_empty());
        assert!(country.languages_display().is_none());
        assert!(country.currency_display().is_none());
        assert!(country.local_time().is_none());
    }

    #[test]
    fn test_display_helpers() {
        let country: Country = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(
            country.languages_display().unwrap(),
            "Aymara, Quechua, Spanish"
        );
        assert_eq!(country.currency_display().unwrap(), "Peruvian sol (S/ )");
        assert_eq!(country.calling_code().unwrap(), "+51");
        assert_eq!(country.population_display(), "32,971,854");
        assert_eq!(country.area_display(), "1,285,216 km²");
    }

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset("UTC"), FixedOffset::east_opt(0));
        assert_eq!(
            parse_utc_offset("UTC+05:30"),
            FixedOffset::east_opt(5 * 3600 + 30 * 60)
        );
        assert_eq!(
            parse_utc_offset("UTC-03:00"),
            FixedOffset::east_opt(-3 * 3600)
        );
        assert!(parse_utc_offset("GMT+1").is_none());
        assert!(parse_utc_offset("UTC+aa").is_none());
    }

    #[test]
    fn test_calling_code_many_suffixes() {
        let mut country = Country::default();
        country.idd.root = "+1".to_string();
        country.idd.suffixes = vec!["201".to_string(), "202".to_string()];
        assert_eq!(country.calling_code().unwrap(), "+1");
    }
}
