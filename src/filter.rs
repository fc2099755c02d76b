//! Search, filter and grouping over the country collection.
//!
//! Pure functions only: the whole pipeline is a function of the fetched
//! collection and the active criteria, recomputed in full on every
//! keystroke or checkbox toggle. No caching, no incremental updates.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::Country;

/// The seven continents offered by the filter UI.
pub const CONTINENTS: &[&str] = &[
    "Africa",
    "Antarctica",
    "Asia",
    "Australia",
    "Europe",
    "North America",
    "South America",
];

/// Active filter criteria.
///
/// All fields may be empty, meaning "no constraint". The continent and
/// timezone selections are any-of (OR within the set); the three predicates
/// combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against `name.common`
    pub name_query: String,
    /// Selected continents (empty = unconstrained)
    pub continents: Vec<String>,
    /// Selected timezone labels (empty = unconstrained)
    pub timezones: Vec<String>,
}

impl FilterCriteria {
    /// Whether no constraint is active at all.
    pub fn is_empty(&self) -> bool {
        self.name_query.is_empty() && self.continents.is_empty() && self.timezones.is_empty()
    }

    /// Number of active continent/timezone selections (for the UI badge).
    pub fn selection_count(&self) -> usize {
        self.continents.len() + self.timezones.len()
    }

    /// Toggle a continent in or out of the selection.
    pub fn toggle_continent(&mut self, continent: &str) {
        toggle(&mut self.continents, continent);
    }

    /// Toggle a timezone in or out of the selection.
    pub fn toggle_timezone(&mut self, timezone: &str) {
        toggle(&mut self.timezones, timezone);
    }

    /// Clear the continent and timezone selections. The search text is
    /// kept; the reset button only touches the checkbox sets.
    pub fn reset_selections(&mut self) {
        self.continents.clear();
        self.timezones.clear();
    }

    fn matches(&self, country: &Country) -> bool {
        if !self.name_query.is_empty() {
            let name = country.name.common.to_lowercase();
            if !name.contains(&self.name_query.to_lowercase()) {
                return false;
            }
        }
        if !self.continents.is_empty()
            && !country.continents.iter().any(|c| self.continents.contains(c))
        {
            return false;
        }
        if !self.timezones.is_empty()
            && !country.timezones.iter().any(|t| self.timezones.contains(t))
        {
            return false;
        }
        true
    }
}

fn toggle(selection: &mut Vec<String>, value: &str) {
    if let Some(idx) = selection.iter().position(|v| v == value) {
        selection.remove(idx);
    } else {
        selection.push(value.to_string());
    }
}

/// One bucket of the sectioned list: countries sharing an initial letter.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Upper-cased first character of the member names
    pub title: String,
    /// Members, in base sort order
    pub items: Vec<Country>,
}

/// Filter `countries` by `criteria` and group survivors by upper-cased
/// first letter, returning sections sorted ascending by title.
///
/// `countries` is expected pre-sorted ascending by `name.common`; items
/// within a section keep that relative order. Initial characters are not
/// normalized, so "Öland" would group under "Ö", not "O". `name.common`
/// must be non-empty for every record; a record violating that asserts in
/// debug builds and is skipped in release builds.
pub fn compute_sections(countries: &[Country], criteria: &FilterCriteria) -> Vec<Section> {
    let mut buckets: BTreeMap<String, Vec<Country>> = BTreeMap::new();

    for country in countries.iter().filter(|c| criteria.matches(c)) {
        debug_assert!(
            !country.name.common.is_empty(),
            "country with empty name.common"
        );
        let Some(first) = country.name.common.chars().next() else {
            continue;
        };
        let title: String = first.to_uppercase().collect();
        buckets.entry(title).or_default().push(country.clone());
    }

    buckets
        .into_iter()
        .map(|(title, items)| Section { title, items })
        .collect()
}

/// Distinct timezone labels across the full collection, sorted ascending.
///
/// Always computed from the unfiltered collection; used to populate the
/// timezone checkboxes of the filter modal.
pub fn available_timezones(countries: &[Country]) -> Vec<String> {
    countries
        .iter()
        .flat_map(|c| c.timezones.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryName;

    fn country(name: &str, continents: &[&str], timezones: &[&str]) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
                official: name.to_string(),
            },
            continents: continents.iter().map(ToString::to_string).collect(),
            timezones: timezones.iter().map(ToString::to_string).collect(),
            ..Country::default()
        }
    }

    fn sample() -> Vec<Country> {
        vec![
            country("Peru", &["South America"], &["UTC-05:00"]),
            country("Portugal", &["Europe"], &["UTC", "UTC-01:00"]),
        ]
    }

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    fn names(section: &Section) -> Vec<&str> {
        section.items.iter().map(|c| c.name.common.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let sections = compute_sections(&[], &FilterCriteria::default());
        assert!(sections.is_empty());
    }

    #[test]
    fn test_empty_criteria_returns_all_grouped() {
        let countries = vec![
            country("Angola", &["Africa"], &["UTC+01:00"]),
            country("Argentina", &["South America"], &["UTC-03:00"]),
            country("Brazil", &["South America"], &["UTC-03:00"]),
        ];
        let sections = compute_sections(&countries, &FilterCriteria::default());
        assert_eq!(titles(&sections), vec!["A", "B"]);
        assert_eq!(names(&sections[0]), vec!["Angola", "Argentina"]);
        assert_eq!(names(&sections[1]), vec!["Brazil"]);
    }

    #[test]
    fn test_name_filter_case_insensitive_substring() {
        let criteria = FilterCriteria {
            name_query: "p".to_string(),
            ..FilterCriteria::default()
        };
        let sections = compute_sections(&sample(), &criteria);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "P");
        assert_eq!(names(&sections[0]), vec!["Peru", "Portugal"]);

        // Substring, not prefix
        let criteria = FilterCriteria {
            name_query: "ORTU".to_string(),
            ..FilterCriteria::default()
        };
        let sections = compute_sections(&sample(), &criteria);
        assert_eq!(names(&sections[0]), vec!["Portugal"]);
    }

    #[test]
    fn test_continent_filter() {
        let criteria = FilterCriteria {
            continents: vec!["Europe".to_string()],
            ..FilterCriteria::default()
        };
        let sections = compute_sections(&sample(), &criteria);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "P");
        assert_eq!(names(&sections[0]), vec!["Portugal"]);
    }

    #[test]
    fn test_timezone_filter_any_of() {
        let criteria = FilterCriteria {
            timezones: vec!["UTC-05:00".to_string(), "UTC-01:00".to_string()],
            ..FilterCriteria::default()
        };
        let sections = compute_sections(&sample(), &criteria);
        // Both countries intersect the selection
        assert_eq!(names(&sections[0]), vec!["Peru", "Portugal"]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        // Name matches both, continent only Portugal, timezone only Peru:
        // the AND of all three matches nothing.
        let criteria = FilterCriteria {
            name_query: "p".to_string(),
            continents: vec!["Europe".to_string()],
            timezones: vec!["UTC-05:00".to_string()],
        };
        assert!(compute_sections(&sample(), &criteria).is_empty());

        let criteria = FilterCriteria {
            name_query: "p".to_string(),
            continents: vec!["Europe".to_string()],
            timezones: vec!["UTC".to_string()],
        };
        let sections = compute_sections(&sample(), &criteria);
        assert_eq!(names(&sections[0]), vec!["Portugal"]);
    }

    #[test]
    fn test_sections_sorted_and_countries_appear_once() {
        let countries = vec![
            country("Chile", &["South America"], &["UTC-04:00"]),
            country("Zimbabwe", &["Africa"], &["UTC+02:00"]),
            country("Austria", &["Europe"], &["UTC+01:00"]),
            country("Chad", &["Africa"], &["UTC+01:00"]),
        ];
        // Input deliberately unsorted across letters; sections still come
        // back in ascending title order.
        let sections = compute_sections(&countries, &FilterCriteria::default());
        assert_eq!(titles(&sections), vec!["A", "C", "Z"]);

        let total: usize = sections.iter().map(|s| s.items.len()).sum();
        assert_eq!(total, countries.len());
        for section in &sections {
            for item in &section.items {
                let initial: String =
                    item.name.common.chars().next().unwrap().to_uppercase().collect();
                assert_eq!(initial, section.title);
            }
        }
    }

    #[test]
    fn test_accented_initial_not_normalized() {
        let countries = vec![
            country("Oman", &["Asia"], &["UTC+04:00"]),
            country("Åland Islands", &["Europe"], &["UTC+02:00"]),
        ];
        let sections = compute_sections(&countries, &FilterCriteria::default());
        assert_eq!(titles(&sections), vec!["O", "Å"]);
    }

    #[test]
    fn test_idempotence() {
        let criteria = FilterCriteria {
            name_query: "a".to_string(),
            continents: vec!["South America".to_string()],
            ..FilterCriteria::default()
        };
        let countries = sample();
        let first = compute_sections(&countries, &criteria);
        let second = compute_sections(&countries, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let countries = sample();
        let before = countries.clone();
        let criteria = FilterCriteria {
            name_query: "peru".to_string(),
            ..FilterCriteria::default()
        };
        let _ = compute_sections(&countries, &criteria);
        assert_eq!(countries.len(), before.len());
        assert_eq!(countries[0].name.common, before[0].name.common);
    }

    #[test]
    fn test_available_timezones_dedup_sorted() {
        let countries = vec![
            country("A", &[], &["UTC"]),
            country("B", &[], &["UTC"]),
            country("C", &[], &["UTC-05:00"]),
        ];
        assert_eq!(available_timezones(&countries), vec!["UTC", "UTC-05:00"]);
        assert!(available_timezones(&[]).is_empty());
    }

    #[test]
    fn test_criteria_toggles() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_continent("Europe");
        criteria.toggle_timezone("UTC");
        assert_eq!(criteria.selection_count(), 2);

        criteria.toggle_continent("Europe");
        assert_eq!(criteria.continents.len(), 0);

        criteria.name_query = "x".to_string();
        criteria.reset_selections();
        assert!(criteria.timezones.is_empty());
        // Reset keeps the search text
        assert_eq!(criteria.name_query, "x");
    }
}
