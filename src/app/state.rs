//! Application state

use std::collections::{HashMap, HashSet};

use image::DynamicImage;
use ratatui_image::protocol::StatefulProtocol;

use crate::config::Config;
use crate::filter::{self, FilterCriteria, Section};
use crate::images::{self, ImageCache};
use crate::models::Country;
use crate::theme::Theme;

/// Modal input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing
    #[default]
    Normal,
    /// Typing in the search bar
    Search,
    /// Continent/timezone filter modal
    Filter,
    /// Theme selection popup
    ThemePicker,
    /// Keyboard shortcuts popup
    Help,
    /// About dialog
    About,
}

/// Current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Sectioned country list plus summary panel
    #[default]
    Browse,
    /// Full detail screen for one country
    Detail,
}

/// Lifecycle of a fetch, as the UI distinguishes it.
///
/// Loading, empty and error are three distinct renderings; an empty result
/// set is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Request in flight
    #[default]
    Pending,
    /// Data arrived
    Success,
    /// Request failed; retry is manual
    Error(String),
}

/// Which artwork the detail view shows (the reference app's carousel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Artwork {
    /// The country flag
    #[default]
    Flag,
    /// The coat of arms
    CoatOfArms,
}

impl Artwork {
    /// The other artwork
    pub fn toggled(self) -> Self {
        match self {
            Self::Flag => Self::CoatOfArms,
            Self::CoatOfArms => Self::Flag,
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flag => "Flag",
            Self::CoatOfArms => "Coat of arms",
        }
    }

    /// PNG URL of this artwork for a country, if the API provides one
    pub fn url<'a>(self, country: &'a Country) -> Option<&'a str> {
        match self {
            Self::Flag => {
                if country.flags.png.is_empty() {
                    None
                } else {
                    Some(&country.flags.png)
                }
            }
            Self::CoatOfArms => country.coat_of_arms.png.as_deref(),
        }
    }
}

/// State of the detail view (per-name fetch)
#[derive(Default)]
pub struct DetailState {
    /// Requested country name
    pub name: String,
    /// Fetch lifecycle of the per-name request
    pub fetch: FetchState,
    /// The fetched record
    pub country: Option<Country>,
    /// Vertical scroll offset
    pub scroll: u16,
    /// Which artwork is shown
    pub artwork: Artwork,
}

/// Application state
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Whether to quit
    pub should_quit: bool,
    /// Current theme
    pub theme: Theme,
    /// Modal mode
    pub mode: Mode,
    /// Current view
    pub view: View,

    /// Full country collection, base-sorted by common name (single source
    /// of truth; fetched once per session)
    pub countries: Vec<Country>,
    /// Fetch lifecycle of the collection
    pub fetch: FetchState,
    /// Active filter criteria
    pub criteria: FilterCriteria,
    /// Derived sections (recomputed in full on every criteria change)
    pub sections: Vec<Section>,
    /// Distinct timezones of the full collection (filter modal options)
    pub timezone_options: Vec<String>,

    /// Selected country (flat index across all sections)
    pub selected: usize,
    /// Cursor in the filter modal
    pub filter_cursor: usize,
    /// Cursor in the theme picker
    pub theme_picker_index: usize,

    /// Detail view state
    pub detail: DetailState,

    /// Decoded artwork cache
    pub image_cache: ImageCache,
    /// URLs currently downloading
    pub loading_images: HashSet<String>,
    /// Render protocols for cached images
    image_protocols: HashMap<String, StatefulProtocol>,

    /// Status message (bottom bar)
    pub status: String,
    /// Tick counter for animations
    tick: u64,
}

impl AppState {
    /// Create a new app state
    pub fn new(config: Config) -> Self {
        let theme = config.theme;

        Self {
            config,
            should_quit: false,
            theme,
            mode: Mode::Normal,
            view: View::Browse,
            countries: Vec::new(),
            fetch: FetchState::Pending,
            criteria: FilterCriteria::default(),
            sections: Vec::new(),
            timezone_options: Vec::new(),
            selected: 0,
            filter_cursor: 0,
            theme_picker_index: 0,
            detail: DetailState::default(),
            image_cache: ImageCache::new(),
            loading_images: HashSet::new(),
            image_protocols: HashMap::new(),
            status: String::new(),
            tick: 0,
        }
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Get current tick
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Whether any request is in flight (for the spinner)
    pub fn loading(&self) -> bool {
        self.fetch == FetchState::Pending && self.countries.is_empty()
            || (self.view == View::Detail && self.detail.fetch == FetchState::Pending)
            || !self.loading_images.is_empty()
    }

    /// Install a freshly fetched collection and rederive everything.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
        self.fetch = FetchState::Success;
        self.timezone_options = filter::available_timezones(&self.countries);
        // Selections referring to timezones that vanished are dropped
        self.criteria
            .timezones
            .retain(|t| self.timezone_options.contains(t));
        self.recompute();
    }

    /// Recompute the derived sections from the current collection and
    /// criteria. Full recomputation, no caching.
    pub fn recompute(&mut self) {
        self.sections = filter::compute_sections(&self.countries, &self.criteria);
        let count = self.country_count();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    /// Number of countries across all sections
    pub fn country_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// The currently selected country, if any
    pub fn selected_country(&self) -> Option<&Country> {
        let mut remaining = self.selected;
        for section in &self.sections {
            if remaining < section.items.len() {
                return section.items.get(remaining);
            }
            remaining -= section.items.len();
        }
        None
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        let count = self.country_count();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to the first country
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to the last country
    pub fn select_last(&mut self) {
        let count = self.country_count();
        if count > 0 {
            self.selected = count - 1;
        }
    }

    /// Append a character to the search query (live recompute)
    pub fn push_query_char(&mut self, c: char) {
        self.criteria.name_query.push(c);
        self.recompute();
    }

    /// Delete the last character of the search query (live recompute)
    pub fn pop_query_char(&mut self) {
        self.criteria.name_query.pop();
        self.recompute();
    }

    /// Clear the search query
    pub fn clear_query(&mut self) {
        self.criteria.name_query.clear();
        self.recompute();
    }

    /// Number of entries in the filter modal (continents + timezones)
    pub fn filter_entry_count(&self) -> usize {
        filter::CONTINENTS.len() + self.timezone_options.len()
    }

    /// Toggle the filter entry under the cursor (live recompute)
    pub fn toggle_filter_entry(&mut self) {
        let idx = self.filter_cursor;
        if idx < filter::CONTINENTS.len() {
            self.criteria.toggle_continent(filter::CONTINENTS[idx]);
        } else if let Some(tz) = self.timezone_options.get(idx - filter::CONTINENTS.len()) {
            let tz = tz.clone();
            self.criteria.toggle_timezone(&tz);
        }
        self.recompute();
    }

    /// Clear all continent/timezone selections (live recompute)
    pub fn reset_filters(&mut self) {
        self.criteria.reset_selections();
        self.recompute();
    }

    /// Switch to the detail view and start a per-name fetch
    pub fn open_detail(&mut self, name: &str) {
        self.detail = DetailState {
            name: name.to_string(),
            fetch: FetchState::Pending,
            country: None,
            scroll: 0,
            artwork: Artwork::Flag,
        };
        self.view = View::Detail;
    }

    /// Leave the detail view
    pub fn close_detail(&mut self) {
        self.view = View::Browse;
        self.detail = DetailState::default();
    }

    /// Artwork URLs worth downloading right now (not cached, not in flight)
    pub fn images_to_load(&self) -> Vec<String> {
        if !self.config.show_flags {
            return Vec::new();
        }

        let mut urls = Vec::new();

        // Browse view: the selected country's flag for the summary panel
        if self.view == View::Browse {
            if let Some(country) = self.selected_country() {
                if let Some(url) = Artwork::Flag.url(country) {
                    urls.push(url.to_string());
                }
            }
        }

        // Detail view: whichever artwork is currently shown
        if self.view == View::Detail {
            if let Some(country) = &self.detail.country {
                if let Some(url) = self.detail.artwork.url(country) {
                    urls.push(url.to_string());
                }
            }
        }

        urls.retain(|url| !self.image_cache.contains(url) && !self.loading_images.contains(url));
        urls
    }

    /// Mark URLs as downloading
    pub fn mark_images_loading(&mut self, urls: &[String]) {
        for url in urls {
            self.loading_images.insert(url.clone());
        }
    }

    /// Store a decoded image
    pub fn insert_image(&mut self, url: &str, image: DynamicImage) {
        self.image_cache.insert(url, image);
    }

    /// Render protocol for a cached image, built lazily on first render.
    /// Going through the cache refreshes its LRU ordering.
    pub fn image_protocol(&mut self, url: &str) -> Option<&mut StatefulProtocol> {
        if !self.image_protocols.contains_key(url) {
            let image = self.image_cache.get(url)?;
            let picker = images::picker()?;
            self.image_protocols
                .insert(url.to_string(), picker.new_resize_protocol((*image).clone()));
        }
        self.image_protocols.get_mut(url)
    }

    /// Whether a decoded image is available for a URL
    pub fn has_image(&self, url: &str) -> bool {
        self.image_cache.contains(url)
    }

    /// Drop all downloaded artwork (manual refresh starts clean)
    pub fn clear_images(&mut self) {
        self.image_cache.clear();
        self.image_protocols.clear();
        self.loading_images.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    fn state_with_demo() -> AppState {
        let mut state = AppState::new(Config::default());
        state.set_countries(demo::demo_countries());
        state
    }

    #[test]
    fn test_set_countries_derives_sections_and_timezones() {
        let state = state_with_demo();
        assert_eq!(state.fetch, FetchState::Success);
        assert!(!state.sections.is_empty());
        assert!(state.timezone_options.contains(&"UTC".to_string()));
        // Sorted and deduplicated
        let mut sorted = state.timezone_options.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(state.timezone_options, sorted);
    }

    #[test]
    fn test_selection_clamped_after_filtering() {
        let mut state = state_with_demo();
        state.select_last();
        let last = state.selected;
        assert!(last > 0);

        // Narrow down to a single match; selection must stay in range
        state.criteria.name_query = "peru".to_string();
        state.recompute();
        assert_eq!(state.country_count(), 1);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_country().unwrap().name.common, "Peru");
    }

    #[test]
    fn test_selected_country_walks_sections() {
        let mut state = state_with_demo();
        state.select_first();
        let first = state.selected_country().unwrap().name.common.clone();
        state.select_next();
        let second = state.selected_country().unwrap().name.common.clone();
        assert_ne!(first, second);
        assert!(first.to_lowercase() < second.to_lowercase());
    }

    #[test]
    fn test_toggle_filter_entry_by_cursor() {
        let mut state = state_with_demo();
        // Cursor 4 is "Europe" in the static continent list
        state.filter_cursor = 4;
        state.toggle_filter_entry();
        assert_eq!(state.criteria.continents, vec!["Europe".to_string()]);
        for section in &state.sections {
            for item in &section.items {
                assert!(item.continents.contains(&"Europe".to_string()));
            }
        }

        state.reset_filters();
        assert!(state.criteria.continents.is_empty());
        assert_eq!(state.country_count(), demo::demo_countries().len());
    }

    #[test]
    fn test_query_editing_recomputes_live() {
        let mut state = state_with_demo();
        state.push_query_char('p');
        state.push_query_char('o');
        assert_eq!(state.country_count(), 1); // Portugal
        state.pop_query_char();
        assert!(state.country_count() > 1);
        state.clear_query();
        assert_eq!(state.country_count(), demo::demo_countries().len());
    }

    #[test]
    fn test_image_insert_and_clear() {
        let mut state = state_with_demo();
        let url = "https://flagcdn.com/w320/pe.png";

        state.insert_image(url, DynamicImage::new_rgb8(2, 2));
        assert!(state.has_image(url));
        assert!(!state.has_image("https://flagcdn.com/w320/jp.png"));

        state.clear_images();
        assert!(!state.has_image(url));
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut state = state_with_demo();
        state.open_detail("Peru");
        assert_eq!(state.view, View::Detail);
        assert_eq!(state.detail.fetch, FetchState::Pending);
        assert_eq!(state.detail.name, "Peru");

        state.close_detail();
        assert_eq!(state.view, View::Browse);
        assert!(state.detail.name.is_empty());
    }
}
