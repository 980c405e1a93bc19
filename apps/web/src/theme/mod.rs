//! Theme preferences: light/dark mode plus an accent colour.
//!
//! Both values live in client-local storage under fixed keys and are
//! validated on every read. Anything outside the enumerated set is treated as
//! absent, so readers always get a usable value.

pub mod handlers;
pub mod palette;
pub mod particles;
pub mod store;

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use self::store::{CookieStore, PreferenceStore};

/// Storage key for the light/dark flag.
pub const THEME_KEY: &str = "theme";
/// Storage key for the accent colour name.
pub const ACCENT_KEY: &str = "primaryColor";

/// Client hint carrying the browser's `prefers-color-scheme` value.
pub const COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Cyan,
    Gold,
    Emerald,
    Coral,
    Violet,
}

impl AccentColor {
    pub const ALL: [AccentColor; 5] = [
        AccentColor::Cyan,
        AccentColor::Gold,
        AccentColor::Emerald,
        AccentColor::Coral,
        AccentColor::Violet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AccentColor::Cyan => "cyan",
            AccentColor::Gold => "gold",
            AccentColor::Emerald => "emerald",
            AccentColor::Coral => "coral",
            AccentColor::Violet => "violet",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// The full preference pair as read for one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ThemePreference {
    pub theme: Theme,
    pub accent: AccentColor,
}

/// Stored theme, else the browser's colour-scheme hint, else `Theme::Light`.
pub fn read_theme(store: &impl PreferenceStore, system: Option<Theme>) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|v| Theme::parse(&v))
        .or(system)
        .unwrap_or_default()
}

/// Stored accent colour, else `AccentColor::Cyan`.
pub fn read_accent(store: &impl PreferenceStore) -> AccentColor {
    store
        .get(ACCENT_KEY)
        .and_then(|v| AccentColor::parse(&v))
        .unwrap_or_default()
}

pub fn read_preference(store: &impl PreferenceStore, system: Option<Theme>) -> ThemePreference {
    ThemePreference {
        theme: read_theme(store, system),
        accent: read_accent(store),
    }
}

pub fn set_theme(store: &mut impl PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

/// Flips the effective theme and persists the result.
pub fn toggle_theme(store: &mut impl PreferenceStore, system: Option<Theme>) -> Theme {
    let next = read_theme(&*store, system).toggled();
    set_theme(store, next);
    next
}

pub fn set_accent(store: &mut impl PreferenceStore, accent: AccentColor) {
    store.set(ACCENT_KEY, accent.as_str());
}

/// Reads the `Sec-CH-Prefers-Color-Scheme` client hint, if the browser sent one.
pub fn system_theme_hint(headers: &HeaderMap) -> Option<Theme> {
    headers
        .get(COLOR_SCHEME_HINT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().trim_matches('"'))
        .and_then(Theme::parse)
}

/// Effective preferences for an incoming request: cookies first, then the
/// colour-scheme hint, then the defaults.
pub fn request_preference(headers: &HeaderMap) -> ThemePreference {
    read_preference(&CookieStore::from_headers(headers), system_theme_hint(headers))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::store::MemoryStore;
    use super::*;

    #[test]
    fn test_empty_store_no_hint_uses_default() {
        let store = MemoryStore::default();
        assert_eq!(read_theme(&store, None), Theme::Light);
        assert_eq!(read_accent(&store), AccentColor::Cyan);
    }

    #[test]
    fn test_empty_store_uses_system_hint() {
        let store = MemoryStore::default();
        assert_eq!(read_theme(&store, Some(Theme::Dark)), Theme::Dark);
    }

    #[test]
    fn test_invalid_stored_values_fall_back() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "sepia");
        store.set(ACCENT_KEY, "blue");
        assert_eq!(read_theme(&store, None), Theme::Light);
        assert_eq!(read_theme(&store, Some(Theme::Dark)), Theme::Dark);
        assert_eq!(read_accent(&store), AccentColor::Cyan);
    }

    #[test]
    fn test_stored_value_beats_system_hint() {
        let mut store = MemoryStore::default();
        set_theme(&mut store, Theme::Light);
        assert_eq!(read_theme(&store, Some(Theme::Dark)), Theme::Light);
    }

    #[test]
    fn test_set_then_read_round_trips() {
        let mut store = MemoryStore::default();
        for theme in [Theme::Light, Theme::Dark] {
            set_theme(&mut store, theme);
            assert_eq!(read_theme(&store, None), theme);
        }
        for accent in AccentColor::ALL {
            set_accent(&mut store, accent);
            assert_eq!(read_accent(&store), accent);
        }
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let mut store = MemoryStore::default();
        assert_eq!(toggle_theme(&mut store, None), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(toggle_theme(&mut store, None), Theme::Light);
    }

    #[test]
    fn test_toggle_starts_from_system_hint() {
        let mut store = MemoryStore::default();
        assert_eq!(toggle_theme(&mut store, Some(Theme::Dark)), Theme::Light);
    }

    #[test]
    fn test_accent_parse_rejects_unknown() {
        assert_eq!(AccentColor::parse("violet"), Some(AccentColor::Violet));
        assert_eq!(AccentColor::parse("Violet"), None);
        assert_eq!(AccentColor::parse(""), None);
    }

    #[test]
    fn test_system_theme_hint_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(system_theme_hint(&headers), None);

        headers.insert(COLOR_SCHEME_HINT, HeaderValue::from_static("\"dark\""));
        assert_eq!(system_theme_hint(&headers), Some(Theme::Dark));

        headers.insert(COLOR_SCHEME_HINT, HeaderValue::from_static("no-preference"));
        assert_eq!(system_theme_hint(&headers), None);
    }

    #[test]
    fn test_request_preference_prefers_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(COLOR_SCHEME_HINT, HeaderValue::from_static("dark"));
        assert_eq!(request_preference(&headers).theme, Theme::Dark);

        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("theme=light; primaryColor=emerald"),
        );
        let preference = request_preference(&headers);
        assert_eq!(preference.theme, Theme::Light);
        assert_eq!(preference.accent, AccentColor::Emerald);
    }
}
