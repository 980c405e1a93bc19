//! Key/value storage backing the theme preferences.

use std::collections::HashMap;

use axum::http::{header, HeaderMap, HeaderName};

/// Cookies written by the store live for a year.
pub const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Minimal string key/value storage. Reads never fail: a missing or
/// unreadable entry is simply `None`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for exercising preference logic without HTTP.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Cookie-backed store for a single request/response cycle.
///
/// Reads come from the request's `Cookie` headers. Writes update the view
/// immediately and queue a `Set-Cookie` for the response.
#[derive(Debug, Default, Clone)]
pub struct CookieStore {
    values: HashMap<String, String>,
    pending: Vec<String>,
}

impl CookieStore {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let values = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|raw| raw.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().trim_matches('"').to_string()))
            .filter(|(k, _)| !k.is_empty())
            .collect();

        CookieStore {
            values,
            pending: Vec::new(),
        }
    }

    /// `Set-Cookie` headers for every value written through this store.
    pub fn set_cookie_headers(&self) -> Vec<(HeaderName, String)> {
        self.pending
            .iter()
            .map(|cookie| (header::SET_COOKIE, cookie.clone()))
            .collect()
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.pending.push(format!(
            "{key}={value}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax"
        ));
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_cookie_store_parses_request_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; primaryColor=gold;  other = x"),
        );
        let store = CookieStore::from_headers(&headers);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.get("primaryColor").as_deref(), Some("gold"));
        assert_eq!(store.get("other").as_deref(), Some("x"));
        assert!(store.set_cookie_headers().is_empty());
    }

    #[test]
    fn test_cookie_store_handles_multiple_headers_and_junk() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("garbage; =nokey"));
        headers.append(header::COOKIE, HeaderValue::from_static("theme=\"light\""));
        let store = CookieStore::from_headers(&headers);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.get(""), None);
    }

    #[test]
    fn test_cookie_store_queues_set_cookie() {
        let mut store = CookieStore::default();
        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        let headers = store.set_cookie_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].0, header::SET_COOKIE);
        assert!(headers[0].1.starts_with("theme=dark; Path=/;"));
        assert!(headers[0].1.contains("SameSite=Lax"));
    }
}
