use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::{AppendHeaders, IntoResponse, Redirect},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::theme::palette::{css_variables, stylesheet};
use crate::theme::store::CookieStore;
use crate::theme::{
    read_preference, request_preference, set_accent, set_theme, system_theme_hint, toggle_theme,
    AccentColor, Theme, ThemePreference,
};

#[derive(Deserialize)]
pub struct ToggleThemeForm {
    pub return_to: Option<String>,
}

#[derive(Deserialize)]
pub struct AccentForm {
    pub color: String,
    pub return_to: Option<String>,
}

#[derive(Deserialize)]
pub struct PreferenceUpdate {
    pub theme: Option<String>,
    pub accent: Option<String>,
}

#[derive(Serialize)]
pub struct PreferenceResponse {
    pub theme: Theme,
    pub accent: AccentColor,
    pub css_variables: Vec<(String, String)>,
}

impl From<ThemePreference> for PreferenceResponse {
    fn from(preference: ThemePreference) -> Self {
        PreferenceResponse {
            theme: preference.theme,
            accent: preference.accent,
            css_variables: css_variables(preference),
        }
    }
}

/// Only same-site absolute paths are accepted as redirect targets. The path
/// must also be a valid header value, since it becomes the `Location` header.
pub fn safe_return_path(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && HeaderValue::from_str(path).is_ok() =>
        {
            path
        }
        _ => "/",
    }
}

/// POST /preferences/theme
pub async fn handle_toggle_theme(
    headers: HeaderMap,
    Form(form): Form<ToggleThemeForm>,
) -> impl IntoResponse {
    let mut store = CookieStore::from_headers(&headers);
    let theme = toggle_theme(&mut store, system_theme_hint(&headers));
    debug!("theme switched to {}", theme.as_str());

    (
        AppendHeaders(store.set_cookie_headers()),
        Redirect::to(safe_return_path(form.return_to.as_deref())),
    )
}

/// POST /preferences/accent
///
/// Unknown colour names are ignored and the current accent is kept.
pub async fn handle_set_accent(
    headers: HeaderMap,
    Form(form): Form<AccentForm>,
) -> impl IntoResponse {
    let mut store = CookieStore::from_headers(&headers);
    match AccentColor::parse(form.color.trim()) {
        Some(accent) => {
            set_accent(&mut store, accent);
            debug!("accent switched to {}", accent.as_str());
        }
        None => debug!("ignoring unknown accent colour {:?}", form.color),
    }

    (
        AppendHeaders(store.set_cookie_headers()),
        Redirect::to(safe_return_path(form.return_to.as_deref())),
    )
}

/// GET /theme.css
pub async fn handle_theme_css(headers: HeaderMap) -> impl IntoResponse {
    let css = stylesheet(request_preference(&headers));
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
            (header::VARY, "Cookie, Sec-CH-Prefers-Color-Scheme"),
        ],
        css,
    )
}

/// GET /api/v1/preferences
pub async fn handle_get_preferences(headers: HeaderMap) -> Json<PreferenceResponse> {
    Json(request_preference(&headers).into())
}

/// POST /api/v1/preferences
///
/// Unlike the form endpoints this one is strict: unknown values are rejected.
pub async fn handle_update_preferences(
    headers: HeaderMap,
    Json(update): Json<PreferenceUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let theme = update
        .theme
        .as_deref()
        .map(|v| {
            Theme::parse(v).ok_or_else(|| AppError::Validation(format!("Unknown theme '{v}'")))
        })
        .transpose()?;
    let accent = update
        .accent
        .as_deref()
        .map(|v| {
            AccentColor::parse(v)
                .ok_or_else(|| AppError::Validation(format!("Unknown accent colour '{v}'")))
        })
        .transpose()?;

    let mut store = CookieStore::from_headers(&headers);
    if let Some(theme) = theme {
        set_theme(&mut store, theme);
    }
    if let Some(accent) = accent {
        set_accent(&mut store, accent);
    }

    let preference = read_preference(&store, system_theme_hint(&headers));
    Ok((
        AppendHeaders(store.set_cookie_headers()),
        Json(PreferenceResponse::from(preference)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/projects/evv")), "/projects/evv");
        assert_eq!(
            safe_return_path(Some("/knowledge?category=Frontend")),
            "/knowledge?category=Frontend"
        );
        assert_eq!(safe_return_path(Some("//evil.example")), "/");
        assert_eq!(safe_return_path(Some("https://evil.example")), "/");
        assert_eq!(safe_return_path(Some("/\\evil")), "/");
        assert_eq!(safe_return_path(None), "/");
    }

    #[test]
    fn test_safe_return_path_rejects_control_characters() {
        assert_eq!(safe_return_path(Some("/a\nb")), "/");
        assert_eq!(safe_return_path(Some("/a\r\nSet-Cookie: x=1")), "/");
        assert_eq!(safe_return_path(Some("/a\0b")), "/");
        assert_eq!(safe_return_path(Some("/a\u{7f}")), "/");
    }
}
