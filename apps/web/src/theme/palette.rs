//! Accent colour palette and the CSS custom properties derived from it.

use serde::Serialize;

use super::{AccentColor, ThemePreference};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorOption {
    pub name: AccentColor,
    pub label: &'static str,
    pub primary: &'static str,
    pub hover: &'static str,
    /// "r, g, b" triple for alpha compositing.
    pub rgb: &'static str,
}

pub const COLOR_OPTIONS: [ColorOption; 5] = [
    ColorOption {
        name: AccentColor::Cyan,
        label: "Cyan",
        primary: "#00d9ff",
        hover: "#33e1ff",
        rgb: "0, 217, 255",
    },
    ColorOption {
        name: AccentColor::Gold,
        label: "Gold",
        primary: "#f59e0b",
        hover: "#fbbf24",
        rgb: "245, 158, 11",
    },
    ColorOption {
        name: AccentColor::Emerald,
        label: "Emerald",
        primary: "#10b981",
        hover: "#34d399",
        rgb: "16, 185, 129",
    },
    ColorOption {
        name: AccentColor::Coral,
        label: "Coral",
        primary: "#f97316",
        hover: "#fb923c",
        rgb: "249, 115, 22",
    },
    ColorOption {
        name: AccentColor::Violet,
        label: "Violet",
        primary: "#8b5cf6",
        hover: "#a78bfa",
        rgb: "139, 92, 246",
    },
];

/// Opacity steps exposed as `--accent-alpha-<pct>`.
const ALPHA_STEPS: [u8; 4] = [10, 20, 30, 50];

impl AccentColor {
    pub fn option(self) -> &'static ColorOption {
        // every variant has exactly one palette entry, in declaration order
        &COLOR_OPTIONS[self as usize]
    }
}

/// `(name, value)` pairs written onto the document root for the preference.
pub fn css_variables(preference: ThemePreference) -> Vec<(String, String)> {
    let option = preference.accent.option();
    let mut vars = vec![
        ("--accent-color".to_string(), option.primary.to_string()),
        ("--accent-hover".to_string(), option.hover.to_string()),
        ("--accent-rgb".to_string(), option.rgb.to_string()),
    ];
    vars.extend(ALPHA_STEPS.iter().map(|pct| {
        (
            format!("--accent-alpha-{pct}"),
            format!("rgba({}, {:.1})", option.rgb, f32::from(*pct) / 100.0),
        )
    }));
    vars
}

/// Inline `style` attribute value for `<html>`.
pub fn root_style(preference: ThemePreference) -> String {
    css_variables(preference)
        .into_iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stand-alone stylesheet served at `/theme.css`.
pub fn stylesheet(preference: ThemePreference) -> String {
    let mut css = format!(":root[data-theme=\"{}\"] {{\n", preference.theme.as_str());
    for (name, value) in css_variables(preference) {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push_str(&format!(
        "  color-scheme: {};\n}}\n",
        preference.theme.as_str()
    ));
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_option_lookup_matches_name() {
        for accent in AccentColor::ALL {
            assert_eq!(accent.option().name, accent);
        }
    }

    #[test]
    fn test_css_variables_for_gold() {
        let vars = css_variables(ThemePreference {
            theme: Theme::Dark,
            accent: AccentColor::Gold,
        });
        assert_eq!(vars[0], ("--accent-color".to_string(), "#f59e0b".to_string()));
        assert_eq!(vars[1], ("--accent-hover".to_string(), "#fbbf24".to_string()));
        assert!(vars.contains(&(
            "--accent-alpha-20".to_string(),
            "rgba(245, 158, 11, 0.2)".to_string()
        )));
        assert_eq!(vars.len(), 3 + ALPHA_STEPS.len());
    }

    #[test]
    fn test_stylesheet_scopes_to_theme() {
        let css = stylesheet(ThemePreference::default());
        assert!(css.starts_with(":root[data-theme=\"light\"] {"));
        assert!(css.contains("--accent-color: #00d9ff;"));
        assert!(css.contains("color-scheme: light;"));
    }

    #[test]
    fn test_root_style_is_single_line() {
        let style = root_style(ThemePreference::default());
        assert!(!style.contains('\n'));
        assert!(style.starts_with("--accent-color: #00d9ff;"));
    }
}
