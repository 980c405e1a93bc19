//! Shared page shell: document head, navigation bar, theme controls and the
//! particle background.

use crate::render::escape;
use crate::theme::palette::{root_style, COLOR_OPTIONS};
use crate::theme::particles::particles_config;
use crate::theme::ThemePreference;

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Career,
    Projects,
    Knowledge,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Home,
        NavItem::Career,
        NavItem::Projects,
        NavItem::Knowledge,
        NavItem::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavItem::Home => "/",
            NavItem::Career => "/career",
            NavItem::Projects => "/projects",
            NavItem::Knowledge => "/knowledge",
            NavItem::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Career => "Career",
            NavItem::Projects => "Projects",
            NavItem::Knowledge => "Knowledge",
            NavItem::Contact => "Contact",
        }
    }
}

/// A rendered page body waiting for the shell.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub active: NavItem,
    pub body: String,
}

/// Wraps `page` in the full document for the given preferences.
///
/// `current_path` is where the theme controls send the visitor back to.
pub fn render_page(
    site_name: &str,
    preference: ThemePreference,
    current_path: &str,
    page: &Page,
) -> String {
    let theme = preference.theme.as_str();
    let particles = particles_config(preference.theme)
        .map(|json| {
            format!(
                "<div id=\"tsparticles\" class=\"particles\"></div>\n<script type=\"application/json\" id=\"particles-config\">{}</script>\n",
                json.replace("</", "<\\/")
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}" class="{theme}" style="{style}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<link rel="stylesheet" href="/assets/site.css">
<link rel="stylesheet" href="/theme.css">
</head>
<body>
{particles}{navbar}
<main>
{body}
</main>
</body>
</html>
"#,
        style = escape(&root_style(preference)),
        title = escape(&page.title),
        site = escape(site_name),
        navbar = navbar(site_name, preference, current_path, page.active),
        body = page.body,
    )
}

fn navbar(
    site_name: &str,
    preference: ThemePreference,
    current_path: &str,
    active: NavItem,
) -> String {
    let links: String = NavItem::ALL
        .iter()
        .map(|item| {
            let class = if *item == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{}\"{class}>{}</a>", item.path(), item.label())
        })
        .collect();

    format!(
        r#"<nav class="navbar">
<div class="nav-content">
<a href="/" class="nav-brand">{brand}</a>
<div class="nav-links">{links}</div>
<div class="nav-controls">{toggle}{picker}</div>
</div>
</nav>"#,
        brand = escape(site_name),
        toggle = theme_toggle(preference, current_path),
        picker = color_picker(preference, current_path),
    )
}

fn theme_toggle(preference: ThemePreference, current_path: &str) -> String {
    let next = preference.theme.toggled().as_str();
    format!(
        r#"<form method="post" action="/preferences/theme" class="theme-toggle">
<input type="hidden" name="return_to" value="{back}">
<button type="submit" aria-label="Switch to {next} mode">{icon}</button>
</form>"#,
        back = escape(current_path),
        icon = if next == "dark" { "🌙" } else { "☀️" },
    )
}

fn color_picker(preference: ThemePreference, current_path: &str) -> String {
    let options: String = COLOR_OPTIONS
        .iter()
        .map(|option| {
            let selected = if option.name == preference.accent {
                " aria-pressed=\"true\" class=\"color-option selected\""
            } else {
                " class=\"color-option\""
            };
            format!(
                "<button type=\"submit\" name=\"color\" value=\"{}\"{selected} style=\"background-color: {}\" title=\"{}\"></button>",
                option.name.as_str(),
                option.primary,
                option.label
            )
        })
        .collect();

    format!(
        r#"<form method="post" action="/preferences/accent" class="color-picker">
<input type="hidden" name="return_to" value="{back}">
<div class="color-picker-title">Choose Color</div>
<div class="color-options">{options}</div>
</form>"#,
        back = escape(current_path),
    )
}
