//! Server-side HTML rendering.
//!
//! Pages are plain strings assembled from the static content tables. Every
//! piece of content goes through `escape` before it reaches markup.

pub mod layout;
pub mod pages;

use crate::media::MediaView;

pub use layout::{render_page, NavItem, Page};

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<a>` opening a new tab, as used for every outbound link.
pub fn external_link(href: &str, label: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(" class=\"{}\"", escape(c)))
        .unwrap_or_default();
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"{class_attr}>{}</a>",
        escape(href),
        escape(label)
    )
}

/// `<span class="{class}">` per item.
pub fn chips(items: &[&str], class: &str) -> String {
    items
        .iter()
        .map(|item| format!("<span class=\"{class}\">{}</span>", escape(item)))
        .collect()
}

pub fn list_items(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

/// Markup for a resolved media record. `lazy` defers image loading.
pub fn media(view: &MediaView, lazy: bool) -> String {
    let loading = if lazy { " loading=\"lazy\"" } else { "" };
    match view {
        MediaView::Image { src, alt } => {
            format!("<img src=\"{}\" alt=\"{}\"{loading}>", escape(src), escape(alt))
        }
        MediaView::Embed { src, poster, alt } => format!(
            "<iframe src=\"{}\" title=\"{}\"{} allow=\"accelerometer; encrypted-media; picture-in-picture\" allowfullscreen{loading}></iframe>",
            escape(src),
            escape(alt),
            poster
                .as_deref()
                .map(|p| format!(" data-poster=\"{}\"", escape(p)))
                .unwrap_or_default()
        ),
        MediaView::Placeholder { href, alt } => format!(
            "<div class=\"media-placeholder\">{}</div>",
            external_link(href, alt, None)
        ),
    }
}
