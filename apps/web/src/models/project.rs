use serde::Serialize;

use crate::content::priority::Prioritized;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Youtube,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectMedia {
    pub kind: MediaKind,
    pub src: &'static str,
    pub alt: &'static str,
    pub poster: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechCategory {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// One portfolio case study.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub preview: ProjectMedia,
    pub tech_tags: &'static [&'static str],
    pub description: &'static [&'static str],
    pub features: &'static [&'static str],
    pub tech_categories: &'static [TechCategory],
    pub media_gallery: &'static [ProjectMedia],
    pub links: &'static [ProjectLink],
    pub role: Option<&'static str>,
    pub duration: Option<&'static str>,
    pub challenges: &'static [&'static str],
    pub priority: Option<u32>,
}

impl Project {
    /// Media shown at the top of the detail page: first gallery item, else the preview.
    pub fn hero_media(&self) -> &ProjectMedia {
        self.media_gallery.first().unwrap_or(&self.preview)
    }
}

impl Prioritized for Project {
    fn priority(&self) -> Option<u32> {
        self.priority
    }
}
