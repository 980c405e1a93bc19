use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeArticle {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub year: i32,
    pub month: u32,
    pub read_time: &'static str,
    pub excerpt: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

impl KnowledgeArticle {
    /// First day of the publication month.
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// "December 2024"
    pub fn published_label(&self) -> String {
        self.published()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}
