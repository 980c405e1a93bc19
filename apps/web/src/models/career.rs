use serde::Serialize;

use crate::content::priority::Prioritized;

#[derive(Debug, Clone, Serialize)]
pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
}

/// A single position in the work history.
#[derive(Debug, Clone, Serialize)]
pub struct WorkExperience {
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    /// Short one-line summary used on the home page.
    pub summary: &'static str,
    pub key_metric: Option<KeyMetric>,
    pub year_start: Option<u16>,
    pub year_end: Option<u16>,
    /// CSS colour used for the generated monogram badge.
    pub badge_color: &'static str,
}

impl WorkExperience {
    /// Two-letter monogram built from the first letters of the company name.
    pub fn monogram(&self) -> String {
        self.company
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphanumeric())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Case-study style highlight: challenge, solution, measurable outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub tech_stack: &'static [&'static str],
    pub outcomes: &'static [&'static str],
    pub priority: Option<u32>,
}

impl Prioritized for Achievement {
    fn priority(&self) -> Option<u32> {
        self.priority
    }
}
