use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Free-text experience, e.g. "8 yrs". Parsed with `content::skills::parse_years`.
    pub years: Option<&'static str>,
    pub highlight: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

/// A highlighted skill paired with the colour of the category it came from.
#[derive(Debug, Clone, Serialize)]
pub struct HighlightedSkill {
    pub name: &'static str,
    pub years: Option<&'static str>,
    pub color: &'static str,
}
