use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileLink {
    pub label: &'static str,
    pub url: &'static str,
    /// Extra CSS class for brand styling (e.g. "github").
    pub class: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillSummary {
    pub label: &'static str,
    pub items: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub years: &'static str,
}

/// Biographical content for the home and contact pages.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub about: &'static str,
    pub leadership: &'static [&'static str],
    pub skills: &'static [SkillSummary],
    pub education: &'static [Education],
    pub links: &'static [ProfileLink],
    pub articles_url: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` href with everything but digits and a leading `+` stripped.
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .enumerate()
            .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
            .map(|(_, c)| c)
            .collect();
        format!("tel:{digits}")
    }
}
