//! Tools & methods: skill categories and the helpers the skills section uses.

use crate::models::skill::{HighlightedSkill, Skill, SkillCategory};

const fn skill(name: &'static str) -> Skill {
    Skill {
        name,
        years: None,
        highlight: false,
    }
}

const fn skill_years(name: &'static str, years: &'static str) -> Skill {
    Skill {
        name,
        years: Some(years),
        highlight: false,
    }
}

const fn highlighted(name: &'static str, years: Option<&'static str>) -> Skill {
    Skill {
        name,
        years,
        highlight: true,
    }
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "frontend",
        title: "Frontend & UI",
        description: "Modern web interfaces and interactive experiences",
        color: "#00D9FF",
        icon: "⚛️",
        skills: &[
            highlighted("Angular", Some("8 yrs")),
            skill_years("RxJS", "4 yrs"),
            highlighted("TypeScript", Some("6 yrs")),
            skill("Bootstrap"),
            skill("SCSS"),
            skill("HTML5"),
            skill("Responsive Design"),
        ],
    },
    SkillCategory {
        id: "backend",
        title: "Backend",
        description: "Scalable server architecture and APIs",
        color: "#00B4DC",
        icon: "🔧",
        skills: &[
            highlighted(".NET Core", Some("8 yrs")),
            skill_years("Node.js", "8 yrs"),
            skill("WebSocket"),
            skill("SignalR"),
        ],
    },
    SkillCategory {
        id: "mobile",
        title: "Mobile",
        description: "Cross-platform mobile applications",
        color: "#10B981",
        icon: "📱",
        skills: &[skill_years("Flutter", "1 yr"), skill_years("Ionic", "5 yrs")],
    },
    SkillCategory {
        id: "databases",
        title: "Databases",
        description: "Data storage and retrieval systems",
        color: "#F59E0B",
        icon: "🗄️",
        skills: &[
            skill_years("PostgreSQL", "6 yrs"),
            skill_years("Redis", "6 yrs"),
            skill_years("MongoDB", "4 yrs"),
            skill_years("MySQL", "5 yrs"),
            skill_years("DynamoDB", "1 yr"),
        ],
    },
    SkillCategory {
        id: "devops",
        title: "Cloud & DevOps",
        description: "Infrastructure and deployment automation",
        color: "#EF4444",
        icon: "☁️",
        skills: &[
            highlighted("AWS", Some("10 yrs")),
            skill("Lambda, EC2, SAM, Route 53, RDS"),
            skill_years("Firebase", "7 yrs"),
            skill("Docker"),
            skill("CI/CD"),
        ],
    },
    SkillCategory {
        id: "architecture",
        title: "Architecture & Patterns",
        description: "Design principles and system patterns",
        color: "#8B5CF6",
        icon: "🏗️",
        skills: &[
            skill("Clean Architecture"),
            skill("CQRS"),
            skill("Hexagonal"),
            skill("SOLID"),
            highlighted("Microservices", None),
            skill("gRPC"),
        ],
    },
    SkillCategory {
        id: "ai",
        title: "AI & Automation",
        description: "Intelligent systems and workflow automation",
        color: "#EC4899",
        icon: "🤖",
        skills: &[
            skill("ChatBot"),
            skill("Invoice Automation"),
            skill("Workflow Automation"),
        ],
    },
    SkillCategory {
        id: "collaboration",
        title: "Project & Collaboration",
        description: "Tools for team coordination and delivery",
        color: "#06B6D4",
        icon: "🤝",
        skills: &[
            skill("Jira"),
            skill("YouTrack"),
            skill("GitLab Board"),
            skill("GitHub"),
            skill("GitLab"),
            skill("Figma"),
            skill("Miro"),
        ],
    },
    SkillCategory {
        id: "agile",
        title: "Agile Practices",
        description: "Proven methodologies for delivery",
        color: "#14B8A6",
        icon: "⚡",
        skills: &[
            skill("Scrum"),
            skill("Kanban"),
            skill("Sprint Planning"),
            skill("Backlog Grooming"),
        ],
    },
    SkillCategory {
        id: "other",
        title: "Other",
        description: "Additional specialized skills",
        color: "#A78BFA",
        icon: "✨",
        skills: &[
            skill("SignalR"),
            skill("TDD"),
            skill("Technical Writing"),
            skill("Documentation Systems"),
        ],
    },
];

/// Extracts the first run of ASCII digits from an experience string.
///
/// `"8 yrs"` → `Some(8)`. Missing input, or input without digits, yields `None`.
pub fn parse_years(years: Option<&str>) -> Option<u32> {
    let text = years?;
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Distinct year values across every skill, largest first.
pub fn all_years() -> Vec<u32> {
    let mut years: Vec<u32> = SKILL_CATEGORIES
        .iter()
        .flat_map(|category| category.skills.iter())
        .filter_map(|skill| parse_years(skill.years))
        .filter(|&y| y > 0)
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

pub fn category_by_id(id: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|category| category.id == id)
}

/// Every skill flagged as a highlight, tagged with its category colour.
pub fn highlighted_skills() -> Vec<HighlightedSkill> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|category| {
            category
                .skills
                .iter()
                .filter(|skill| skill.highlight)
                .map(move |skill| HighlightedSkill {
                    name: skill.name,
                    years: skill.years,
                    color: category.color,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_years_plain() {
        assert_eq!(parse_years(Some("8 yrs")), Some(8));
        assert_eq!(parse_years(Some("1 yr")), Some(1));
    }

    #[test]
    fn test_parse_years_multi_digit_and_prefix() {
        assert_eq!(parse_years(Some("10 yrs")), Some(10));
        assert_eq!(parse_years(Some("about 14+ years")), Some(14));
    }

    #[test]
    fn test_parse_years_missing_or_no_digits() {
        assert_eq!(parse_years(None), None);
        assert_eq!(parse_years(Some("")), None);
        assert_eq!(parse_years(Some("many years")), None);
    }

    #[test]
    fn test_all_years_distinct_descending() {
        assert_eq!(all_years(), vec![10, 8, 7, 6, 5, 4, 1]);
    }

    #[test]
    fn test_category_by_id() {
        assert_eq!(category_by_id("mobile").map(|c| c.title), Some("Mobile"));
        assert!(category_by_id("Mobile").is_none());
        assert!(category_by_id("cooking").is_none());
    }

    #[test]
    fn test_highlighted_skills_carry_category_color() {
        let highlighted = highlighted_skills();
        let names: Vec<&str> = highlighted.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["Angular", "TypeScript", ".NET Core", "AWS", "Microservices"]
        );
        assert_eq!(highlighted[0].color, "#00D9FF");
        assert_eq!(highlighted[4].color, "#8B5CF6");
    }
}
