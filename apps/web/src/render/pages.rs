//! Page bodies. Each function maps a static table into a `Page`.

use crate::content::articles::{filter_by_category, CATEGORIES};
use crate::content::career::{top_achievements, DEFAULT_TOP_ACHIEVEMENTS, WORK_EXPERIENCES};
use crate::content::profile::PROFILE;
use crate::content::projects::projects_by_priority;
use crate::content::skills::{highlighted_skills, parse_years, SKILL_CATEGORIES};
use crate::media::resolve;
use crate::models::career::{Achievement, WorkExperience};
use crate::models::project::Project;
use crate::models::skill::SkillCategory;
use crate::render::{chips, escape, external_link, list_items, media, NavItem, Page};

// ────────────────────────────────────────────────────────────────────────────
// Home
// ────────────────────────────────────────────────────────────────────────────

pub fn home() -> Page {
    let profile = &PROFILE;

    let links: String = profile
        .links
        .iter()
        .map(|link| external_link(link.url, link.label, link.class))
        .collect();

    let skills: String = profile
        .skills
        .iter()
        .map(|s| format!("<li><strong>{}:</strong> {}</li>", escape(s.label), escape(s.items)))
        .collect();

    let work: String = WORK_EXPERIENCES
        .iter()
        .map(|w| {
            format!(
                "<li><strong>{} ({})</strong><br>{} - {}</li>",
                escape(w.company),
                escape(w.duration),
                escape(w.position),
                escape(w.summary)
            )
        })
        .collect();

    let education: String = profile
        .education
        .iter()
        .map(|e| {
            format!(
                "<li><strong>{} ({})</strong><br>{}</li>",
                escape(e.degree),
                escape(e.years),
                escape(e.institution)
            )
        })
        .collect();

    let body = format!(
        r#"<div class="container">
<header class="header">
<h1>{name}</h1>
<h2>{headline}</h2>
<p>{location} | {phone} | <a href="{mailto}">{email}</a></p>
<div class="contact-info">{links}</div>
</header>
<section class="section about-me"><h2>About Me</h2><p>{about}</p></section>
<section class="section project-management"><h2>Project Management &amp; Leadership</h2><ul>{leadership}</ul></section>
<section class="section skills"><h2>Skills</h2><ul>{skills}</ul></section>
{tools}
<section class="section work-experience"><h2>Work Experience</h2><ul>{work}</ul></section>
<section class="section education"><h2>Education</h2><ul>{education}</ul></section>
</div>"#,
        name = escape(profile.name),
        headline = escape(profile.headline),
        location = escape(profile.location),
        phone = escape(profile.phone),
        mailto = escape(&profile.mailto()),
        email = escape(profile.email),
        about = escape(profile.about),
        leadership = list_items(profile.leadership),
        tools = tools_section(SKILL_CATEGORIES),
    );

    Page {
        title: profile.name.to_string(),
        active: NavItem::Home,
        body,
    }
}

/// Skill category grid with experience badges and highlights.
fn tools_section(categories: &[SkillCategory]) -> String {
    let highlights: String = highlighted_skills()
        .iter()
        .map(|s| {
            format!(
                "<span class=\"highlight-chip\" style=\"border-color: {}\">{}</span>",
                escape(s.color),
                escape(s.name)
            )
        })
        .collect();

    let cards: String = categories
        .iter()
        .map(|category| {
            let skills: String = category
                .skills
                .iter()
                .map(|skill| {
                    let class = if skill.highlight { "skill-item highlight" } else { "skill-item" };
                    let badge = parse_years(skill.years)
                        .map(|y| format!("<span class=\"skill-years\">{y}+ yrs</span>"))
                        .unwrap_or_default();
                    format!("<li class=\"{class}\">{}{badge}</li>", escape(skill.name))
                })
                .collect();
            format!(
                r#"<div class="tool-card" id="{id}" style="--category-color: {color}">
<div class="tool-card-header"><span class="tool-icon">{icon}</span><h3>{title}</h3></div>
<p class="tool-description">{description}</p>
<ul class="skill-list">{skills}</ul>
</div>"#,
                id = escape(category.id),
                color = escape(category.color),
                icon = category.icon,
                title = escape(category.title),
                description = escape(category.description),
            )
        })
        .collect();

    format!(
        r#"<section class="tools-section">
<div class="tools-header"><h2 class="section-title">Tools &amp; Methods</h2>
<p class="section-subtitle">14+ years of expertise across full-stack development, cloud infrastructure, and team leadership</p></div>
<div class="skill-highlights">{highlights}</div>
<div class="tools-grid">{cards}</div>
</section>"#
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Career
// ────────────────────────────────────────────────────────────────────────────

pub fn career() -> Page {
    let experiences: String = WORK_EXPERIENCES.iter().map(experience_card).collect();
    let achievements: String = top_achievements(DEFAULT_TOP_ACHIEVEMENTS)
        .into_iter()
        .map(achievement_card)
        .collect();

    let body = format!(
        r#"<div class="container career-page">
<header class="career-header">
<h1 class="career-title">Career</h1>
<p class="career-subtitle">Work experience and leadership highlights across product, platform, and team growth.</p>
</header>
<section class="section achievements"><h2 class="section-title">Key Achievements</h2><div class="achievement-grid">{achievements}</div></section>
<section class="section work-experience"><h2 class="section-title">Work Experience</h2><div class="work-experience-list">{experiences}</div></section>
</div>"#
    );

    Page {
        title: "Career".to_string(),
        active: NavItem::Career,
        body,
    }
}

fn experience_card(experience: &WorkExperience) -> String {
    let metric = experience
        .key_metric
        .as_ref()
        .map(|m| {
            format!(
                "<div class=\"key-metric-badge\"><div class=\"metric-value\">{}</div><div class=\"metric-label\">{}</div></div>",
                escape(m.value),
                escape(m.label)
            )
        })
        .unwrap_or_default();

    let timeline = match (experience.year_start, experience.year_end) {
        (Some(start), Some(end)) => format!(
            "<div class=\"timeline-bar\"><span class=\"year-start\">{start}</span><div class=\"bar-line\"></div><span class=\"year-end\">{end}</span></div>"
        ),
        _ => String::new(),
    };

    format!(
        r#"<div class="bento-card">
<div class="bento-card-logo" style="background-color: {badge}" aria-label="{company} logo">{monogram}</div>
<div class="bento-card-content">
<div class="experience-header"><div class="header-top"><div><h3>{company}</h3><span class="position">{position}</span></div>{metric}</div>{timeline}</div>
<p class="experience-description">{description}</p>
<ul>{achievements}</ul>
</div>
</div>"#,
        badge = escape(experience.badge_color),
        company = escape(experience.company),
        monogram = escape(&experience.monogram()),
        position = escape(experience.position),
        description = escape(experience.description),
        achievements = list_items(experience.achievements),
    )
}

fn achievement_card(achievement: &Achievement) -> String {
    format!(
        r#"<article class="achievement-card" id="{id}">
<h3>{title}</h3>
<p class="achievement-meta">{role} · {company}</p>
<p><strong>Challenge:</strong> {challenge}</p>
<p><strong>Solution:</strong> {solution}</p>
<div class="tech-tags">{stack}</div>
<ul class="outcomes">{outcomes}</ul>
</article>"#,
        id = escape(achievement.id),
        title = escape(achievement.title),
        role = escape(achievement.role),
        company = escape(achievement.company),
        challenge = escape(achievement.challenge),
        solution = escape(achievement.solution),
        stack = chips(achievement.tech_stack, "tech-tag"),
        outcomes = list_items(achievement.outcomes),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

pub fn contact() -> Page {
    let profile = &PROFILE;
    let social: String = profile
        .links
        .iter()
        .map(|link| external_link(link.url, link.label, link.class))
        .collect();

    let body = format!(
        r#"<div class="container">
<section class="section contact">
<h2>Contact</h2>
<div class="contact-info">
<p>You can reach me at:</p>
<ul>
<li><strong>Email:</strong> <a href="{mailto}">{email}</a></li>
<li><strong>Phone:</strong> <a href="{tel}">{phone}</a></li>
<li><strong>Location:</strong> {location}</li>
</ul>
<div class="social-links">{social}</div>
</div>
</section>
</div>"#,
        mailto = escape(&profile.mailto()),
        email = escape(profile.email),
        tel = escape(&profile.tel()),
        phone = escape(profile.phone),
        location = escape(profile.location),
    );

    Page {
        title: "Contact".to_string(),
        active: NavItem::Contact,
        body,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Knowledge
// ────────────────────────────────────────────────────────────────────────────

/// Article index; `category` must already be resolved against `CATEGORIES`.
pub fn knowledge(category: &str) -> Page {
    let filters: String = CATEGORIES
        .iter()
        .map(|c| {
            let class = if *c == category { "category-btn active" } else { "category-btn" };
            format!(
                "<a class=\"{class}\" href=\"/knowledge?category={}\">{}</a>",
                c.replace(' ', "+"),
                escape(c)
            )
        })
        .collect();

    let articles: String = filter_by_category(category)
        .into_iter()
        .map(|article| {
            format!(
                r#"<a href="{link}" target="_blank" rel="noopener noreferrer" class="article-card-link">
<article class="article-card">
<div class="article-header"><span class="article-category">{category}</span><div class="article-meta"><span>{date}</span><span>•</span><span>{read_time}</span></div></div>
<h2 class="article-title">{title}</h2>
<p class="article-excerpt">{excerpt}</p>
<div class="article-tags">{tags}</div>
<div class="article-link">Read Article →</div>
</article>
</a>"#,
                link = escape(article.link),
                category = escape(article.category),
                date = escape(&article.published_label()),
                read_time = escape(article.read_time),
                title = escape(article.title),
                excerpt = escape(article.excerpt),
                tags = chips(article.tags, "article-tag"),
            )
        })
        .collect();

    let body = format!(
        r#"<div class="knowledge-page"><div class="container">
<header class="knowledge-header"><h1>Knowledge Base</h1>
<p class="knowledge-subtitle">Technical articles, insights, and lessons learned from building scalable software systems</p></header>
<div class="category-filter">{filters}</div>
<div class="articles-grid">{articles}</div>
<div class="knowledge-cta"><h2>Want to stay updated?</h2>
<p>Follow me on Medium for regular updates on software engineering, system design, and best practices.</p>
<a href="{medium}" target="_blank" rel="noopener noreferrer" class="cta-btn">Follow on Medium</a></div>
</div></div>"#,
        medium = escape(PROFILE.articles_url),
    );

    Page {
        title: "Knowledge Base".to_string(),
        active: NavItem::Knowledge,
        body,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

pub fn projects() -> Page {
    let cards: String = projects_by_priority()
        .into_iter()
        .map(project_card)
        .collect();

    let body = format!(
        r#"<div class="projects-page">
<section class="projects-header"><h4 class="projects-title">Selected projects and case studies</h4></section>
<div class="projects-grid">{cards}</div>
</div>"#
    );

    Page {
        title: "Projects".to_string(),
        active: NavItem::Projects,
        body,
    }
}

fn role_and_timeline(
    project: &Project,
    item_class: &str,
    label_class: &str,
    value_class: &str,
) -> String {
    let mut meta = String::new();
    for (label, value) in [("Role", project.role), ("Timeline", project.duration)] {
        if let Some(value) = value {
            meta.push_str(&format!(
                "<div class=\"{item_class}\"><span class=\"{label_class}\">{label}</span><span class=\"{value_class}\">{}</span></div>",
                escape(value)
            ));
        }
    }
    meta
}

fn project_card(project: &Project) -> String {
    let meta = role_and_timeline(
        project,
        "project-meta-item",
        "project-meta-label",
        "project-meta-value",
    );
    let meta = if meta.is_empty() {
        meta
    } else {
        format!("<div class=\"project-meta\">{meta}</div>")
    };

    format!(
        r#"<article class="project-card">
<a href="/projects/{id}" class="project-card-inner">
<div class="project-preview">{preview}</div>
<div class="project-content">
<div class="project-text"><h2>{title}</h2><p>{tagline}</p></div>
{meta}
<div class="tech-tags">{tags}</div>
<div class="project-cta"><span>View case study</span><span aria-hidden="true">→</span></div>
</div>
</a>
</article>"#,
        id = escape(project.id),
        preview = media(&resolve(&project.preview, false), true),
        title = escape(project.title),
        tagline = escape(project.tagline),
        tags = chips(project.tech_tags, "tech-tag"),
    )
}

pub fn project_detail(project: &Project) -> Page {
    let links: String = project
        .links
        .iter()
        .map(|link| external_link(link.url, link.label, None))
        .collect();
    let links = if links.is_empty() {
        links
    } else {
        format!("<div class=\"project-detail-hero-links\">{links}</div>")
    };

    let meta = role_and_timeline(project, "project-detail-meta-item", "meta-label", "meta-value");

    let description: String = project
        .description
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect();

    let tech = if project.tech_tags.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"project-detail-meta-item tech-list\"><span class=\"meta-label\">Skills and deliverables</span><div class=\"meta-chip-row\">{}</div></div>",
            chips(project.tech_tags, "meta-chip")
        )
    };

    let categories: String = project
        .tech_categories
        .iter()
        .map(|c| {
            format!(
                "<div class=\"tech-category\"><h3>{}</h3><div class=\"meta-chip-row\">{}</div></div>",
                escape(c.label),
                chips(c.items, "meta-chip")
            )
        })
        .collect();

    let features = titled_list("Key features", "project-detail-features", project.features);
    let challenges = titled_list("Challenges", "project-detail-challenges", project.challenges);

    let gallery: String = project
        .media_gallery
        .iter()
        .map(|m| {
            format!(
                "<figure class=\"project-detail-gallery-card\">{}<figcaption>{}</figcaption></figure>",
                media(&resolve(m, false), true),
                escape(m.alt)
            )
        })
        .collect();

    let body = format!(
        r#"<article class="project-detail-page">
<div class="project-detail-topbar"><a href="/projects" class="project-detail-back">Back to projects</a>{links}</div>
<section class="project-detail-hero">
<div class="project-detail-summary">
<h1 class="project-detail-title">{title}</h1>
<p class="project-detail-tagline">{tagline}</p>
<div class="project-detail-summary-meta">{meta}</div>
<div class="project-detail-description"><h2>Project description.</h2>{description}</div>
{tech}
</div>
<div class="project-detail-featured">{hero}</div>
</section>
{features}{challenges}
<section class="project-detail-stack">{categories}</section>
<section class="project-detail-gallery"><div class="project-detail-gallery-grid">{gallery}</div></section>
</article>"#,
        title = escape(project.title),
        tagline = escape(project.tagline),
        hero = media(&resolve(project.hero_media(), false), false),
    );

    Page {
        title: project.title.to_string(),
        active: NavItem::Projects,
        body,
    }
}

fn titled_list(heading: &str, class: &str, items: &[&str]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!(
        "<section class=\"{class}\"><h2>{heading}</h2><ul>{}</ul></section>",
        list_items(items)
    )
}
