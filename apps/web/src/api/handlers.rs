use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Serialize;

use crate::content::articles::{filter_by_category, resolve_category, CATEGORIES};
use crate::content::career::{top_achievements, DEFAULT_TOP_ACHIEVEMENTS, WORK_EXPERIENCES};
use crate::content::projects::{find_project, projects_by_priority};
use crate::content::skills::{all_years, category_by_id, highlighted_skills, SKILL_CATEGORIES};
use crate::errors::AppError;
use crate::models::article::KnowledgeArticle;
use crate::models::career::{Achievement, WorkExperience};
use crate::models::project::Project;
use crate::models::skill::{HighlightedSkill, SkillCategory};
use crate::site::handlers::KnowledgeQuery;

#[derive(Serialize)]
pub struct SkillsResponse {
    pub categories: &'static [SkillCategory],
    pub highlighted: Vec<HighlightedSkill>,
    pub years: Vec<u32>,
}

#[derive(Serialize)]
pub struct ArticlesResponse {
    pub category: &'static str,
    pub categories: &'static [&'static str],
    pub articles: Vec<&'static KnowledgeArticle>,
}

#[derive(Serialize)]
pub struct ExperienceResponse {
    pub work: &'static [WorkExperience],
    pub achievements: Vec<&'static Achievement>,
}

/// GET /api/v1/projects
pub async fn handle_list_projects() -> Json<Vec<&'static Project>> {
    Json(projects_by_priority())
}

/// GET /api/v1/projects/:project_id
pub async fn handle_get_project(
    Path(project_id): Path<String>,
) -> Result<Json<&'static Project>, AppError> {
    find_project(&project_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project '{}' not found", project_id.trim())))
}

/// GET /api/v1/skills
pub async fn handle_skills() -> Json<SkillsResponse> {
    Json(SkillsResponse {
        categories: SKILL_CATEGORIES,
        highlighted: highlighted_skills(),
        years: all_years(),
    })
}

/// GET /api/v1/skills/:category_id
pub async fn handle_skill_category(
    Path(category_id): Path<String>,
) -> Result<Json<&'static SkillCategory>, AppError> {
    category_by_id(&category_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Skill category '{category_id}' not found")))
}

/// GET /api/v1/articles?category=
pub async fn handle_articles(Query(query): Query<KnowledgeQuery>) -> Json<ArticlesResponse> {
    let category = resolve_category(query.category.as_deref());
    Json(ArticlesResponse {
        category,
        categories: CATEGORIES,
        articles: filter_by_category(category),
    })
}

/// GET /api/v1/experience
pub async fn handle_experience() -> Json<ExperienceResponse> {
    Json(ExperienceResponse {
        work: WORK_EXPERIENCES,
        achievements: top_achievements(DEFAULT_TOP_ACHIEVEMENTS),
    })
}
