use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::content::articles::{resolve_category, ALL_CATEGORIES};
use crate::content::projects::find_project;
use crate::render::{pages, render_page, Page};
use crate::state::AppState;
use crate::theme::request_preference;

#[derive(Deserialize)]
pub struct KnowledgeQuery {
    pub category: Option<String>,
}

fn render(state: &AppState, headers: &HeaderMap, current_path: &str, page: Page) -> Html<String> {
    Html(render_page(
        &state.config.site_name,
        request_preference(headers),
        current_path,
        &page,
    ))
}

/// GET /
pub async fn handle_home(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    render(&state, &headers, "/", pages::home())
}

/// GET /career
pub async fn handle_career(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    render(&state, &headers, "/career", pages::career())
}

/// GET /contact
pub async fn handle_contact(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    render(&state, &headers, "/contact", pages::contact())
}

/// GET /knowledge?category=
pub async fn handle_knowledge(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<KnowledgeQuery>,
) -> Html<String> {
    let category = resolve_category(query.category.as_deref());
    let current_path = if category == ALL_CATEGORIES {
        "/knowledge".to_string()
    } else {
        format!("/knowledge?category={}", category.replace(' ', "+"))
    };
    render(&state, &headers, &current_path, pages::knowledge(category))
}

/// GET /projects
pub async fn handle_projects(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    render(&state, &headers, "/projects", pages::projects())
}

/// GET /projects/:project_id
///
/// Unknown ids send the visitor back to the listing.
pub async fn handle_project_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<String>,
) -> Response {
    match find_project(&project_id) {
        Some(project) => {
            let current_path = format!("/projects/{}", project.id);
            render(&state, &headers, &current_path, pages::project_detail(project)).into_response()
        }
        None => {
            debug!("unknown project '{project_id}', redirecting to listing");
            Redirect::to("/projects").into_response()
        }
    }
}
