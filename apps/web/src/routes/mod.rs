pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::api::handlers as api;
use crate::site::handlers as site;
use crate::state::AppState;
use crate::theme::handlers as theme;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(site::handle_home))
        .route("/career", get(site::handle_career))
        .route("/contact", get(site::handle_contact))
        .route("/knowledge", get(site::handle_knowledge))
        .route("/projects", get(site::handle_projects))
        .route("/projects/:project_id", get(site::handle_project_detail))
        // Theme preferences
        .route("/preferences/theme", post(theme::handle_toggle_theme))
        .route("/preferences/accent", post(theme::handle_set_accent))
        .route("/theme.css", get(theme::handle_theme_css))
        // JSON API
        .route("/api/v1/projects", get(api::handle_list_projects))
        .route("/api/v1/projects/:project_id", get(api::handle_get_project))
        .route("/api/v1/skills", get(api::handle_skills))
        .route("/api/v1/skills/:category_id", get(api::handle_skill_category))
        .route("/api/v1/articles", get(api::handle_articles))
        .route("/api/v1/experience", get(api::handle_experience))
        .route(
            "/api/v1/preferences",
            get(theme::handle_get_preferences).post(theme::handle_update_preferences),
        )
        .nest_service("/assets", assets)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
        })
    }

    async fn send(request: Request<Body>) -> Response {
        app().oneshot(request).await.unwrap()
    }

    async fn get(uri: &str) -> Response {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    fn set_cookies(response: &Response) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    fn form_post(uri: &str, body: &'static str, cookie: Option<&'static str>) -> Request<Body> {
        let mut builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_pages_render() {
        for uri in ["/", "/career", "/contact", "/knowledge", "/projects", "/projects/evv"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let html = body_text(response).await;
            assert!(html.starts_with("<!DOCTYPE html>"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_project_detail_is_case_insensitive() {
        let response = get("/projects/EVV").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("EVV (Electronic Visit Verification)"));
    }

    #[tokio::test]
    async fn test_unknown_project_redirects_to_listing() {
        let response = get("/projects/nope").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/projects");
    }

    #[tokio::test]
    async fn test_knowledge_category_filter() {
        let html = body_text(get("/knowledge?category=Performance").await).await;
        assert!(html.contains("Concurrency and Threading Best Practices in C#"));
        assert!(!html.contains("Mastering CQRS Pattern in C#"));
    }

    #[tokio::test]
    async fn test_pages_follow_theme_cookie() {
        let response = send(
            Request::get("/")
                .header(header::COOKIE, "theme=dark; primaryColor=coral")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        let html = body_text(response).await;
        assert!(html.contains("data-theme=\"dark\""));
        assert!(html.contains("--accent-color: #f97316;"));
    }

    #[tokio::test]
    async fn test_invalid_cookie_falls_back_to_defaults() {
        let response = send(
            Request::get("/")
                .header(header::COOKIE, "theme=neon; primaryColor=blue")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        let html = body_text(response).await;
        assert!(html.contains("data-theme=\"light\""));
        assert!(html.contains("--accent-color: #00d9ff;"));
    }

    #[tokio::test]
    async fn test_toggle_theme_sets_cookie_and_redirects_back() {
        let response = send(form_post(
            "/preferences/theme",
            "return_to=%2Fprojects%2Fevv",
            Some("theme=dark"),
        ))
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/projects/evv");
        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("theme=light;"));
    }

    #[tokio::test]
    async fn test_toggle_theme_rejects_offsite_return() {
        let response = send(form_post(
            "/preferences/theme",
            "return_to=https%3A%2F%2Fevil.example",
            None,
        ))
        .await;
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_toggle_theme_rejects_return_with_line_break() {
        let response = send(form_post("/preferences/theme", "return_to=%2Fa%0Ab", None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert_eq!(set_cookies(&response).len(), 1);
    }

    #[tokio::test]
    async fn test_set_accent_rejects_return_with_control_character() {
        let response = send(form_post(
            "/preferences/accent",
            "color=coral&return_to=%2Fknowledge%0D%0A",
            None,
        ))
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_set_accent() {
        let response =
            send(form_post("/preferences/accent", "color=gold&return_to=%2F", None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("primaryColor=gold;"));
    }

    #[tokio::test]
    async fn test_unknown_accent_is_ignored() {
        let response = send(form_post("/preferences/accent", "color=blue", None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(set_cookies(&response).is_empty());
    }

    #[tokio::test]
    async fn test_theme_css() {
        let response = send(
            Request::get("/theme.css")
                .header("sec-ch-prefers-color-scheme", "dark")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
        let css = body_text(response).await;
        assert!(css.starts_with(":root[data-theme=\"dark\"]"));
    }

    #[tokio::test]
    async fn test_api_projects() {
        let json: Value =
            serde_json::from_str(&body_text(get("/api/v1/projects").await).await).unwrap();
        assert_eq!(json[0]["id"], "evv");

        let response = get("/api/v1/projects/%20Poplin%20").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["id"], "poplin");
        assert_eq!(json["media_gallery"][0]["kind"], "youtube");
    }

    #[tokio::test]
    async fn test_api_unknown_project_is_404() {
        let response = get("/api/v1/projects/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_skills_and_articles() {
        let skills: Value =
            serde_json::from_str(&body_text(get("/api/v1/skills").await).await).unwrap();
        assert_eq!(skills["years"][0], 10);

        let response = get("/api/v1/skills/databases").await;
        assert_eq!(response.status(), StatusCode::OK);
        let category: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(category["title"], "Databases");
        assert_eq!(get("/api/v1/skills/cooking").await.status(), StatusCode::NOT_FOUND);

        let articles: Value = serde_json::from_str(
            &body_text(get("/api/v1/articles?category=Architecture").await).await,
        )
        .unwrap();
        assert_eq!(articles["category"], "Architecture");
        assert_eq!(articles["articles"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_api_update_preferences() {
        let response = send(
            Request::post("/api/v1/preferences")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"theme":"dark","accent":"violet"}"#))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(set_cookies(&response).len(), 2);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["accent"], "violet");
    }

    #[tokio::test]
    async fn test_api_update_preferences_rejects_unknown_accent() {
        let response = send(
            Request::post("/api/v1/preferences")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"accent":"blue"}"#))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
