pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers::handle_filter_options;
use crate::errors::AppError;
use crate::insights::handle_insights;
use crate::search::handlers::handle_search;
use crate::state::AppState;
use crate::suggestions::handlers::{handle_job_suggestions, handle_location_suggestions};
use crate::web::handlers::{handle_home, handle_linkedin};

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(handle_home))
        .route("/linkedin", get(handle_linkedin))
        // Suggestions API
        .route("/api/v1/suggestions/jobs", get(handle_job_suggestions))
        .route(
            "/api/v1/suggestions/locations",
            get(handle_location_suggestions),
        )
        // Catalog + search API
        .route("/api/v1/filters", get(handle_filter_options))
        .route("/api/v1/jobs/search", post(handle_search))
        .route("/api/v1/insights", get(handle_insights))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::with_mock_portal())
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = body_string(response).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    async fn post_search(body: Value) -> (StatusCode, Value) {
        let request = Request::post("/api/v1/jobs/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = body_string(response).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    async fn get_html(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_string(response).await)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobsearch");
    }

    #[tokio::test]
    async fn test_job_suggestions_endpoint() {
        let (status, body) = get_json("/api/v1/suggestions/jobs?q=data").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"], json!([{ "text": "Data Scientist" }]));
    }

    #[tokio::test]
    async fn test_job_suggestions_without_query_are_empty() {
        let (status, body) = get_json("/api/v1/suggestions/jobs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"], json!([]));
    }

    #[tokio::test]
    async fn test_location_suggestions_endpoint() {
        let (_, body) = get_json("/api/v1/suggestions/locations?q=an").await;
        assert_eq!(
            body["suggestions"],
            json!([
                { "text": "Telangana", "type": "state" },
                { "text": "Bangalore", "type": "city", "state": "Karnataka" }
            ])
        );

        let (_, body) = get_json("/api/v1/suggestions/locations?q=a").await;
        assert_eq!(body["suggestions"], json!([]));
    }

    #[tokio::test]
    async fn test_filters_endpoint() {
        let (status, body) = get_json("/api/v1/filters").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["experience_levels"][0]["id"], "all");
        assert_eq!(body["job_types"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_insights_endpoint() {
        let (status, body) = get_json("/api/v1/insights").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["insights"]["trending_skills"][2]["name"], "AWS");
        assert_eq!(body["companies"][2]["name"], "TCS");
    }

    #[tokio::test]
    async fn test_search_returns_two_results() {
        let (status, body) = post_search(json!({ "job_query": "Data Scientist" })).await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["location"], "Remote");
        assert_eq!(results[0]["experience"], "1-3 years");
        assert_eq!(results[1]["location"], "Hybrid");
        assert_eq!(results[1]["title"], "Senior Data Scientist");
    }

    #[tokio::test]
    async fn test_search_honours_location_and_experience() {
        let (_, body) = post_search(json!({
            "job_query": "Cloud Architect",
            "location": "Pune",
            "experience": "3-5"
        }))
        .await;
        assert_eq!(body["results"][0]["location"], "Pune");
        assert_eq!(body["results"][1]["location"], "Pune");
        assert_eq!(body["results"][0]["experience"], "3-5 years");
    }

    #[tokio::test]
    async fn test_search_rejects_empty_job_title() {
        let (status, body) = post_search(json!({ "job_query": "" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Please enter a job title");
    }

    #[tokio::test]
    async fn test_search_without_job_title_field_is_validation_error() {
        let (status, body) = post_search(json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Please enter a job title");
    }

    #[tokio::test]
    async fn test_search_keeps_whitespace_location() {
        let (status, body) = post_search(json!({ "job_query": "QA", "location": " " })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"][0]["location"], " ");
        assert_eq!(body["results"][1]["location"], " ");
    }

    #[tokio::test]
    async fn test_home_page_renders() {
        let (status, html) = get_html("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Smart Job Search"));
        assert!(!html.contains(r#"<div class="result-card">"#));
    }

    #[tokio::test]
    async fn test_home_page_search_renders_cards() {
        let (status, html) = get_html("/?job=Data+Scientist&location=&experience=1-3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches(r#"<div class="result-card">"#).count(), 2);
        assert!(html.contains("Data Scientist at Tech Company"));
    }

    #[tokio::test]
    async fn test_home_page_blank_job_shows_warning() {
        let (status, html) = get_html("/?job=&location=Pune").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Please enter a job title"));
        assert!(!html.contains(r#"<div class="result-card">"#));
    }

    #[tokio::test]
    async fn test_home_page_whitespace_job_still_searches() {
        let (status, html) = get_html("/?job=+++&location=+").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains(r#"<div class="warning">"#));
        assert_eq!(html.matches(r#"<div class="result-card">"#).count(), 2);
    }

    #[tokio::test]
    async fn test_linkedin_page_echoes_search() {
        let (status, html) = get_html("/linkedin?job=Rust&location=India").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Searching for Rust jobs in India"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = get_json("/api/v1/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
