//! Axum route handlers for the Search API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::get_filter_options;
use crate::errors::AppError;
use crate::models::search::SearchResult;
use crate::search::portal::SearchQuery;
use crate::state::AppState;

pub const MISSING_JOB_TITLE: &str = "Please enter a job title";

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Missing is treated the same as empty.
    #[serde(default)]
    pub job_query: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Experience option id, e.g. "3-5".
    #[serde(default)]
    pub experience: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// Turns raw form/API input into a `SearchQuery`.
/// An empty job title is the only rejected input; values are passed through verbatim.
pub fn build_search_query(
    job_query: &str,
    location: Option<&str>,
    experience_id: Option<&str>,
) -> Result<SearchQuery, AppError> {
    if job_query.is_empty() {
        return Err(AppError::Validation(MISSING_JOB_TITLE.to_string()));
    }

    Ok(SearchQuery {
        job_query: job_query.to_string(),
        location: location.unwrap_or_default().to_string(),
        experience: get_filter_options().experience(experience_id),
    })
}

/// POST /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = build_search_query(
        &request.job_query,
        request.location.as_deref(),
        request.experience.as_deref(),
    )?;

    let results = state.portal.search(&query).await?;
    info!(
        "Search '{}' via {} portal returned {} results",
        query.job_query,
        state.portal.name(),
        results.len()
    );

    Ok(Json(SearchResponse { results }))
}
