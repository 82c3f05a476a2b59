//! Axum route handlers for the autocomplete API.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::suggestion::{JobSuggestion, LocationSuggestion};
use crate::suggestions::filter::{filter_location_suggestions, filter_text_suggestions};
use crate::suggestions::store::{JOB_SUGGESTIONS, LOCATION_SUGGESTIONS};

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse<T> {
    pub suggestions: Vec<T>,
}

/// GET /api/v1/suggestions/jobs?q=
pub async fn handle_job_suggestions(
    Query(params): Query<SuggestionQuery>,
) -> Json<SuggestionsResponse<JobSuggestion>> {
    let suggestions = filter_text_suggestions(&params.q, JOB_SUGGESTIONS);
    debug!("Job suggestions for {:?}: {}", params.q, suggestions.len());
    Json(SuggestionsResponse { suggestions })
}

/// GET /api/v1/suggestions/locations?q=
pub async fn handle_location_suggestions(
    Query(params): Query<SuggestionQuery>,
) -> Json<SuggestionsResponse<LocationSuggestion>> {
    let suggestions = filter_location_suggestions(&params.q, LOCATION_SUGGESTIONS);
    debug!("Location suggestions for {:?}: {}", params.q, suggestions.len());
    Json(SuggestionsResponse { suggestions })
}
