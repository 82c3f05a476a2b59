//! Axum route handlers for the HTML pages.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::get_filter_options;
use crate::errors::AppError;
use crate::search::handlers::build_search_query;
use crate::state::AppState;
use crate::web::templates::{render_page, PageView, SearchOutcome, SearchTab};

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub job: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LinkedInForm {
    pub job: Option<String>,
    pub location: Option<String>,
}

/// GET /
///
/// Renders the landing page. Submitting the job-portal form (`?job=…`) runs a
/// search; an empty job title renders a warning instead of results.
pub async fn handle_home(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
) -> Result<Html<String>, AppError> {
    let experience = get_filter_options().experience(form.experience.as_deref());

    let outcome = match form.job.as_deref() {
        None => SearchOutcome::Idle,
        Some(job) => {
            match build_search_query(job, form.location.as_deref(), form.experience.as_deref()) {
                Ok(query) => {
                    let results = state.portal.search(&query).await?;
                    info!(
                        "Page search '{}' returned {} results",
                        query.job_query,
                        results.len()
                    );
                    SearchOutcome::Results(results)
                }
                Err(AppError::Validation(msg)) => {
                    debug!("Rejected page search: {msg}");
                    SearchOutcome::Warning(msg)
                }
                Err(e) => return Err(e),
            }
        }
    };

    let view = PageView {
        tab: SearchTab::JobPortal,
        job: form.job.unwrap_or_default(),
        location: form.location.unwrap_or_default(),
        experience,
        outcome,
        linkedin_notice: None,
    };

    Ok(Html(render_page(&view)))
}

/// GET /linkedin
///
/// LinkedIn tab. Submitting only echoes a confirmation; no request leaves the server.
pub async fn handle_linkedin(Query(form): Query<LinkedInForm>) -> Html<String> {
    let submitted = form.job.is_some() || form.location.is_some();
    let job = form.job.unwrap_or_default();
    let location = form.location.unwrap_or_default();

    let linkedin_notice = submitted.then(|| format!("Searching for {job} jobs in {location}"));

    let view = PageView {
        tab: SearchTab::LinkedIn,
        job,
        location,
        experience: get_filter_options().experience(None),
        outcome: SearchOutcome::Idle,
        linkedin_notice,
    };

    Html(render_page(&view))
}
