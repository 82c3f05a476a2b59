//! Job Portal — trait-based seam where a real job-board integration would plug in.
//!
//! Default: `MockJobPortal`, which returns two synthetic listings for any query.
//! `AppState` holds an `Arc<dyn JobPortal>`, chosen at startup.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::filter_option::FilterOption;
use crate::models::search::SearchResult;

/// A validated search submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub job_query: String,
    /// May be empty; portals substitute their own default.
    pub location: String,
    pub experience: FilterOption,
}

#[async_trait]
pub trait JobPortal: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// MockJobPortal
// ────────────────────────────────────────────────────────────────────────────

/// Placeholder portal. Never fails.
pub struct MockJobPortal;

#[async_trait]
impl JobPortal for MockJobPortal {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, AppError> {
        Ok(search_jobs(&query.job_query, &query.location, &query.experience))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Mock search engine
// ────────────────────────────────────────────────────────────────────────────

/// Builds the two fixed listings: a LinkedIn one and an Indeed one.
///
/// An empty `location` becomes "Remote" on the first listing and "Hybrid" on
/// the second; anything else is copied to both. Only the first listing uses
/// `experience`, the second is always "5-7 years". `job_query` is not checked.
pub fn search_jobs(
    job_query: &str,
    location: &str,
    experience: &FilterOption,
) -> Vec<SearchResult> {
    let location_or = |fallback: &str| {
        if location.is_empty() {
            fallback.to_string()
        } else {
            location.to_string()
        }
    };

    vec![
        SearchResult {
            portal: "LinkedIn".to_string(),
            icon: "fab fa-linkedin".to_string(),
            title: format!("{job_query} at Tech Company"),
            company: "Tech Corp Inc.".to_string(),
            location: location_or("Remote"),
            experience: experience.text.to_string(),
            salary: "₹10-15 LPA".to_string(),
            url: "https://linkedin.com".to_string(),
        },
        SearchResult {
            portal: "Indeed".to_string(),
            icon: "fas fa-search".to_string(),
            title: format!("Senior {job_query}"),
            company: "Software Solutions".to_string(),
            location: location_or("Hybrid"),
            experience: "5-7 years".to_string(),
            salary: "₹15-20 LPA".to_string(),
            url: "https://indeed.com".to_string(),
        },
    ]
}
