use serde::Serialize;

/// A single job listing returned by a portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub portal: String,
    pub icon: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: String,
    pub salary: String,
    pub url: String,
}
