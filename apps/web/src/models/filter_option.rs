use serde::Serialize;

/// Id of the leading entry in every catalog, meaning "no filter applied".
pub const ALL_OPTION_ID: &str = "all";

/// A selectable value in one of the filter catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub id: &'static str,
    pub text: &'static str,
}

impl FilterOption {
    pub const fn new(id: &'static str, text: &'static str) -> Self {
        Self { id, text }
    }
}

/// The three catalogs offered to selection controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub experience_levels: &'static [FilterOption],
    pub salary_ranges: &'static [FilterOption],
    pub job_types: &'static [FilterOption],
}
