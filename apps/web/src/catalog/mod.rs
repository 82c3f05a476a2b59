//! Filter Option Catalog — fixed choices for the experience, salary and job-type selectors.
//!
//! The catalog performs no filtering itself; callers apply the selected option.

pub mod handlers;

use crate::models::filter_option::{FilterOption, FilterOptions, ALL_OPTION_ID};

const EXPERIENCE_LEVELS: &[FilterOption] = &[
    FilterOption::new(ALL_OPTION_ID, "All Levels"),
    FilterOption::new("fresher", "Fresher"),
    FilterOption::new("0-1", "0-1 years"),
    FilterOption::new("1-3", "1-3 years"),
    FilterOption::new("3-5", "3-5 years"),
    FilterOption::new("5-7", "5-7 years"),
    FilterOption::new("7-10", "7-10 years"),
    FilterOption::new("10+", "10+ years"),
];

const SALARY_RANGES: &[FilterOption] = &[
    FilterOption::new(ALL_OPTION_ID, "All Ranges"),
    FilterOption::new("0-3", "0-3 LPA"),
    FilterOption::new("3-6", "3-6 LPA"),
    FilterOption::new("6-10", "6-10 LPA"),
    FilterOption::new("10-15", "10-15 LPA"),
    FilterOption::new("15+", "15+ LPA"),
];

const JOB_TYPES: &[FilterOption] = &[
    FilterOption::new(ALL_OPTION_ID, "All Types"),
    FilterOption::new("full-time", "Full Time"),
    FilterOption::new("part-time", "Part Time"),
    FilterOption::new("contract", "Contract"),
    FilterOption::new("remote", "Remote"),
];

/// Experience band the search form submits when the user picks nothing.
pub const DEFAULT_EXPERIENCE: FilterOption = FilterOption::new("1-3", "1-3 years");

pub fn get_filter_options() -> FilterOptions {
    FilterOptions {
        experience_levels: EXPERIENCE_LEVELS,
        salary_ranges: SALARY_RANGES,
        job_types: JOB_TYPES,
    }
}

impl FilterOptions {
    /// Resolves an experience id, falling back to [`DEFAULT_EXPERIENCE`] for
    /// missing or unknown ids.
    pub fn experience(&self, id: Option<&str>) -> FilterOption {
        id.and_then(|id| self.experience_levels.iter().find(|o| o.id == id))
            .copied()
            .unwrap_or(DEFAULT_EXPERIENCE)
    }
}
