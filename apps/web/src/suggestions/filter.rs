//! Autocomplete filters over the suggestion stores.
//!
//! Both filters are case-insensitive substring matches that keep the store's
//! original order. They never fail: an empty or too-short query simply yields
//! no suggestions.

use crate::models::suggestion::{HasText, LocationKind, LocationSuggestion};

/// Maximum number of job-title suggestions returned.
pub const MAX_TEXT_SUGGESTIONS: usize = 5;
/// Location queries shorter than this (in characters) yield nothing.
pub const MIN_LOCATION_QUERY_CHARS: usize = 2;
/// Cap applied to the work-mode group only; states and cities are uncapped.
pub const MAX_WORK_MODE_SUGGESTIONS: usize = 7;

fn matches(needle_lower: &str, item: &impl HasText) -> bool {
    item.text().to_lowercase().contains(needle_lower)
}

/// Returns at most five items whose text contains `query`, in store order.
pub fn filter_text_suggestions<T: HasText + Clone>(query: &str, items: &[T]) -> Vec<T> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches(&needle, *item))
        .take(MAX_TEXT_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Returns matching locations grouped as states, then cities, then work modes.
///
/// Only the work-mode group is truncated (to seven entries).
pub fn filter_location_suggestions(
    query: &str,
    items: &[LocationSuggestion],
) -> Vec<LocationSuggestion> {
    if query.chars().count() < MIN_LOCATION_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut states = Vec::new();
    let mut cities = Vec::new();
    let mut work_modes = Vec::new();

    for item in items.iter().filter(|item| matches(&needle, *item)) {
        match item.kind() {
            LocationKind::State => states.push(*item),
            LocationKind::City => cities.push(*item),
            LocationKind::WorkMode => work_modes.push(*item),
        }
    }

    work_modes.truncate(MAX_WORK_MODE_SUGGESTIONS);

    states.extend(cities);
    states.extend(work_modes);
    states
}
