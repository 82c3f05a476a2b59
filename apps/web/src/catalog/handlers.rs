use axum::Json;

use crate::catalog::get_filter_options;
use crate::models::filter_option::FilterOptions;

/// GET /api/v1/filters
pub async fn handle_filter_options() -> Json<FilterOptions> {
    Json(get_filter_options())
}
