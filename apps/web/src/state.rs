use std::sync::Arc;

use crate::search::portal::{JobPortal, MockJobPortal};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable job portal. Default: MockJobPortal.
    pub portal: Arc<dyn JobPortal>,
}

impl AppState {
    pub fn with_mock_portal() -> Self {
        AppState {
            portal: Arc::new(MockJobPortal),
        }
    }
}
