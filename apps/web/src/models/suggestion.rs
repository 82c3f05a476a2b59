use serde::Serialize;

/// Anything offered as an autocomplete candidate exposes its display text.
pub trait HasText {
    fn text(&self) -> &str;
}

/// A job-title autocomplete candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobSuggestion {
    pub text: &'static str,
}

impl JobSuggestion {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }
}

impl HasText for JobSuggestion {
    fn text(&self) -> &str {
        self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    City,
    State,
    WorkMode,
}

/// A location autocomplete candidate.
///
/// Only cities carry the state they belong to. Records are built through the
/// `city` / `state` / `work_mode` constructors so a work mode can never hold one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationSuggestion {
    text: &'static str,
    #[serde(rename = "type")]
    kind: LocationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'static str>,
}

impl LocationSuggestion {
    pub const fn city(text: &'static str, state: &'static str) -> Self {
        Self {
            text,
            kind: LocationKind::City,
            state: Some(state),
        }
    }

    pub const fn state(text: &'static str) -> Self {
        Self {
            text,
            kind: LocationKind::State,
            state: None,
        }
    }

    pub const fn work_mode(text: &'static str) -> Self {
        Self {
            text,
            kind: LocationKind::WorkMode,
            state: None,
        }
    }

    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// State a city belongs to; `None` for states and work modes.
    pub fn parent_state(&self) -> Option<&'static str> {
        self.state
    }
}

impl HasText for LocationSuggestion {
    fn text(&self) -> &str {
        self.text
    }
}
