//! Error types for the profile store and the content backends.

use thiserror::Error;

use crate::types::InfoSource;

/// Failures of the on-disk profile collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile store is corrupt at line {line}: {source}")]
    Corrupt {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize profile: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("profile '{0}' not found")]
    NotFound(String),

    #[error("a profile with id '{0}' already exists")]
    DuplicateId(String),
}

/// A content backend could not deliver a usable response.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

/// One failed attempt against a backend.
#[derive(Debug, Error)]
#[error("{backend} backend failed{}: {error}", page_suffix(.page))]
pub struct BackendFailure {
    pub backend: InfoSource,
    /// Set when the failure happened while paging through the remote API.
    pub page: Option<u32>,
    #[source]
    pub error: BackendError,
}

fn page_suffix(page: &Option<u32>) -> String {
    match page {
        Some(p) => format!(" on page {}", p),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not resolve playlist '{id}': {primary}{}", fallback_suffix(.fallback))]
    ResolutionFailed {
        id: String,
        primary: BackendFailure,
        fallback: Option<BackendFailure>,
    },
}

fn fallback_suffix(fallback: &Option<BackendFailure>) -> String {
    match fallback {
        Some(f) => format!("; fallback {}", f),
        None => String::new(),
    }
}

impl ResolveError {
    /// Backends that were attempted, in order.
    pub fn attempted(&self) -> Vec<InfoSource> {
        match self {
            Self::ResolutionFailed {
                primary, fallback, ..
            } => std::iter::once(primary.backend)
                .chain(fallback.as_ref().map(|f| f.backend))
                .collect(),
        }
    }
}
