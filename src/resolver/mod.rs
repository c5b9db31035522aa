//! # Playlist Resolution
//!
//! [`ContentResolver`] turns a playlist id into a [`PlaylistView`] using one of
//! two backends:
//!
//! ```text
//! Idle → FetchingPrimary ─ ok ──────────────────→ Success
//!              │
//!              └─ err, fallback on → FetchingFallback ─ ok → Success
//!              │                                 └─ err → Failed
//!              └─ err, fallback off → Failed
//! ```
//!
//! The remote backend is paged; [`pagination::PaginationAccumulator`] keeps
//! requesting pages until the reported total is reached. Only a failure of
//! the first remote page counts as a backend failure that may fall back. A
//! later page failing ends the resolution, since switching backends half way
//! would mix two item lists.

pub mod normalize;
pub mod pagination;

use std::fmt;

use crate::{
    backend::{LocalProvider, RemoteProvider},
    error::{BackendFailure, ResolveError},
    types::{InfoSource, PlaylistView},
};

use pagination::PaginationAccumulator;

/// Default ceiling on remote pages fetched for one playlist.
pub const DEFAULT_MAX_PAGES: u32 = 200;

/// Progress of a single resolution request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveState {
    Idle,
    FetchingPrimary(InfoSource),
    FetchingFallback(InfoSource),
    Success(InfoSource),
    Failed,
}

impl fmt::Display for ResolveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::FetchingPrimary(b) => write!(f, "fetching primary ({})", b),
            Self::FetchingFallback(b) => write!(f, "fetching fallback ({})", b),
            Self::Success(b) => write!(f, "success ({})", b),
            Self::Failed => write!(f, "failed"),
        }
    }
}

pub struct ContentResolver<L, R> {
    local: L,
    remote: R,
    max_pages: u32,
}

impl<L: LocalProvider, R: RemoteProvider> ContentResolver<L, R> {
    pub fn new(local: L, remote: R) -> Self {
        Self {
            local,
            remote,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Resolves `playlist_id` through `preference`, trying the other backend
    /// once if that fails and `fallback_enabled` is set.
    pub async fn resolve_playlist(
        &self,
        playlist_id: &str,
        preference: InfoSource,
        fallback_enabled: bool,
    ) -> Result<PlaylistView, ResolveError> {
        let mut state = ResolveState::Idle;
        transition(playlist_id, &mut state, ResolveState::FetchingPrimary(preference));

        let primary = match self.fetch(playlist_id, preference).await {
            Ok(view) => {
                transition(playlist_id, &mut state, ResolveState::Success(view.info_source));
                return Ok(view);
            }
            Err(failure) => failure,
        };

        if !fallback_enabled || !may_fall_back(&primary) {
            tracing::warn!(playlist_id, error = %primary, "playlist resolution failed");
            transition(playlist_id, &mut state, ResolveState::Failed);
            return Err(ResolveError::ResolutionFailed {
                id: playlist_id.to_string(),
                primary,
                fallback: None,
            });
        }

        let fallback_backend = preference.other();
        tracing::warn!(
            playlist_id,
            error = %primary,
            fallback = %fallback_backend,
            "primary backend failed, falling back"
        );
        transition(
            playlist_id,
            &mut state,
            ResolveState::FetchingFallback(fallback_backend),
        );

        match self.fetch(playlist_id, fallback_backend).await {
            Ok(view) => {
                transition(playlist_id, &mut state, ResolveState::Success(view.info_source));
                Ok(view)
            }
            Err(fallback) => {
                tracing::warn!(playlist_id, error = %fallback, "fallback backend failed");
                transition(playlist_id, &mut state, ResolveState::Failed);
                Err(ResolveError::ResolutionFailed {
                    id: playlist_id.to_string(),
                    primary,
                    fallback: Some(fallback),
                })
            }
        }
    }

    async fn fetch(
        &self,
        playlist_id: &str,
        backend: InfoSource,
    ) -> Result<PlaylistView, BackendFailure> {
        match backend {
            InfoSource::Local => self
                .local
                .get_playlist_info(playlist_id)
                .await
                .map(normalize::local_view)
                .map_err(|error| BackendFailure {
                    backend: InfoSource::Local,
                    page: None,
                    error,
                }),
            InfoSource::Remote => PaginationAccumulator::new(&self.remote, self.max_pages)
                .accumulate(playlist_id)
                .await
                .map(normalize::remote_view),
        }
    }
}

/// Failures past the first remote page never switch backends.
fn may_fall_back(failure: &BackendFailure) -> bool {
    failure.page.is_none_or(|page| page <= 1)
}

fn transition(playlist_id: &str, state: &mut ResolveState, next: ResolveState) {
    tracing::debug!(playlist_id, from = %state, to = %next, "resolver state");
    *state = next;
}
