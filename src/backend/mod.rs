//! # Content Backends
//!
//! Playlist data comes from one of two places:
//!
//! - [`local`] - a scraper running next to the application that reads the
//!   video site directly and answers with its own JSON shape.
//! - [`invidious`] - a public Invidious instance whose API serves playlists
//!   one page at a time.
//!
//! The resolver only talks to the [`LocalProvider`] and [`RemoteProvider`]
//! traits, so either side can be swapped for a fake in tests.
//!
//! Neither client retries. A failed request is returned as a
//! [`BackendError`] and the resolver decides whether to fall back.

use std::future::Future;

use crate::{
    error::BackendError,
    types::{LocalPlaylistResponse, RemotePlaylistPage},
};

pub mod invidious;
pub mod local;

pub use invidious::InvidiousClient;
pub use local::LocalClient;

/// The local scraping backend.
pub trait LocalProvider: Send + Sync {
    /// Fetches a whole playlist in one response.
    fn get_playlist_info(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = Result<LocalPlaylistResponse, BackendError>> + Send;
}

/// The remote public API.
pub trait RemoteProvider: Send + Sync {
    /// Fetches one page of a playlist. Pages start at 1.
    fn get_playlist_page(
        &self,
        playlist_id: &str,
        page: u32,
    ) -> impl Future<Output = Result<RemotePlaylistPage, BackendError>> + Send;
}

pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(BackendError::Api {
            status,
            message: body,
        })
    }
}
