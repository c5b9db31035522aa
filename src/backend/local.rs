use reqwest::Client;

use super::{LocalProvider, check_response};
use crate::{error::BackendError, types::LocalPlaylistResponse};

/// Client for the local scraper sidecar.
///
/// The scraper answers `GET {base_url}/playlist/{id}` with the whole playlist.
pub struct LocalClient {
    base_url: String,
    http: Client,
}

impl LocalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }
}

impl LocalProvider for LocalClient {
    async fn get_playlist_info(
        &self,
        playlist_id: &str,
    ) -> Result<LocalPlaylistResponse, BackendError> {
        let api_url = format!(
            "{uri}/playlist/{id}",
            uri = self.base_url,
            id = playlist_id
        );

        let resp = self.http.get(&api_url).send().await?;
        let resp = check_response(resp).await?;

        resp.json::<LocalPlaylistResponse>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}
