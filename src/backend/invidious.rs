use reqwest::Client;

use super::{RemoteProvider, check_response};
use crate::{error::BackendError, types::RemotePlaylistPage};

/// Client for an Invidious instance's `/api/v1` endpoints.
pub struct InvidiousClient {
    instance_url: String,
    http: Client,
}

impl InvidiousClient {
    pub fn new(instance_url: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }
}

impl RemoteProvider for InvidiousClient {
    async fn get_playlist_page(
        &self,
        playlist_id: &str,
        page: u32,
    ) -> Result<RemotePlaylistPage, BackendError> {
        let api_url = format!(
            "{uri}/api/v1/playlists/{id}",
            uri = self.instance_url,
            id = playlist_id
        );

        let resp = self
            .http
            .get(&api_url)
            .query(&[("page", page)])
            .send()
            .await?;
        let resp = check_response(resp).await?;

        resp.json::<RemotePlaylistPage>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}
