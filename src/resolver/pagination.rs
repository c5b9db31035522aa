use crate::{
    backend::RemoteProvider,
    error::BackendFailure,
    types::{InfoSource, RemotePlaylistPage, RemoteVideo},
};

/// Everything gathered from the remote API for one playlist.
#[derive(Debug, Clone)]
pub struct Accumulated {
    /// Metadata of the last page fetched; its `videos` are moved into `videos`.
    pub header: RemotePlaylistPage,
    pub videos: Vec<RemoteVideo>,
}

/// Requests remote pages until the item count reaches the reported total.
///
/// Stops early when a page adds nothing or `max_pages` pages have been
/// fetched, returning what was collected. A failed page ends the whole run.
pub struct PaginationAccumulator<'a, R> {
    remote: &'a R,
    max_pages: u32,
}

impl<'a, R: RemoteProvider> PaginationAccumulator<'a, R> {
    pub fn new(remote: &'a R, max_pages: u32) -> Self {
        Self {
            remote,
            max_pages: max_pages.max(1),
        }
    }

    pub async fn accumulate(&self, playlist_id: &str) -> Result<Accumulated, BackendFailure> {
        let mut page: u32 = 1;
        let mut videos: Vec<RemoteVideo> = Vec::new();

        let header = loop {
            let mut resp = self
                .remote
                .get_playlist_page(playlist_id, page)
                .await
                .map_err(|error| BackendFailure {
                    backend: InfoSource::Remote,
                    page: Some(page),
                    error,
                })?;

            let fetched = std::mem::take(&mut resp.videos);
            let added = fetched.len();
            videos.extend(fetched);

            tracing::debug!(
                playlist_id,
                page,
                added,
                accumulated = videos.len(),
                total = resp.video_count,
                "fetched playlist page"
            );

            if videos.len() as u64 >= resp.video_count {
                break resp;
            }

            if added == 0 {
                tracing::warn!(
                    playlist_id,
                    page,
                    accumulated = videos.len(),
                    total = resp.video_count,
                    "page returned no videos, stopping before reported total"
                );
                break resp;
            }

            if page >= self.max_pages {
                tracing::warn!(
                    playlist_id,
                    max_pages = self.max_pages,
                    accumulated = videos.len(),
                    total = resp.video_count,
                    "page limit reached, stopping before reported total"
                );
                break resp;
            }

            page += 1;
        };

        let limit = usize::try_from(header.video_count).unwrap_or(usize::MAX);
        videos.truncate(limit);

        Ok(Accumulated { header, videos })
    }
}
