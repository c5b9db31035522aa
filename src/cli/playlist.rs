use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    backend::{InvidiousClient, LocalClient},
    config, error, info,
    resolver::ContentResolver,
    success,
    types::{InfoSource, PlaylistItemRow, PlaylistView},
    utils, warning,
};

pub async fn playlist(
    playlist_id: String,
    backend: Option<InfoSource>,
    no_fallback: bool,
    limit: Option<usize>,
) {
    let preference = match backend {
        Some(b) => b,
        None => match config::backend_preference() {
            Ok(b) => b,
            Err(e) => error!("Invalid TUBECLI_BACKEND_PREFERENCE. Err: {}", e),
        },
    };
    let fallback = !no_fallback && config::backend_fallback();

    let resolver = ContentResolver::new(
        LocalClient::new(config::local_backend_url()),
        InvidiousClient::new(config::invidious_url()),
    )
    .with_max_pages(config::max_playlist_pages());

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching playlist {} from {} backend...", playlist_id, preference));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = resolver
        .resolve_playlist(&playlist_id, preference, fallback)
        .await;
    pb.finish_and_clear();

    match result {
        Ok(view) => {
            if view.info_source != preference {
                warning!(
                    "The {} backend failed, data comes from the {} backend.",
                    preference,
                    view.info_source
                );
            }
            print_playlist(&view, limit);
        }
        Err(e) => error!("Failed to load playlist. Err: {}", e),
    }
}

fn print_playlist(view: &PlaylistView, limit: Option<usize>) {
    success!("{} ({} videos)", view.title, view.video_count);
    info!("Channel: {} ({})", view.channel_name, view.channel_id);
    info!("Views: {}", view.view_count);
    if !view.last_updated.is_empty() {
        info!("Last updated: {}", view.last_updated);
    }
    if let Some(preview) = &view.random_video_id {
        info!("Preview video: {}", preview);
    }
    info!("Source: {}", view.info_source);

    let rows: Vec<PlaylistItemRow> = view
        .items
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(idx, item)| PlaylistItemRow {
            position: idx + 1,
            title: item.title.clone(),
            channel: item.author.clone(),
            length: utils::format_length(item.length_seconds),
            id: item.video_id.clone(),
        })
        .collect();

    if rows.is_empty() {
        warning!("The playlist has no videos.");
        return;
    }

    println!("{}", Table::new(rows));
}
