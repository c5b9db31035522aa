use super::pagination::Accumulated;
use crate::{
    types::{
        InfoSource, LocalPlaylistItem, LocalPlaylistResponse, PlaylistView, RemoteVideo,
        VideoSummary,
    },
    utils,
};

pub fn local_view(resp: LocalPlaylistResponse) -> PlaylistView {
    let items: Vec<VideoSummary> = resp.items.into_iter().map(local_item).collect();
    let random_video_id = pick_random_video(&items);

    let (channel_name, channel_thumbnail_url, channel_id) = match resp.author {
        Some(author) => (author.name, author.avatar, author.id),
        None => Default::default(),
    };

    PlaylistView {
        id: resp.id,
        title: resp.title,
        description: resp.description,
        last_updated: resp.last_updated,
        view_count: utils::parse_count(&resp.views),
        video_count: resp.total_items,
        channel_name,
        channel_thumbnail_url,
        channel_id,
        info_source: InfoSource::Local,
        random_video_id,
        items,
    }
}

fn local_item(item: LocalPlaylistItem) -> VideoSummary {
    let (author, author_id) = match item.author {
        Some(a) => (a.name, utils::strip_channel_prefix(&a.reference)),
        None => (String::new(), String::new()),
    };

    VideoSummary {
        video_id: item.id,
        title: item.title,
        author,
        author_id,
        length_seconds: item
            .duration
            .as_ref()
            .map(utils::parse_duration)
            .unwrap_or(0),
        extra: item.extra,
    }
}

pub fn remote_view(acc: Accumulated) -> PlaylistView {
    let header = acc.header;
    let items: Vec<VideoSummary> = acc.videos.into_iter().map(remote_item).collect();
    let random_video_id = pick_random_video(&items);

    // the third thumbnail is the mid-size avatar
    let channel_thumbnail_url = header
        .author_thumbnails
        .get(2)
        .or(header.author_thumbnails.last())
        .map(|t| t.url.clone())
        .unwrap_or_default();

    PlaylistView {
        id: header.playlist_id,
        title: header.title,
        description: header.description,
        last_updated: utils::format_last_updated(header.updated).unwrap_or_default(),
        view_count: header.view_count,
        video_count: header.video_count,
        channel_name: header.author,
        channel_thumbnail_url,
        channel_id: header.author_id,
        info_source: InfoSource::Remote,
        random_video_id,
        items,
    }
}

fn remote_item(video: RemoteVideo) -> VideoSummary {
    VideoSummary {
        video_id: video.video_id,
        title: video.title,
        author: video.author,
        author_id: video.author_id,
        length_seconds: video.length_seconds,
        extra: video.extra,
    }
}

fn pick_random_video(items: &[VideoSummary]) -> Option<String> {
    utils::random_index(items.len()).map(|idx| items[idx].video_id.clone())
}
