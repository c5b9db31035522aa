use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Id reserved for the profile that aggregates every subscription.
pub const DEFAULT_PROFILE_ID: &str = "allChannels";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "bgColor")]
    pub bg_color: String,
    #[serde(rename = "textColor")]
    pub text_color: String,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl Profile {
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_PROFILE_ID
    }
}

#[derive(Tabled)]
pub struct ProfileTableRow {
    pub active: String,
    pub id: String,
    pub name: String,
    pub colors: String,
    pub subscriptions: usize,
}

/// Which content backend produced (or should produce) a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoSource {
    Local,
    Remote,
}

impl InfoSource {
    pub fn other(self) -> Self {
        match self {
            Self::Local => Self::Remote,
            Self::Remote => Self::Local,
        }
    }
}

impl fmt::Display for InfoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

impl std::str::FromStr for InfoSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            // the remote API is an Invidious mirror
            "remote" | "invidious" => Ok(Self::Remote),
            other => Err(format!(
                "Unknown backend '{}'. Valid backends: local, remote",
                other
            )),
        }
    }
}

/// A playlist entry after both backend shapes have been normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub video_id: String,
    pub title: String,
    pub author: String,
    pub author_id: String,
    pub length_seconds: u64,
    /// Backend-specific fields, passed through untouched.
    #[serde(default)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub last_updated: String,
    pub view_count: u64,
    pub video_count: u64,
    pub channel_name: String,
    pub channel_thumbnail_url: String,
    pub channel_id: String,
    pub info_source: InfoSource,
    pub random_video_id: Option<String>,
    pub items: Vec<VideoSummary>,
}

#[derive(Tabled)]
pub struct PlaylistItemRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub channel: String,
    pub length: String,
    pub id: String,
}

// Response shape of the local scraping backend.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalPlaylistResponse {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub items: Vec<LocalPlaylistItem>,
    #[serde(default)]
    pub views: Value,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub last_updated: String,
    pub author: Option<LocalAuthor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalPlaylistItem {
    pub id: String,
    pub title: String,
    pub author: Option<LocalItemAuthor>,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalItemAuthor {
    pub name: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalAuthor {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub id: String,
}

// Response shape of the remote (Invidious) API.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePlaylistPage {
    pub playlist_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub videos: Vec<RemoteVideo>,
    #[serde(default)]
    pub view_count: u64,
    pub video_count: u64,
    pub updated: i64,
    pub author: String,
    pub author_id: String,
    #[serde(default)]
    pub author_thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteVideo {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub length_seconds: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}
