use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Duration};
use rand::{Rng, distr::Alphanumeric};
use serde_json::Value;

use crate::types::Profile;

/// Background colors a freshly created default profile picks from.
pub const PROFILE_COLORS: [&str; 16] = [
    "#d50000", "#C51162", "#AA00FF", "#6200EA", "#304FFE", "#2962FF", "#0091EA", "#00B8D4",
    "#00BFA5", "#00C853", "#64DD17", "#AEEA00", "#FFD600", "#FFAB00", "#FF6D00", "#DD2C00",
];

const CHANNEL_URL_PREFIXES: [&str; 4] = [
    "https://www.youtube.com/channel/",
    "https://www.youtube.com/user/",
    "https://youtube.com/channel/",
    "https://youtube.com/user/",
];

pub fn random_color() -> String {
    let idx = rand::rng().random_range(0..PROFILE_COLORS.len());
    PROFILE_COLORS[idx].to_string()
}

/// Picks black or white text for the given `#RRGGBB` background.
///
/// Uses the perceived luminance `(0.299 R + 0.587 G + 0.114 B) / 255`;
/// anything brighter than half gets black text. Unparseable input is treated
/// as black, which yields white text.
pub fn text_color_for(bg_color: &str) -> String {
    let hex = bg_color.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0) as f64
    };

    let luminance = (0.299 * channel(0..2) + 0.587 * channel(2..4) + 0.114 * channel(4..6)) / 255.0;

    if luminance > 0.5 {
        "#000000".to_string()
    } else {
        "#FFFFFF".to_string()
    }
}

/// Orders profiles for display: the default profile first, then by name.
pub fn sort_profiles(profiles: &mut [Profile]) {
    profiles.sort_by(|a, b| match (a.is_default(), b.is_default()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
    });
}

/// Strips a `https://(www.)youtube.com/(user|channel)/` prefix from a channel
/// reference, leaving the bare channel id.
pub fn strip_channel_prefix(reference: &str) -> String {
    CHANNEL_URL_PREFIXES
        .iter()
        .find_map(|prefix| reference.strip_prefix(prefix))
        .unwrap_or(reference)
        .to_string()
}

/// Uniformly random index into a collection of `len` elements.
pub fn random_index(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rand::rng().random_range(0..len))
}

/// Formats the remote API's `updated` timestamp as `Mon Dst, YYYY`.
///
/// The upstream API reports the update time one day early, so a day is added
/// before formatting. Returns `None` for timestamps chrono cannot represent.
pub fn format_last_updated(updated: i64) -> Option<String> {
    let date = DateTime::from_timestamp(updated, 0)?.checked_add_signed(Duration::days(1))?;
    let day = date.day();
    Some(format!(
        "{} {}{}, {}",
        date.format("%b"),
        day,
        ordinal_suffix(day),
        date.year()
    ))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Reads a duration that is either a number of seconds or a clock string
/// such as `1:02:03` or `4:05`.
pub fn parse_duration(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s
            .split(':')
            .map(|part| part.trim().parse::<u64>().ok())
            .try_fold(0u64, |acc, part| {
                acc.checked_mul(60).and_then(|a| a.checked_add(part?))
            })
            .unwrap_or(0),
        _ => 0,
    }
}

/// Reads a count that is either numeric or human text like `"1,234 views"`.
pub fn parse_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap_or(0),
        _ => 0,
    }
}

pub fn format_length(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Random 16-character id for a user-created profile.
pub fn generate_profile_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
