//! Configuration management for tubecli.
//!
//! This module loads configuration values from environment variables and a
//! `.env` file kept in the local data directory. Every value has a default,
//! so a fresh installation works without any configuration.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use crate::{resolver::DEFAULT_MAX_PAGES, types::InfoSource};

pub const DEFAULT_LOCAL_BACKEND_URL: &str = "http://127.0.0.1:3001";
pub const DEFAULT_INVIDIOUS_URL: &str = "https://yewtu.be";
pub const DEFAULT_PROFILE_NAME: &str = "All Channels";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `tubecli` data directory if it doesn't exist. A missing `.env`
/// file is not an error; values already present in the environment are never
/// overridden.
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/tubecli/.env`
/// - macOS: `~/Library/Application Support/tubecli/.env`
/// - Windows: `%LOCALAPPDATA%/tubecli/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or the
/// `.env` file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the application data directory, `<local data dir>/tubecli`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tubecli");
    path
}

/// Location of the profile collection, overridable with `TUBECLI_PROFILES_DB`.
pub fn profiles_path() -> PathBuf {
    env::var("TUBECLI_PROFILES_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| data_dir().join("profiles.db"))
}

/// Base URL of the local scraping backend (`TUBECLI_LOCAL_BACKEND_URL`).
pub fn local_backend_url() -> String {
    env::var("TUBECLI_LOCAL_BACKEND_URL").unwrap_or_else(|_| DEFAULT_LOCAL_BACKEND_URL.to_string())
}

/// Base URL of the Invidious instance (`TUBECLI_INVIDIOUS_URL`).
pub fn invidious_url() -> String {
    env::var("TUBECLI_INVIDIOUS_URL").unwrap_or_else(|_| DEFAULT_INVIDIOUS_URL.to_string())
}

/// Backend tried first (`TUBECLI_BACKEND_PREFERENCE`, `local` or `remote`).
///
/// # Errors
///
/// Returns the parse error when the variable holds an unknown backend name.
pub fn backend_preference() -> Result<InfoSource, String> {
    match env::var("TUBECLI_BACKEND_PREFERENCE") {
        Ok(value) => value.parse(),
        Err(_) => Ok(InfoSource::Local),
    }
}

/// Whether a failed primary backend falls back to the other one
/// (`TUBECLI_BACKEND_FALLBACK`, default `true`).
pub fn backend_fallback() -> bool {
    env::var("TUBECLI_BACKEND_FALLBACK")
        .map(|v| parse_flag(&v).unwrap_or(true))
        .unwrap_or(true)
}

/// Ceiling on remote pages per playlist (`TUBECLI_MAX_PLAYLIST_PAGES`).
pub fn max_playlist_pages() -> u32 {
    env::var("TUBECLI_MAX_PLAYLIST_PAGES")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|pages: &u32| *pages > 0)
        .unwrap_or(DEFAULT_MAX_PAGES)
}

/// Name given to the default profile on first run
/// (`TUBECLI_DEFAULT_PROFILE_NAME`).
pub fn default_profile_name() -> String {
    env::var("TUBECLI_DEFAULT_PROFILE_NAME").unwrap_or_else(|_| DEFAULT_PROFILE_NAME.to_string())
}

pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
