//! # CLI Module
//!
//! This module provides the command-line interface layer for tubecli. It is
//! the caller of the library: it opens the profile store, drives the profile
//! service and the playlist resolver, and renders their results as tables.
//!
//! ## Command Categories
//!
//! ### Profile Operations
//!
//! - [`list_profiles`] - Shows all profiles, creating the default one on first run
//! - [`add_profile`] - Creates a new profile with a generated id
//! - [`update_profile`] - Renames or recolors an existing profile
//! - [`remove_profile`] - Deletes a profile (deleting an unknown id is not an error)
//! - [`subscribe`] - Adds a channel to a profile's subscriptions
//!
//! ### Playlist Operations
//!
//! - [`playlist`] - Resolves a playlist through the preferred backend, falling
//!   back to the other one when allowed
//!
//! ## Error Handling
//!
//! Every command ends in one of the output macros. Failures the user can fix
//! (bad colors, unknown ids, unreachable backends) are reported with the
//! `error!` macro, which exits with status 1.

mod playlist;
mod profiles;

pub use playlist::playlist;
pub use profiles::add_profile;
pub use profiles::list_profiles;
pub use profiles::remove_profile;
pub use profiles::subscribe;
pub use profiles::update_profile;
