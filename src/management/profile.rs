use crate::{
    error::StoreError,
    types::{DEFAULT_PROFILE_ID, Profile, Subscription},
    utils,
};

use super::ProfileStore;

/// Caller-held snapshot of the profile list and the active selection.
///
/// Snapshots are never patched in place: every service mutation hands back a
/// new one built from a full re-read of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    profiles: Vec<Profile>,
    active: usize,
}

impl ProfileState {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            active: 0,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Selects the profile whose subscriptions the caller filters by.
    /// Indices past the end select the default profile.
    pub fn set_active_profile_index(&self, index: usize) -> Self {
        let active = if index < self.profiles.len() { index } else { 0 };
        Self {
            profiles: self.profiles.clone(),
            active,
        }
    }

    /// Swaps in a fresh list, keeping the active index when it is still valid.
    pub fn with_profiles(&self, profiles: Vec<Profile>) -> Self {
        Self::new(profiles).set_active_profile_index(self.active)
    }

    pub fn active_profile(&self) -> Option<&Profile> {
        self.profiles.get(self.active)
    }

    pub fn active_subscriptions(&self) -> &[Subscription] {
        self.active_profile()
            .map(|p| p.subscriptions.as_slice())
            .unwrap_or(&[])
    }
}

/// Profile operations with the ordering and default-profile policy applied.
pub struct ProfileService {
    store: ProfileStore,
    default_name: String,
}

impl ProfileService {
    /// `default_name` is used when a refresh after a mutation has to recreate
    /// the default profile.
    pub fn new(store: ProfileStore, default_name: impl Into<String>) -> Self {
        Self {
            store,
            default_name: default_name.into(),
        }
    }

    /// Lists every profile, default first and the rest by name. A store without
    /// a default profile (on first run, or after it was removed) gets one
    /// created before listing.
    pub async fn list_profiles(&self, default_name: &str) -> Result<Vec<Profile>, StoreError> {
        let mut profiles = self.store.find_all().await?;

        if !profiles.iter().any(Profile::is_default) {
            tracing::info!("no default profile stored, creating it");
            self.store.upsert(Self::default_profile(default_name)).await?;
            profiles = self.store.find_all().await?;
        }

        utils::sort_profiles(&mut profiles);
        Ok(profiles)
    }

    pub async fn grab_profile(&self, id: &str) -> Result<Profile, StoreError> {
        self.store.find_one(id).await
    }

    /// Writes a default profile with a random color, replacing any existing
    /// one, and returns the refreshed list.
    pub async fn create_default_profile(
        &self,
        default_name: &str,
    ) -> Result<Vec<Profile>, StoreError> {
        self.store.upsert(Self::default_profile(default_name)).await?;
        self.list_profiles(default_name).await
    }

    pub async fn update_profile(&self, profile: Profile) -> Result<Vec<Profile>, StoreError> {
        self.store.upsert(profile).await?;
        self.list_profiles(&self.default_name).await
    }

    /// Adds a user profile. The reserved default id is always taken, even
    /// before the default profile has been written.
    pub async fn insert_profile(&self, profile: Profile) -> Result<Vec<Profile>, StoreError> {
        if profile.is_default() {
            return Err(StoreError::DuplicateId(profile.id));
        }

        self.store.insert(profile).await?;
        self.list_profiles(&self.default_name).await
    }

    pub async fn remove_profile(&self, id: &str) -> Result<Vec<Profile>, StoreError> {
        self.store.remove(id).await?;
        self.list_profiles(&self.default_name).await
    }

    /// Lists profiles into a fresh snapshot that keeps `state`'s selection.
    pub async fn refresh(&self, state: &ProfileState) -> Result<ProfileState, StoreError> {
        let profiles = self.list_profiles(&self.default_name).await?;
        Ok(state.with_profiles(profiles))
    }

    fn default_profile(name: &str) -> Profile {
        let bg_color = utils::random_color();
        let text_color = utils::text_color_for(&bg_color);
        Profile {
            id: DEFAULT_PROFILE_ID.to_string(),
            name: name.to_string(),
            bg_color,
            text_color,
            subscriptions: Vec::new(),
        }
    }
}
