use tabled::Table;

use crate::{
    config, error,
    management::{ProfileService, ProfileState, ProfileStore},
    success,
    types::{Profile, ProfileTableRow, Subscription},
    utils, warning,
};

async fn open_service() -> ProfileService {
    let path = config::profiles_path();
    match ProfileStore::load(path.clone()).await {
        Ok(store) => ProfileService::new(store, config::default_profile_name()),
        Err(e) => error!(
            "Failed to open profile store at {}. Err: {}",
            path.display(),
            e
        ),
    }
}

fn print_profiles(state: &ProfileState) {
    let rows: Vec<ProfileTableRow> = state
        .profiles()
        .iter()
        .enumerate()
        .map(|(idx, p)| ProfileTableRow {
            active: if idx == state.active_index() {
                "*".to_string()
            } else {
                String::new()
            },
            id: p.id.clone(),
            name: p.name.clone(),
            colors: format!("{} / {}", p.bg_color, p.text_color),
            subscriptions: p.subscriptions.len(),
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn check_color(value: &str) {
    if !utils::is_hex_color(value) {
        error!("'{}' is not a color. Use the #RRGGBB form.", value);
    }
}

pub async fn list_profiles(active: Option<usize>) {
    let service = open_service().await;
    let profiles = match service
        .list_profiles(&config::default_profile_name())
        .await
    {
        Ok(p) => p,
        Err(e) => error!("Failed to list profiles. Err: {}", e),
    };

    let mut state = ProfileState::new(profiles);
    if let Some(index) = active {
        if index >= state.profiles().len() {
            warning!("No profile at index {}, showing the default profile", index);
        }
        state = state.set_active_profile_index(index);
    }

    print_profiles(&state);

    if active.is_some() {
        let subscriptions = state.active_subscriptions();
        if subscriptions.is_empty() {
            warning!("The active profile has no subscriptions.");
        }
        for sub in subscriptions {
            println!("  {} ({})", sub.name, sub.id);
        }
    }
}

pub async fn add_profile(name: String, bg_color: Option<String>, text_color: Option<String>) {
    let bg_color = bg_color.unwrap_or_else(utils::random_color);
    check_color(&bg_color);
    let text_color = text_color.unwrap_or_else(|| utils::text_color_for(&bg_color));
    check_color(&text_color);

    let profile = Profile {
        id: utils::generate_profile_id(),
        name,
        bg_color,
        text_color,
        subscriptions: Vec::new(),
    };
    let name = profile.name.clone();

    let service = open_service().await;
    match service.insert_profile(profile).await {
        Ok(profiles) => {
            success!("Profile {} created.", name);
            print_profiles(&ProfileState::new(profiles));
        }
        Err(e) => error!("Failed to create profile. Err: {}", e),
    }
}

pub async fn update_profile(
    id: String,
    name: Option<String>,
    bg_color: Option<String>,
    text_color: Option<String>,
) {
    let service = open_service().await;
    let mut profile = match service.grab_profile(&id).await {
        Ok(p) => p,
        Err(e) => error!("Failed to load profile. Err: {}", e),
    };

    if let Some(name) = name {
        profile.name = name;
    }
    if let Some(bg_color) = bg_color {
        check_color(&bg_color);
        profile.bg_color = bg_color;
    }
    if let Some(text_color) = text_color {
        check_color(&text_color);
        profile.text_color = text_color;
    }

    save(&service, profile).await;
}

pub async fn remove_profile(id: String) {
    let service = open_service().await;
    match service.remove_profile(&id).await {
        Ok(profiles) => {
            success!("Profile {} removed.", id);
            print_profiles(&ProfileState::new(profiles));
        }
        Err(e) => error!("Failed to remove profile. Err: {}", e),
    }
}

pub async fn subscribe(id: String, channel_id: String, channel_name: String) {
    let service = open_service().await;
    let mut profile = match service.grab_profile(&id).await {
        Ok(p) => p,
        Err(e) => error!("Failed to load profile. Err: {}", e),
    };

    if profile.subscriptions.iter().any(|s| s.id == channel_id) {
        warning!("{} already subscribes to {}", profile.name, channel_name);
        return;
    }

    profile.subscriptions.push(Subscription {
        id: channel_id,
        name: channel_name,
        thumbnail: String::new(),
    });

    save(&service, profile).await;
}

async fn save(service: &ProfileService, profile: Profile) {
    let name = profile.name.clone();
    match service.update_profile(profile).await {
        Ok(profiles) => {
            success!("Profile {} saved.", name);
            print_profiles(&ProfileState::new(profiles));
        }
        Err(e) => error!("Failed to save profile. Err: {}", e),
    }
}
