use chrono::{DateTime, Duration};
use serde_json::json;
use tubecli::types::{DEFAULT_PROFILE_ID, Profile};
use tubecli::utils::*;

// Helper function to create a test profile
fn create_test_profile(id: &str, name: &str) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        bg_color: "#000000".to_string(),
        text_color: "#FFFFFF".to_string(),
        subscriptions: Vec::new(),
    }
}

#[test]
fn test_random_color() {
    for _ in 0..50 {
        let color = random_color();
        assert!(PROFILE_COLORS.contains(&color.as_str()));
        assert!(is_hex_color(&color));
    }
}

#[test]
fn test_text_color_for() {
    // Bright backgrounds get dark text
    assert_eq!(text_color_for("#FFFFFF"), "#000000");
    assert_eq!(text_color_for("#FFD600"), "#000000");
    assert_eq!(text_color_for("#AEEA00"), "#000000");

    // Dark backgrounds get light text
    assert_eq!(text_color_for("#000000"), "#FFFFFF");
    assert_eq!(text_color_for("#304FFE"), "#FFFFFF");
    assert_eq!(text_color_for("#d50000"), "#FFFFFF");

    // Garbage is treated as black
    assert_eq!(text_color_for("not a color"), "#FFFFFF");
}

#[test]
fn test_every_palette_color_gets_a_readable_text_color() {
    for color in PROFILE_COLORS {
        let text = text_color_for(color);
        assert!(text == "#000000" || text == "#FFFFFF");
    }
}

#[test]
fn test_sort_profiles() {
    let mut profiles = vec![
        create_test_profile("p2", "Music"),
        create_test_profile("p1", "Gaming"),
        create_test_profile(DEFAULT_PROFILE_ID, "Zzz All Channels"),
        create_test_profile("p3", "Cooking"),
    ];

    sort_profiles(&mut profiles);

    // Default first even though its name sorts last
    assert_eq!(profiles[0].id, DEFAULT_PROFILE_ID);
    let names: Vec<&str> = profiles[1..].iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cooking", "Gaming", "Music"]);
}

#[test]
fn test_sort_profiles_breaks_name_ties_by_id() {
    let mut profiles = vec![
        create_test_profile("b", "Same"),
        create_test_profile("a", "Same"),
    ];

    sort_profiles(&mut profiles);

    assert_eq!(profiles[0].id, "a");
    assert_eq!(profiles[1].id, "b");
}

#[test]
fn test_strip_channel_prefix() {
    assert_eq!(
        strip_channel_prefix("https://www.youtube.com/channel/UCabc"),
        "UCabc"
    );
    assert_eq!(strip_channel_prefix("https://youtube.com/channel/UCabc"), "UCabc");
    assert_eq!(strip_channel_prefix("https://www.youtube.com/user/someone"), "someone");
    assert_eq!(strip_channel_prefix("https://youtube.com/user/someone"), "someone");

    // Already bare ids and unknown hosts are left alone
    assert_eq!(strip_channel_prefix("UCabc"), "UCabc");
    assert_eq!(
        strip_channel_prefix("https://example.com/channel/UCabc"),
        "https://example.com/channel/UCabc"
    );
}

#[test]
fn test_random_index() {
    assert_eq!(random_index(0), None);
    assert_eq!(random_index(1), Some(0));

    // Every index stays within bounds
    for _ in 0..200 {
        let idx = random_index(5).unwrap();
        assert!(idx < 5);
    }
}

#[test]
fn test_format_last_updated_adds_one_day() {
    // 2021-01-01T00:00:00Z
    assert_eq!(format_last_updated(1_609_459_200).unwrap(), "Jan 2nd, 2021");

    // Late in the day still lands on the next calendar day
    // 2020-02-28T23:59:59Z
    assert_eq!(format_last_updated(1_582_934_399).unwrap(), "Feb 29th, 2020");

    // Year rollover: 2019-12-31T12:00:00Z
    assert_eq!(format_last_updated(1_577_793_600).unwrap(), "Jan 1st, 2020");
}

#[test]
fn test_format_last_updated_matches_shifted_date() {
    let t = 1_700_000_000;
    let shifted = DateTime::from_timestamp(t, 0).unwrap() + Duration::seconds(86_400);
    let formatted = format_last_updated(t).unwrap();

    assert!(formatted.starts_with(&shifted.format("%b").to_string()));
    assert!(formatted.ends_with(&shifted.format(", %Y").to_string()));
}

#[test]
fn test_format_last_updated_ordinals() {
    let day = 86_400;
    // 2021-01-01 + n days, formatted one day later
    let base = 1_609_459_200 - day;
    let cases = [
        (1, "Jan 1st, 2021"),
        (2, "Jan 2nd, 2021"),
        (3, "Jan 3rd, 2021"),
        (4, "Jan 4th, 2021"),
        (11, "Jan 11th, 2021"),
        (12, "Jan 12th, 2021"),
        (13, "Jan 13th, 2021"),
        (21, "Jan 21st, 2021"),
        (22, "Jan 22nd, 2021"),
        (23, "Jan 23rd, 2021"),
        (31, "Jan 31st, 2021"),
    ];

    for (n, expected) in cases {
        assert_eq!(format_last_updated(base + (n - 1) * day).unwrap(), expected);
    }
}

#[test]
fn test_format_last_updated_out_of_range() {
    assert!(format_last_updated(i64::MAX).is_none());
}

#[test]
fn test_parse_duration() {
    assert_eq!(parse_duration(&json!(125)), 125);
    assert_eq!(parse_duration(&json!("4:05")), 245);
    assert_eq!(parse_duration(&json!("1:02:03")), 3723);
    assert_eq!(parse_duration(&json!("live")), 0);
    assert_eq!(parse_duration(&json!(null)), 0);
}

#[test]
fn test_parse_duration_overflow_is_zero() {
    assert_eq!(parse_duration(&json!("18446744073709551615:59")), 0);
    assert_eq!(parse_duration(&json!("307445734561825861:00:00")), 0);
    assert_eq!(parse_duration(&json!("18446744073709551615")), u64::MAX);
}

#[test]
fn test_parse_count() {
    assert_eq!(parse_count(&json!(42)), 42);
    assert_eq!(parse_count(&json!("1,234,567 views")), 1_234_567);
    assert_eq!(parse_count(&json!("No views")), 0);
    assert_eq!(parse_count(&json!(null)), 0);
}

#[test]
fn test_format_length() {
    assert_eq!(format_length(0), "0:00");
    assert_eq!(format_length(65), "1:05");
    assert_eq!(format_length(3723), "1:02:03");
}

#[test]
fn test_generate_profile_id() {
    let id = generate_profile_id();

    assert_eq!(id.len(), 16);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(id, DEFAULT_PROFILE_ID);

    // Two generated ids should be different
    assert_ne!(id, generate_profile_id());
}

#[test]
fn test_is_hex_color() {
    assert!(is_hex_color("#00BFA5"));
    assert!(is_hex_color("#abcdef"));
    assert!(!is_hex_color("00BFA5"));
    assert!(!is_hex_color("#00BFA"));
    assert!(!is_hex_color("#GGGGGG"));
}
