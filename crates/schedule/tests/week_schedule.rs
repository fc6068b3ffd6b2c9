//! End-to-end checks of the week-schedule contract.

use chrono::{TimeZone, Utc};
use ck_schedule::{build_week_schedule, PostStatus};

// Monday 2024-11-11, 8 AM Pacific.
fn monday() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 11, 16, 0, 0).unwrap()
}

#[test]
fn instagram_week_has_three_typed_slots() {
    let schedule = build_week_schedule(&["instagram".to_string()], monday(), "America/Los_Angeles");

    assert_eq!(schedule.timezone, "America/Los_Angeles");
    assert_eq!(schedule.items.len(), 3);

    // Tue 11 AM, Thu 2 PM, Fri 10 AM Pacific (PST = UTC-8), ascending.
    let expected = [
        ("post", Utc.with_ymd_and_hms(2024, 11, 12, 19, 0, 0).unwrap()),
        ("reel", Utc.with_ymd_and_hms(2024, 11, 14, 22, 0, 0).unwrap()),
        ("story", Utc.with_ymd_and_hms(2024, 11, 15, 18, 0, 0).unwrap()),
    ];
    for (item, (post_type, at)) in schedule.items.iter().zip(expected) {
        assert_eq!(item.platform, "instagram");
        assert_eq!(item.post_type, post_type);
        assert_eq!(item.scheduled_for, at);
        assert_eq!(item.status, PostStatus::Pending);
    }
}

#[test]
fn unknown_platform_falls_back_without_error() {
    let schedule =
        build_week_schedule(&["made-up-platform".to_string()], monday(), "America/Los_Angeles");
    // Facebook's three slots, all plain posts.
    assert_eq!(schedule.items.len(), 3);
    assert!(schedule.items.iter().all(|i| i.post_type == "post"));
    assert!(schedule.items.iter().all(|i| i.platform == "made-up-platform"));
}

#[test]
fn items_sort_ascending_across_platforms() {
    let platforms = vec!["youtube".to_string(), "email".to_string(), "facebook".to_string()];
    let schedule = build_week_schedule(&platforms, monday(), "America/Los_Angeles");
    assert_eq!(schedule.items.len(), 7);
    assert!(schedule
        .items
        .windows(2)
        .all(|pair| pair[0].scheduled_for <= pair[1].scheduled_for));
}

#[test]
fn schedule_serializes_to_the_documented_shape() {
    let schedule = build_week_schedule(&["email".to_string()], monday(), "America/Los_Angeles");
    let json = serde_json::to_value(&schedule).unwrap();

    assert_eq!(json.get("timezone").unwrap(), "America/Los_Angeles");
    let items = json.get("items").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.get("platform").unwrap(), "email");
    assert_eq!(item.get("postType").unwrap(), "newsletter");
    assert_eq!(item.get("status").unwrap(), "pending");
    // chrono serializes DateTime<Utc> as an ISO-8601 / RFC 3339 string.
    let scheduled_for = item.get("scheduledFor").unwrap().as_str().unwrap();
    assert!(scheduled_for.contains('T'));
    assert!(scheduled_for.ends_with('Z'));
}
