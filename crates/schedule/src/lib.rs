//! Publishing scheduler: maps requested platforms, a start instant, and
//! a timezone into an ordered week of future send slots.
//!
//! "Scheduling" here means producing a static list of timestamps from the
//! per-platform best-time tables; there is no dispatcher loop. The
//! weekday roll runs on the local calendar of the target IANA zone and
//! results convert back to UTC.
//!
//! **DST handling:**
//! - Spring-forward gaps: a slot whose wall-clock hour doesn't exist that
//!   day shifts one hour forward.
//! - Fall-back overlaps: the earliest (pre-transition) mapping is chosen.

pub mod model;
mod tables;

pub use model::{PlatformScheduleItem, PostStatus, WeekSchedule};
pub use tables::Slot;

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Zone used when a caller has no opinion.
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Parse a timezone string into a `chrono_tz::Tz`, falling back to UTC.
pub fn parse_tz(tz: &str) -> Tz {
    match tz.parse::<Tz>() {
        Ok(zone) => zone,
        Err(_) => {
            tracing::warn!(timezone = tz, "unknown IANA zone, falling back to UTC");
            chrono_tz::UTC
        }
    }
}

/// Boundary validation for caller-supplied zones. The scheduler itself
/// stays total (unknown zones fall back to UTC), but the intake layer can
/// reject bad input early with this.
pub fn validate_timezone(tz: &str) -> ck_domain::Result<()> {
    if tz.parse::<Tz>().is_err() {
        Err(ck_domain::Error::InvalidInput(format!(
            "invalid timezone: '{tz}' — use IANA names like 'America/New_York' or 'UTC'"
        )))
    } else {
        Ok(())
    }
}

/// Next occurrence of `target_day` (0=Sunday..6=Saturday) at `hour`:00 in
/// `tz`, strictly after `start`: a start already on the target weekday
/// rolls a full week rather than reusing the same day.
pub fn next_weekday(start: DateTime<Utc>, target_day: u32, hour: u32, tz: Tz) -> DateTime<Utc> {
    let local = start.with_timezone(&tz);
    let current_day = local.weekday().num_days_from_sunday();

    let mut days_until = i64::from(target_day) - i64::from(current_day);
    if days_until <= 0 {
        days_until += 7;
    }

    let date = local.date_naive() + Duration::days(days_until);
    let naive = date
        .and_hms_opt(hour % 24, 0, 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN));

    let resolved = match tz.from_local_datetime(&naive) {
        chrono::LocalResult::Single(dt) => dt,
        chrono::LocalResult::Ambiguous(earliest, _) => earliest,
        chrono::LocalResult::None => {
            // DST gap — this wall-clock hour doesn't exist today.
            let shifted = naive + Duration::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .unwrap_or_else(|| tz.from_utc_datetime(&shifted))
        }
    };
    resolved.with_timezone(&Utc)
}

/// Build the week's schedule for every requested platform.
///
/// Platform names are matched case-insensitively; unknown names degrade
/// to the facebook slot table with a plain `post` type (logged, never an
/// error). Items come back globally sorted ascending, all `pending`.
pub fn build_week_schedule(
    platforms: &[String],
    start: DateTime<Utc>,
    timezone: &str,
) -> WeekSchedule {
    let tz = parse_tz(timezone);
    let mut items: Vec<PlatformScheduleItem> = Vec::new();

    for platform in platforms {
        let normalized = platform.to_lowercase();
        let (times, post_types) = match tables::find(&normalized) {
            Some(table) => (table.times, table.post_types),
            None => {
                tracing::warn!(
                    platform = %normalized,
                    "unknown platform, using facebook best-time table"
                );
                (tables::FALLBACK_TIMES, tables::FALLBACK_POST_TYPES)
            }
        };

        for (index, &(day, hour)) in times.iter().enumerate() {
            let post_type = post_types
                .get(index)
                .or_else(|| post_types.first())
                .copied()
                .unwrap_or("post");

            items.push(PlatformScheduleItem {
                platform: normalized.clone(),
                post_type: post_type.to_string(),
                scheduled_for: next_weekday(start, day, hour, tz),
                status: PostStatus::Pending,
            });
        }
    }

    items.sort_by_key(|item| item.scheduled_for);

    WeekSchedule {
        timezone: timezone.to_string(),
        items,
    }
}

/// Convenience: [`build_week_schedule`] with [`DEFAULT_TIMEZONE`].
pub fn build_default_week_schedule(platforms: &[String], start: DateTime<Utc>) -> WeekSchedule {
    build_week_schedule(platforms, start, DEFAULT_TIMEZONE)
}

/// Format a slot for display in its zone: "Monday, Nov 11 at 9:00 AM PST".
pub fn format_schedule_date(scheduled: DateTime<Utc>, tz: Tz) -> String {
    scheduled
        .with_timezone(&tz)
        .format("%A, %b %-d at %-I:%M %p %Z")
        .to_string()
}

/// True once a slot's send time has passed. `now` is explicit; the core
/// carries no ambient clock.
pub fn is_expired(scheduled: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    scheduled < now
}

/// Whole days until a slot, rounded up. Negative once it has passed.
pub fn days_until(scheduled: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    let diff_ms = (scheduled - now).num_milliseconds();
    if diff_ms > 0 && diff_ms % DAY_MS != 0 {
        diff_ms / DAY_MS + 1
    } else {
        diff_ms / DAY_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    // Monday 2024-11-11, 8 AM Pacific (16:00 UTC).
    fn monday_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 11, 16, 0, 0).unwrap()
    }

    #[test]
    fn next_weekday_rolls_forward() {
        let tz = parse_tz("America/Los_Angeles");
        // Tuesday 11 AM PST = 19:00 UTC.
        let next = next_weekday(monday_morning(), 2, 11, tz);
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 11, 12, 19, 0, 0).unwrap());
    }

    #[test]
    fn same_weekday_is_never_reused() {
        let tz = parse_tz("America/Los_Angeles");
        // Start is a Monday; the Monday slot lands a full week out.
        let next = next_weekday(monday_morning(), 1, 9, tz);
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 11, 18, 17, 0, 0).unwrap());
    }

    #[test]
    fn weekday_roll_respects_target_zone_dst() {
        let tz = parse_tz("America/New_York");
        // Friday 2024-03-08, before the US spring-forward; the following
        // Monday 9 AM is EDT (UTC-4), not EST.
        let start = Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap();
        let next = next_weekday(start, 1, 9, tz);
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 3, 11, 13, 0, 0).unwrap());
    }

    #[test]
    fn hour_is_set_with_zeroed_minutes() {
        let tz = parse_tz("UTC");
        let start = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 45).unwrap();
        let next = next_weekday(start, 1, 9, tz);
        assert_eq!(next.hour(), 9);
        assert_eq!(next.minute(), 0);
        assert_eq!(next.second(), 0);
    }

    #[test]
    fn invalid_timezone_falls_back_to_utc() {
        assert_eq!(parse_tz("Not/Real"), chrono_tz::UTC);
        assert_eq!(parse_tz(""), chrono_tz::UTC);
    }

    #[test]
    fn validate_timezone_rejects_bad_names_at_the_boundary() {
        assert!(validate_timezone("America/New_York").is_ok());
        assert!(validate_timezone("UTC").is_ok());
        assert!(matches!(
            validate_timezone("Not/Real"),
            Err(ck_domain::Error::InvalidInput(_))
        ));
    }

    #[test]
    fn email_schedule_lands_in_target_zone() {
        // Monday 2024-06-10 00:00 UTC is Monday 9 AM in Tokyo; the email
        // slot (Tuesday 10 AM JST) is 01:00 UTC the next day.
        let start = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        let schedule = build_week_schedule(&["email".to_string()], start, "Asia/Tokyo");
        assert_eq!(schedule.items.len(), 1);
        assert_eq!(schedule.items[0].post_type, "newsletter");
        assert_eq!(
            schedule.items[0].scheduled_for,
            Utc.with_ymd_and_hms(2024, 6, 11, 1, 0, 0).unwrap()
        );
    }

    #[test]
    fn platform_names_are_case_insensitive() {
        let schedule =
            build_week_schedule(&["Instagram".to_string()], monday_morning(), "America/Los_Angeles");
        assert!(schedule.items.iter().all(|i| i.platform == "instagram"));
    }

    #[test]
    fn every_item_is_strictly_future() {
        let start = monday_morning();
        let platforms: Vec<String> = ["facebook", "instagram", "linkedin", "twitter", "tiktok", "youtube", "gbp", "email"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let schedule = build_week_schedule(&platforms, start, "America/Los_Angeles");
        assert!(schedule.items.iter().all(|i| i.scheduled_for > start));
    }

    #[test]
    fn format_schedule_date_reads_naturally() {
        let tz = parse_tz("America/Los_Angeles");
        // Monday 2024-11-11 9:00 AM PST = 17:00 UTC.
        let slot = Utc.with_ymd_and_hms(2024, 11, 11, 17, 0, 0).unwrap();
        assert_eq!(format_schedule_date(slot, tz), "Monday, Nov 11 at 9:00 AM PST");
    }

    #[test]
    fn is_expired_compares_against_explicit_now() {
        let slot = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        assert!(is_expired(slot, Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 1).unwrap()));
        assert!(!is_expired(slot, Utc.with_ymd_and_hms(2024, 6, 15, 9, 59, 59).unwrap()));
    }

    #[test]
    fn days_until_rounds_up() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let in_36_hours = Utc.with_ymd_and_hms(2024, 6, 16, 22, 0, 0).unwrap();
        assert_eq!(days_until(in_36_hours, now), 2);
        let exactly_one_day = Utc.with_ymd_and_hms(2024, 6, 16, 10, 0, 0).unwrap();
        assert_eq!(days_until(exactly_one_day, now), 1);
        let past = Utc.with_ymd_and_hms(2024, 6, 14, 10, 0, 0).unwrap();
        assert_eq!(days_until(past, now), -1);
    }
}
