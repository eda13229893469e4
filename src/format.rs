//! Timestamp formatting for conversation list display.
//!
//! Recent conversations get a relative phrase ("2 hours ago"); anything seven
//! or more whole days old gets a short absolute date ("Nov 7, 2025").

use chrono::{DateTime, Utc};

/// Inputs the formatter accepts: a parsed instant or an ISO-8601 string.
pub trait IntoTimestamp {
    fn into_timestamp(self) -> Option<DateTime<Utc>>;
}

impl IntoTimestamp for DateTime<Utc> {
    fn into_timestamp(self) -> Option<DateTime<Utc>> {
        Some(self)
    }
}

impl IntoTimestamp for &DateTime<Utc> {
    fn into_timestamp(self) -> Option<DateTime<Utc>> {
        Some(*self)
    }
}

impl IntoTimestamp for &str {
    fn into_timestamp(self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self)
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc))
    }
}

impl IntoTimestamp for &String {
    fn into_timestamp(self) -> Option<DateTime<Utc>> {
        self.as_str().into_timestamp()
    }
}

/// Shown when a timestamp string fails to parse.
const INVALID_DATE: &str = "Unknown";

/// Relative-vs-absolute cutover, inclusive on the absolute side.
const ABSOLUTE_AFTER_DAYS: i64 = 7;

/// Format a timestamp for list display against the current clock.
pub fn format_timestamp(value: impl IntoTimestamp) -> String {
    format_timestamp_at(value, Utc::now())
}

/// Clock-injected variant of [`format_timestamp`].
pub fn format_timestamp_at(value: impl IntoTimestamp, now: DateTime<Utc>) -> String {
    let Some(instant) = value.into_timestamp() else {
        return INVALID_DATE.to_string();
    };

    let elapsed = now.signed_duration_since(instant);
    if elapsed.num_days() >= ABSOLUTE_AFTER_DAYS {
        return instant.format("%b %-d, %Y").to_string();
    }

    let seconds = elapsed.num_seconds().max(0);
    if seconds < 60 {
        return "less than a minute ago".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return with_unit(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return with_unit(hours, "hour");
    }
    with_unit(hours / 24, "day")
}

fn with_unit(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 14, 10, 0, 0).unwrap()
    }

    #[test]
    fn recent_dates_are_relative() {
        let two_hours = now() - Duration::hours(2);
        let three_days = now() - Duration::days(3);

        assert_eq!(format_timestamp_at(two_hours, now()), "2 hours ago");
        assert_eq!(format_timestamp_at(three_days, now()), "3 days ago");
    }

    #[test]
    fn relative_output_never_contains_a_month_name() {
        for hours in [1, 5, 23, 47, 150] {
            let formatted = format_timestamp_at(now() - Duration::hours(hours), now());
            assert!(formatted.ends_with("ago"), "{formatted}");
            assert!(!formatted.contains("Nov"), "{formatted}");
        }
    }

    #[test]
    fn seven_days_is_absolute() {
        let exactly_seven = now() - Duration::days(7);
        assert_eq!(format_timestamp_at(exactly_seven, now()), "Nov 7, 2025");
    }

    #[test]
    fn just_under_seven_days_is_still_relative() {
        let almost = now() - Duration::days(7) + Duration::hours(1);
        assert_eq!(format_timestamp_at(almost, now()), "6 days ago");
    }

    #[test]
    fn older_dates_use_short_month_day_year() {
        let one_month = Utc.with_ymd_and_hms(2025, 10, 14, 10, 0, 0).unwrap();
        assert_eq!(format_timestamp_at(one_month, now()), "Oct 14, 2025");

        let single_digit_day = Utc.with_ymd_and_hms(2025, 11, 1, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp_at(single_digit_day, now()), "Nov 1, 2025");
    }

    #[test]
    fn string_and_instant_inputs_agree() {
        let instant = Utc.with_ymd_and_hms(2025, 11, 14, 8, 0, 0).unwrap();
        assert_eq!(
            format_timestamp_at("2025-11-14T08:00:00Z", now()),
            format_timestamp_at(instant, now()),
        );

        let older = Utc.with_ymd_and_hms(2025, 9, 2, 8, 0, 0).unwrap();
        assert_eq!(
            format_timestamp_at("2025-09-02T08:00:00Z", now()),
            format_timestamp_at(older, now()),
        );
    }

    #[test]
    fn singular_units_read_naturally() {
        assert_eq!(
            format_timestamp_at(now() - Duration::minutes(1), now()),
            "1 minute ago"
        );
        assert_eq!(
            format_timestamp_at(now() - Duration::hours(1), now()),
            "1 hour ago"
        );
        assert_eq!(
            format_timestamp_at(now() - Duration::days(1), now()),
            "1 day ago"
        );
    }

    #[test]
    fn sub_minute_rounds_down() {
        let moments_ago = now() - Duration::seconds(20);
        assert_eq!(
            format_timestamp_at(moments_ago, now()),
            "less than a minute ago"
        );
    }

    #[test]
    fn unparseable_strings_render_placeholder() {
        assert_eq!(format_timestamp_at("not-a-date", now()), "Unknown");
    }
}
