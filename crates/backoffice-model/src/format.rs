//! Display helpers shared by every domain.
//!
//! All functions are pure: they map raw record values to the strings shown
//! in list tables, detail views and notifications. Missing values render as
//! [`EMPTY`].

use chrono::{DateTime, Utc};

/// Placeholder rendered for absent values.
pub const EMPTY: &str = "-";

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// A short status label with a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

impl Badge {
    pub const fn new(label: &'static str, tone: Tone) -> Self {
        Self { label, tone }
    }
}

/// Badge for a plain `is_active` flag.
pub const fn active_badge(active: bool) -> Badge {
    if active {
        Badge::new("Active", Tone::Success)
    } else {
        Badge::new("Inactive", Tone::Neutral)
    }
}

/// `Jan 5, 2024`.
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| EMPTY.to_string(), |dt| dt.format("%b %-d, %Y").to_string())
}

/// `Jan 5, 2024 14:30`.
pub fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(
        || EMPTY.to_string(),
        |dt| dt.format("%b %-d, %Y %H:%M").to_string(),
    )
}

/// Coarse relative time such as `3 days ago`.
pub fn format_relative(value: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(value) = value else {
        return EMPTY.to_string();
    };
    let elapsed = now.signed_duration_since(value);
    if elapsed.num_seconds() < 0 {
        return "in the future".to_string();
    }
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    if minutes < 1 {
        "just now".to_string()
    } else if hours < 1 {
        plural(minutes, "minute")
    } else if days < 1 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Shorten `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Cuts on character boundaries, never inside a UTF-8 sequence.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let head: String = text.chars().take(keep).collect();
    format!("{}...", head.trim_end())
}

/// Upper-case the first character: `blog post` -> `Blog post`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Five-star rating, e.g. `★★★★☆`. Values above 5 clamp.
pub fn format_rating(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Compact count: `999`, `1.5K`, `2.3M`.
pub fn format_count(count: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = count as f64;
    if count >= 1_000_000 {
        trim_decimal(format!("{:.1}", value / 1_000_000.0)) + "M"
    } else if count >= 1_000 {
        trim_decimal(format!("{:.1}", value / 1_000.0)) + "K"
    } else {
        count.to_string()
    }
}

fn trim_decimal(text: String) -> String {
    text.strip_suffix(".0").map(str::to_string).unwrap_or(text)
}

/// `42.5%`.
pub fn format_percentage(value: f64) -> String {
    trim_decimal(format!("{value:.1}")) + "%"
}

/// `Yes` / `No`.
pub const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Optional text or the placeholder.
pub fn or_empty(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => EMPTY.to_string(),
    }
}

/// Comma-joined list, or the placeholder when empty.
pub fn join_list(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn capitalize_touches_only_the_first_letter() {
        assert_eq!(capitalize("blog post"), "Blog post");
        assert_eq!(capitalize("FAQ"), "FAQ");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn dates_render_in_short_month_form() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 9, 7, 0).unwrap();
        assert_eq!(format_date(Some(dt)), "Jan 5, 2024");
        assert_eq!(format_datetime(Some(dt)), "Jan 5, 2024 09:07");
        assert_eq!(format_date(None), EMPTY);
    }

    #[test]
    fn relative_time_buckets() {
        let now = now();
        assert_eq!(format_relative(Some(now), now), "just now");
        assert_eq!(
            format_relative(Some(now - Duration::minutes(1)), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative(Some(now - Duration::hours(5)), now),
            "5 hours ago"
        );
        assert_eq!(
            format_relative(Some(now - Duration::days(3)), now),
            "3 days ago"
        );
        assert_eq!(
            format_relative(Some(now - Duration::days(65)), now),
            "2 months ago"
        );
        assert_eq!(
            format_relative(Some(now - Duration::days(800)), now),
            "2 years ago"
        );
        assert_eq!(
            format_relative(Some(now + Duration::days(1)), now),
            "in the future"
        );
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world again", 10), "hello w...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn ratings_and_counts() {
        assert_eq!(format_rating(4), "★★★★☆");
        assert_eq!(format_rating(9), "★★★★★");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_540), "1.5K");
        assert_eq!(format_count(2_300_000), "2.3M");
        assert_eq!(format_percentage(50.0), "50%");
        assert_eq!(format_percentage(33.333), "33.3%");
    }

    #[test]
    fn placeholders() {
        assert_eq!(or_empty(None), EMPTY);
        assert_eq!(or_empty(Some("  ")), EMPTY);
        assert_eq!(join_list(&[]), EMPTY);
        assert_eq!(join_list(&["rust".to_string(), "go".to_string()]), "rust, go");
    }

    proptest! {
        #[test]
        fn truncate_never_exceeds_limit(text in "\\PC{0,60}", max in 3usize..40) {
            let out = truncate(&text, max);
            prop_assert!(out.chars().count() <= max);
        }
    }
}
