//! Derived statistics over an in-memory record list.
//!
//! Statistics are a pure function of the list and the computation instant.
//! They are recomputed in full whenever the list changes.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::record::Record;

/// Records created within this many days count as recent.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Counts derived from one domain's list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub recent_count: usize,
    /// `recent_count / total * 100`; 0 for an empty list.
    pub growth_percentage: f64,
    /// Tally per category; records without a category are not counted.
    pub by_category: BTreeMap<String, usize>,
}

impl Statistics {
    pub fn compute<T: Record>(records: &[T], now: DateTime<Utc>) -> Self {
        let total = records.len();
        let active = records.iter().filter(|r| r.is_active()).count();
        let recent_count = records
            .iter()
            .filter(|r| is_recent(r.created_at(), now))
            .count();
        let mut by_category = BTreeMap::new();
        for category in records.iter().filter_map(T::category) {
            let category = category.trim();
            if !category.is_empty() {
                *by_category.entry(category.to_string()).or_insert(0) += 1;
            }
        }
        Self {
            total,
            active,
            inactive: total - active,
            recent_count,
            growth_percentage: growth_percentage(recent_count, total),
            by_category,
        }
    }

    /// Share of `category` in the list, as a percentage.
    pub fn category_percentage(&self, category: &str) -> f64 {
        percentage(
            self.by_category.get(category).copied().unwrap_or(0),
            self.total,
        )
    }
}

/// Whether `created_at` falls strictly inside the recent window ending at `now`.
pub fn is_recent(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    created_at.is_some_and(|created| created > now - Duration::days(RECENT_WINDOW_DAYS))
}

/// `recent / total * 100`, defined as 0 when `total` is 0.
pub fn growth_percentage(recent: usize, total: usize) -> f64 {
    percentage(recent, total)
}

/// `part / total * 100`, defined as 0 when `total` is 0.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Banner;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn banner(id: &str, active: bool, age_days: i64) -> Banner {
        Banner {
            id: id.to_string(),
            title: format!("Banner {id}"),
            is_active: active,
            created_at: Some(now() - Duration::days(age_days)),
            ..Banner::default()
        }
    }

    #[test]
    fn empty_list_has_zero_growth() {
        let stats = Statistics::compute::<Banner>(&[], now());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.growth_percentage, 0.0);
        assert_eq!(stats.category_percentage("anything"), 0.0);
    }

    #[test]
    fn counts_active_and_inactive() {
        let items = vec![banner("1", true, 100), banner("2", false, 100)];
        let stats = Statistics::compute(&items, now());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.inactive, 1);
    }

    #[test]
    fn growth_counts_records_inside_the_window() {
        let items = vec![
            banner("1", true, 1),
            banner("2", true, 29),
            banner("3", true, 30),
            banner("4", true, 200),
        ];
        let stats = Statistics::compute(&items, now());
        assert_eq!(stats.recent_count, 2);
        assert_eq!(stats.growth_percentage, 50.0);
    }

    #[test]
    fn missing_created_at_is_not_recent() {
        assert!(!is_recent(None, now()));
    }
}
