//! The shared contract of every root content record.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::Domain;
use crate::format::{Badge, active_badge};

/// A root record of one content domain.
///
/// Implementors describe how they are fetched (`FIELDS`), exported
/// (`COLUMNS` / [`Record::csv_row`]) and mutated ([`Record::Input`]). The
/// generic store, API client and dashboard need nothing else.
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Create/update payload. Every field is optional; unset fields are not sent.
    type Input: Clone + Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// The domain this record belongs to.
    const DOMAIN: Domain;

    /// GraphQL selection set for one record.
    const FIELDS: &'static str;

    /// CSV / table header, aligned with [`Record::csv_row`].
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> &str;

    /// Primary display text (title, name, question, ...).
    fn title(&self) -> &str;

    /// Tenant the record is scoped to.
    fn application_id(&self) -> Option<&str>;

    /// Whether the record counts as active (`is_active`, published, open).
    fn is_active(&self) -> bool;

    /// Manual sort position.
    fn order(&self) -> i32;

    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Grouping key used by category filters and `by_category` statistics.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Texts matched by the free-text search filter.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title()]
    }

    /// Status badge shown in list views.
    fn badge(&self) -> Badge {
        active_badge(self.is_active())
    }

    /// Payload that flips the record's active state.
    fn toggle_input(&self) -> Self::Input;

    /// Payload that moves the record to `order`.
    fn order_input(order: i32) -> Self::Input;

    /// One CSV row, aligned with `COLUMNS`.
    fn csv_row(&self) -> Vec<String>;
}
