//! List filters.
//!
//! Filters are plain value holders; an unset field means "no filter".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::record::Record;

/// Narrowing by active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    Any,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// The `is_active` value this filter pins, if any.
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Any => None,
            Self::Active => Some(true),
            Self::Inactive => Some(false),
        }
    }

    pub const fn accepts(&self, active: bool) -> bool {
        match self.as_flag() {
            None => true,
            Some(wanted) => wanted == active,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "any" | "all" => Ok(Self::Any),
            "active" | "published" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ModelError::InvalidValue {
                kind: "status filter",
                value: s.to_string(),
            }),
        }
    }
}

/// Search / status / category filters for one domain list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub category: Option<String>,
}

impl Filters {
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Search text, trimmed; blank counts as unset.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    fn category_term(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.status == StatusFilter::Any
            && self.category_term().is_none()
    }

    pub fn matches<T: Record>(&self, record: &T) -> bool {
        if !self.status.accepts(record.is_active()) {
            return false;
        }
        if let Some(category) = self.category_term() {
            let same = record
                .category()
                .is_some_and(|value| value.trim().eq_ignore_ascii_case(category));
            if !same {
                return false;
            }
        }
        if let Some(term) = self.search_term() {
            let needle = term.to_lowercase();
            return record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        }
        true
    }

    /// Matching records, ordered by their manual `order`.
    pub fn apply<'a, T: Record>(&self, records: &'a [T]) -> Vec<&'a T> {
        let mut matched: Vec<&T> = records.iter().filter(|r| self.matches(*r)).collect();
        matched.sort_by_key(|r| r.order());
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Faq;

    fn faq(id: &str, question: &str, category: &str, active: bool) -> Faq {
        Faq {
            id: id.to_string(),
            question: question.to_string(),
            answer: format!("Answer to {question}"),
            category: Some(category.to_string()),
            is_active: active,
            ..Faq::default()
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let filters = Filters::default().with_search("   ");
        assert!(filters.is_empty());
        assert!(filters.matches(&faq("1", "Anything", "General", false)));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![
            faq("1", "foobar", "General", true),
            faq("2", "baz", "General", true),
        ];
        let filters = Filters::default().with_search("FOO");
        let matched = filters.apply(&items);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].question, "foobar");
    }

    #[test]
    fn search_covers_secondary_fields() {
        let item = faq("1", "Shipping", "Orders", true);
        assert!(Filters::default().with_search("answer to").matches(&item));
    }

    #[test]
    fn status_and_category_combine() {
        let items = vec![
            faq("1", "a", "Billing", true),
            faq("2", "b", "Billing", false),
            faq("3", "c", "Shipping", true),
        ];
        let filters = Filters::default()
            .with_status(StatusFilter::Active)
            .with_category("billing");
        let ids: Vec<&str> = filters.apply(&items).iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn status_filter_parses() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::Any));
        assert_eq!("Inactive".parse::<StatusFilter>(), Ok(StatusFilter::Inactive));
        assert!("maybe".parse::<StatusFilter>().is_err());
    }
}
