//! Headline figures ("250+ customers") shown on landing pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::format_date;
use crate::record::Record;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    pub suffix: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Stat {
    /// Value with its suffix, e.g. `250+`.
    pub fn display_value(&self) -> String {
        format!("{}{}", self.value, self.suffix.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for Stat {
    type Input = StatInput;

    const DOMAIN: Domain = Domain::Stats;
    const FIELDS: &'static str =
        "id application_id label value suffix icon is_active order created_at updated_at";
    const COLUMNS: &'static [&'static str] =
        &["ID", "Label", "Value", "Icon", "Active", "Order", "Created"];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.label
    }

    fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn toggle_input(&self) -> StatInput {
        StatInput {
            is_active: Some(!self.is_active),
            ..StatInput::default()
        }
    }

    fn order_input(order: i32) -> StatInput {
        StatInput {
            order: Some(order),
            ..StatInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.label.clone(),
            self.display_value(),
            opt(self.icon.as_deref()),
            self.is_active.to_string(),
            self.order.to_string(),
            format_date(self.created_at),
        ]
    }
}
