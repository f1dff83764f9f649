//! Client logos shown on the marketing site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::format_date;
use crate::record::Record;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub industry: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for Client {
    type Input = ClientInput;

    const DOMAIN: Domain = Domain::Clients;
    const FIELDS: &'static str = "id application_id name industry logo_url website description \
                                  is_active order created_at updated_at";
    const COLUMNS: &'static [&'static str] =
        &["ID", "Name", "Industry", "Website", "Active", "Order", "Created"];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
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

    fn category(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.industry.as_deref());
        fields.extend(self.website.as_deref());
        fields
    }

    fn toggle_input(&self) -> ClientInput {
        ClientInput {
            is_active: Some(!self.is_active),
            ..ClientInput::default()
        }
    }

    fn order_input(order: i32) -> ClientInput {
        ClientInput {
            order: Some(order),
            ..ClientInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            opt(self.industry.as_deref()),
            opt(self.website.as_deref()),
            self.is_active.to_string(),
            self.order.to_string(),
            format_date(self.created_at),
        ]
    }
}
