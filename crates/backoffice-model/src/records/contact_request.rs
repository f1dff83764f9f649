//! Inbound contact-form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::{Badge, format_datetime};
use crate::record::Record;
use crate::status::ContactStatus;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default)]
    pub order: i32,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequestInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for ContactRequest {
    type Input = ContactRequestInput;

    const DOMAIN: Domain = Domain::ContactRequests;
    const FIELDS: &'static str = "id application_id name email phone company subject message \
                                  status order created_at updated_at";
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Name", "Email", "Phone", "Company", "Subject", "Message", "Status", "Received",
    ];

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
        self.status.is_active()
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn category(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str(), self.message.as_str()];
        fields.extend(self.company.as_deref());
        fields.extend(self.subject.as_deref());
        fields
    }

    fn badge(&self) -> Badge {
        self.status.badge()
    }

    fn toggle_input(&self) -> ContactRequestInput {
        ContactRequestInput {
            status: Some(self.status.toggled()),
            ..ContactRequestInput::default()
        }
    }

    fn order_input(order: i32) -> ContactRequestInput {
        ContactRequestInput {
            order: Some(order),
            ..ContactRequestInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            opt(self.phone.as_deref()),
            opt(self.company.as_deref()),
            opt(self.subject.as_deref()),
            self.message.clone(),
            self.status.to_string(),
            format_datetime(self.created_at),
        ]
    }
}
