//! Company certifications and accreditations.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::format_date;
use crate::record::Record;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub issuer: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Certification {
    /// Past its expiry date at `now`. Certifications without one never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| expiry <= now)
    }

    /// Not yet expired but expiring within `days`.
    pub fn expires_within(&self, now: DateTime<Utc>, days: i64) -> bool {
        self.expires_at
            .is_some_and(|expiry| expiry > now && expiry <= now + Duration::days(days))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for Certification {
    type Input = CertificationInput;

    const DOMAIN: Domain = Domain::Certifications;
    const FIELDS: &'static str = "id application_id name issuer description issued_at expires_at \
                                  credential_url image_url is_active order created_at updated_at";
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Name", "Issuer", "Issued", "Expires", "Credential", "Active", "Created",
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
        self.is_active
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn category(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.issuer.as_deref());
        fields
    }

    fn toggle_input(&self) -> CertificationInput {
        CertificationInput {
            is_active: Some(!self.is_active),
            ..CertificationInput::default()
        }
    }

    fn order_input(order: i32) -> CertificationInput {
        CertificationInput {
            order: Some(order),
            ..CertificationInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            opt(self.issuer.as_deref()),
            format_date(self.issued_at),
            format_date(self.expires_at),
            opt(self.credential_url.as_deref()),
            self.is_active.to_string(),
            format_date(self.created_at),
        ]
    }
}
