//! Customer testimonials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::{format_date, truncate};
use crate::record::Record;
use crate::timestamp;

/// Ratings are stored on a 1 to 5 scale.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub author_name: String,
    pub author_title: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub rating: u8,
    pub avatar_url: Option<String>,
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
pub struct TestimonialInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for Testimonial {
    type Input = TestimonialInput;

    const DOMAIN: Domain = Domain::Testimonials;
    const FIELDS: &'static str = "id application_id author_name author_title company content \
                                  rating avatar_url is_active order created_at updated_at";
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Author", "Title", "Company", "Rating", "Content", "Active", "Created",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.author_name
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
        self.company.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.author_name.as_str(), self.content.as_str()];
        fields.extend(self.company.as_deref());
        fields
    }

    fn toggle_input(&self) -> TestimonialInput {
        TestimonialInput {
            is_active: Some(!self.is_active),
            ..TestimonialInput::default()
        }
    }

    fn order_input(order: i32) -> TestimonialInput {
        TestimonialInput {
            order: Some(order),
            ..TestimonialInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.author_name.clone(),
            opt(self.author_title.as_deref()),
            opt(self.company.as_deref()),
            self.rating.min(MAX_RATING).to_string(),
            truncate(&self.content, 200),
            self.is_active.to_string(),
            format_date(self.created_at),
        ]
    }
}
