//! Frequently asked questions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::format_date;
use crate::record::Record;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    pub category: Option<String>,
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
pub struct FaqInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for Faq {
    type Input = FaqInput;

    const DOMAIN: Domain = Domain::Faqs;
    const FIELDS: &'static str =
        "id application_id question answer category is_active order created_at updated_at";
    const COLUMNS: &'static [&'static str] =
        &["ID", "Question", "Answer", "Category", "Active", "Order", "Created"];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.question
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
        self.category.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
    }

    fn toggle_input(&self) -> FaqInput {
        FaqInput {
            is_active: Some(!self.is_active),
            ..FaqInput::default()
        }
    }

    fn order_input(order: i32) -> FaqInput {
        FaqInput {
            order: Some(order),
            ..FaqInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.question.clone(),
            self.answer.clone(),
            opt(self.category.as_deref()),
            self.is_active.to_string(),
            self.order.to_string(),
            format_date(self.created_at),
        ]
    }
}
