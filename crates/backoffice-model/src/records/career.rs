//! Open job positions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::format_date;
use crate::record::Record;
use crate::status::EmploymentType;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub department: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary_range: Option<String>,
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
pub struct CareerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for Career {
    type Input = CareerInput;

    const DOMAIN: Domain = Domain::Careers;
    const FIELDS: &'static str = "id application_id title department location employment_type \
                                  description requirements salary_range is_active order \
                                  created_at updated_at";
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Title", "Department", "Location", "Type", "Salary", "Active", "Created",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
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
        self.department.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.department.as_deref());
        fields.extend(self.location.as_deref());
        fields
    }

    fn toggle_input(&self) -> CareerInput {
        CareerInput {
            is_active: Some(!self.is_active),
            ..CareerInput::default()
        }
    }

    fn order_input(order: i32) -> CareerInput {
        CareerInput {
            order: Some(order),
            ..CareerInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            opt(self.department.as_deref()),
            opt(self.location.as_deref()),
            self.employment_type.label().to_string(),
            opt(self.salary_range.as_deref()),
            self.is_active.to_string(),
            format_date(self.created_at),
        ]
    }
}
