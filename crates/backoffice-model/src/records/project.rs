//! Portfolio projects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::{format_date, join_list};
use crate::record::Record;
use crate::status::ProjectStatus;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, with = "timestamp::option")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_featured: bool,
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
pub struct ProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for Project {
    type Input = ProjectInput;

    const DOMAIN: Domain = Domain::Projects;
    const FIELDS: &'static str = "id application_id title slug description client_name category \
                                  technologies status started_at completed_at is_featured \
                                  is_active order created_at updated_at";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Title",
        "Client",
        "Category",
        "Status",
        "Technologies",
        "Featured",
        "Active",
        "Completed",
        "Created",
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
        self.category.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.client_name.as_deref());
        fields.extend(self.description.as_deref());
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }

    fn toggle_input(&self) -> ProjectInput {
        ProjectInput {
            is_active: Some(!self.is_active),
            ..ProjectInput::default()
        }
    }

    fn order_input(order: i32) -> ProjectInput {
        ProjectInput {
            order: Some(order),
            ..ProjectInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            opt(self.client_name.as_deref()),
            opt(self.category.as_deref()),
            self.status.to_string(),
            join_list(&self.technologies),
            self.is_featured.to_string(),
            self.is_active.to_string(),
            format_date(self.completed_at),
            format_date(self.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technologies_are_searchable() {
        let project = Project {
            title: "Intranet".to_string(),
            technologies: vec!["Rust".to_string(), "Postgres".to_string()],
            ..Project::default()
        };
        assert!(project.search_fields().contains(&"Postgres"));
    }

    #[test]
    fn decodes_graphql_payload() {
        let json = r#"{
            "id": "p1",
            "title": "Portal",
            "status": "IN_PROGRESS",
            "technologies": ["Vue"],
            "is_active": true,
            "created_at": "2024-01-05 09:00:00"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert!(project.is_active());
        assert!(project.created_at.is_some());
    }
}
