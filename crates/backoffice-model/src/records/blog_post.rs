//! Blog posts. Activity follows publication status rather than a flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::{Badge, format_date};
use crate::record::Record;
use crate::status::PostStatus;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, with = "timestamp::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub order: i32,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPostInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for BlogPost {
    type Input = BlogPostInput;

    const DOMAIN: Domain = Domain::BlogPosts;
    const FIELDS: &'static str = "id application_id title slug excerpt content author category \
                                  tags status view_count is_featured published_at order \
                                  created_at updated_at";
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Title", "Slug", "Author", "Category", "Status", "Views", "Featured", "Published",
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
        self.status.is_active()
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
        let mut fields = vec![self.title.as_str(), self.slug.as_str()];
        fields.extend(self.excerpt.as_deref());
        fields.extend(self.author.as_deref());
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn badge(&self) -> Badge {
        self.status.badge()
    }

    fn toggle_input(&self) -> BlogPostInput {
        BlogPostInput {
            status: Some(self.status.toggled()),
            ..BlogPostInput::default()
        }
    }

    fn order_input(order: i32) -> BlogPostInput {
        BlogPostInput {
            order: Some(order),
            ..BlogPostInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.slug.clone(),
            opt(self.author.as_deref()),
            opt(self.category.as_deref()),
            self.status.to_string(),
            self.view_count.to_string(),
            self.is_featured.to_string(),
            format_date(self.published_at),
            format_date(self.created_at),
        ]
    }
}
