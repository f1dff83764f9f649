//! Team members and their social profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opt;
use crate::domain::Domain;
use crate::format::format_date;
use crate::record::Record;
use crate::timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub application_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TeamMember {
    /// Comma-separated platform names, e.g. `linkedin, github`.
    pub fn social_summary(&self) -> String {
        self.social_links
            .iter()
            .map(|link| link.platform.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMemberInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl Record for TeamMember {
    type Input = TeamMemberInput;

    const DOMAIN: Domain = Domain::TeamMembers;
    const FIELDS: &'static str = "id application_id name position department bio photo_url email \
                                  social_links { platform url } is_active order created_at \
                                  updated_at";
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Name", "Position", "Department", "Email", "Social", "Active", "Order", "Created",
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
        self.department.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.position.as_deref());
        fields.extend(self.email.as_deref());
        fields
    }

    fn toggle_input(&self) -> TeamMemberInput {
        TeamMemberInput {
            is_active: Some(!self.is_active),
            ..TeamMemberInput::default()
        }
    }

    fn order_input(order: i32) -> TeamMemberInput {
        TeamMemberInput {
            order: Some(order),
            ..TeamMemberInput::default()
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            opt(self.position.as_deref()),
            opt(self.department.as_deref()),
            opt(self.email.as_deref()),
            self.social_summary(),
            self.is_active.to_string(),
            self.order.to_string(),
            format_date(self.created_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_summary_lists_platforms() {
        let member = TeamMember {
            social_links: vec![
                SocialLink {
                    platform: "linkedin".to_string(),
                    url: "https://linkedin.com/in/x".to_string(),
                },
                SocialLink {
                    platform: "github".to_string(),
                    url: "https://github.com/x".to_string(),
                },
            ],
            ..TeamMember::default()
        };
        assert_eq!(member.social_summary(), "linkedin, github");
    }
}
