//! Status enumerations for the domains that carry a workflow state instead of
//! a plain `is_active` flag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::format::{Badge, Tone};

/// Publication state of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    #[serde(alias = "DRAFT")]
    Draft,
    #[serde(alias = "PUBLISHED")]
    Published,
    #[serde(alias = "ARCHIVED")]
    Archived,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Published posts count as active.
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Published)
    }

    /// The state a publish/unpublish toggle moves to.
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Published => Self::Draft,
            Self::Draft | Self::Archived => Self::Published,
        }
    }

    pub const fn badge(&self) -> Badge {
        match self {
            Self::Draft => Badge::new("Draft", Tone::Warning),
            Self::Published => Badge::new("Published", Tone::Success),
            Self::Archived => Badge::new("Archived", Tone::Neutral),
        }
    }
}

/// Triage state of an inbound contact request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    #[serde(alias = "NEW")]
    New,
    #[serde(alias = "READ")]
    Read,
    #[serde(alias = "REPLIED")]
    Replied,
    #[serde(alias = "ARCHIVED")]
    Archived,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [Self::New, Self::Read, Self::Replied, Self::Archived];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }

    /// Requests still awaiting a reply are the "active" ones.
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::New | Self::Read)
    }

    /// Open requests archive; anything else reopens as read.
    pub const fn toggled(&self) -> Self {
        if self.is_active() {
            Self::Archived
        } else {
            Self::Read
        }
    }

    pub const fn badge(&self) -> Badge {
        match self {
            Self::New => Badge::new("New", Tone::Info),
            Self::Read => Badge::new("Read", Tone::Warning),
            Self::Replied => Badge::new("Replied", Tone::Success),
            Self::Archived => Badge::new("Archived", Tone::Neutral),
        }
    }
}

/// Delivery state of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    #[serde(alias = "PLANNED")]
    Planned,
    #[serde(alias = "IN_PROGRESS")]
    InProgress,
    #[serde(alias = "COMPLETED")]
    Completed,
    #[serde(alias = "ON_HOLD")]
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        Self::Planned,
        Self::InProgress,
        Self::Completed,
        Self::OnHold,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }

    pub const fn badge(&self) -> Badge {
        match self {
            Self::Planned => Badge::new("Planned", Tone::Info),
            Self::InProgress => Badge::new("In progress", Tone::Warning),
            Self::Completed => Badge::new("Completed", Tone::Success),
            Self::OnHold => Badge::new("On hold", Tone::Neutral),
        }
    }
}

/// Contract type of a job position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[default]
    #[serde(alias = "FULL_TIME")]
    FullTime,
    #[serde(alias = "PART_TIME")]
    PartTime,
    #[serde(alias = "CONTRACT")]
    Contract,
    #[serde(alias = "INTERNSHIP")]
    Internship,
}

impl EmploymentType {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }
}

macro_rules! impl_status_text {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
                Self::ALL
                    .into_iter()
                    .find(|status| status.as_str() == wanted)
                    .ok_or_else(|| ModelError::InvalidValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_status_text!(PostStatus, "post status");
impl_status_text!(ContactStatus, "contact status");
impl_status_text!(ProjectStatus, "project status");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_toggle_flips_publication() {
        assert_eq!(PostStatus::Published.toggled(), PostStatus::Draft);
        assert_eq!(PostStatus::Draft.toggled(), PostStatus::Published);
        assert_eq!(PostStatus::Archived.toggled(), PostStatus::Published);
    }

    #[test]
    fn contact_toggle_archives_open_requests() {
        assert_eq!(ContactStatus::New.toggled(), ContactStatus::Archived);
        assert_eq!(ContactStatus::Archived.toggled(), ContactStatus::Read);
        assert!(!ContactStatus::Replied.is_active());
    }

    #[test]
    fn statuses_accept_graphql_enum_names() {
        let status: ProjectStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
        let status: PostStatus = serde_json::from_str("\"published\"").unwrap();
        assert_eq!(status, PostStatus::Published);
    }

    #[test]
    fn statuses_parse_from_cli_text() {
        assert_eq!("in-progress".parse::<ProjectStatus>(), Ok(ProjectStatus::InProgress));
        assert!("pending".parse::<ContactStatus>().is_err());
    }
}
