//! The closed set of content domains managed by the back-office.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A content type managed by the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Banners,
    BlogPosts,
    Careers,
    Certifications,
    Clients,
    ContactRequests,
    Faqs,
    Partners,
    Projects,
    Services,
    Solutions,
    Stats,
    TeamMembers,
    Testimonials,
}

/// GraphQL naming for one domain.
///
/// The client derives every query and mutation document from these three
/// names plus the record's field selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSpec {
    /// Object type name, e.g. `BlogPost`. Mutations are `create{type_name}` etc.
    pub type_name: &'static str,
    /// Paginated list field, e.g. `blogPosts`.
    pub list_field: &'static str,
    /// Single record field, e.g. `blogPost`.
    pub item_field: &'static str,
}

impl Domain {
    /// All domains in menu order.
    pub const ALL: [Domain; 14] = [
        Self::Banners,
        Self::BlogPosts,
        Self::Careers,
        Self::Certifications,
        Self::Clients,
        Self::ContactRequests,
        Self::Faqs,
        Self::Partners,
        Self::Projects,
        Self::Services,
        Self::Solutions,
        Self::Stats,
        Self::TeamMembers,
        Self::Testimonials,
    ];

    /// Stable machine name (`blog_posts`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Banners => "banners",
            Self::BlogPosts => "blog_posts",
            Self::Careers => "careers",
            Self::Certifications => "certifications",
            Self::Clients => "clients",
            Self::ContactRequests => "contact_requests",
            Self::Faqs => "faqs",
            Self::Partners => "partners",
            Self::Projects => "projects",
            Self::Services => "services",
            Self::Solutions => "solutions",
            Self::Stats => "stats",
            Self::TeamMembers => "team_members",
            Self::Testimonials => "testimonials",
        }
    }

    /// Human-readable plural label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Banners => "Banners",
            Self::BlogPosts => "Blog posts",
            Self::Careers => "Careers",
            Self::Certifications => "Certifications",
            Self::Clients => "Clients",
            Self::ContactRequests => "Contact requests",
            Self::Faqs => "FAQs",
            Self::Partners => "Partners",
            Self::Projects => "Projects",
            Self::Services => "Services",
            Self::Solutions => "Solutions",
            Self::Stats => "Stats",
            Self::TeamMembers => "Team members",
            Self::Testimonials => "Testimonials",
        }
    }

    /// Plural noun for running text (`blog posts`, `FAQs`).
    #[must_use]
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Banners => "banners",
            Self::BlogPosts => "blog posts",
            Self::Careers => "job positions",
            Self::Certifications => "certifications",
            Self::Clients => "clients",
            Self::ContactRequests => "contact requests",
            Self::Faqs => "FAQs",
            Self::Partners => "partners",
            Self::Projects => "projects",
            Self::Services => "services",
            Self::Solutions => "solutions",
            Self::Stats => "stats",
            Self::TeamMembers => "team members",
            Self::Testimonials => "testimonials",
        }
    }

    /// Human-readable singular noun, used in prompts and toasts.
    #[must_use]
    pub const fn singular(&self) -> &'static str {
        match self {
            Self::Banners => "banner",
            Self::BlogPosts => "blog post",
            Self::Careers => "job position",
            Self::Certifications => "certification",
            Self::Clients => "client",
            Self::ContactRequests => "contact request",
            Self::Faqs => "FAQ",
            Self::Partners => "partner",
            Self::Projects => "project",
            Self::Services => "service",
            Self::Solutions => "solution",
            Self::Stats => "stat",
            Self::TeamMembers => "team member",
            Self::Testimonials => "testimonial",
        }
    }

    /// GraphQL naming for this domain.
    #[must_use]
    pub const fn spec(&self) -> DomainSpec {
        let (type_name, list_field, item_field) = match self {
            Self::Banners => ("Banner", "banners", "banner"),
            Self::BlogPosts => ("BlogPost", "blogPosts", "blogPost"),
            Self::Careers => ("Career", "careers", "career"),
            Self::Certifications => ("Certification", "certifications", "certification"),
            Self::Clients => ("Client", "clients", "client"),
            Self::ContactRequests => ("ContactRequest", "contactRequests", "contactRequest"),
            Self::Faqs => ("Faq", "faqs", "faq"),
            Self::Partners => ("Partner", "partners", "partner"),
            Self::Projects => ("Project", "projects", "project"),
            Self::Services => ("Service", "services", "service"),
            Self::Solutions => ("Solution", "solutions", "solution"),
            Self::Stats => ("Stat", "stats", "stat"),
            Self::TeamMembers => ("TeamMember", "teamMembers", "teamMember"),
            Self::Testimonials => ("Testimonial", "testimonials", "testimonial"),
        };
        DomainSpec {
            type_name,
            list_field,
            item_field,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ModelError;

    /// Accepts `blog_posts`, `blog-posts`, `BlogPosts` and the GraphQL list field `blogPosts`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str().replace('_', "") == normalized)
            .ok_or_else(|| ModelError::UnknownDomain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("blog_posts".parse::<Domain>(), Ok(Domain::BlogPosts));
        assert_eq!("blog-posts".parse::<Domain>(), Ok(Domain::BlogPosts));
        assert_eq!("blogPosts".parse::<Domain>(), Ok(Domain::BlogPosts));
        assert_eq!(" FAQS ".parse::<Domain>(), Ok(Domain::Faqs));
        assert!(matches!(
            "widgets".parse::<Domain>(),
            Err(ModelError::UnknownDomain(_))
        ));
    }

    #[test]
    fn as_str_round_trips_for_every_domain() {
        for domain in Domain::ALL {
            assert_eq!(domain.as_str().parse::<Domain>(), Ok(domain));
        }
    }

    #[test]
    fn nouns_keep_acronyms() {
        assert_eq!(Domain::Faqs.plural(), "FAQs");
        assert_eq!(Domain::Faqs.singular(), "FAQ");
        assert_eq!(Domain::TeamMembers.plural(), "team members");
    }

    #[test]
    fn spec_names_are_camel_case() {
        let spec = Domain::TeamMembers.spec();
        assert_eq!(spec.type_name, "TeamMember");
        assert_eq!(spec.list_field, "teamMembers");
        assert_eq!(spec.item_field, "teamMember");
    }
}
