//! Data model for the content back-office.
//!
//! Every content domain (banners, blog posts, careers, ...) has one root
//! record type implementing [`Record`]. The generic store, the GraphQL
//! client and the dashboard only ever talk to records through that trait,
//! so adding a domain means adding one module under [`records`].
//!
//! # Overview
//!
//! - [`Domain`] - the closed set of content domains and their GraphQL names
//! - [`Record`] - shared behaviour of root records (identity, activity, CSV row)
//! - [`Filters`] - search / status / category narrowing
//! - [`Statistics`] - derived counts recomputed from an in-memory list
//! - [`format`] - pure display helpers (dates, badges, truncation)

pub mod domain;
pub mod error;
pub mod filter;
pub mod format;
pub mod record;
pub mod records;
pub mod statistics;
pub mod status;
pub mod timestamp;

pub use domain::{Domain, DomainSpec};
pub use error::{ModelError, Result};
pub use filter::{Filters, StatusFilter};
pub use record::Record;
pub use records::{
    Banner, BannerInput, BlogPost, BlogPostInput, Career, CareerInput, Certification,
    CertificationInput, Client, ClientInput, ContactRequest, ContactRequestInput, Faq, FaqInput,
    MAX_RATING, Partner, PartnerInput, Project, ProjectInput, Service, ServiceInput, SocialLink, Solution,
    SolutionBenefit, SolutionFeature, SolutionInput, Stat, StatInput, TeamMember, TeamMemberInput,
    Testimonial, TestimonialInput,
};
pub use statistics::{RECENT_WINDOW_DAYS, Statistics, growth_percentage, is_recent, percentage};
pub use status::{ContactStatus, EmploymentType, PostStatus, ProjectStatus};
