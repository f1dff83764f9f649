//! Root record types, one module per content domain.

mod banner;
mod blog_post;
mod career;
mod certification;
mod client;
mod contact_request;
mod faq;
mod partner;
mod project;
mod service;
mod solution;
mod stat;
mod team_member;
mod testimonial;

pub use banner::{Banner, BannerInput};
pub use blog_post::{BlogPost, BlogPostInput};
pub use career::{Career, CareerInput};
pub use certification::{Certification, CertificationInput};
pub use client::{Client, ClientInput};
pub use contact_request::{ContactRequest, ContactRequestInput};
pub use faq::{Faq, FaqInput};
pub use partner::{Partner, PartnerInput};
pub use project::{Project, ProjectInput};
pub use service::{Service, ServiceInput};
pub use solution::{Solution, SolutionBenefit, SolutionFeature, SolutionInput};
pub use stat::{Stat, StatInput};
pub use team_member::{SocialLink, TeamMember, TeamMemberInput};
pub use testimonial::{MAX_RATING, Testimonial, TestimonialInput};

pub(crate) fn opt(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
