//! Cross-domain dashboard for the content back-office.
//!
//! [`Dashboard::load`] reads every domain concurrently and folds each list
//! into [`metrics`]. A domain whose read fails is logged and shown with zero
//! values; the remaining domains are unaffected.

pub mod loader;
pub mod metrics;

pub use loader::{Dashboard, LoadOptions, Overview};
pub use metrics::{
    BlogMetrics, CertificationMetrics, ClientMetrics, ContactMetrics, DomainMetrics,
    EXPIRY_WARNING_DAYS, GroupedMetrics, IndustryShare, ProjectMetrics, SolutionMetrics,
    TestimonialMetrics, TopPost,
};
