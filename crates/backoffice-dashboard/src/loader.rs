//! Concurrent cross-domain load.

use backoffice_client::{AdminConfig, ContentApi, ListQuery, list_all};
use backoffice_model::{
    Banner, BlogPost, Career, Certification, Client, ContactRequest, Domain, Faq, Partner,
    Project, Record, Service, Solution, Stat, TeamMember, Testimonial,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::metrics::{
    BlogMetrics, CertificationMetrics, ClientMetrics, ContactMetrics, DomainMetrics,
    GroupedMetrics, ProjectMetrics, SolutionMetrics, TestimonialMetrics, team_by_department,
};

/// Page size and tenant used for every dashboard read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub page_size: u32,
    pub application_id: Option<String>,
}

impl LoadOptions {
    pub fn from_config(config: &AdminConfig) -> Self {
        Self {
            page_size: config.page_size,
            application_id: config.application_id.clone(),
        }
    }

    fn query(&self) -> ListQuery {
        ListQuery::scoped(self.page_size, self.application_id.as_deref())
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::from_config(&AdminConfig::default())
    }
}

/// Totals across every domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_records: usize,
    pub total_active: usize,
    /// Domains whose read failed; their metrics are zero.
    pub failed_domains: Vec<Domain>,
}

/// Everything the dashboard shows, computed at `generated_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub overview: Overview,
    pub banners: DomainMetrics,
    pub blog_posts: BlogMetrics,
    /// Open positions per department.
    pub careers: GroupedMetrics,
    pub certifications: CertificationMetrics,
    pub clients: ClientMetrics,
    pub contact_requests: ContactMetrics,
    /// Questions per category.
    pub faqs: GroupedMetrics,
    pub partners: DomainMetrics,
    pub projects: ProjectMetrics,
    pub services: DomainMetrics,
    pub solutions: SolutionMetrics,
    pub stats: DomainMetrics,
    /// Head count per department.
    pub team_members: GroupedMetrics,
    pub testimonials: TestimonialMetrics,
}

impl Dashboard {
    /// Read all fourteen domains concurrently and fold them into metrics.
    ///
    /// A failing domain is logged and reported with zero values; it never
    /// fails the whole load.
    #[tracing::instrument(skip_all, fields(tenant = options.application_id.as_deref()))]
    pub async fn load<A: ContentApi>(api: &A, options: &LoadOptions, now: DateTime<Utc>) -> Self {
        let query = options.query();
        let (
            banners,
            blog_posts,
            careers,
            certifications,
            clients,
            contact_requests,
            faqs,
            partners,
            projects,
            services,
            solutions,
            stats,
            team_members,
            testimonials,
        ) = tokio::join!(
            fetch::<Banner, A>(api, &query),
            fetch::<BlogPost, A>(api, &query),
            fetch::<Career, A>(api, &query),
            fetch::<Certification, A>(api, &query),
            fetch::<Client, A>(api, &query),
            fetch::<ContactRequest, A>(api, &query),
            fetch::<Faq, A>(api, &query),
            fetch::<Partner, A>(api, &query),
            fetch::<Project, A>(api, &query),
            fetch::<Service, A>(api, &query),
            fetch::<Solution, A>(api, &query),
            fetch::<Stat, A>(api, &query),
            fetch::<TeamMember, A>(api, &query),
            fetch::<Testimonial, A>(api, &query),
        );

        let mut dashboard = Self {
            generated_at: now,
            overview: Overview {
                total_records: 0,
                total_active: 0,
                failed_domains: Vec::new(),
            },
            banners: DomainMetrics::compute(banners.as_deref(), now),
            blog_posts: BlogMetrics::compute(blog_posts.as_deref(), now),
            careers: GroupedMetrics::active_by_category(careers.as_deref(), now),
            certifications: CertificationMetrics::compute(certifications.as_deref(), now),
            clients: ClientMetrics::compute(clients.as_deref(), now),
            contact_requests: ContactMetrics::compute(contact_requests.as_deref(), now),
            faqs: GroupedMetrics::by_category(faqs.as_deref(), now),
            partners: DomainMetrics::compute(partners.as_deref(), now),
            projects: ProjectMetrics::compute(projects.as_deref(), now),
            services: DomainMetrics::compute(services.as_deref(), now),
            solutions: SolutionMetrics::compute(solutions.as_deref(), now),
            stats: DomainMetrics::compute(stats.as_deref(), now),
            team_members: team_by_department(team_members.as_deref(), now),
            testimonials: TestimonialMetrics::compute(testimonials.as_deref(), now),
        };
        dashboard.overview = dashboard.summarize();
        tracing::info!(
            records = dashboard.overview.total_records,
            failed = dashboard.overview.failed_domains.len(),
            "dashboard loaded"
        );
        dashboard
    }

    /// Base metrics of every domain in menu order.
    pub fn domains(&self) -> [&DomainMetrics; 14] {
        [
            &self.banners,
            &self.blog_posts.base,
            &self.careers.base,
            &self.certifications.base,
            &self.clients.base,
            &self.contact_requests.base,
            &self.faqs.base,
            &self.partners,
            &self.projects.base,
            &self.services,
            &self.solutions.base,
            &self.stats,
            &self.team_members.base,
            &self.testimonials.base,
        ]
    }

    fn summarize(&self) -> Overview {
        let domains = self.domains();
        Overview {
            total_records: domains.iter().map(|m| m.total).sum(),
            total_active: domains.iter().map(|m| m.active).sum(),
            failed_domains: domains
                .iter()
                .filter(|m| !m.loaded)
                .map(|m| m.domain)
                .collect(),
        }
    }
}

async fn fetch<T: Record, A: ContentApi>(api: &A, query: &ListQuery) -> Option<Vec<T>> {
    match list_all::<T, A>(api, query.clone()).await {
        Ok(records) => {
            tracing::debug!(domain = %T::DOMAIN, count = records.len(), "domain loaded");
            Some(records)
        }
        Err(err) => {
            tracing::warn!(domain = %T::DOMAIN, error = %err, "domain failed to load, showing zeroes");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_client::MemoryApi;
    use chrono::TimeZone;

    #[tokio::test]
    async fn empty_backend_loads_all_zeroes() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let dashboard = Dashboard::load(&MemoryApi::new(), &LoadOptions::default(), now).await;
        assert_eq!(dashboard.overview.total_records, 0);
        assert!(dashboard.overview.failed_domains.is_empty());
        assert!(dashboard.domains().iter().all(|m| m.loaded));
        assert_eq!(dashboard.generated_at, now);

        let order: Vec<Domain> = dashboard.domains().iter().map(|m| m.domain).collect();
        assert_eq!(order, Domain::ALL);
    }
}
