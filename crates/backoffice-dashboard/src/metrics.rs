//! Per-domain dashboard metrics.
//!
//! Each metrics type is computed from an optional record list: `None`
//! means the domain failed to load and yields zero-valued defaults with
//! `loaded == false`.

use std::collections::BTreeMap;

use backoffice_model::{
    BlogPost, Certification, Client, ContactRequest, ContactStatus, Domain, MAX_RATING, PostStatus,
    Project, ProjectStatus, Record, Solution, Statistics, TeamMember, Testimonial, percentage,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Certifications expiring within this many days are flagged.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Bucket for records without a department or category.
const UNASSIGNED: &str = "Unassigned";

/// Counts every domain tile shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainMetrics {
    pub domain: Domain,
    pub loaded: bool,
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub recent_count: usize,
    pub growth_percentage: f64,
}

impl DomainMetrics {
    /// Zero-valued metrics for a domain that failed to load.
    pub fn unavailable(domain: Domain) -> Self {
        Self {
            domain,
            loaded: false,
            total: 0,
            active: 0,
            inactive: 0,
            recent_count: 0,
            growth_percentage: 0.0,
        }
    }

    pub fn compute<T: Record>(records: Option<&[T]>, now: DateTime<Utc>) -> Self {
        let Some(records) = records else {
            return Self::unavailable(T::DOMAIN);
        };
        let stats = Statistics::compute(records, now);
        Self {
            domain: T::DOMAIN,
            loaded: true,
            total: stats.total,
            active: stats.active,
            inactive: stats.inactive,
            recent_count: stats.recent_count,
            growth_percentage: stats.growth_percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopPost {
    pub id: String,
    pub title: String,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogMetrics {
    pub base: DomainMetrics,
    pub published: usize,
    pub drafts: usize,
    pub archived: usize,
    pub total_views: u64,
    pub average_views: f64,
    pub top_post: Option<TopPost>,
}

impl BlogMetrics {
    pub fn compute(posts: Option<&[BlogPost]>, now: DateTime<Utc>) -> Self {
        let base = DomainMetrics::compute(posts, now);
        let posts = posts.unwrap_or_default();
        let count = |status: PostStatus| posts.iter().filter(|p| p.status == status).count();
        let total_views: u64 = posts.iter().map(|p| p.view_count).sum();
        // First post wins ties.
        let top_post = posts
            .iter()
            .rev()
            .max_by_key(|p| p.view_count)
            .map(|p| TopPost {
                id: p.id.clone(),
                title: p.title.clone(),
                views: p.view_count,
            });

        Self {
            published: count(PostStatus::Published),
            drafts: count(PostStatus::Draft),
            archived: count(PostStatus::Archived),
            total_views,
            average_views: average(total_views, posts.len()),
            top_post,
            base,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialMetrics {
    pub base: DomainMetrics,
    /// Mean over rated testimonials; 0 when none are rated.
    pub average_rating: f64,
    /// Count per star, index 0 is one star.
    pub rating_distribution: [usize; MAX_RATING as usize],
}

impl TestimonialMetrics {
    pub fn compute(testimonials: Option<&[Testimonial]>, now: DateTime<Utc>) -> Self {
        let base = DomainMetrics::compute(testimonials, now);
        let mut rating_distribution = [0; MAX_RATING as usize];
        let mut sum = 0u64;
        let mut rated = 0usize;
        for testimonial in testimonials.unwrap_or_default() {
            if (1..=MAX_RATING).contains(&testimonial.rating) {
                rating_distribution[usize::from(testimonial.rating - 1)] += 1;
                sum += u64::from(testimonial.rating);
                rated += 1;
            }
        }
        Self {
            base,
            average_rating: average(sum, rated),
            rating_distribution,
        }
    }
}

/// One industry's share of the client list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryShare {
    pub industry: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientMetrics {
    pub base: DomainMetrics,
    /// Largest industry first.
    pub by_industry: Vec<IndustryShare>,
}

impl ClientMetrics {
    pub fn compute(clients: Option<&[Client]>, now: DateTime<Utc>) -> Self {
        let base = DomainMetrics::compute(clients, now);
        let clients = clients.unwrap_or_default();
        let tally = tally(clients.iter().map(|c| c.industry.as_deref()));
        let mut by_industry: Vec<IndustryShare> = tally
            .into_iter()
            .map(|(industry, count)| IndustryShare {
                percentage: percentage(count, clients.len()),
                industry,
                count,
            })
            .collect();
        by_industry.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.industry.cmp(&b.industry)));
        Self { base, by_industry }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMetrics {
    pub base: DomainMetrics,
    pub by_status: Vec<(ContactStatus, usize)>,
    pub unread: usize,
}

impl ContactMetrics {
    pub fn compute(requests: Option<&[ContactRequest]>, now: DateTime<Utc>) -> Self {
        let base = DomainMetrics::compute(requests, now);
        let requests = requests.unwrap_or_default();
        let by_status: Vec<(ContactStatus, usize)> = ContactStatus::ALL
            .into_iter()
            .map(|status| (status, requests.iter().filter(|r| r.status == status).count()))
            .collect();
        let unread = requests
            .iter()
            .filter(|r| r.status == ContactStatus::New)
            .count();
        Self {
            base,
            by_status,
            unread,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectMetrics {
    pub base: DomainMetrics,
    pub by_status: Vec<(ProjectStatus, usize)>,
    pub featured: usize,
}

impl ProjectMetrics {
    pub fn compute(projects: Option<&[Project]>, now: DateTime<Utc>) -> Self {
        let base = DomainMetrics::compute(projects, now);
        let projects = projects.unwrap_or_default();
        let by_status = ProjectStatus::ALL
            .into_iter()
            .map(|status| (status, projects.iter().filter(|p| p.status == status).count()))
            .collect();
        Self {
            base,
            by_status,
            featured: projects.iter().filter(|p| p.is_featured).count(),
        }
    }
}

/// Base metrics plus a tally by department or category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedMetrics {
    pub base: DomainMetrics,
    pub groups: BTreeMap<String, usize>,
}

impl GroupedMetrics {
    /// Tally every record by its category.
    pub fn by_category<T: Record>(records: Option<&[T]>, now: DateTime<Utc>) -> Self {
        Self {
            base: DomainMetrics::compute(records, now),
            groups: tally(records.unwrap_or_default().iter().map(T::category)),
        }
    }

    /// Tally only active records by their category, e.g. open positions.
    pub fn active_by_category<T: Record>(records: Option<&[T]>, now: DateTime<Utc>) -> Self {
        Self {
            base: DomainMetrics::compute(records, now),
            groups: tally(
                records
                    .unwrap_or_default()
                    .iter()
                    .filter(|r| r.is_active())
                    .map(T::category),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionMetrics {
    pub base: DomainMetrics,
    pub total_features: usize,
    pub total_benefits: usize,
}

impl SolutionMetrics {
    pub fn compute(solutions: Option<&[Solution]>, now: DateTime<Utc>) -> Self {
        let base = DomainMetrics::compute(solutions, now);
        let solutions = solutions.unwrap_or_default();
        Self {
            base,
            total_features: solutions.iter().map(|s| s.features.len()).sum(),
            total_benefits: solutions.iter().map(|s| s.benefits.len()).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationMetrics {
    pub base: DomainMetrics,
    pub expired: usize,
    pub expiring_soon: usize,
}

impl CertificationMetrics {
    pub fn compute(certifications: Option<&[Certification]>, now: DateTime<Utc>) -> Self {
        let base = DomainMetrics::compute(certifications, now);
        let certifications = certifications.unwrap_or_default();
        Self {
            base,
            expired: certifications.iter().filter(|c| c.is_expired(now)).count(),
            expiring_soon: certifications
                .iter()
                .filter(|c| c.expires_within(now, EXPIRY_WARNING_DAYS))
                .count(),
        }
    }
}

/// Team head count per department.
pub fn team_by_department(members: Option<&[TeamMember]>, now: DateTime<Utc>) -> GroupedMetrics {
    GroupedMetrics::by_category(members, now)
}

fn tally<'a>(keys: impl Iterator<Item = Option<&'a str>>) -> BTreeMap<String, usize> {
    let mut groups = BTreeMap::new();
    for key in keys {
        let key = key.map(str::trim).filter(|k| !k.is_empty()).unwrap_or(UNASSIGNED);
        *groups.entry(key.to_string()).or_insert(0) += 1;
    }
    groups
}

#[allow(clippy::cast_precision_loss)]
fn average(sum: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_model::{Career, SolutionBenefit, SolutionFeature};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn post(id: &str, status: PostStatus, views: u64) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: format!("Post {id}"),
            status,
            view_count: views,
            ..BlogPost::default()
        }
    }

    #[test]
    fn failed_domains_report_zeroes() {
        let metrics = BlogMetrics::compute(None, now());
        assert!(!metrics.base.loaded);
        assert_eq!(metrics.base.total, 0);
        assert_eq!(metrics.average_views, 0.0);
        assert!(metrics.top_post.is_none());
    }

    #[test]
    fn blog_counts_and_views() {
        let posts = [
            post("1", PostStatus::Published, 120),
            post("2", PostStatus::Draft, 0),
            post("3", PostStatus::Published, 300),
            post("4", PostStatus::Archived, 300),
        ];
        let metrics = BlogMetrics::compute(Some(&posts), now());
        assert_eq!(metrics.base.active, 2);
        assert_eq!(
            (metrics.published, metrics.drafts, metrics.archived),
            (2, 1, 1)
        );
        assert_eq!(metrics.total_views, 720);
        assert_eq!(metrics.average_views, 180.0);
        assert_eq!(metrics.top_post.map(|p| p.id), Some("3".to_string()));
    }

    #[test]
    fn ratings_average_and_distribute() {
        let rated = |id: &str, rating| Testimonial {
            id: id.to_string(),
            rating,
            ..Testimonial::default()
        };
        let list = [rated("1", 5), rated("2", 4), rated("3", 5), rated("4", 0)];
        let metrics = TestimonialMetrics::compute(Some(&list), now());
        assert!((metrics.average_rating - 14.0 / 3.0).abs() < 1e-9);
        assert_eq!(metrics.rating_distribution, [0, 0, 0, 1, 2]);

        let empty = TestimonialMetrics::compute(Some(&[]), now());
        assert_eq!(empty.average_rating, 0.0);
    }

    #[test]
    fn industry_shares_are_guarded_on_empty_lists() {
        let empty = ClientMetrics::compute(Some(&[]), now());
        assert!(empty.by_industry.is_empty());

        let client = |industry: Option<&str>| Client {
            industry: industry.map(str::to_string),
            ..Client::default()
        };
        let clients = [client(Some("Retail")), client(Some("Retail")), client(None), client(Some("Banking"))];
        let metrics = ClientMetrics::compute(Some(&clients), now());
        assert_eq!(metrics.by_industry[0].industry, "Retail");
        assert_eq!(metrics.by_industry[0].percentage, 50.0);
        assert_eq!(metrics.by_industry.len(), 3);
        assert!(metrics.by_industry.iter().all(|s| s.percentage.is_finite()));
    }

    #[test]
    fn contact_unread_and_status_counts() {
        let request = |status| ContactRequest {
            status,
            ..ContactRequest::default()
        };
        let list = [
            request(ContactStatus::New),
            request(ContactStatus::New),
            request(ContactStatus::Replied),
        ];
        let metrics = ContactMetrics::compute(Some(&list), now());
        assert_eq!(metrics.unread, 2);
        assert_eq!(metrics.base.active, 2);
        assert_eq!(metrics.by_status[0], (ContactStatus::New, 2));
        assert_eq!(metrics.by_status[2], (ContactStatus::Replied, 1));
    }

    #[test]
    fn open_positions_count_only_active_careers() {
        let career = |department: &str, active| Career {
            department: Some(department.to_string()),
            is_active: active,
            ..Career::default()
        };
        let list = [career("Engineering", true), career("Engineering", false), career("Sales", true)];
        let metrics = GroupedMetrics::active_by_category(Some(&list), now());
        assert_eq!(metrics.groups.get("Engineering"), Some(&1));
        assert_eq!(metrics.groups.get("Sales"), Some(&1));
        assert_eq!(metrics.base.total, 3);
    }

    #[test]
    fn solution_children_are_summed() {
        let solution = Solution {
            features: vec![SolutionFeature::default(), SolutionFeature::default()],
            benefits: vec![SolutionBenefit::default()],
            ..Solution::default()
        };
        let metrics = SolutionMetrics::compute(Some(&[solution.clone(), solution]), now());
        assert_eq!(metrics.total_features, 4);
        assert_eq!(metrics.total_benefits, 2);
    }

    #[test]
    fn certification_expiry() {
        let expiring = |days| Certification {
            expires_at: Some(now() + Duration::days(days)),
            ..Certification::default()
        };
        let list = [expiring(-3), expiring(12), expiring(90), Certification::default()];
        let metrics = CertificationMetrics::compute(Some(&list), now());
        assert_eq!(metrics.expired, 1);
        assert_eq!(metrics.expiring_soon, 1);
    }
}
