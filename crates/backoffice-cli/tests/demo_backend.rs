//! The demo backend driven through stores, the dashboard and the renderers.

use std::sync::Arc;

use backoffice_cli::backend::Backend;
use backoffice_cli::render;
use backoffice_dashboard::{Dashboard, LoadOptions};
use backoffice_model::{BlogPost, Domain, Faq, Filters, StatusFilter, TeamMember};
use backoffice_store::{DomainStore, StoreOptions};
use chrono::{TimeZone, Utc};

fn backend() -> Arc<Backend> {
    Arc::new(Backend::demo().unwrap())
}

#[tokio::test]
async fn lists_and_filters_demo_records() {
    let mut store: DomainStore<Faq, Backend> = DomainStore::new(backend(), StoreOptions::default());
    store
        .fetch_all(Filters::default().with_status(StatusFilter::Active))
        .await
        .unwrap();
    assert_eq!(store.items().len(), 3);
    assert_eq!(store.filtered_items().len(), 2);

    let table = render::records_table(&store.filtered_items()).to_string();
    assert!(table.contains("Status"));
    assert!(table.contains("Support"));
    assert!(!table.contains("instalments"));
}

#[tokio::test]
async fn search_reaches_the_backend() {
    let mut store: DomainStore<BlogPost, Backend> =
        DomainStore::new(backend(), StoreOptions::default());
    store
        .fetch_all(Filters::default().with_search("postgres"))
        .await
        .unwrap();
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].slug, "why-postgres");
}

#[tokio::test]
async fn mutations_stay_in_process() {
    let backend = backend();
    let mut store: DomainStore<TeamMember, Backend> =
        DomainStore::new(Arc::clone(&backend), StoreOptions::default());
    let toggled = store.toggle_status("33").await.unwrap();
    assert!(!toggled.is_active);

    let mut fresh: DomainStore<TeamMember, Backend> =
        DomainStore::new(Arc::new(Backend::demo().unwrap()), StoreOptions::default());
    assert!(fresh.fetch_by_id("33").await.unwrap().is_active);
}

#[tokio::test]
async fn dashboard_over_demo_data() {
    let now = Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).unwrap();
    let backend = backend();
    let dashboard = Dashboard::load(backend.as_ref(), &LoadOptions::default(), now).await;

    assert!(dashboard.overview.failed_domains.is_empty());
    assert_eq!(dashboard.overview.total_records, 36);
    assert_eq!(dashboard.blog_posts.published, 2);
    assert_eq!(dashboard.blog_posts.top_post.as_ref().map(|p| p.id.as_str()), Some("3"));
    assert_eq!(dashboard.contact_requests.unread, 1);
    assert_eq!(dashboard.solutions.total_features, 3);
    assert_eq!(dashboard.certifications.expired, 1);
    assert_eq!(dashboard.careers.groups.get("Marketing"), None);

    let table = render::dashboard_table(&dashboard).to_string();
    assert!(table.contains("Blog posts"));
    assert!(table.contains("TOTAL"));

    let highlights = render::dashboard_highlights(&dashboard);
    assert!(highlights.iter().any(|line| line.starts_with("Blog: 2 published")));
    assert!(highlights.iter().any(|line| line == "Contact requests: 1 unread"));
}

#[test]
fn domain_table_lists_every_domain() {
    let table = render::domains_table().to_string();
    for domain in Domain::ALL {
        assert!(table.contains(domain.as_str()), "{domain} missing");
    }
}
