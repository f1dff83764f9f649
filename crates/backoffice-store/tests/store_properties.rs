//! End-to-end store behaviour against the in-memory backend.

use std::sync::Arc;

use backoffice_client::MemoryApi;
use backoffice_model::{
    BlogPost, ContactRequest, ContactStatus, Domain, Filters, PostStatus, Testimonial,
};
use backoffice_store::{DomainStore, StoreError, StoreOptions};
use chrono::{Duration, Utc};

fn testimonial(id: &str, active: bool, days_old: i64) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        author_name: format!("Author {id}"),
        content: "Great work".to_string(),
        rating: 5,
        is_active: active,
        created_at: Some(Utc::now() - Duration::days(days_old)),
        ..Testimonial::default()
    }
}

fn store_with<T: backoffice_model::Record>(
    records: &[T],
    page_size: u32,
) -> (Arc<MemoryApi>, DomainStore<T, MemoryApi>) {
    let api = Arc::new(MemoryApi::with_records(records).unwrap());
    let options = StoreOptions {
        page_size,
        application_id: None,
    };
    (Arc::clone(&api), DomainStore::new(api, options))
}

#[tokio::test]
async fn statistics_match_the_fetched_list() {
    let records: Vec<Testimonial> = (0..7)
        .map(|i| testimonial(&i.to_string(), i % 3 != 0, i * 10))
        .collect();
    let (_, mut store) = store_with(&records, 2);
    store.fetch_all(Filters::default()).await.unwrap();

    let stats = store.statistics();
    assert_eq!(store.items().len(), 7);
    assert_eq!(stats.total, 7);
    assert_eq!(stats.active + stats.inactive, stats.total);
    assert_eq!(stats.active, 4);
    // 0, 10 and 20 days old fall inside the 30-day window.
    assert_eq!(stats.recent_count, 3);
    let expected = 3.0 / 7.0 * 100.0;
    assert!((stats.growth_percentage - expected).abs() < 1e-9);
}

#[tokio::test]
async fn empty_list_has_zero_growth() {
    let (_, mut store) = store_with::<Testimonial>(&[], 10);
    store.fetch_all(Filters::default()).await.unwrap();
    assert_eq!(store.statistics().total, 0);
    assert_eq!(store.statistics().growth_percentage, 0.0);
}

#[tokio::test]
async fn bulk_delete_continues_past_failures() {
    let records = [
        testimonial("a", true, 1),
        testimonial("b", true, 1),
        testimonial("c", true, 1),
    ];
    let (api, mut store) = store_with(&records, 10);
    store.fetch_all(Filters::default()).await.unwrap();
    api.fail_record(Domain::Testimonials, "b");

    let ids = ["a", "b", "c"].map(String::from);
    let err = store.bulk_delete(&ids).await.unwrap_err();

    assert!(matches!(err, StoreError::Bulk { attempted: 3, .. }));
    assert_eq!(err.failed_ids(), vec!["b"]);
    assert!(err.to_string().contains('b'));
    let remaining: Vec<String> = api
        .records::<Testimonial>()
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(remaining, ["b"]);
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.statistics().total, 1);
    assert!(store.error().is_some_and(|e| e.contains('b')));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn status_domains_toggle_through_their_workflow() {
    let post = BlogPost {
        id: "1".to_string(),
        title: "Hello".to_string(),
        status: PostStatus::Published,
        ..BlogPost::default()
    };
    let (_, mut posts) = store_with(&[post], 10);
    posts.fetch_all(Filters::default()).await.unwrap();
    assert_eq!(posts.statistics().active, 1);

    let draft = posts.toggle_status("1").await.unwrap();
    assert_eq!(draft.status, PostStatus::Draft);
    let published = posts.toggle_status("1").await.unwrap();
    assert_eq!(published.status, PostStatus::Published);

    let request = ContactRequest {
        id: "9".to_string(),
        name: "Lin".to_string(),
        status: ContactStatus::New,
        ..ContactRequest::default()
    };
    let (_, mut inbox) = store_with(&[request], 10);
    inbox.fetch_all(Filters::default()).await.unwrap();
    let archived = inbox.toggle_status("9").await.unwrap();
    assert_eq!(archived.status, ContactStatus::Archived);
    assert_eq!(inbox.statistics().inactive, 1);
}

#[tokio::test]
async fn search_narrows_filtered_items() {
    let foobar = BlogPost {
        id: "1".to_string(),
        title: "foobar".to_string(),
        ..BlogPost::default()
    };
    let baz = BlogPost {
        id: "2".to_string(),
        title: "baz".to_string(),
        ..BlogPost::default()
    };
    let (_, mut store) = store_with(&[foobar, baz], 10);
    store.fetch_all(Filters::default()).await.unwrap();

    store.set_filters(Filters::default().with_search("foo"));
    let titles: Vec<&str> = store
        .filtered_items()
        .into_iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, ["foobar"]);
}
