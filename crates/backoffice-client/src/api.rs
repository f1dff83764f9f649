//! The backend seam shared by the stores and the dashboard.

use std::future::Future;

use backoffice_model::Record;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Variables of a paginated list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub first: u32,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl ListQuery {
    /// First page of `first` records.
    pub fn new(first: u32) -> Self {
        Self {
            first: first.max(1),
            page: 1,
            search: None,
            application_id: None,
        }
    }

    /// First page of `first` records, scoped to `application_id` when set.
    pub fn scoped(first: u32, application_id: Option<&str>) -> Self {
        Self::new(first).with_application_id(application_id)
    }

    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_application_id(mut self, application_id: Option<&str>) -> Self {
        self.application_id = application_id.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Pagination metadata returned with every list page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatorInfo {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
    pub has_more_pages: bool,
}

/// One page of records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound = "T: Record")]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(rename = "paginatorInfo")]
    pub paginator: PaginatorInfo,
}

/// A content backend: the GraphQL server or the in-memory stand-in.
///
/// Every operation is generic over the record type; the record's
/// [`Domain`](backoffice_model::Domain) selects the remote collection.
pub trait ContentApi: Send + Sync + 'static {
    /// One page of records matching `query`.
    fn list<T: Record>(&self, query: &ListQuery) -> impl Future<Output = Result<Page<T>>> + Send;

    /// A single record, `None` when the server has no such id.
    fn get<T: Record>(&self, id: &str) -> impl Future<Output = Result<Option<T>>> + Send;

    fn create<T: Record>(&self, input: &T::Input) -> impl Future<Output = Result<T>> + Send;

    /// Apply `input` to record `id` and return the stored result.
    fn update<T: Record>(
        &self,
        id: &str,
        input: &T::Input,
    ) -> impl Future<Output = Result<T>> + Send;

    fn delete<T: Record>(&self, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Fetch every page of `query`, following `hasMorePages`.
///
/// Stops at `lastPage`, or when the server answers a page other than the
/// one asked for, so a server that ignores `page` cannot loop forever.
pub async fn list_all<T, A>(api: &A, query: ListQuery) -> Result<Vec<T>>
where
    T: Record,
    A: ContentApi,
{
    let mut records = Vec::new();
    let mut query = query.with_page(1);
    loop {
        let page = api.list::<T>(&query).await?;
        let info = page.paginator;
        let claims_more = info.has_more_pages && !page.data.is_empty();
        let more = claims_more && info.current_page == query.page && query.page < info.last_page;
        records.extend(page.data);
        if !more {
            if claims_more {
                tracing::warn!(domain = %T::DOMAIN, page = query.page, "server reports more pages past the end; stopping");
            }
            break;
        }
        tracing::trace!(domain = %T::DOMAIN, page = query.page, "fetching next page");
        query.page += 1;
    }
    tracing::debug!(domain = %T::DOMAIN, count = records.len(), "fetched all pages");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_model::Faq;

    #[test]
    fn list_query_serializes_only_set_filters() {
        let query = ListQuery::new(50).with_search(Some("foo"));
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "first": 50, "page": 1, "search": "foo" })
        );
    }

    #[test]
    fn paginator_decodes_camel_case() {
        let info: PaginatorInfo = serde_json::from_str(
            r#"{"currentPage": 2, "lastPage": 3, "total": 41, "hasMorePages": true}"#,
        )
        .unwrap();
        assert_eq!(info.current_page, 2);
        assert!(info.has_more_pages);
    }

    /// Serves one fixed page no matter which page is requested.
    struct StuckServer {
        paginator: PaginatorInfo,
        requests: std::sync::atomic::AtomicU32,
    }

    impl StuckServer {
        fn new(current_page: Option<u32>, last_page: u32) -> Self {
            Self {
                paginator: PaginatorInfo {
                    current_page: current_page.unwrap_or(0),
                    last_page,
                    total: 100,
                    has_more_pages: true,
                },
                requests: std::sync::atomic::AtomicU32::new(0),
            }
        }

        fn requests(&self) -> u32 {
            self.requests.load(std::sync::atomic::Ordering::SeqCst)
        }
    }

    impl ContentApi for StuckServer {
        async fn list<T: Record>(&self, query: &ListQuery) -> Result<Page<T>> {
            self.requests.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            let mut paginator = self.paginator;
            if paginator.current_page == 0 {
                paginator.current_page = query.page;
            }
            let record = serde_json::json!({ "id": format!("{}", query.page), "question": "q" });
            Ok(Page {
                data: vec![serde_json::from_value(record)?],
                paginator,
            })
        }

        async fn get<T: Record>(&self, _id: &str) -> Result<Option<T>> {
            Ok(None)
        }

        async fn create<T: Record>(&self, _input: &T::Input) -> Result<T> {
            Err(crate::ApiError::Injected("read only".to_string()))
        }

        async fn update<T: Record>(&self, _id: &str, _input: &T::Input) -> Result<T> {
            Err(crate::ApiError::Injected("read only".to_string()))
        }

        async fn delete<T: Record>(&self, _id: &str) -> Result<()> {
            Err(crate::ApiError::Injected("read only".to_string()))
        }
    }

    #[tokio::test]
    async fn stops_at_the_last_page_even_when_more_is_claimed() {
        let server = StuckServer::new(None, 3);
        let all: Vec<Faq> = list_all(&server, ListQuery::new(1)).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(server.requests(), 3);
    }

    #[tokio::test]
    async fn stops_when_the_server_ignores_the_page() {
        let server = StuckServer::new(Some(1), 50);
        let all: Vec<Faq> = list_all(&server, ListQuery::new(1)).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(server.requests(), 2);
    }

    #[test]
    fn scoped_query_carries_the_tenant() {
        let query = ListQuery::scoped(20, Some("app-1")).with_search(Some("foo"));
        assert_eq!(query.first, 20);
        assert_eq!(query.page, 1);
        assert_eq!(query.application_id.as_deref(), Some("app-1"));
        assert_eq!(query.search.as_deref(), Some("foo"));
    }
}
