//! Generic state container for one content domain.

use std::sync::Arc;

use backoffice_client::{AdminConfig, ContentApi, ListQuery, Operation, list_all};
use backoffice_model::{Filters, Record, Statistics};
use chrono::Utc;

use crate::error::{BulkFailure, Result, StoreError};

/// Pagination and tenant settings shared by every store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub page_size: u32,
    pub application_id: Option<String>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::from_config(&AdminConfig::default())
    }
}

impl StoreOptions {
    pub fn from_config(config: &AdminConfig) -> Self {
        Self {
            page_size: config.page_size,
            application_id: config.application_id.clone(),
        }
    }

    fn query(&self, filters: &Filters) -> ListQuery {
        ListQuery::scoped(self.page_size, self.application_id.as_deref())
            .with_search(filters.search_term())
    }
}

/// The loaded list of one domain plus its derived state.
///
/// Operations take `&mut self`, so calls on one store never interleave.
/// Every operation raises `loading` while it runs and records the failure
/// text in `error` when it fails.
#[derive(Debug)]
pub struct DomainStore<T: Record, A: ContentApi> {
    api: Arc<A>,
    options: StoreOptions,
    items: Vec<T>,
    current: Option<T>,
    loading: bool,
    error: Option<String>,
    filters: Filters,
    statistics: Statistics,
}

impl<T: Record, A: ContentApi> DomainStore<T, A> {
    pub fn new(api: Arc<A>, options: StoreOptions) -> Self {
        Self {
            api,
            options,
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
            filters: Filters::default(),
            statistics: Statistics::default(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The loaded list narrowed by the current filters, by `order`.
    pub fn filtered_items(&self) -> Vec<&T> {
        self.filters.apply(&self.items)
    }

    /// Replace the list with every server page matching `filters`.
    ///
    /// On failure the list is emptied and statistics reset.
    pub async fn fetch_all(&mut self, filters: Filters) -> Result<()> {
        self.filters = filters;
        self.begin();
        let result = self.load().await;
        self.finish(result, Operation::Load)
    }

    /// The record with `id`, from the loaded list when present.
    pub async fn fetch_by_id(&mut self, id: &str) -> Result<T> {
        self.begin();
        let result = self.lookup(id).await;
        if let Ok(record) = &result {
            self.current = Some(record.clone());
        }
        self.finish(result, Operation::Load)
    }

    /// Create a record, then reload the list.
    ///
    /// A failed reload is recorded on the store but does not undo or hide
    /// the successful create.
    pub async fn create(&mut self, input: &T::Input) -> Result<T> {
        self.begin();
        let created = self.api.create::<T>(input).await.map_err(StoreError::from);
        let created = self.finish(created, Operation::Create)?;
        tracing::info!(domain = %T::DOMAIN, id = created.id(), "created");

        self.begin();
        let reload = self.load().await;
        if let Err(err) = self.finish(reload, Operation::Load) {
            tracing::warn!(domain = %T::DOMAIN, error = %err, "reload after create failed");
        }
        Ok(created)
    }

    /// Update a record and patch it into the list in place.
    pub async fn update(&mut self, id: &str, input: &T::Input) -> Result<T> {
        self.begin();
        let result = self.api.update::<T>(id, input).await.map_err(StoreError::from);
        if let Ok(updated) = &result {
            self.replace(updated.clone());
        }
        self.finish(result, Operation::Update)
    }

    /// Delete a record and drop it from the list.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.begin();
        let result = self.api.delete::<T>(id).await.map_err(StoreError::from);
        if result.is_ok() {
            self.remove(id);
        }
        self.finish(result, Operation::Delete)
    }

    /// Flip the record's active state. Applying it twice restores the original.
    pub async fn toggle_status(&mut self, id: &str) -> Result<T> {
        self.begin();
        let result = match self.lookup(id).await {
            Ok(record) => self
                .api
                .update::<T>(id, &record.toggle_input())
                .await
                .map_err(StoreError::from),
            Err(err) => Err(err),
        };
        if let Ok(updated) = &result {
            self.replace(updated.clone());
        }
        self.finish(result, Operation::ToggleStatus)
    }

    /// Delete each id in turn, continuing past failures.
    ///
    /// Returns the number deleted. Nothing is rolled back: when some ids
    /// fail, the rest stay deleted and the error lists the failures.
    pub async fn bulk_delete(&mut self, ids: &[String]) -> Result<usize> {
        self.begin();
        let mut failures = Vec::new();
        let mut deleted = 0;
        for id in ids {
            match self.api.delete::<T>(id).await {
                Ok(()) => {
                    self.remove(id);
                    deleted += 1;
                }
                Err(err) => {
                    tracing::warn!(domain = %T::DOMAIN, id = %id, error = %err, "bulk delete item failed");
                    failures.push(BulkFailure {
                        id: id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        let result = bulk_result("delete", ids.len(), failures).map(|()| deleted);
        self.finish(result, Operation::BulkDelete)
    }

    /// Give each id `order = position` in `ids`, continuing past failures.
    pub async fn reorder(&mut self, ids: &[String]) -> Result<()> {
        self.begin();
        let mut failures = Vec::new();
        for (position, id) in ids.iter().enumerate() {
            let order = i32::try_from(position).unwrap_or(i32::MAX);
            match self.api.update::<T>(id, &T::order_input(order)).await {
                Ok(updated) => self.replace(updated),
                Err(err) => failures.push(BulkFailure {
                    id: id.clone(),
                    reason: err.to_string(),
                }),
            }
        }
        self.items.sort_by_key(T::order);
        let result = bulk_result("reorder", ids.len(), failures);
        self.finish(result, Operation::Reorder)
    }

    async fn load(&mut self) -> Result<()> {
        let query = self.options.query(&self.filters);
        match list_all::<T, A>(&self.api, query).await {
            Ok(items) => {
                self.items = items;
                self.recompute();
                tracing::debug!(domain = %T::DOMAIN, count = self.items.len(), "list loaded");
                Ok(())
            }
            Err(err) => {
                self.items.clear();
                self.statistics = Statistics::default();
                Err(err.into())
            }
        }
    }

    async fn lookup(&self, id: &str) -> Result<T> {
        let cached = self
            .items
            .iter()
            .chain(self.current.iter())
            .find(|record| record.id() == id);
        if let Some(record) = cached {
            return Ok(record.clone());
        }
        self.api
            .get::<T>(id)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                domain: T::DOMAIN,
                id: id.to_string(),
            })
    }

    fn replace(&mut self, record: T) {
        if let Some(slot) = self.items.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record.clone();
        }
        if self.current.as_ref().is_some_and(|c| c.id() == record.id()) {
            self.current = Some(record);
        }
        self.recompute();
    }

    fn remove(&mut self, id: &str) {
        self.items.retain(|r| r.id() != id);
        if self.current.as_ref().is_some_and(|c| c.id() == id) {
            self.current = None;
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.statistics = Statistics::compute(&self.items, Utc::now());
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish<R>(&mut self, result: Result<R>, operation: Operation) -> Result<R> {
        self.loading = false;
        if let Err(err) = &result {
            tracing::warn!(domain = %T::DOMAIN, ?operation, error = %err, "store operation failed");
            self.error = Some(err.user_message(T::DOMAIN, operation));
        }
        result
    }
}

fn bulk_result(action: &'static str, attempted: usize, failures: Vec<BulkFailure>) -> Result<()> {
    if failures.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Bulk {
            action,
            attempted,
            failures,
        })
    }
}
