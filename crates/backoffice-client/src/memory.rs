//! In-memory [`ContentApi`] backend.
//!
//! Records are held as JSON objects per domain, so one backend serves every
//! record type. Used for offline demos and throughout the test suites, where
//! [`MemoryApi::fail_domain`] and [`MemoryApi::fail_record`] inject failures.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::sync::atomic::{AtomicUsize, Ordering};

use backoffice_model::{Domain, Filters, Record, timestamp};
use chrono::Utc;
use serde_json::{Map, Value};

use crate::api::{ContentApi, ListQuery, Page, PaginatorInfo};
use crate::error::{ApiError, Result};

#[derive(Debug, Default)]
struct State {
    records: BTreeMap<Domain, Vec<Map<String, Value>>>,
    failing_domains: BTreeSet<Domain>,
    failing_records: BTreeSet<(Domain, String)>,
    next_id: u64,
}

#[derive(Debug, Default)]
pub struct MemoryApi {
    state: Mutex<State>,
    requests: AtomicUsize,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-filled with `records`.
    pub fn with_records<T: Record>(records: &[T]) -> Result<Self> {
        let api = Self::new();
        api.insert_all(records)?;
        Ok(api)
    }

    /// Store `records` as-is, keeping their ids.
    pub fn insert_all<T: Record>(&self, records: &[T]) -> Result<()> {
        let mut state = self.lock();
        for record in records {
            let object = to_object(record)?;
            if let Ok(n) = record.id().parse::<u64>() {
                state.next_id = state.next_id.max(n);
            }
            state.records.entry(T::DOMAIN).or_default().push(object);
        }
        Ok(())
    }

    /// Snapshot of the stored records of `T`'s domain.
    pub fn records<T: Record>(&self) -> Result<Vec<T>> {
        let state = self.lock();
        state
            .records
            .get(&T::DOMAIN)
            .map(|objects| objects.iter().map(from_object).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// Make every call against `domain` fail.
    pub fn fail_domain(&self, domain: Domain) {
        self.lock().failing_domains.insert(domain);
    }

    /// Make get/update/delete of one record fail.
    pub fn fail_record(&self, domain: Domain, id: &str) {
        self.lock().failing_records.insert((domain, id.to_string()));
    }

    /// Remove all injected failures.
    pub fn heal(&self) {
        let mut state = self.lock();
        state.failing_domains.clear();
        state.failing_records.clear();
    }

    /// Number of API calls served so far, failed ones included.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count the call and apply injected failures.
    fn enter(&self, domain: Domain, id: Option<&str>) -> Result<MutexGuard<'_, State>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let state = self.lock();
        if state.failing_domains.contains(&domain) {
            return Err(ApiError::Injected(domain.to_string()));
        }
        if let Some(id) = id
            && state.failing_records.contains(&(domain, id.to_string()))
        {
            return Err(ApiError::Injected(format!("{domain} {id}")));
        }
        Ok(state)
    }

    fn list_sync<T: Record>(&self, query: &ListQuery) -> Result<Page<T>> {
        let state = self.enter(T::DOMAIN, None)?;
        let search = Filters::default().with_search(query.search.clone().unwrap_or_default());
        let mut matching = Vec::new();
        for object in state.records.get(&T::DOMAIN).into_iter().flatten() {
            let record: T = from_object(object)?;
            let tenant_ok = query
                .application_id
                .as_deref()
                .is_none_or(|app| record.application_id() == Some(app));
            if tenant_ok && search.matches(&record) {
                matching.push(record);
            }
        }

        let per_page = query.first.max(1) as usize;
        let total = matching.len();
        let last_page = total.div_ceil(per_page).max(1);
        let page = (query.page.max(1) as usize).min(last_page);
        let data: Vec<T> = matching
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Ok(Page {
            data,
            paginator: PaginatorInfo {
                current_page: u32::try_from(page).unwrap_or(u32::MAX),
                last_page: u32::try_from(last_page).unwrap_or(u32::MAX),
                total: total as u64,
                has_more_pages: page < last_page,
            },
        })
    }

    fn get_sync<T: Record>(&self, id: &str) -> Result<Option<T>> {
        let state = self.enter(T::DOMAIN, Some(id))?;
        state
            .records
            .get(&T::DOMAIN)
            .and_then(|objects| objects.iter().find(|o| object_id(o) == Some(id)))
            .map(from_object)
            .transpose()
    }

    fn create_sync<T: Record>(&self, input: &T::Input) -> Result<T> {
        let mut state = self.enter(T::DOMAIN, None)?;
        let mut object = to_object(input)?;
        state.next_id += 1;
        let id = state.next_id.to_string();
        let now = Value::String(timestamp::to_rfc3339(&Utc::now()));
        object.insert("id".to_string(), Value::String(id));
        object.insert("created_at".to_string(), now.clone());
        object.insert("updated_at".to_string(), now);

        let record: T = from_object(&object)?;
        state.records.entry(T::DOMAIN).or_default().push(object);
        Ok(record)
    }

    fn update_sync<T: Record>(&self, id: &str, input: &T::Input) -> Result<T> {
        let mut state = self.enter(T::DOMAIN, Some(id))?;
        let changes = to_object(input)?;
        let object = state
            .records
            .get_mut(&T::DOMAIN)
            .and_then(|objects| objects.iter_mut().find(|o| object_id(o) == Some(id)))
            .ok_or_else(|| not_found(T::DOMAIN, id))?;

        let mut merged = object.clone();
        merged.extend(changes);
        merged.insert(
            "updated_at".to_string(),
            Value::String(timestamp::to_rfc3339(&Utc::now())),
        );
        let record: T = from_object(&merged)?;
        *object = merged;
        Ok(record)
    }

    fn delete_sync<T: Record>(&self, id: &str) -> Result<()> {
        let mut state = self.enter(T::DOMAIN, Some(id))?;
        let objects = state.records.entry(T::DOMAIN).or_default();
        let before = objects.len();
        objects.retain(|o| object_id(o) != Some(id));
        if objects.len() == before {
            return Err(not_found(T::DOMAIN, id));
        }
        Ok(())
    }
}

impl ContentApi for MemoryApi {
    async fn list<T: Record>(&self, query: &ListQuery) -> Result<Page<T>> {
        self.list_sync(query)
    }

    async fn get<T: Record>(&self, id: &str) -> Result<Option<T>> {
        self.get_sync(id)
    }

    async fn create<T: Record>(&self, input: &T::Input) -> Result<T> {
        self.create_sync::<T>(input)
    }

    async fn update<T: Record>(&self, id: &str, input: &T::Input) -> Result<T> {
        self.update_sync::<T>(id, input)
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<()> {
        self.delete_sync::<T>(id)
    }
}

fn object_id(object: &Map<String, Value>) -> Option<&str> {
    object.get("id").and_then(Value::as_str)
}

fn not_found(domain: Domain, id: &str) -> ApiError {
    ApiError::NotFound {
        domain,
        id: id.to_string(),
    }
}

fn to_object<S: serde::Serialize>(value: &S) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::Decode(format!("expected an object, got {other}"))),
    }
}

fn from_object<T: Record>(object: &Map<String, Value>) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(object.clone()))?)
}
