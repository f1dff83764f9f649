//! User-facing actions: a store call wrapped in a confirmation prompt and
//! a success or error toast.

use std::fmt;
use std::io::Write;
use std::path::Path;

use backoffice_client::{ContentApi, Operation};
use backoffice_model::Record;
use backoffice_model::format::capitalize;

use crate::error::Result;
use crate::export;
use crate::store::DomainStore;

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Accepts every prompt (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        })
    }
}

/// A short notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}

/// Receives toasts.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Result of an action that may be declined at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<T> {
    Done(T),
    Cancelled,
}

impl<T> ActionOutcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Wraps store operations with prompts and toasts.
pub struct Actions<'a, C: ?Sized, N: ?Sized> {
    confirm: &'a C,
    notifier: &'a N,
}

impl<'a, C, N> Actions<'a, C, N>
where
    C: Confirm + ?Sized,
    N: Notifier + ?Sized,
{
    pub fn new(confirm: &'a C, notifier: &'a N) -> Self {
        Self { confirm, notifier }
    }

    pub async fn delete<T: Record, A: ContentApi>(
        &self,
        store: &mut DomainStore<T, A>,
        id: &str,
    ) -> Result<ActionOutcome<()>> {
        let noun = T::DOMAIN.singular();
        if !self
            .confirm
            .confirm(&format!("Delete this {noun}? This cannot be undone."))
        {
            return Ok(ActionOutcome::Cancelled);
        }
        let result = store.delete(id).await;
        self.report(result, store, Operation::Delete, |()| {
            format!("{} deleted", capitalize(noun))
        })
            .map(ActionOutcome::Done)
    }

    pub async fn bulk_delete<T: Record, A: ContentApi>(
        &self,
        store: &mut DomainStore<T, A>,
        ids: &[String],
    ) -> Result<ActionOutcome<usize>> {
        if ids.is_empty() {
            self.notifier.notify(Toast::info("Nothing selected"));
            return Ok(ActionOutcome::Done(0));
        }
        let prompt = format!(
            "Delete {} {}? This cannot be undone.",
            ids.len(),
            T::DOMAIN.plural()
        );
        if !self.confirm.confirm(&prompt) {
            return Ok(ActionOutcome::Cancelled);
        }
        let result = store.bulk_delete(ids).await;
        self.report(result, store, Operation::BulkDelete, |count| {
            format!("{count} {} deleted", T::DOMAIN.plural())
        })
        .map(ActionOutcome::Done)
    }

    pub async fn toggle_status<T: Record, A: ContentApi>(
        &self,
        store: &mut DomainStore<T, A>,
        id: &str,
    ) -> Result<T> {
        let result = store.toggle_status(id).await;
        self.report(result, store, Operation::ToggleStatus, |record| {
            format!(
                "{} is now {}",
                capitalize(T::DOMAIN.singular()),
                record.badge().label.to_lowercase()
            )
        })
    }

    pub async fn reorder<T: Record, A: ContentApi>(
        &self,
        store: &mut DomainStore<T, A>,
        ids: &[String],
    ) -> Result<()> {
        let result = store.reorder(ids).await;
        self.report(result, store, Operation::Reorder, |()| {
            "Order updated".to_string()
        })
    }

    pub async fn create<T: Record, A: ContentApi>(
        &self,
        store: &mut DomainStore<T, A>,
        input: &T::Input,
    ) -> Result<T> {
        let result = store.create(input).await;
        self.report(result, store, Operation::Create, |_| {
            format!("{} created", capitalize(T::DOMAIN.singular()))
        })
    }

    pub async fn update<T: Record, A: ContentApi>(
        &self,
        store: &mut DomainStore<T, A>,
        id: &str,
        input: &T::Input,
    ) -> Result<T> {
        let result = store.update(id, input).await;
        self.report(result, store, Operation::Update, |_| {
            format!("{} updated", capitalize(T::DOMAIN.singular()))
        })
    }

    /// Write the filtered list as CSV and announce the row count.
    pub fn export_csv<T: Record, A: ContentApi, W: Write>(
        &self,
        store: &DomainStore<T, A>,
        writer: W,
    ) -> Result<usize> {
        let rows = store.filtered_items();
        let result = export::write_csv(rows.iter().copied(), writer);
        self.announce_export::<T>(&result);
        result
    }

    /// Write the filtered list to a new CSV file at `path`.
    pub fn export_csv_to_path<T: Record, A: ContentApi>(
        &self,
        store: &DomainStore<T, A>,
        path: &Path,
    ) -> Result<usize> {
        let rows = store.filtered_items();
        let result = export::export_to_path(rows.iter().copied(), path);
        self.announce_export::<T>(&result);
        result
    }

    fn announce_export<T: Record>(&self, result: &Result<usize>) {
        match result {
            Ok(count) => self.notifier.notify(Toast::success(format!(
                "Exported {count} {}",
                T::DOMAIN.plural()
            ))),
            Err(err) => self.notifier.notify(Toast::error(err.to_string())),
        }
    }

    fn report<T: Record, A: ContentApi, R>(
        &self,
        result: Result<R>,
        store: &DomainStore<T, A>,
        operation: Operation,
        success: impl FnOnce(&R) -> String,
    ) -> Result<R> {
        match &result {
            Ok(value) => self.notifier.notify(Toast::success(success(value))),
            Err(err) => {
                let message = store
                    .error()
                    .map_or_else(|| err.user_message(T::DOMAIN, operation), str::to_string);
                self.notifier.notify(Toast::error(message));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::Arc;

    use backoffice_client::MemoryApi;
    use backoffice_model::{Domain, Faq, Filters};

    use crate::store::StoreOptions;

    struct Answer(bool);

    impl Confirm for Answer {
        fn confirm(&self, _prompt: &str) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct Collect(RefCell<Vec<Toast>>);

    impl Notifier for Collect {
        fn notify(&self, toast: Toast) {
            self.0.borrow_mut().push(toast);
        }
    }

    async fn loaded() -> DomainStore<Faq, MemoryApi> {
        loaded_with_api().await.1
    }

    async fn loaded_with_api() -> (Arc<MemoryApi>, DomainStore<Faq, MemoryApi>) {
        let faq = Faq {
            id: "1".to_string(),
            question: "Why?".to_string(),
            is_active: true,
            ..Faq::default()
        };
        let api = Arc::new(MemoryApi::with_records(&[faq]).unwrap());
        let mut store = DomainStore::new(Arc::clone(&api), StoreOptions::default());
        store.fetch_all(Filters::default()).await.unwrap();
        (api, store)
    }

    #[tokio::test]
    async fn declined_delete_leaves_the_store_alone() {
        let mut store = loaded().await;
        let toasts = Collect::default();
        let actions = Actions::new(&Answer(false), &toasts);

        let outcome = actions.delete(&mut store, "1").await.unwrap();
        assert!(outcome.is_cancelled());
        assert_eq!(store.items().len(), 1);
        assert!(toasts.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_toasts_success() {
        let mut store = loaded().await;
        let toasts = Collect::default();
        let actions = Actions::new(&AssumeYes, &toasts);

        actions.delete(&mut store, "1").await.unwrap();
        assert!(store.items().is_empty());
        assert_eq!(toasts.0.borrow()[0], Toast::success("FAQ deleted"));
    }

    #[tokio::test]
    async fn failures_toast_the_store_error() {
        let mut store = loaded().await;
        let toasts = Collect::default();
        let actions = Actions::new(&AssumeYes, &toasts);

        assert!(actions.toggle_status(&mut store, "missing").await.is_err());
        assert_eq!(toasts.0.borrow()[0], Toast::error("FAQ not found"));

        let toggled = actions.toggle_status(&mut store, "1").await.unwrap();
        assert!(!toggled.is_active);
        assert_eq!(toasts.0.borrow()[1], Toast::success("FAQ is now inactive"));
    }

    #[tokio::test]
    async fn export_counts_rows() {
        let store = loaded().await;
        let toasts = Collect::default();
        let actions = Actions::new(&AssumeYes, &toasts);

        let mut out = Vec::new();
        assert_eq!(actions.export_csv(&store, &mut out).unwrap(), 1);
        assert!(String::from_utf8(out).unwrap().starts_with("ID,Question"));
        assert_eq!(toasts.0.borrow()[0], Toast::success("Exported 1 FAQs"));
    }

    #[tokio::test]
    async fn export_to_path_creates_the_file() {
        let store = loaded().await;
        let toasts = Collect::default();
        let actions = Actions::new(&AssumeYes, &toasts);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("faqs.csv");
        assert_eq!(actions.export_csv_to_path(&store, &path).unwrap(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 2);
        assert_eq!(toasts.0.borrow()[0], Toast::success("Exported 1 FAQs"));
    }

    #[tokio::test]
    async fn network_failures_name_the_operation() {
        let (api, mut store) = loaded_with_api().await;
        api.fail_domain(Domain::Faqs);
        let toasts = Collect::default();
        let actions = Actions::new(&AssumeYes, &toasts);

        assert!(actions.delete(&mut store, "1").await.is_err());
        assert_eq!(toasts.0.borrow()[0], Toast::error("Failed to delete FAQ"));

        api.heal();
        assert!(actions.delete(&mut store, "1").await.is_ok());
    }
}
