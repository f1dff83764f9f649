//! Domain stores for the content back-office.
//!
//! One generic [`DomainStore`] serves every content domain: it holds the
//! loaded list, the current record, filters and derived statistics, and
//! performs fetch / create / update / delete / toggle / bulk operations
//! through any [`ContentApi`](backoffice_client::ContentApi) backend.
//! [`Actions`] layers confirmation prompts and toasts on top, and
//! [`export`] writes lists as CSV.

pub mod actions;
pub mod error;
pub mod export;
pub mod store;

pub use actions::{ActionOutcome, Actions, AssumeYes, Confirm, Notifier, Toast, ToastKind};
pub use error::{BulkFailure, Result, StoreError};
pub use store::{DomainStore, StoreOptions};
