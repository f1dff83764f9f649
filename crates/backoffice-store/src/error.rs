//! Error types for store operations.

use backoffice_client::{ApiError, Operation};
use backoffice_model::Domain;
use backoffice_model::format::capitalize;
use thiserror::Error;

/// One failed item of a bulk operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkFailure {
    pub id: String,
    pub reason: String,
}

/// Errors raised by a [`DomainStore`](crate::DomainStore) or the export helpers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The id is neither in the loaded list nor on the server.
    #[error("{} not found", capitalize(.domain.singular()))]
    NotFound { domain: Domain, id: String },

    /// Some items of a bulk operation failed; the others were applied.
    #[error("{}", bulk_message(.action, .failures))]
    Bulk {
        action: &'static str,
        attempted: usize,
        failures: Vec<BulkFailure>,
    },

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl StoreError {
    /// Text stored on the store and shown in the error toast.
    #[must_use]
    pub fn user_message(&self, domain: Domain, operation: Operation) -> String {
        match self {
            Self::Api(err) => err.user_message(domain, operation),
            other => other.to_string(),
        }
    }

    /// Whether the server rejected the session.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_auth())
    }

    /// Ids of the failed items of a bulk operation.
    pub fn failed_ids(&self) -> Vec<&str> {
        match self {
            Self::Bulk { failures, .. } => failures.iter().map(|f| f.id.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

fn bulk_message(action: &str, failures: &[BulkFailure]) -> String {
    let details = failures
        .iter()
        .map(|f| format!("{}: {}", f.id, f.reason))
        .collect::<Vec<_>>()
        .join("; ");
    format!("{action} failed for {} item(s): {details}", failures.len())
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
