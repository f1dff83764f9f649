//! Error types for API access.

use backoffice_model::Domain;
use backoffice_model::format::capitalize;
use thiserror::Error;

/// Errors returned by a [`ContentApi`](crate::ContentApi) backend or the auth flow.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a GraphQL `errors[]` array; carries the first message.
    #[error("{message}")]
    GraphQl { message: String },

    /// Connection, TLS or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status other than 401.
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },

    /// Missing, expired or rejected session token.
    #[error("not authenticated")]
    Unauthorized,

    #[error("{domain} record {id} not found")]
    NotFound { domain: Domain, id: String },

    /// The response did not have the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    /// Failure injected into the in-memory backend.
    #[error("injected failure: {0}")]
    Injected(String),
}

/// What the caller was doing when an error happened; picks the fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
    BulkDelete,
    ToggleStatus,
    Reorder,
}

impl Operation {
    /// `Failed to delete banner`, `Failed to load FAQs`.
    #[must_use]
    pub fn failure_message(self, domain: Domain) -> String {
        let singular = domain.singular();
        let plural = domain.plural();
        match self {
            Self::Load => format!("Failed to load {plural}"),
            Self::Create => format!("Failed to create {singular}"),
            Self::Update => format!("Failed to update {singular}"),
            Self::Delete => format!("Failed to delete {singular}"),
            Self::BulkDelete => format!("Failed to delete {plural}"),
            Self::ToggleStatus => format!("Failed to update {singular} status"),
            Self::Reorder => format!("Failed to reorder {plural}"),
        }
    }
}

impl ApiError {
    /// Message suitable for a toast after `operation` failed on `domain`.
    ///
    /// GraphQL errors surface verbatim; transport failures fall back to a
    /// fixed sentence naming the operation.
    #[must_use]
    pub fn user_message(&self, domain: Domain, operation: Operation) -> String {
        match self {
            Self::GraphQl { message } => message.clone(),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            Self::NotFound { domain, .. } => format!("{} not found", capitalize(domain.singular())),
            Self::Config(detail) => format!("Configuration problem: {detail}"),
            Self::Network(_)
            | Self::Http { .. }
            | Self::Decode(_)
            | Self::Io(_)
            | Self::Injected(_) => operation.failure_message(domain),
        }
    }

    /// Whether this error should send the user back to the login flow.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_message_surfaces_verbatim() {
        let err = ApiError::GraphQl {
            message: "Slug already taken".to_string(),
        };
        assert_eq!(
            err.user_message(Domain::BlogPosts, Operation::Create),
            "Slug already taken"
        );
    }

    #[test]
    fn transport_errors_name_the_operation() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(
            err.user_message(Domain::TeamMembers, Operation::Load),
            "Failed to load team members"
        );
        assert_eq!(
            err.user_message(Domain::Banners, Operation::Delete),
            "Failed to delete banner"
        );

        let err = ApiError::Http { status: 502 };
        assert_eq!(err.user_message(Domain::Faqs, Operation::Load), "Failed to load FAQs");
        assert_eq!(
            err.user_message(Domain::Faqs, Operation::ToggleStatus),
            "Failed to update FAQ status"
        );
        assert_eq!(
            err.user_message(Domain::Banners, Operation::Reorder),
            "Failed to reorder banners"
        );
    }

    #[test]
    fn not_found_names_the_record_kind() {
        let err = ApiError::NotFound {
            domain: Domain::Banners,
            id: "7".to_string(),
        };
        assert!(err.to_string().contains('7'));
        assert_eq!(err.user_message(Domain::Banners, Operation::Update), "Banner not found");
        assert!(!err.is_auth());
        assert!(ApiError::Unauthorized.is_auth());
    }
}
