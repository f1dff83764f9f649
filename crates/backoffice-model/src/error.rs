use thiserror::Error;

/// Errors raised while interpreting model values supplied by users.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown content domain: {0}")]
    UnknownDomain(String),
    #[error("invalid {kind} value: {value}")]
    InvalidValue { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
