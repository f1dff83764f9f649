//! Backend access for the content back-office.
//!
//! [`ContentApi`] is the seam every store and the dashboard program
//! against. [`GraphQlClient`] implements it over HTTP; [`MemoryApi`]
//! implements it in process. Login goes through [`AuthClient`], which
//! persists the session in a [`TokenStore`].

pub mod api;
pub mod auth;
pub mod config;
pub mod documents;
pub mod error;
pub mod graphql;
pub mod memory;

pub use api::{ContentApi, ListQuery, Page, PaginatorInfo, list_all};
pub use auth::{AuthClient, FileTokenStore, MemoryTokenStore, OtpRequest, Session, TokenStore, User};
pub use config::AdminConfig;
pub use error::{ApiError, Operation, Result};
pub use graphql::GraphQlClient;
pub use memory::MemoryApi;
