//! The backend a command talks to: the live API or the demo data set.

use std::path::Path;

use anyhow::{Context, Result};
use backoffice_client::{
    AdminConfig, ContentApi, FileTokenStore, GraphQlClient, ListQuery, MemoryApi, Page,
    TokenStore,
};
use backoffice_model::Record;

use crate::demo;

pub enum Backend {
    Remote(GraphQlClient),
    Demo(MemoryApi),
}

impl Backend {
    /// Connect to the configured API with the stored session, if any.
    pub fn remote(config: &AdminConfig, sessions: &FileTokenStore) -> Result<Self> {
        let token = sessions.token().context("read stored session")?;
        if token.is_none() {
            tracing::warn!("not signed in; run `backoffice login` first");
        }
        let client = GraphQlClient::new(config, token.as_deref()).context("build API client")?;
        Ok(Self::Remote(client))
    }

    /// In-process backend seeded with the sample data set.
    pub fn demo() -> Result<Self> {
        Ok(Self::Demo(demo::seeded().context("load demo data")?))
    }

    pub fn open(demo: bool, config: &AdminConfig, sessions: &FileTokenStore) -> Result<Self> {
        if demo { Self::demo() } else { Self::remote(config, sessions) }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Remote(client) => client.endpoint().to_string(),
            Self::Demo(_) => "demo data".to_string(),
        }
    }
}

impl ContentApi for Backend {
    async fn list<T: Record>(&self, query: &ListQuery) -> backoffice_client::Result<Page<T>> {
        match self {
            Self::Remote(client) => client.list(query).await,
            Self::Demo(memory) => memory.list(query).await,
        }
    }

    async fn get<T: Record>(&self, id: &str) -> backoffice_client::Result<Option<T>> {
        match self {
            Self::Remote(client) => client.get(id).await,
            Self::Demo(memory) => memory.get(id).await,
        }
    }

    async fn create<T: Record>(&self, input: &T::Input) -> backoffice_client::Result<T> {
        match self {
            Self::Remote(client) => client.create::<T>(input).await,
            Self::Demo(memory) => memory.create::<T>(input).await,
        }
    }

    async fn update<T: Record>(&self, id: &str, input: &T::Input) -> backoffice_client::Result<T> {
        match self {
            Self::Remote(client) => client.update::<T>(id, input).await,
            Self::Demo(memory) => memory.update::<T>(id, input).await,
        }
    }

    async fn delete<T: Record>(&self, id: &str) -> backoffice_client::Result<()> {
        match self {
            Self::Remote(client) => client.delete::<T>(id).await,
            Self::Demo(memory) => memory.delete::<T>(id).await,
        }
    }
}

/// Load settings from `path` (or the default location) plus the environment.
pub fn load_config(path: Option<&Path>, application_id: Option<&str>) -> Result<AdminConfig> {
    let mut config = match path {
        Some(path) => AdminConfig::load_with(path, |key| std::env::var(key).ok()),
        None => AdminConfig::load(),
    }
    .context("load configuration")?;
    if let Some(application_id) = application_id {
        config.application_id = Some(application_id.to_string());
    }
    Ok(config)
}
