//! Connection settings for the back-office.
//!
//! Settings are read from `config.toml` in the platform config directory,
//! then overridden by `BACKOFFICE_*` environment variables. A missing file
//! means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ApiError, Result};

pub const ENV_GRAPHQL_URL: &str = "BACKOFFICE_GRAPHQL_URL";
pub const ENV_AUTH_URL: &str = "BACKOFFICE_AUTH_URL";
pub const ENV_APPLICATION_ID: &str = "BACKOFFICE_APPLICATION_ID";
pub const ENV_PAGE_SIZE: &str = "BACKOFFICE_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "BACKOFFICE_TIMEOUT_SECS";

const DEFAULT_GRAPHQL_URL: &str = "http://localhost:8000/graphql";
const DEFAULT_PAGE_SIZE: u32 = 100;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoints, tenant and request tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// GraphQL endpoint serving content queries and mutations.
    pub graphql_url: String,

    /// GraphQL endpoint serving `requestOtp` / `verifyOtp`.
    pub auth_url: String,

    /// Tenant every list query is scoped to. `None` lists across tenants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    /// Records requested per page while following pagination.
    pub page_size: u32,

    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            auth_url: DEFAULT_GRAPHQL_URL.to_string(),
            application_id: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AdminConfig {
    /// Load from the default path, apply the process environment and validate.
    pub fn load() -> Result<Self> {
        Self::load_with(&Self::config_path(), |key| std::env::var(key).ok())
    }

    /// Load from `path`, apply overrides from `lookup` and validate.
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load_from(path)?;
        config.apply_env(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|e| ApiError::Config(format!("{}: {e}", path.display()))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// The settings as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::Config(format!("failed to serialize settings: {e}")))
    }

    /// Write the settings as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Apply `BACKOFFICE_*` overrides. Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = get(ENV_GRAPHQL_URL) {
            self.graphql_url = url;
        }
        if let Some(url) = get(ENV_AUTH_URL) {
            self.auth_url = url;
        }
        if let Some(id) = get(ENV_APPLICATION_ID) {
            self.application_id = Some(id);
        }
        if let Some(raw) = get(ENV_PAGE_SIZE) {
            self.page_size = parse_number(ENV_PAGE_SIZE, &raw)?;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_number(ENV_TIMEOUT_SECS, &raw)?;
        }
        Ok(())
    }

    /// Check both endpoints are absolute http(s) URLs and the numbers are positive.
    pub fn validate(&self) -> Result<()> {
        self.graphql_endpoint()?;
        self.auth_endpoint()?;
        if self.page_size == 0 {
            return Err(ApiError::Config("page_size must be at least 1".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ApiError::Config(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn graphql_endpoint(&self) -> Result<Url> {
        parse_endpoint("graphql_url", &self.graphql_url)
    }

    pub fn auth_endpoint(&self) -> Result<Url> {
        parse_endpoint("auth_url", &self.auth_url)
    }

    /// `config.toml` in the platform config directory.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("backoffice.toml"))
    }

    /// Where the session token is persisted.
    pub fn session_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.data_local_dir().join("session.json"))
            .unwrap_or_else(|| PathBuf::from(".backoffice-session.json"))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "Backoffice", "backoffice")
}

fn parse_endpoint(name: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| ApiError::Config(format!("{name} `{raw}`: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::Config(format!(
            "{name} must use http or https, got `{other}`"
        ))),
    }
}

fn parse_number<N: std::str::FromStr>(key: &str, raw: &str) -> Result<N> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::Config(format!("{key} must be a positive integer, got `{raw}`")))
}
