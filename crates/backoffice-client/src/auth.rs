//! One-time-password login and session persistence.
//!
//! The flow is two mutations against the auth endpoint: `requestOtp`
//! mails a code, `verifyOtp` trades it for a bearer token. The token is
//! kept in a [`TokenStore`] and attached to every content request.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::AdminConfig;
use crate::documents;
use crate::error::{ApiError, Result};
use crate::graphql::GraphQlClient;

/// Answer to `requestOtp`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OtpRequest {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// The signed-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct VerifiedOtp {
    token: String,
    user: User,
}

/// A persisted login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub issued_at: DateTime<Utc>,
}

/// Somewhere to keep the session between runs.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;

    /// The stored bearer token, if any.
    fn token(&self) -> Result<Option<String>> {
        Ok(self.load()?.map(|session| session.token))
    }
}

/// Session kept as JSON in a file, readable only by the owner on Unix.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform session path.
    pub fn default_location() -> Self {
        Self::new(AdminConfig::session_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<Session>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(session) => Ok(Some(session)),
                Err(err) => {
                    tracing::warn!(path = %self.path.display(), error = %err, "ignoring unreadable session file");
                    Ok(None)
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, content)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Session held in memory only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    session: Mutex<Option<Session>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Client for the OTP endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    auth: GraphQlClient,
    config: AdminConfig,
}

impl AuthClient {
    pub fn new(config: &AdminConfig) -> Result<Self> {
        let auth = GraphQlClient::with_endpoint(config.auth_endpoint()?, config, None)?;
        Ok(Self {
            auth,
            config: config.clone(),
        })
    }

    /// Ask the server to send a code to `email`.
    pub async fn request_otp(&self, email: &str) -> Result<OtpRequest> {
        let email = normalize_email(email)?;
        tracing::info!(email = %email, "requesting one-time password");
        let answer: OtpRequest = self
            .auth
            .query_field(documents::REQUEST_OTP, json!({ "email": email }), "requestOtp")
            .await?;
        if !answer.success {
            return Err(ApiError::GraphQl {
                message: answer
                    .message
                    .unwrap_or_else(|| "Could not send a login code".to_string()),
            });
        }
        Ok(answer)
    }

    /// Exchange `code` for a session and persist it in `store`.
    pub async fn verify_otp(
        &self,
        email: &str,
        code: &str,
        store: &dyn TokenStore,
    ) -> Result<Session> {
        let email = normalize_email(email)?;
        let code = code.trim();
        if code.is_empty() {
            return Err(ApiError::GraphQl {
                message: "The login code is required".to_string(),
            });
        }
        let verified: Option<VerifiedOtp> = self
            .auth
            .query_field(
                documents::VERIFY_OTP,
                json!({ "email": email, "code": code }),
                "verifyOtp",
            )
            .await?;
        let verified = verified.ok_or(ApiError::Unauthorized)?;
        let session = Session {
            token: verified.token,
            user: verified.user,
            issued_at: Utc::now(),
        };
        store.save(&session)?;
        tracing::info!(user = %session.user.email, "signed in");
        Ok(session)
    }

    /// Ask the content endpoint who the stored token belongs to.
    pub async fn me(&self, store: &dyn TokenStore) -> Result<User> {
        let token = store.token()?.ok_or(ApiError::Unauthorized)?;
        let client = GraphQlClient::new(&self.config, Some(&token))?;
        let user: Option<User> = client.query_field(documents::ME, json!({}), "me").await?;
        user.ok_or(ApiError::Unauthorized)
    }

    /// Forget the stored session.
    pub fn logout(&self, store: &dyn TokenStore) -> Result<()> {
        store.clear()?;
        tracing::info!("signed out");
        Ok(())
    }
}

fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, host)| !local.is_empty() && host.contains('.'));
    if valid {
        Ok(email)
    } else {
        Err(ApiError::GraphQl {
            message: format!("`{email}` is not a valid email address"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: User {
                id: "1".to_string(),
                name: Some("Ada".to_string()),
                email: "ada@example.com".to_string(),
            },
            issued_at: Utc::now(),
        }
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("state").join("session.json"));
        assert_eq!(store.load().unwrap(), None);

        store.save(&session()).unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("tok-123"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_session_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(FileTokenStore::new(path).load().unwrap(), None);
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::default();
        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap().map(|s| s.user.id), Some("1".to_string()));
        store.clear().unwrap();
        assert_eq!(store.token().unwrap(), None);
    }

    #[test]
    fn email_is_normalized() {
        assert_eq!(normalize_email(" Ada@Example.COM ").unwrap(), "ada@example.com");
        assert!(normalize_email("ada").is_err());
        assert!(normalize_email("@example.com").is_err());
    }

    #[tokio::test]
    async fn me_without_a_session_is_unauthorized() {
        let client = AuthClient::new(&AdminConfig::default()).unwrap();
        let store = MemoryTokenStore::default();
        assert!(matches!(client.me(&store).await, Err(ApiError::Unauthorized)));
    }
}
