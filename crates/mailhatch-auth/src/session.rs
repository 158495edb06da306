//! Persisted sign-in session.
//!
//! Once the hosted flow hands back a profile, the wizard records it so later
//! launches (and later onboarding steps) know who the user is. Passwords
//! never land here; only the identity and the service's session token.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::hosted::AuthenticatedUser;

/// File name the session is stored under, inside the app's config directory.
const SESSION_FILE: &str = "session.json";

/// The signed-in user, as recorded after the hosted flow completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Email address the user signed in with.
    pub email: String,
    /// Display name, `"First Last"`.
    pub name: String,
    /// Session token issued by the sign-in service, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_token: Option<String>,
    /// When the sign-in completed.
    pub authenticated_at: DateTime<Utc>,
}

impl UserSession {
    /// Build a session record from a freshly authenticated user.
    #[must_use]
    pub fn from_user(user: &AuthenticatedUser) -> Self {
        Self {
            email: user.email.clone(),
            name: user.display_name(),
            account_token: user.account_token.clone(),
            authenticated_at: Utc::now(),
        }
    }
}

/// File-backed store for the sign-in session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the given config directory.
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            path: config_dir.as_ref().join(SESSION_FILE),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the session, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub async fn save(&self, session: &UserSession) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, contents).await?;
        info!("Session saved for {}", session.email);
        Ok(())
    }

    /// Load the stored session, or `None` if none has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<Option<UserSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Remove the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            tokio::fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser {
            email: "a@b.com".to_string(),
            firstname: Some("A".to_string()),
            lastname: Some("B".to_string()),
            account_token: Some("tok".to_string()),
        }
    }

    fn scratch_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mailhatch-session-{label}-{}", std::process::id()))
    }

    #[test]
    fn session_captures_identity() {
        let session = UserSession::from_user(&test_user());
        assert_eq!(session.email, "a@b.com");
        assert_eq!(session.name, "A B");
        assert_eq!(session.account_token.as_deref(), Some("tok"));
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = UserSession::from_user(&test_user());
        let json = serde_json::to_string(&session).unwrap();
        let back: UserSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[tokio::test]
    async fn save_load_clear_round_trip() {
        let dir = scratch_dir("roundtrip");
        let store = SessionStore::new(&dir);
        assert!(store.path().ends_with("session.json"));

        assert!(store.load().await.unwrap().is_none());

        let session = UserSession::from_user(&test_user());
        store.save(&session).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(session));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
