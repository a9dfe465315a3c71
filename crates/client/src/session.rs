//! Session lifecycle: token storage, persistence, and admin guard.
//!
//! The session object is the single owner of the token pair; resource
//! clients read the access token through the shared [`TokenStore`] instead
//! of reaching into ad hoc storage.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, SessionConfig};
use domain::{User, UserRole};

/// Token pair issued by the API at login/registration/refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Shared, thread-safe holder for the current token pair.
#[derive(Clone, Default)]
pub struct TokenStore(Arc<RwLock<Option<TokenPair>>>);

impl TokenStore {
    pub fn get(&self) -> Option<TokenPair> {
        self.0.read().ok().and_then(|guard| guard.clone())
    }

    pub fn set(&self, pair: Option<TokenPair>) {
        if let Ok(mut guard) = self.0.write() {
            *guard = pair;
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.0
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|pair| pair.access_token.clone()))
    }
}

/// Claims subset inspected client-side.
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    exp: i64,
}

/// Expiry claim of a JWT, decoded without signature verification.
///
/// The signing secret lives server-side; the client only inspects `exp` to
/// know when a refresh is due.
fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data =
        jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;
    Utc.timestamp_opt(data.claims.exp, 0).single()
}

/// Session with explicit lifecycle: establish on login, clear on logout,
/// persisted to a configurable file between invocations.
pub struct Session {
    tokens: TokenStore,
    path: PathBuf,
}

impl Session {
    /// Load a session from disk; absent or unreadable files mean logged out.
    pub fn load(config: &SessionConfig) -> Self {
        let tokens = TokenStore::default();

        match std::fs::read(&config.token_path) {
            Ok(bytes) => match serde_json::from_slice::<TokenPair>(&bytes) {
                Ok(pair) => tokens.set(Some(pair)),
                Err(e) => tracing::debug!("Ignoring malformed session file: {}", e),
            },
            Err(e) => tracing::debug!("No stored session: {}", e),
        }

        Self {
            tokens,
            path: config.token_path.clone(),
        }
    }

    /// Handle to the shared token store for the HTTP transport.
    pub fn tokens(&self) -> TokenStore {
        self.tokens.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Whether the stored access token has passed its expiry claim.
    pub fn is_expired(&self) -> bool {
        match self.tokens.access_token().as_deref().and_then(token_expiry) {
            Some(expiry) => expiry <= Utc::now(),
            None => false,
        }
    }

    /// Store and persist a token pair (login, registration, refresh).
    pub fn establish(&self, pair: TokenPair) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(&pair)
            .map_err(|e| AppError::internal(format!("Failed to encode session: {}", e)))?;
        std::fs::write(&self.path, bytes)?;
        self.tokens.set(Some(pair));
        Ok(())
    }

    /// Drop the token pair and remove the session file (logout).
    pub fn clear(&self) -> AppResult<()> {
        self.tokens.set(None);
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The stored refresh token, if any.
    pub fn refresh_token(&self) -> Option<String> {
        self.tokens.get().map(|pair| pair.refresh_token)
    }
}

/// Check that the profile has admin privileges.
pub fn require_admin(user: &User) -> AppResult<()> {
    if user.role().can_access(UserRole::Admin) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_is_logged_out() {
        let store = TokenStore::default();
        assert!(store.get().is_none());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn store_round_trips_a_pair() {
        let store = TokenStore::default();
        store.set(Some(TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            token_type: "bearer".to_string(),
        }));
        assert_eq!(store.access_token().as_deref(), Some("a"));

        store.set(None);
        assert!(store.access_token().is_none());
    }

    #[test]
    fn require_admin_rejects_regular_users() {
        let mut user = User {
            id: uuid::Uuid::new_v4(),
            national_id: "0012345678".to_string(),
            email: None,
            first_name: "Sara".to_string(),
            last_name: "Ahmadi".to_string(),
            phone: None,
            is_admin: false,
            is_active: true,
        };
        assert!(require_admin(&user).is_err());

        user.is_admin = true;
        assert!(require_admin(&user).is_ok());
    }

    #[test]
    fn garbage_token_has_no_expiry() {
        assert!(token_expiry("not-a-jwt").is_none());
    }
}
