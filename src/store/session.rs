//! Session store: owns the current user identity and authenticated flag.
//!
//! Login accepts exactly one hardcoded demo credential pair; register
//! unconditionally succeeds with a synthesized user. Both persist a session
//! marker so a restart can restore the demo session.

use std::time::Duration;

use tracing::{info, warn};

use crate::demo::{self, DEMO_EMAIL, DEMO_PASSWORD};
use crate::domain::{User, UserPatch};
use crate::errors::StoreError;
use crate::utils::persistence::{FileTokenStore, TokenStore, SESSION_TOKEN_VALUE};

const LOGIN_LATENCY: Duration = Duration::from_millis(1000);

pub struct SessionStore {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    latency: Duration,
    tokens: Box<dyn TokenStore>,
}

impl SessionStore {
    /// Session store backed by the platform data directory.
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self::with_token_store(Box::new(FileTokenStore::new()?)))
    }

    pub fn with_token_store(tokens: Box<dyn TokenStore>) -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
            latency: LOGIN_LATENCY,
            tokens,
        }
    }

    /// Replaces the simulated network latency; tests pass `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Checks the persisted session marker once at startup and restores the
    /// demo session when one is present.
    pub fn restore_session(&mut self) {
        match self.tokens.load() {
            Ok(Some(_)) => {
                info!("session marker found, restoring demo session");
                self.user = Some(demo::demo_user());
                self.is_authenticated = true;
            }
            Ok(None) => {}
            Err(err) => warn!("failed to read session marker: {err}"),
        }
    }

    /// Simulated-latency login. Succeeds only for the demo credential pair;
    /// anything else surfaces an invalid-credentials error string and leaves
    /// the store unauthenticated.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), StoreError> {
        self.is_loading = true;
        self.error = None;

        tokio::time::sleep(self.latency).await;

        let result = if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            self.user = Some(demo::demo_user());
            self.is_authenticated = true;
            self.persist_marker();
            info!(email, "login succeeded");
            Ok(())
        } else {
            let err = StoreError::InvalidCredentials;
            self.error = Some(err.to_string());
            info!(email, "login rejected");
            Err(err)
        };

        self.is_loading = false;
        result
    }

    /// Simulated-latency registration; always succeeds with a fresh user id
    /// and default settings.
    pub async fn register(
        &mut self,
        email: &str,
        _password: &str,
        name: &str,
    ) -> Result<(), StoreError> {
        self.is_loading = true;
        self.error = None;

        tokio::time::sleep(self.latency).await;

        let user = User::new(email, name);
        info!(email, user_id = %user.id, "registered new user");
        self.user = Some(user);
        self.is_authenticated = true;
        self.persist_marker();

        self.is_loading = false;
        Ok(())
    }

    /// Clears identity, flag, and error, and removes the session marker.
    pub fn logout(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.error = None;
        if let Err(err) = self.tokens.clear() {
            warn!("failed to remove session marker: {err}");
        }
        info!("logged out");
    }

    /// Merges fields into the current user; no-op when signed out.
    pub fn update_user(&mut self, patch: UserPatch) {
        if let Some(user) = self.user.as_mut() {
            user.apply(patch);
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // The marker is best-effort: a failed write must not fail the login that
    // produced it.
    fn persist_marker(&mut self) {
        if let Err(err) = self.tokens.save(SESSION_TOKEN_VALUE) {
            warn!("failed to persist session marker: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::MemoryTokenStore;

    fn store() -> SessionStore {
        SessionStore::with_token_store(Box::new(MemoryTokenStore::new()))
            .with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn login_accepts_demo_credentials() {
        let mut session = store();
        session.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert!(session.error.is_none());
        assert_eq!(session.user.as_ref().unwrap().email, DEMO_EMAIL);
    }

    #[tokio::test]
    async fn login_rejects_other_credentials() {
        let mut session = store();
        let err = session.login("x@y.com", "wrong").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidCredentials));
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
        assert!(session.error.as_deref().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn register_always_succeeds() {
        let mut session = store();
        session
            .register("new@example.com", "secret", "New User")
            .await
            .unwrap();
        assert!(session.is_authenticated);
        let user = session.user.as_ref().unwrap();
        assert_eq!(user.name, "New User");
        assert_eq!(user.settings, Default::default());
    }

    #[tokio::test]
    async fn logout_clears_session_and_marker() {
        let mut session = store();
        session.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        session.logout();
        assert!(session.user.is_none());
        assert!(!session.is_authenticated);

        // Marker gone, so a fresh restore finds nothing.
        session.restore_session();
        assert!(!session.is_authenticated);
    }

    #[test]
    fn restore_session_uses_persisted_marker() {
        let mut session = SessionStore::with_token_store(Box::new(MemoryTokenStore::with_token(
            SESSION_TOKEN_VALUE,
        )));
        session.restore_session();
        assert!(session.is_authenticated);
        assert!(session.user.is_some());
    }

    #[test]
    fn update_user_is_noop_when_signed_out() {
        let mut session = store();
        session.update_user(UserPatch {
            name: Some("Nobody".into()),
            ..UserPatch::default()
        });
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn clear_error_resets_the_error_field() {
        let mut session = store();
        let _ = session.login("x@y.com", "wrong").await;
        assert!(session.error.is_some());
        session.clear_error();
        assert!(session.error.is_none());
    }
}
