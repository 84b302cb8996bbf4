//! Registration, login, and token lifecycle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use skinvault_auth::error::TokenError;
use skinvault_auth::jwt::{JwtDecoder, JwtEncoder};
use skinvault_auth::password::PasswordHasher;
use skinvault_core::error::AppError;
use skinvault_entity::user::{NewUser, User};

use crate::store::UserStore;

/// Orchestrates credential verification and session-token lifecycle.
#[derive(Clone)]
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_store: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        encoder: JwtEncoder,
        decoder: JwtDecoder,
    ) -> Self {
        Self {
            user_store,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Registers a new user with an initial session token issued at `now`.
    pub async fn register(
        &self,
        login: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        if self.user_store.find_by_login(login).await?.is_some() {
            return Err(AppError::conflict("This user is already registered"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let token = self.encoder.issue(login, now)?;

        self.user_store
            .insert(&NewUser {
                login: login.to_string(),
                password_hash,
                token,
            })
            .await?;

        info!(login = %login, "User registered");
        Ok(())
    }

    /// Verifies credentials and returns the user's session token.
    ///
    /// The stored token is returned unchanged while it still verifies, so
    /// repeated logins do not invalidate other active clients. A stored
    /// token that fails verification is replaced with a freshly issued
    /// one; the replacement is last-writer-wins under concurrent logins.
    ///
    /// An unknown login and a credential mismatch are deliberately
    /// indistinguishable to the caller.
    pub async fn login(
        &self,
        login: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let user = self
            .user_store
            .find_by_login(login)
            .await?
            .ok_or_else(|| AppError::not_found("This user does not exist"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::not_found("This user does not exist"));
        }

        match self.decoder.verify(&user.token, now) {
            Ok(_) => Ok(user.token),
            Err(reason) => {
                if reason != TokenError::TokenExpired {
                    // Corrupted or mis-signed stored token; treated the
                    // same as expiry and replaced.
                    warn!(login = %login, %reason, "Stored token failed verification, reissuing");
                }
                self.reissue_token(&user, now).await
            }
        }
    }

    /// Resolves a presented token to the user whose stored token matches
    /// it exactly.
    ///
    /// This is distinct from cryptographic validity: a correctly signed
    /// but superseded token no longer matches any stored row and fails
    /// here.
    pub async fn resolve_by_token(&self, token: &str) -> Result<User, AppError> {
        self.user_store
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("This user does not exist"))
    }

    async fn reissue_token(&self, user: &User, now: DateTime<Utc>) -> Result<String, AppError> {
        let token = self.encoder.issue(&user.login, now)?;

        let rows = self.user_store.replace_token(&user.login, &token).await?;
        if rows == 0 {
            return Err(AppError::not_found("This user does not exist"));
        }

        info!(login = %user.login, "Session token reissued");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Duration;

    use skinvault_core::config::AuthConfig;
    use skinvault_core::error::ErrorKind;
    use skinvault_core::result::AppResult;

    use super::*;

    /// In-memory user store mirroring the relational backend's behavior.
    #[derive(Default)]
    struct MemoryUserStore {
        users: Mutex<Vec<User>>,
    }

    impl MemoryUserStore {
        fn stored_token(&self, login: &str) -> Option<String> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.login == login)
                .map(|u| u.token.clone())
        }

        fn corrupt_token(&self, login: &str) {
            let mut users = self.users.lock().unwrap();
            let user = users.iter_mut().find(|u| u.login == login).unwrap();
            user.token = "not-a-valid-token".to_string();
        }
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.login == login)
                .cloned())
        }

        async fn find_by_token(&self, token: &str) -> AppResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.token == token)
                .cloned())
        }

        async fn insert(&self, new_user: &NewUser) -> AppResult<User> {
            let mut users = self.users.lock().unwrap();
            let user = User {
                id: users.len() as i32 + 1,
                login: new_user.login.clone(),
                password_hash: new_user.password_hash.clone(),
                token: new_user.token.clone(),
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn replace_token(&self, login: &str, token: &str) -> AppResult<u64> {
            let mut users = self.users.lock().unwrap();
            match users.iter_mut().find(|u| u.login == login) {
                Some(user) => {
                    user.token = token.to_string();
                    Ok(1)
                }
                None => Ok(0),
            }
        }
    }

    fn service() -> (AuthService, Arc<MemoryUserStore>) {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
        };
        let store = Arc::new(MemoryUserStore::default());
        let service = AuthService::new(
            store.clone(),
            PasswordHasher::new(),
            JwtEncoder::new(&config),
            JwtDecoder::new(&config),
        );
        (service, store)
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_login() {
        let (service, _) = service();
        let now = fixed_now();

        service.register("alice", "pw1", now).await.unwrap();
        let err = service.register("alice", "pw2", now).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_login_unknown_user_and_bad_password_look_identical() {
        let (service, _) = service();
        let now = fixed_now();

        service.register("alice", "pw1", now).await.unwrap();

        let unknown = service.login("bob", "pw1", now).await.unwrap_err();
        let mismatch = service.login("alice", "wrong", now).await.unwrap_err();

        assert_eq!(unknown.kind, ErrorKind::NotFound);
        assert_eq!(mismatch.kind, ErrorKind::NotFound);
        assert_eq!(unknown.message, mismatch.message);
    }

    #[tokio::test]
    async fn test_login_keeps_valid_token_stable() {
        let (service, _) = service();
        let now = fixed_now();

        service.register("alice", "pw1", now).await.unwrap();

        let first = service.login("alice", "pw1", now).await.unwrap();
        let second = service.login("alice", "pw1", now).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_login_reissues_after_expiry() {
        let (service, store) = service();
        let registered_at = fixed_now() - Duration::days(20);
        let now = fixed_now();

        service.register("alice", "pw1", registered_at).await.unwrap();
        let old_token = store.stored_token("alice").unwrap();

        let new_token = service.login("alice", "pw1", now).await.unwrap();

        assert_ne!(new_token, old_token);
        // The fresh token resolves immediately; the superseded one does not.
        let user = service.resolve_by_token(&new_token).await.unwrap();
        assert_eq!(user.login, "alice");
        assert_eq!(
            service.resolve_by_token(&old_token).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_login_reissues_on_corrupt_stored_token() {
        let (service, store) = service();
        let now = fixed_now();

        service.register("alice", "pw1", now).await.unwrap();
        store.corrupt_token("alice");

        let token = service.login("alice", "pw1", now).await.unwrap();

        assert_ne!(token, "not-a-valid-token");
        let user = service.resolve_by_token(&token).await.unwrap();
        assert_eq!(user.login, "alice");
    }
}
