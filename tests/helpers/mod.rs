//! Shared harness for HTTP-level tests: the full router wired against
//! in-memory stores, driven with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;

use skinvault_api::{AppState, build_router};
use skinvault_auth::jwt::{JwtDecoder, JwtEncoder};
use skinvault_auth::password::PasswordHasher;
use skinvault_core::config::AuthConfig;
use skinvault_core::result::AppResult;
use skinvault_entity::skin::{NewSkin, Skin};
use skinvault_entity::user::{NewUser, User};
use skinvault_service::auth::AuthService;
use skinvault_service::skin::SkinService;
use skinvault_service::store::{SkinStore, UserStore};

const TEST_SECRET: &str = "integration-test-secret";

/// In-memory user store backing the full router in tests.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn stored_token(&self, login: &str) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.login == login)
            .map(|u| u.token.clone())
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

/// In-memory skin store backing the full router in tests.
#[derive(Default)]
pub struct MemorySkinStore {
    skins: Mutex<Vec<Skin>>,
}

#[async_trait]
impl SkinStore for MemorySkinStore {
    async fn insert(&self, new_skin: &NewSkin) -> AppResult<Skin> {
        let mut skins = self.skins.lock().unwrap();
        let skin = Skin {
            id: skins.len() as i32 + 1,
            owner_login: new_skin.owner_login.clone(),
            name: new_skin.name.clone(),
            kind: new_skin.kind.clone(),
            src: new_skin.src.clone(),
        };
        skins.push(skin.clone());
        Ok(skin)
    }

    async fn find_by_owner(&self, owner: &str) -> AppResult<Vec<Skin>> {
        Ok(self
            .skins
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.owner_login == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, owner: &str, id: i32) -> AppResult<Option<Skin>> {
        Ok(self
            .skins
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id && s.owner_login == owner)
            .cloned())
    }

    async fn delete(&self, owner: &str, id: i32) -> AppResult<u64> {
        let mut skins = self.skins.lock().unwrap();
        let before = skins.len();
        skins.retain(|s| !(s.id == id && s.owner_login == owner));
        Ok((before - skins.len()) as u64)
    }
}

/// A fully wired application over in-memory stores.
pub struct TestApp {
    pub router: Router,
    pub auth_service: Arc<AuthService>,
    pub user_store: Arc<MemoryUserStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let config = AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
        };

        let user_store = Arc::new(MemoryUserStore::default());
        let skin_store = Arc::new(MemorySkinStore::default());

        let auth_service = Arc::new(AuthService::new(
            user_store.clone(),
            PasswordHasher::new(),
            JwtEncoder::new(&config),
            JwtDecoder::new(&config),
        ));
        let skin_service = Arc::new(SkinService::new(skin_store));

        let state = AppState {
            auth_service: auth_service.clone(),
            skin_service,
            jwt_decoder: Arc::new(JwtDecoder::new(&config)),
        };

        Self {
            router: build_router(state),
            auth_service,
            user_store,
        }
    }

    /// Registers a user directly through the service, with the session
    /// token issued at `issued_at`. Lets tests seed tokens from the past.
    pub async fn register_user(&self, login: &str, password: &str, issued_at: DateTime<Utc>) {
        self.auth_service
            .register(login, password, issued_at)
            .await
            .unwrap();
    }

    /// The token currently stored for `login`.
    pub fn stored_token(&self, login: &str) -> String {
        self.user_store.stored_token(login).unwrap()
    }

    /// Registers and logs in through the HTTP surface, returning the token.
    pub async fn signup(&self, login: &str, password: &str) -> String {
        let (status, _) = self
            .post(
                "/api/v1/user/register",
                None,
                serde_json::json!({ "login": login, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = self
            .post(
                "/api/v1/user/login",
                None,
                serde_json::json!({ "login": login, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        body["token"].as_str().unwrap().to_string()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send("GET", uri, token, None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        self.send("POST", uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send("DELETE", uri, token, None).await
    }

    /// GET with a verbatim `Authorization` header value, for testing
    /// malformed schemes.
    pub async fn get_with_auth_header(&self, uri: &str, value: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}
