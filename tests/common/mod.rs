#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use user_api::domain::entities::{NewUser, User, UserPatch};
use user_api::domain::repositories::UserRepository;
use user_api::error::ApiError;
use user_api::infrastructure::persistence::InMemoryUserRepository;
use user_api::routes::router;
use user_api::state::AppState;

/// Repository whose every operation fails with the same error.
pub struct FailingUserRepository {
    error: ApiError,
}

impl FailingUserRepository {
    pub fn new(error: ApiError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _new_user: NewUser) -> Result<User, ApiError> {
        Err(self.error.clone())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, ApiError> {
        Err(self.error.clone())
    }

    async fn list_page(&self, _offset: i64, _limit: i64) -> Result<(Vec<User>, i64), ApiError> {
        Err(self.error.clone())
    }

    async fn update(&self, _id: i64, _patch: UserPatch) -> Result<Option<User>, ApiError> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: i64) -> Result<bool, ApiError> {
        Err(self.error.clone())
    }

    async fn ping(&self) -> Result<(), ApiError> {
        Err(self.error.clone())
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryUserRepository::new()))
}

pub fn make_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

pub fn make_failing_server(error: ApiError) -> TestServer {
    let state = AppState::new(Arc::new(FailingUserRepository::new(error)));
    TestServer::new(router(state)).unwrap()
}

pub fn user_body(username: &str) -> Value {
    json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "phoneNumber": "1234567890"
    })
}

/// Creates a user through the API and returns its id.
pub async fn create_test_user(server: &TestServer, username: &str) -> i64 {
    let response = server.post("/users").json(&user_body(username)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

/// Asserts the standard `{error, status}` body.
pub fn assert_error_body(body: &Value, message: &str, status: u16) {
    assert_eq!(body["error"], message);
    assert_eq!(body["status"], status);
    assert_eq!(body.as_object().unwrap().len(), 2, "unexpected body: {body}");
}
