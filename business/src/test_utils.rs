//! Test utilities for business layer testing with mock servers.
//!
//! This module provides helpers to set up a mock HTTP server and drive the
//! user commands (FetchUsers, FetchUser, CreateUser, UpdateUser, DeleteUser)
//! without hitting a real backend.
//!
//! # Example
//!
//! ```ignore
//! use roster_business::test_utils::{TestContext, sample_user};
//!
//! #[tokio::test]
//! async fn test_fetch_users() {
//!     let mut test_ctx = TestContext::new().await;
//!
//!     // Mount a mock response for the listing endpoint
//!     test_ctx.mock_list_users(vec![sample_user(1, "A")]).await;
//!
//!     // Dispatch the way a page would
//!     test_ctx.mark_pending::<FetchUsersAction>();
//!     test_ctx.ctx.dispatch::<FetchUsersCommand>();
//!     test_ctx
//!         .wait_until(|ctx| !ctx.state::<FetchUsersAction>().status.is_pending())
//!         .await;
//!
//!     // Verify results
//!     let store = test_ctx.ctx.state::<UsersStore>();
//!     // ... assert on store.users()
//! }
//! ```

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::time::Duration;

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

use crate::{
    AppConfig, CreateUserAction, CreateUserCommand, CreateUserInput, DeleteUserAction,
    DeleteUserCommand, DeleteUserInput, FetchUserAction, FetchUserCommand, FetchUserInput,
    FetchUsersAction, FetchUsersCommand, UpdateUserAction, UpdateUserCommand, UpdateUserInput,
    User, UsersStore,
};
use roster_states::StateCtx;

/// Test context that holds a mock server and a configured StateCtx.
pub struct TestContext {
    /// The mock server instance.
    pub mock_server: MockServer,
    /// The state context configured to use the mock server.
    pub ctx: StateCtx,
}

impl TestContext {
    /// Create a new test context with a fresh mock server.
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        let base_url = mock_server.uri();

        let config = AppConfig::new(base_url);
        let ctx = build_test_state_ctx(config);

        Self { mock_server, ctx }
    }

    /// Pump `sync` until `done` reports true or five seconds pass.
    ///
    /// Commands run on the ambient test runtime, so the sleep between pumps
    /// is what lets their futures make progress.
    pub async fn wait_until(&mut self, mut done: impl FnMut(&StateCtx) -> bool) {
        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();

        loop {
            self.ctx.sync();
            if done(&self.ctx) {
                return;
            }
            if start.elapsed() > timeout {
                panic!("Timed out waiting for command updates");
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    // =========================================================================
    // Mock endpoint helpers
    // =========================================================================

    /// Mock the listing endpoint.
    pub async fn mock_list_users(&self, users: Vec<User>) {
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the listing endpoint with an error.
    pub async fn mock_list_users_error(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the fetch-by-id endpoint.
    pub async fn mock_get_user(&self, user: User) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}", user.id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(user))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the fetch-by-id endpoint with 404.
    pub async fn mock_get_user_not_found(&self, id: i64) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{id}")))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({
                    "error": "User not found"
                })),
            )
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the create endpoint, asserting the camelCase wire body.
    pub async fn mock_create_user(&self, expected_body: serde_json::Value, echo: User) {
        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(201).set_body_json(echo))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the create endpoint with an error.
    pub async fn mock_create_user_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the update endpoint.
    pub async fn mock_update_user(&self, echo: User) {
        Mock::given(method("PUT"))
            .and(path(format!("/users/{}", echo.id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(echo))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the delete endpoint. The response carries no body.
    pub async fn mock_delete_user(&self, id: i64) {
        Mock::given(method("DELETE"))
            .and(path(format!("/users/{id}")))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the delete endpoint with an error.
    pub async fn mock_delete_user_error(&self, id: i64, status: u16, body: &str) {
        Mock::given(method("DELETE"))
            .and(path(format!("/users/{id}")))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.mock_server)
            .await;
    }
}

/// Build a StateCtx configured for testing with all necessary states and commands.
fn build_test_state_ctx(config: AppConfig) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(config);
    ctx.add_state(UsersStore::default());

    // Inputs
    ctx.add_state(FetchUserInput::default());
    ctx.add_state(CreateUserInput::default());
    ctx.add_state(UpdateUserInput::default());
    ctx.add_state(DeleteUserInput::default());

    // Statuses
    ctx.add_state(FetchUsersAction::default());
    ctx.add_state(FetchUserAction::default());
    ctx.add_state(CreateUserAction::default());
    ctx.add_state(UpdateUserAction::default());
    ctx.add_state(DeleteUserAction::default());

    // Commands
    ctx.record_command(FetchUsersCommand);
    ctx.record_command(FetchUserCommand);
    ctx.record_command(CreateUserCommand);
    ctx.record_command(UpdateUserCommand);
    ctx.record_command(DeleteUserCommand);

    ctx
}

/// Helper to create a sample User for testing.
pub fn sample_user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone_number: format!("555-000{id}"),
    }
}
