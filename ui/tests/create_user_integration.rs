//! Integration tests for creating a user through the full app shell.
//!
//! The flow under test: the New user button routes to the form, a staged
//! draft dispatches the create command, and the 201 echo lands in the store
//! before the form navigates back to the listing.

mod common;

use common::TestCtx;
use kittest::Queryable;
use roster_business::{
    ActionStatus, CreateUserAction, CreateUserCommand, CreateUserInput, Route, UserDraft,
    UsersStore,
};
use roster_ui::RosterApp;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ada_draft() -> UserDraft {
    UserDraft {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone_number: "555-0001".to_owned(),
    }
}

/// Mounts a create endpoint that checks the camelCase body and echoes it
/// back with a server-assigned id.
async fn mount_create_success(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "555-0001"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 11,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "555-0001"
        })))
        .mount(mock_server)
        .await;
}

/// Runs frames until the startup listing fetch has been folded in, so a
/// later empty listing response cannot race the created row out of the
/// store.
async fn settle_startup_fetch(ctx: &mut TestCtx<'_, RosterApp>) {
    let harness = ctx.harness_mut();
    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }
}

/// Test that the New user button routes to the create form.
#[tokio::test]
async fn test_new_user_button_opens_the_form() {
    let mut ctx = TestCtx::new_app().await;
    settle_startup_fetch(&mut ctx).await;

    let harness = ctx.harness_mut();
    harness.get_by_label("New user").click();
    harness.step();

    let state = harness.state().state();
    assert_eq!(*state.ctx.state::<Route>(), Route::Create);
    assert!(harness.query_by_label_contains("Name:").is_some());
}

/// Test the complete create flow: staged draft, dispatch, server echo in
/// the store, and navigation back to the listing.
#[tokio::test]
async fn test_create_flow_lands_the_echo_and_returns_to_the_list() {
    let mut ctx = TestCtx::new_app().await;
    mount_create_success(ctx.mock_server()).await;
    settle_startup_fetch(&mut ctx).await;

    let harness = ctx.harness_mut();
    harness.get_by_label("New user").click();
    harness.step();

    // Stage the draft and dispatch, as the Save button does.
    {
        let state = harness.state_mut().state_mut();
        state
            .ctx
            .update::<CreateUserInput>(|input| input.draft = Some(ada_draft()));
        state
            .ctx
            .update::<CreateUserAction>(|action| action.status = ActionStatus::Pending);
        state.ctx.dispatch::<CreateUserCommand>();
    }

    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }

    let state = harness.state().state();
    assert_eq!(*state.ctx.state::<Route>(), Route::List);
    let users = state.ctx.state::<UsersStore>().users().to_vec();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 11, "the server-assigned id is kept");
    assert!(harness.query_by_label_contains("Ada Lovelace").is_some());
}

/// Test that a rejected create keeps the form up with the cause shown and
/// the store untouched.
#[tokio::test]
async fn test_create_failure_keeps_the_form_and_the_store() {
    let mut ctx = TestCtx::new_app().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(422).set_body_string("email already taken"))
        .mount(ctx.mock_server())
        .await;
    settle_startup_fetch(&mut ctx).await;

    let harness = ctx.harness_mut();
    harness.get_by_label("New user").click();
    harness.step();

    {
        let state = harness.state_mut().state_mut();
        state
            .ctx
            .update::<CreateUserInput>(|input| input.draft = Some(ada_draft()));
        state
            .ctx
            .update::<CreateUserAction>(|action| action.status = ActionStatus::Pending);
        state.ctx.dispatch::<CreateUserCommand>();
    }

    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }

    let state = harness.state().state();
    assert_eq!(*state.ctx.state::<Route>(), Route::Create);
    assert!(state.ctx.state::<UsersStore>().users().is_empty());
    assert!(harness.query_by_label_contains("HTTP 422").is_some());
    assert!(
        harness
            .query_by_label_contains("email already taken")
            .is_some(),
        "the server's cause is shown unmodified"
    );
}
