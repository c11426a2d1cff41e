//! Integration tests for the row actions on the listing: viewing a user's
//! detail page, editing through the form, and deleting behind the
//! confirmation modal.

mod common;

use common::TestCtx;
use kittest::Queryable;
use roster_business::{
    ActionStatus, DeleteUserAction, DeleteUserCommand, DeleteUserInput, Route, UpdateUserAction,
    UpdateUserCommand, UpdateUserInput, User, UsersStore,
};
use roster_ui::RosterApp;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn ada_listing() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "555-0001"
        }
    ])
}

fn ada_record() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phoneNumber": "555-0001"
    })
}

/// Runs frames until the startup listing fetch has landed and the row is
/// on screen.
async fn settle_listing(ctx: &mut TestCtx<'_, RosterApp>) {
    let harness = ctx.harness_mut();
    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }
}

/// Test that View routes to the detail page and fetches the record.
#[tokio::test]
async fn test_view_opens_the_detail_page() {
    let mut ctx = TestCtx::new_app_with_users(ada_listing()).await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ada_record()))
        .mount(ctx.mock_server())
        .await;
    settle_listing(&mut ctx).await;

    let harness = ctx.harness_mut();
    harness.get_by_label("View").click();
    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }

    let state = harness.state().state();
    assert_eq!(*state.ctx.state::<Route>(), Route::Detail(1));
    assert_eq!(
        state.ctx.state::<UsersStore>().selected().map(|u| u.id),
        Some(1)
    );
    assert!(harness.query_by_label_contains("ada@example.com").is_some());
}

/// Test that Edit routes to the form and fetches the record to edit.
#[tokio::test]
async fn test_edit_fetches_the_record_for_the_form() {
    let mut ctx = TestCtx::new_app_with_users(ada_listing()).await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ada_record()))
        .mount(ctx.mock_server())
        .await;
    settle_listing(&mut ctx).await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Edit").click();
    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }

    let state = harness.state().state();
    assert_eq!(*state.ctx.state::<Route>(), Route::Edit(1));
    assert_eq!(
        state.ctx.state::<UsersStore>().selected().map(|u| u.id),
        Some(1)
    );
    assert!(harness.query_by_label_contains("Edit user #1").is_some());
}

/// Test that a fulfilled update rewrites the matching row in place.
#[tokio::test]
async fn test_update_rewrites_the_row_in_place() {
    let mut ctx = TestCtx::new_app_with_users(ada_listing()).await;
    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .and(body_json(serde_json::json!({
            "id": 1,
            "name": "Ada King",
            "email": "ada@example.com",
            "phoneNumber": "555-0001"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "name": "Ada King",
            "email": "ada@example.com",
            "phoneNumber": "555-0001"
        })))
        .mount(ctx.mock_server())
        .await;
    settle_listing(&mut ctx).await;

    let harness = ctx.harness_mut();

    // Stage the edited record and dispatch, as the edit form's Save does.
    {
        let state = harness.state_mut().state_mut();
        state.ctx.update::<UpdateUserInput>(|input| {
            input.user = Some(User {
                id: 1,
                name: "Ada King".to_owned(),
                email: "ada@example.com".to_owned(),
                phone_number: "555-0001".to_owned(),
            });
        });
        state
            .ctx
            .update::<UpdateUserAction>(|action| action.status = ActionStatus::Pending);
        state.ctx.dispatch::<UpdateUserCommand>();
    }

    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }

    let state = harness.state().state();
    let users = state.ctx.state::<UsersStore>().users().to_vec();
    assert_eq!(users.len(), 1, "update replaces, never appends");
    assert_eq!(users[0].name, "Ada King");
    assert!(harness.query_by_label_contains("Ada King").is_some());
}

/// Test the delete flow: the row's Delete opens the confirmation, and the
/// confirmed delete removes the row from the listing.
#[tokio::test]
async fn test_delete_removes_the_row_after_confirmation() {
    let mut ctx = TestCtx::new_app_with_users(ada_listing()).await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(ctx.mock_server())
        .await;
    settle_listing(&mut ctx).await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Delete").click();
    harness.step();

    assert!(
        harness
            .query_by_label_contains("Are you sure you want to delete user 'Ada Lovelace'?")
            .is_some()
    );

    // Confirm, as the modal's Delete button does.
    {
        let state = harness.state_mut().state_mut();
        state
            .ctx
            .update::<DeleteUserInput>(|input| input.id = Some(1));
        state.ctx.update::<DeleteUserAction>(|action| {
            action.status = ActionStatus::Pending;
            action.target = Some(1);
        });
        state.ctx.dispatch::<DeleteUserCommand>();
    }

    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }

    let state = harness.state().state();
    assert!(state.ctx.state::<UsersStore>().users().is_empty());
    assert!(
        state.ctx.state::<DeleteUserAction>().status.is_idle(),
        "the modal consumes the fulfilled status when it closes"
    );
    assert!(harness.query_by_label_contains("Ada Lovelace").is_none());
    assert!(harness.query_by_label_contains("No users yet").is_some());
}
