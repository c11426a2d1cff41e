//! Table components for the user listing.
//!
//! This module contains the table rendering logic split into smaller,
//! focused components:
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `row`: Individual row rendering with the action buttons

mod columns;
mod header;
mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use roster_business::{
    ActionStatus, DeleteUserAction, FetchUserAction, Route, UpdateUserAction, User, UserId,
    UsersStore,
};

use crate::pages::UserFormState;
use crate::state::State;
use crate::widgets::ConfirmDeleteState;

/// What a row's action buttons asked for this frame. Collected during the
/// table pass and applied afterwards, once the store borrow is released.
#[derive(Debug, Clone)]
pub(crate) enum RowAction {
    View(UserId),
    Edit(UserId),
    Delete(User),
}

/// Renders the users table and applies whichever row action was clicked.
pub fn users_table(state: &mut State, ui: &mut Ui) {
    let mut action: Option<RowAction> = None;

    {
        let store = state.ctx.state::<UsersStore>();
        let delete = state.ctx.state::<DeleteUserAction>();
        let deleting = if delete.status.is_pending() {
            delete.target
        } else {
            None
        };

        let mut builder = TableBuilder::new(ui).striped(true);
        for column in columns::table_columns() {
            builder = builder.column(column);
        }

        builder
            .header(columns::HEADER_HEIGHT, |mut table_header| {
                header::render_table_header(&mut table_header);
            })
            .body(|body| {
                let users = store.users();
                body.rows(columns::ROW_HEIGHT, users.len(), |mut table_row| {
                    let user = &users[table_row.index()];
                    row::render_user_row(&mut table_row, user, deleting, &mut action);
                });
            });
    }

    match action {
        Some(RowAction::View(id)) => {
            // A stale terminal status would block the detail page's fetch.
            state
                .ctx
                .update::<FetchUserAction>(|fetch| fetch.status = ActionStatus::Idle);
            state.ctx.update::<Route>(|route| *route = Route::Detail(id));
        }
        Some(RowAction::Edit(id)) => {
            state.ctx.update::<UserFormState>(UserFormState::reset);
            state
                .ctx
                .update::<FetchUserAction>(|fetch| fetch.status = ActionStatus::Idle);
            // A leftover Fulfilled would bounce the form straight back.
            state
                .ctx
                .update::<UpdateUserAction>(|update| update.status = ActionStatus::Idle);
            state.ctx.update::<Route>(|route| *route = Route::Edit(id));
        }
        Some(RowAction::Delete(user)) => {
            state.ctx.update::<DeleteUserAction>(|delete| {
                delete.status = ActionStatus::Idle;
                delete.target = None;
            });
            state
                .ctx
                .update::<ConfirmDeleteState>(|confirm| confirm.pending = Some(user));
        }
        None => {}
    }
}
