//! User listing page.
//!
//! The roster is fetched once when the page first shows and again on
//! explicit refresh. Create, update and delete patch the listing in place,
//! so none of them trigger a refetch.

use std::any::Any;

use chrono::{DateTime, Utc};
use egui::{Color32, Response, Ui};
use roster_business::{
    ActionStatus, CreateUserAction, FetchUsersAction, FetchUsersCommand, Route, UsersStore,
};
use roster_states::Time;

use crate::state::State;
use crate::widgets;

/// Page-local bookkeeping for the listing. The data itself lives in
/// [`UsersStore`].
#[derive(Debug, Default)]
pub struct ListPageState {
    /// When the last listing fetch came back.
    pub(crate) last_refreshed: Option<DateTime<Utc>>,
    /// Set at dispatch, cleared at the terminal status.
    awaiting_fetch: bool,
}

impl roster_states::State for ListPageState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Renders the listing page.
pub fn list_page(state: &mut State, ui: &mut Ui) -> Response {
    auto_fetch(state);
    track_refresh(state);

    let fetch_status = state.ctx.state::<FetchUsersAction>().status.clone();
    let last_refreshed = state.ctx.state::<ListPageState>().last_refreshed;

    let response = ui.vertical(|ui| {
        ui.horizontal(|ui| {
            if ui.button("Refresh").clicked() && !fetch_status.is_pending() {
                dispatch_fetch(state);
            }
            if ui.button("New user").clicked() {
                // A leftover Fulfilled would bounce the form straight back.
                state
                    .ctx
                    .update::<CreateUserAction>(|action| action.status = ActionStatus::Idle);
                state.ctx.update::<Route>(|route| *route = Route::Create);
            }
            if fetch_status.is_pending() {
                ui.spinner();
                ui.label("Loading...");
            }
            if let Some(at) = last_refreshed {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("Last refreshed {}", at.format("%H:%M:%S UTC")));
                });
            }
        });

        if let Some(error) = fetch_status.error() {
            ui.horizontal(|ui| {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
                if ui.button("Retry").clicked() {
                    dispatch_fetch(state);
                }
            });
        }

        ui.add_space(8.0);

        widgets::users_table(state, ui);

        if state.ctx.state::<UsersStore>().users().is_empty()
            && !fetch_status.is_pending()
            && fetch_status.error().is_none()
        {
            ui.add_space(8.0);
            ui.weak("No users yet. Create the first one.");
        }

        ui.add_space(16.0);
        widgets::powered_by_egui_and_eframe(ui);
    });

    // Rendered last so it floats over the table.
    widgets::confirm_delete_modal(state, ui);

    response.response
}

/// Fetch on first show. `Idle` means nothing was dispatched yet; any later
/// visit finds a terminal status and leaves the listing as it is.
fn auto_fetch(state: &mut State) {
    let idle = state.ctx.state::<FetchUsersAction>().status.is_idle();
    if idle {
        dispatch_fetch(state);
    }
}

fn dispatch_fetch(state: &mut State) {
    state
        .ctx
        .update::<FetchUsersAction>(|action| action.status = ActionStatus::Pending);
    state
        .ctx
        .update::<ListPageState>(|page| page.awaiting_fetch = true);
    state.ctx.dispatch::<FetchUsersCommand>();
}

/// Records the fetch completion time shown next to the toolbar.
fn track_refresh(state: &mut State) {
    if !state.ctx.state::<ListPageState>().awaiting_fetch {
        return;
    }

    let status = state.ctx.state::<FetchUsersAction>().status.clone();
    if status.is_fulfilled() {
        let now = state.ctx.state::<Time>().now();
        state.ctx.update::<ListPageState>(|page| {
            page.last_refreshed = Some(now);
            page.awaiting_fetch = false;
        });
    } else if status.error().is_some() {
        state
            .ctx
            .update::<ListPageState>(|page| page.awaiting_fetch = false);
    }
}
