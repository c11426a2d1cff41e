//! Read-only view of a single user.
//!
//! Shows the store's `selected` record when it matches the routed id,
//! otherwise fetches it first. A 404 renders as "not found" instead of a
//! raw error.

use egui::{Color32, Response, Ui};
use roster_business::{
    ActionStatus, FetchUserAction, FetchUserCommand, FetchUserInput, Route, UserId, UsersStore,
};

use crate::state::State;

/// Renders the detail page for `id`.
pub fn detail_page(state: &mut State, id: UserId, ui: &mut Ui) -> Response {
    let selected = state.ctx.state::<UsersStore>().selected().cloned();
    match selected {
        Some(user) if user.id == id => ui
            .vertical(|ui| {
                ui.heading(&user.name);
                ui.add_space(8.0);

                egui::Grid::new("user_detail")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("ID:");
                        ui.label(user.id.to_string());
                        ui.end_row();

                        ui.label("Name:");
                        ui.label(&user.name);
                        ui.end_row();

                        ui.label("Email:");
                        ui.label(&user.email);
                        ui.end_row();

                        ui.label("Phone:");
                        ui.label(&user.phone_number);
                        ui.end_row();
                    });

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    if ui.button("Back").clicked() {
                        state
                            .ctx
                            .update::<FetchUserAction>(|action| action.status = ActionStatus::Idle);
                        state.ctx.update::<Route>(|route| *route = Route::List);
                    }
                    if ui.button("Edit").clicked() {
                        // The edit form hydrates from the already-selected
                        // record, so no reset is needed here.
                        state.ctx.update::<Route>(|route| *route = Route::Edit(id));
                    }
                });
            })
            .response,
        _ => fetch_for_detail(state, id, ui),
    }
}

fn fetch_for_detail(state: &mut State, id: UserId, ui: &mut Ui) -> Response {
    let status = state.ctx.state::<FetchUserAction>().status.clone();
    if status.is_idle() {
        state.ctx.update::<FetchUserInput>(|input| input.id = Some(id));
        state
            .ctx
            .update::<FetchUserAction>(|action| action.status = ActionStatus::Pending);
        state.ctx.dispatch::<FetchUserCommand>();
    }

    ui.vertical(|ui| {
        ui.heading("User details");
        ui.add_space(8.0);

        match status.error() {
            Some(error) if error.status() == Some(404) => {
                ui.label("User not found.");
                ui.add_space(8.0);
                if ui.button("Back").clicked() {
                    state
                        .ctx
                        .update::<FetchUserAction>(|action| action.status = ActionStatus::Idle);
                    state.ctx.update::<Route>(|route| *route = Route::List);
                }
            }
            Some(error) => {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Retry").clicked() {
                        state
                            .ctx
                            .update::<FetchUserAction>(|action| action.status = ActionStatus::Idle);
                    }
                    if ui.button("Back").clicked() {
                        state
                            .ctx
                            .update::<FetchUserAction>(|action| action.status = ActionStatus::Idle);
                        state.ctx.update::<Route>(|route| *route = Route::List);
                    }
                });
            }
            None => {
                ui.spinner();
                ui.label("Loading user...");
            }
        }
    })
    .response
}
