//! Create and edit form for a single user.
//!
//! The create form starts blank. The edit form hydrates its fields from the
//! store's `selected` record, fetching it first when it is not already the
//! right one. Saving dispatches the create or update command and navigates
//! back to the listing once the server confirms.

use std::any::Any;

use egui::{Color32, Response, Ui};
use roster_business::{
    ActionStatus, CreateUserAction, CreateUserCommand, CreateUserInput, FetchUserAction,
    FetchUserCommand, FetchUserInput, Route, UpdateUserAction, UpdateUserCommand, UpdateUserInput,
    User, UserDraft, UserId, UsersStore,
};

use crate::state::State;

/// Field buffers for the user form.
#[derive(Debug, Default)]
pub struct UserFormState {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone_number: String,
    /// Which record the fields were hydrated from; `None` for the blank
    /// create form.
    pub(crate) hydrated_for: Option<UserId>,
}

impl UserFormState {
    pub(crate) fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn hydrate(&mut self, user: &User) {
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.phone_number = user.phone_number.clone();
        self.hydrated_for = Some(user.id);
    }
}

impl roster_states::State for UserFormState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Renders the create form (`editing` is `None`) or the edit form.
pub fn form_page(state: &mut State, editing: Option<UserId>, ui: &mut Ui) -> Response {
    match editing {
        None => create_form(state, ui),
        Some(id) => edit_form(state, id, ui),
    }
}

fn create_form(state: &mut State, ui: &mut Ui) -> Response {
    // Leftover hydration means the form was last used for an edit.
    if state.ctx.state::<UserFormState>().hydrated_for.is_some() {
        state.ctx.update::<UserFormState>(UserFormState::reset);
    }

    let status = state.ctx.state::<CreateUserAction>().status.clone();

    // The server echo is already appended to the store; back to the listing.
    if status.is_fulfilled() {
        state
            .ctx
            .update::<CreateUserAction>(|action| action.status = ActionStatus::Idle);
        state.ctx.update::<UserFormState>(UserFormState::reset);
        state.ctx.update::<Route>(|route| *route = Route::List);
        return ui.spinner();
    }

    ui.vertical(|ui| {
        ui.heading("New user");
        ui.add_space(8.0);

        form_fields(state, ui);

        if let Some(error) = status.error() {
            ui.add_space(8.0);
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            let complete = state.ctx.state::<UserFormState>().draft().is_complete();
            let can_save = complete && !status.is_pending();

            if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                let draft = state.ctx.state::<UserFormState>().draft();
                state
                    .ctx
                    .update::<CreateUserInput>(|input| input.draft = Some(draft));
                state
                    .ctx
                    .update::<CreateUserAction>(|action| action.status = ActionStatus::Pending);
                state.ctx.dispatch::<CreateUserCommand>();
            }

            if ui.button("Cancel").clicked() {
                state
                    .ctx
                    .update::<CreateUserAction>(|action| action.status = ActionStatus::Idle);
                state.ctx.update::<UserFormState>(UserFormState::reset);
                state.ctx.update::<Route>(|route| *route = Route::List);
            }

            if status.is_pending() {
                ui.spinner();
                ui.label("Saving...");
            }
        });
    })
    .response
}

fn edit_form(state: &mut State, id: UserId, ui: &mut Ui) -> Response {
    let hydrated = state.ctx.state::<UserFormState>().hydrated_for == Some(id);

    if !hydrated {
        let selected = state.ctx.state::<UsersStore>().selected().cloned();
        match selected {
            Some(user) if user.id == id => {
                state.ctx.update::<UserFormState>(|form| form.hydrate(&user));
            }
            _ => return fetch_for_edit(state, id, ui),
        }
    }

    let status = state.ctx.state::<UpdateUserAction>().status.clone();

    // The matching row is already replaced in the store; back to the listing.
    if status.is_fulfilled() {
        state
            .ctx
            .update::<UpdateUserAction>(|action| action.status = ActionStatus::Idle);
        state
            .ctx
            .update::<FetchUserAction>(|action| action.status = ActionStatus::Idle);
        state.ctx.update::<UserFormState>(UserFormState::reset);
        state.ctx.update::<Route>(|route| *route = Route::List);
        return ui.spinner();
    }

    ui.vertical(|ui| {
        ui.heading(format!("Edit user #{id}"));
        ui.add_space(8.0);

        form_fields(state, ui);

        if let Some(error) = status.error() {
            ui.add_space(8.0);
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            let complete = state.ctx.state::<UserFormState>().draft().is_complete();
            let can_save = complete && !status.is_pending();

            if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                let draft = state.ctx.state::<UserFormState>().draft();
                let user = User {
                    id,
                    name: draft.name,
                    email: draft.email,
                    phone_number: draft.phone_number,
                };
                state
                    .ctx
                    .update::<UpdateUserInput>(|input| input.user = Some(user));
                state
                    .ctx
                    .update::<UpdateUserAction>(|action| action.status = ActionStatus::Pending);
                state.ctx.dispatch::<UpdateUserCommand>();
            }

            if ui.button("Cancel").clicked() {
                state
                    .ctx
                    .update::<UpdateUserAction>(|action| action.status = ActionStatus::Idle);
                state
                    .ctx
                    .update::<FetchUserAction>(|action| action.status = ActionStatus::Idle);
                state.ctx.update::<UserFormState>(UserFormState::reset);
                state.ctx.update::<Route>(|route| *route = Route::List);
            }

            if status.is_pending() {
                ui.spinner();
                ui.label("Saving...");
            }
        });
    })
    .response
}

/// Shown until the record to edit has arrived in `selected`.
fn fetch_for_edit(state: &mut State, id: UserId, ui: &mut Ui) -> Response {
    let status = state.ctx.state::<FetchUserAction>().status.clone();
    if status.is_idle() {
        state.ctx.update::<FetchUserInput>(|input| input.id = Some(id));
        state
            .ctx
            .update::<FetchUserAction>(|action| action.status = ActionStatus::Pending);
        state.ctx.dispatch::<FetchUserCommand>();
    }

    ui.vertical(|ui| {
        ui.heading(format!("Edit user #{id}"));
        ui.add_space(8.0);

        if let Some(error) = status.error() {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Retry").clicked() {
                    // Back to Idle; the next frame redispatches.
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
        } else {
            ui.spinner();
            ui.label("Loading user...");
        }
    })
    .response
}

fn form_fields(state: &mut State, ui: &mut Ui) {
    let form = state.ctx.state_mut::<UserFormState>();

    egui::Grid::new("user_form_fields")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut form.name);
            ui.end_row();

            ui.label("Email:");
            ui.text_edit_singleline(&mut form.email);
            ui.end_row();

            ui.label("Phone:");
            ui.text_edit_singleline(&mut form.phone_number);
            ui.end_row();
        });
}
