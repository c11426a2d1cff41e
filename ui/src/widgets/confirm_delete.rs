//! Confirmation modal for deleting a user.

use egui::{Color32, RichText, Ui};
use roster_business::{ActionStatus, DeleteUserAction, DeleteUserCommand, DeleteUserInput, User};

use crate::state::State;

/// Which user, if any, is waiting on delete confirmation.
#[derive(Debug, Default)]
pub struct ConfirmDeleteState {
    pub(crate) pending: Option<User>,
}

impl roster_states::State for ConfirmDeleteState {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// Floats a confirmation window over the page while a delete is staged.
///
/// The window closes itself once the delete fulfills. `sync` folds the
/// removal into the store before flipping the status, so closing here never
/// leaves a ghost row behind.
pub fn confirm_delete_modal(state: &mut State, ui: &mut Ui) {
    let Some(user) = state.ctx.state::<ConfirmDeleteState>().pending.clone() else {
        return;
    };

    if state.ctx.state::<DeleteUserAction>().status.is_fulfilled() {
        close_confirmation(state);
        return;
    }

    let mut open = true;
    egui::Window::new(format!("Delete user - {}", user.name))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            let delete = state.ctx.state::<DeleteUserAction>().clone();

            if let Some(error) = delete.status.error() {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
            }

            if delete.status.is_pending() {
                ui.horizontal(|ui| {
                    ui.label("Deleting user...");
                    ui.spinner();
                });
                return;
            }

            ui.colored_label(
                Color32::ORANGE,
                format!("Are you sure you want to delete user '{}'?", user.name),
            );
            ui.label("This action cannot be undone.");

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Delete").color(Color32::RED))
                    .clicked()
                {
                    let id = user.id;
                    state
                        .ctx
                        .update::<DeleteUserInput>(|input| input.id = Some(id));
                    state.ctx.update::<DeleteUserAction>(|action| {
                        action.status = ActionStatus::Pending;
                        action.target = Some(id);
                    });
                    state.ctx.dispatch::<DeleteUserCommand>();
                }
                if ui.button("Cancel").clicked() {
                    close_confirmation(state);
                }
            });
        });

    if !open {
        // Closed through the window's own close button.
        close_confirmation(state);
    }
}

fn close_confirmation(state: &mut State) {
    state
        .ctx
        .update::<ConfirmDeleteState>(|confirm| confirm.pending = None);
    state.ctx.update::<DeleteUserAction>(|delete| {
        delete.status = ActionStatus::Idle;
        delete.target = None;
    });
}
