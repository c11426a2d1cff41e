//! Row rendering for the users table.

use egui_extras::TableRow;
use roster_business::{User, UserId};

use super::RowAction;

/// Renders one user row. A clicked action button lands in `action` so the
/// caller can apply it once the table pass is over.
pub(crate) fn render_user_row(
    row: &mut TableRow<'_, '_>,
    user: &User,
    deleting: Option<UserId>,
    action: &mut Option<RowAction>,
) {
    row.col(|ui| {
        ui.label(user.id.to_string());
    });
    row.col(|ui| {
        ui.label(&user.name);
    });
    row.col(|ui| {
        ui.label(&user.email);
    });
    row.col(|ui| {
        ui.label(&user.phone_number);
    });
    row.col(|ui| {
        ui.horizontal(|ui| {
            if ui.button("View").clicked() {
                *action = Some(RowAction::View(user.id));
            }
            if ui.button("Edit").clicked() {
                *action = Some(RowAction::Edit(user.id));
            }
            if deleting == Some(user.id) {
                // The row's delete request is in flight.
                ui.spinner();
            } else if ui.button("Delete").clicked() {
                *action = Some(RowAction::Delete(user.clone()));
            }
        });
    });
}
