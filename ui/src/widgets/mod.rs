//! Reusable widgets shared by the pages.

mod confirm_delete;
mod powered_by;
mod users_table;
mod version_label;

pub use confirm_delete::{ConfirmDeleteState, confirm_delete_modal};
pub use powered_by::powered_by_egui_and_eframe;
pub use users_table::users_table;
pub use version_label::version_label;
