//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub(crate) const ID_WIDTH: f32 = 50.0;
pub(crate) const NAME_MIN_WIDTH: f32 = 120.0;
pub(crate) const EMAIL_WIDTH: f32 = 220.0;
pub(crate) const PHONE_WIDTH: f32 = 140.0;
pub(crate) const ACTIONS_WIDTH: f32 = 190.0;

pub(crate) const ROW_HEIGHT: f32 = 30.0;
pub(crate) const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration for the users table, in render order:
/// ID, Name (fills the remaining space), Email, Phone, Actions.
#[inline]
pub(crate) fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),
        Column::remainder().at_least(NAME_MIN_WIDTH),
        Column::exact(EMAIL_WIDTH),
        Column::exact(PHONE_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
