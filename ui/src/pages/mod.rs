//! Pages module for the application.
//!
//! This module contains the different pages that can be displayed based on the route:
//! - `list_page`: The user listing with per-row actions
//! - `form_page`: Create and edit form for a single user
//! - `detail_page`: Read-only view of a single user

mod detail_page;
mod form_page;
mod list_page;

pub use detail_page::detail_page;
pub use form_page::{UserFormState, form_page};
pub use list_page::{ListPageState, list_page};
