//! Route state for page navigation.
//!
//! This module defines the route enum that determines which page to display.

use roster_states::{State, state_assign_impl};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::users::UserId;

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// User listing - the landing page
    #[default]
    List,
    /// Blank form for a new user
    Create,
    /// Pre-filled form editing an existing user
    Edit(UserId),
    /// Read-only view of a single user
    Detail(UserId),
}

impl State for Route {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
