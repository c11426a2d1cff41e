//! Frame-clock state.
//!
//! The app stamps this once per frame so widgets that show wall-clock
//! derived text (relative "last refreshed" labels and the like) all agree
//! on one instant, and tests can pin it.

use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

#[derive(Debug, Clone)]
pub struct Time {
    now: DateTime<Utc>,
}

impl Default for Time {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}

impl Time {
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
