//! Wire and domain types for the users resource.
//!
//! The backend speaks camelCase JSON; the rename attribute keeps the Rust
//! side snake_case without scattering field renames.

use serde::{Deserialize, Serialize};

/// Server-assigned stable identity of a user record.
pub type UserId = i64;

/// One user record as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique within a listing; assigned by the server on create.
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Body of a create request: a user without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl UserDraft {
    /// Presence check used by the form layer; whitespace-only counts as
    /// blank.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone_number.trim().is_empty()
    }
}
