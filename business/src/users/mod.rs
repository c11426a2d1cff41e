//! Users domain module.
//!
//! This module is the single home for:
//! - The wire model (`User`, `UserDraft`)
//! - The resource store (`UsersStore`) and the events that mutate it
//! - Business-layer API helpers for the `/users` endpoints
//! - One action trio per operation: input state, status state, command
//!
//! UI code should not define domain `State` or `Command` types. It reads
//! states out of `StateCtx` and triggers changes via `ctx.dispatch::<Cmd>()`.

pub mod actions;
pub mod api;
pub mod model;
pub mod store;

pub use actions::{
    ActionStatus, CreateUserAction, CreateUserCommand, CreateUserInput, DeleteUserAction,
    DeleteUserCommand, DeleteUserInput, FetchUserAction, FetchUserCommand, FetchUserInput,
    FetchUsersAction, FetchUsersCommand, UpdateUserAction, UpdateUserCommand, UpdateUserInput,
};
pub use api::{ApiError, ApiResult};
pub use model::{User, UserDraft, UserId};
pub use store::{StoreEvent, UsersStore};
