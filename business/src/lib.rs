//! Business layer for the roster client.
//!
//! Everything the UI needs lives behind `StateCtx`: the users store, the
//! per-action statuses, and the commands that talk to the backend. The UI
//! crate renders states and dispatches commands; it never performs IO
//! itself.

pub mod config;
pub mod http;
pub mod route;
mod test_utils;
pub mod users;

pub use config::AppConfig;
pub use http::{Client, HttpError, HttpResult, Method, RequestBuilder, Response};
pub use route::Route;
pub use users::{
    ActionStatus, ApiError, ApiResult, CreateUserAction, CreateUserCommand, CreateUserInput,
    DeleteUserAction, DeleteUserCommand, DeleteUserInput, FetchUserAction, FetchUserCommand,
    FetchUserInput, FetchUsersAction, FetchUsersCommand, StoreEvent, UpdateUserAction,
    UpdateUserCommand, UpdateUserInput, User, UserDraft, UserId, UsersStore,
};
