//! REST client for the users resource.
//!
//! Five free functions, one per endpoint, all returning [`ApiResult`].
//! Failures are classified once, here, so commands and the UI never look at
//! raw reqwest errors:
//!
//! - no HTTP response at all → [`ApiError::Transport`]
//! - non-2xx → [`ApiError::Status`] with the code and raw body
//! - 2xx that does not parse → [`ApiError::Decode`]

use crate::http::{Client, HttpError, Response};

use super::model::{User, UserDraft, UserId};

/// What went wrong talking to the backend. Forwarded to callers unmodified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network-level failure; the request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered outside the 2xx range.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The server answered 2xx but the body was not the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status code, when the failure was an HTTP-level one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(error: HttpError) -> Self {
        Self::Transport(error.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn users_url(base_url: &str) -> String {
    format!("{}/users", base_url.trim_end_matches('/'))
}

fn user_url(base_url: &str, id: UserId) -> String {
    format!("{}/{id}", users_url(base_url))
}

fn status_error(response: &Response) -> ApiError {
    ApiError::Status {
        status: response.status,
        body: response.text(),
    }
}

/// GET /users: the full listing, in server order.
pub async fn list_users(base_url: &str) -> ApiResult<Vec<User>> {
    let response = Client::get(users_url(base_url)).send().await?;
    if !response.is_success() {
        return Err(status_error(&response));
    }
    response
        .json::<Vec<User>>()
        .map_err(|e| ApiError::Decode(format!("user listing: {e}")))
}

/// GET /users/{id}: one record.
pub async fn get_user(base_url: &str, id: UserId) -> ApiResult<User> {
    let response = Client::get(user_url(base_url, id)).send().await?;
    if !response.is_success() {
        return Err(status_error(&response));
    }
    response
        .json::<User>()
        .map_err(|e| ApiError::Decode(format!("user {id}: {e}")))
}

/// POST /users: create from a draft; the server assigns the id and echoes
/// the full record.
pub async fn create_user(base_url: &str, draft: &UserDraft) -> ApiResult<User> {
    let response = Client::post(users_url(base_url))
        .json(draft)
        .map_err(|e| ApiError::Decode(format!("encoding draft: {e}")))?
        .send()
        .await?;
    if !response.is_success() {
        return Err(status_error(&response));
    }
    response
        .json::<User>()
        .map_err(|e| ApiError::Decode(format!("created user: {e}")))
}

/// PUT /users/{id}: full-record update; the server echoes the new record.
pub async fn update_user(base_url: &str, user: &User) -> ApiResult<User> {
    let response = Client::put(user_url(base_url, user.id))
        .json(user)
        .map_err(|e| ApiError::Decode(format!("encoding user {}: {e}", user.id)))?
        .send()
        .await?;
    if !response.is_success() {
        return Err(status_error(&response));
    }
    response
        .json::<User>()
        .map_err(|e| ApiError::Decode(format!("updated user {}: {e}", user.id)))
}

/// DELETE /users/{id}: no response body; the caller echoes the id into the
/// store.
pub async fn delete_user(base_url: &str, id: UserId) -> ApiResult<()> {
    let response = Client::delete(user_url(base_url, id)).send().await?;
    if !response.is_success() {
        return Err(status_error(&response));
    }
    Ok(())
}
