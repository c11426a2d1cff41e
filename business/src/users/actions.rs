//! The five user actions: input states, status states, and commands.
//!
//! ## Why this file exists
//! Talking to the backend is a side effect (network IO), and side effects
//! only ever run inside explicitly dispatched commands. Each action here is
//! one command pairing exactly one API call with exactly one store
//! mutation: on success the command queues the [`StoreEvent`] and then its
//! `Fulfilled` status; on failure it queues only `Rejected` with the cause,
//! leaving the store untouched.
//!
//! ## How to use
//! 1) Register everything once during app setup:
//!    - `ctx.add_state(CreateUserInput::default());`
//!    - `ctx.add_state(CreateUserAction::default());`
//!    - `ctx.record_command(CreateUserCommand);`
//!
//! 2) When the user clicks "Save":
//!    - `ctx.update::<CreateUserInput>(|i| i.draft = Some(draft));`
//!    - `ctx.update::<CreateUserAction>(|a| a.status = ActionStatus::Pending);`
//!    - `ctx.dispatch::<CreateUserCommand>();`
//!    - later in the frame loop: `ctx.sync();`
//!
//! The dispatch site marks the status `Pending` synchronously so the same
//! frame (and any fetch-on-mount guard) sees it immediately; the command
//! queues only the terminal transition. The store event is queued before
//! the terminal status, so an observed `Fulfilled` means the store mutation
//! has already been applied.

use std::any::Any;

use log::{error, info};
use roster_states::{Command, CommandFuture, CommandSnapshot, State, Updater, state_assign_impl};
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

use super::api::{self, ApiError};
use super::model::{User, UserDraft, UserId};
use super::store::{StoreEvent, UsersStore};

/// Lifecycle of the most recent dispatch of one action type.
///
/// `Pending` transitions to exactly one of `Fulfilled` or `Rejected`; both
/// are terminal. Concurrent dispatches of the same action share the status
/// slot, so the slot reflects whichever response arrived last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionStatus {
    /// Nothing dispatched since startup or the last reset.
    #[default]
    Idle,
    /// Dispatched; the response has not arrived.
    Pending,
    /// The call succeeded and the store mutation is applied.
    Fulfilled,
    /// The call failed; the store is untouched and the cause is kept
    /// unmodified.
    Rejected(ApiError),
}

impl ActionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled)
    }

    pub fn error(&self) -> Option<&ApiError> {
        if let Self::Rejected(ref cause) = self {
            Some(cause)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Input states. Staged by the dispatch site, read by commands out of the
// snapshot. `None` means "no request intended".
// ---------------------------------------------------------------------------

/// Input for [`FetchUserCommand`]: which record to fetch.
#[derive(Debug, Clone, Default)]
pub struct FetchUserInput {
    pub id: Option<UserId>,
}

impl State for FetchUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Input for [`CreateUserCommand`]: the draft to POST.
#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
    pub draft: Option<UserDraft>,
}

impl State for CreateUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Input for [`UpdateUserCommand`]: the full record to PUT.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub user: Option<User>,
}

impl State for UpdateUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Input for [`DeleteUserCommand`]: which record to delete.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserInput {
    pub id: Option<UserId>,
}

impl State for DeleteUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

// ---------------------------------------------------------------------------
// Status states. Written whole by commands through `Updater::set`; read by
// the pages every frame.
// ---------------------------------------------------------------------------

/// Status of the list fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchUsersAction {
    pub status: ActionStatus,
}

impl State for FetchUsersAction {
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

/// Status of the fetch-by-id feeding `selected`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchUserAction {
    pub status: ActionStatus,
}

impl State for FetchUserAction {
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

/// Status of the create action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserAction {
    pub status: ActionStatus,
}

impl State for CreateUserAction {
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

/// Status of the update action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserAction {
    pub status: ActionStatus,
}

impl State for UpdateUserAction {
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

/// Status of the delete action, plus which row it targets so the table can
/// mark the right one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteUserAction {
    pub status: ActionStatus,
    pub target: Option<UserId>,
}

impl State for DeleteUserAction {
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

// ---------------------------------------------------------------------------
// Commands. Manual-only; dispatch explicitly via `ctx.dispatch::<C>()`.
// ---------------------------------------------------------------------------

/// GET the full listing and replace the store's collection.
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let config: AppConfig = snap.state::<AppConfig>().clone();

        Box::pin(async move {
            info!("FetchUsersCommand: fetching the user listing");
            match api::list_users(config.api_base_url()).await {
                Ok(users) => {
                    info!("FetchUsersCommand: fetched {} users", users.len());
                    updater
                        .apply::<UsersStore>(move |store| store.apply(StoreEvent::ListFetched(users)));
                    updater.set(FetchUsersAction {
                        status: ActionStatus::Fulfilled,
                    });
                }
                Err(cause) => {
                    error!("FetchUsersCommand: {cause}");
                    updater.set(FetchUsersAction {
                        status: ActionStatus::Rejected(cause),
                    });
                }
            }
        })
    }
}

/// GET a single record and overwrite the store's `selected`.
#[derive(Debug, Default)]
pub struct FetchUserCommand;

impl Command for FetchUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let input: FetchUserInput = snap.state::<FetchUserInput>().clone();
        let config: AppConfig = snap.state::<AppConfig>().clone();

        Box::pin(async move {
            let Some(id) = input.id else {
                info!("FetchUserCommand: no user id staged, skipping");
                // The dispatch site already marked the status pending.
                updater.set(FetchUserAction {
                    status: ActionStatus::Idle,
                });
                return;
            };

            info!("FetchUserCommand: fetching user {id}");
            match api::get_user(config.api_base_url(), id).await {
                Ok(user) => {
                    info!("FetchUserCommand: fetched user {id}");
                    updater
                        .apply::<UsersStore>(move |store| store.apply(StoreEvent::SingleFetched(user)));
                    updater.set(FetchUserAction {
                        status: ActionStatus::Fulfilled,
                    });
                }
                Err(cause) => {
                    error!("FetchUserCommand: user {id}: {cause}");
                    updater.set(FetchUserAction {
                        status: ActionStatus::Rejected(cause),
                    });
                }
            }
        })
    }
}

/// POST a draft; on success append the server's echo to the listing.
#[derive(Debug, Default)]
pub struct CreateUserCommand;

impl Command for CreateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let input: CreateUserInput = snap.state::<CreateUserInput>().clone();
        let config: AppConfig = snap.state::<AppConfig>().clone();

        Box::pin(async move {
            let Some(draft) = input.draft else {
                info!("CreateUserCommand: no draft staged, skipping");
                updater.set(CreateUserAction {
                    status: ActionStatus::Idle,
                });
                return;
            };

            info!("CreateUserCommand: creating user '{}'", draft.name);
            match api::create_user(config.api_base_url(), &draft).await {
                Ok(created) => {
                    info!("CreateUserCommand: created user {}", created.id);
                    updater
                        .apply::<UsersStore>(move |store| store.apply(StoreEvent::Created(created)));
                    updater.set(CreateUserAction {
                        status: ActionStatus::Fulfilled,
                    });
                }
                Err(cause) => {
                    error!("CreateUserCommand: {cause}");
                    updater.set(CreateUserAction {
                        status: ActionStatus::Rejected(cause),
                    });
                }
            }
        })
    }
}

/// PUT a full record; on success replace the matching row with the server's
/// echo.
#[derive(Debug, Default)]
pub struct UpdateUserCommand;

impl Command for UpdateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let input: UpdateUserInput = snap.state::<UpdateUserInput>().clone();
        let config: AppConfig = snap.state::<AppConfig>().clone();

        Box::pin(async move {
            let Some(user) = input.user else {
                info!("UpdateUserCommand: no user staged, skipping");
                updater.set(UpdateUserAction {
                    status: ActionStatus::Idle,
                });
                return;
            };

            let id = user.id;
            info!("UpdateUserCommand: updating user {id}");
            match api::update_user(config.api_base_url(), &user).await {
                Ok(updated) => {
                    info!("UpdateUserCommand: updated user {id}");
                    updater
                        .apply::<UsersStore>(move |store| store.apply(StoreEvent::Updated(updated)));
                    updater.set(UpdateUserAction {
                        status: ActionStatus::Fulfilled,
                    });
                }
                Err(cause) => {
                    error!("UpdateUserCommand: user {id}: {cause}");
                    updater.set(UpdateUserAction {
                        status: ActionStatus::Rejected(cause),
                    });
                }
            }
        })
    }
}

/// DELETE by id; on success drop the row. The response has no body, so the
/// staged id is what flows into the store event.
#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let input: DeleteUserInput = snap.state::<DeleteUserInput>().clone();
        let config: AppConfig = snap.state::<AppConfig>().clone();

        Box::pin(async move {
            let Some(id) = input.id else {
                info!("DeleteUserCommand: no user id staged, skipping");
                updater.set(DeleteUserAction {
                    status: ActionStatus::Idle,
                    target: None,
                });
                return;
            };

            info!("DeleteUserCommand: deleting user {id}");
            match api::delete_user(config.api_base_url(), id).await {
                Ok(()) => {
                    info!("DeleteUserCommand: deleted user {id}");
                    updater.apply::<UsersStore>(move |store| store.apply(StoreEvent::Deleted(id)));
                    updater.set(DeleteUserAction {
                        status: ActionStatus::Fulfilled,
                        target: Some(id),
                    });
                }
                Err(cause) => {
                    error!("DeleteUserCommand: user {id}: {cause}");
                    updater.set(DeleteUserAction {
                        status: ActionStatus::Rejected(cause),
                        target: Some(id),
                    });
                }
            }
        })
    }
}
