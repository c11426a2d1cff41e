use roster_business::{
    AppConfig, CreateUserAction, CreateUserCommand, CreateUserInput, DeleteUserAction,
    DeleteUserCommand, DeleteUserInput, FetchUserAction, FetchUserCommand, FetchUserInput,
    FetchUsersAction, FetchUsersCommand, Route, UpdateUserAction, UpdateUserCommand,
    UpdateUserInput, UsersStore,
};
use roster_states::{StateCtx, Time};

use crate::pages::{ListPageState, UserFormState};
use crate::widgets::ConfirmDeleteState;

/// The main application state.
///
/// Everything lives in the `StateCtx`: domain states and commands from the
/// business crate plus the page-local UI states defined in this crate.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(AppConfig::from_env())
    }
}

impl State {
    /// State wired to a test backend instead of the configured one.
    pub fn test(base_url: String) -> Self {
        Self::with_config(AppConfig::new(base_url))
    }

    fn with_config(config: AppConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(Route::default());
        ctx.add_state(UsersStore::default());

        // Command inputs
        ctx.add_state(FetchUserInput::default());
        ctx.add_state(CreateUserInput::default());
        ctx.add_state(UpdateUserInput::default());
        ctx.add_state(DeleteUserInput::default());

        // Action statuses
        ctx.add_state(FetchUsersAction::default());
        ctx.add_state(FetchUserAction::default());
        ctx.add_state(CreateUserAction::default());
        ctx.add_state(UpdateUserAction::default());
        ctx.add_state(DeleteUserAction::default());

        // Page-local UI states
        ctx.add_state(ListPageState::default());
        ctx.add_state(UserFormState::default());
        ctx.add_state(ConfirmDeleteState::default());

        // Commands
        ctx.record_command(FetchUsersCommand);
        ctx.record_command(FetchUserCommand);
        ctx.record_command(CreateUserCommand);
        ctx.record_command(UpdateUserCommand);
        ctx.record_command(DeleteUserCommand);

        Self { ctx }
    }
}
