mod follow_user_use_case;
mod list_connections_use_case;

pub use follow_user_use_case::{
    FollowCommand, FollowCommandError, FollowUserError, FollowUserUseCase,
};
pub use list_connections_use_case::{ListConnectionsError, ListConnectionsUseCase};
