mod follow_user_service;
mod list_connections_service;

pub use follow_user_service::FollowUserService;
pub use list_connections_service::{ListConnectionsService, CONNECTION_LIMIT};
