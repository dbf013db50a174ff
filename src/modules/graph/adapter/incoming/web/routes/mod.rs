mod follow_user;
mod list_connections;

pub use follow_user::*;
pub use list_connections::*;
