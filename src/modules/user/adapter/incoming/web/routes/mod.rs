mod create_user;
mod get_user;
mod soft_delete_user;
mod user_pictures;

pub use create_user::*;
pub use get_user::*;
pub use soft_delete_user::*;
pub use user_pictures::*;
