pub mod user_pictures;
pub mod users;
