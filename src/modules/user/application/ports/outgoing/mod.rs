mod picture_query;
mod user_query;
mod user_repository;

pub use picture_query::{PictureQuery, PictureQueryError};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{CreateUserData, NewPictureData, UserRepository, UserRepositoryError};
