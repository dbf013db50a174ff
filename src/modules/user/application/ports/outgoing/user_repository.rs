use async_trait::async_trait;

use crate::user::application::domain::entities::{PictureKind, UserId, UserRef};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub display_name: String,
    pub biography: String,
    pub verified: bool,
}

#[derive(Debug, Clone)]
pub struct NewPictureData {
    pub user: UserId,
    pub kind: PictureKind,
    pub url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserRef, UserRepositoryError>;

    /// Flips an active user to deleted. `UserNotFound` if there is no active user.
    async fn soft_delete_user(&self, id: UserId) -> Result<(), UserRepositoryError>;

    async fn add_picture(&self, data: NewPictureData) -> Result<(), UserRepositoryError>;
}
