use async_trait::async_trait;

use crate::user::application::domain::entities::{validate_username, UserRef, UsernameError};

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    username: String,
    display_name: String,
    biography: String,
    verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserCommandError {
    #[error(transparent)]
    InvalidUsername(#[from] UsernameError),

    #[error("First and last name cannot both be empty")]
    EmptyName,

    #[error("Display name too long")]
    NameTooLong,
}

impl CreateUserCommand {
    pub fn new(
        username: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Self, CreateUserCommandError> {
        let username = validate_username(username)?;

        let display_name = format!("{} {}", first_name.trim(), last_name.trim())
            .trim()
            .to_string();

        if display_name.is_empty() {
            return Err(CreateUserCommandError::EmptyName);
        }

        if display_name.chars().count() > 101 {
            return Err(CreateUserCommandError::NameTooLong);
        }

        Ok(Self {
            username,
            display_name,
            biography: String::new(),
            verified: false,
        })
    }

    pub fn with_biography(mut self, biography: &str) -> Self {
        self.biography = biography.trim().to_string();
        self
    }

    /// Only reachable from trusted callers (demo seeding); the HTTP layer
    /// never sets it.
    pub fn mark_verified(mut self) -> Self {
        self.verified = true;
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn biography(&self) -> &str {
        &self.biography
    }

    pub fn verified(&self) -> bool {
        self.verified
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserRef, CreateUserError>;
}
