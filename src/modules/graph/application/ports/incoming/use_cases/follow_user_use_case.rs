use async_trait::async_trait;

use crate::graph::application::domain::entities::EdgeRef;
use crate::user::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Follow Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowCommand {
    actor: UserId,
    target: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FollowCommandError {
    #[error("Actor id cannot be empty")]
    MissingActorId,

    #[error("Target id cannot be empty")]
    MissingTargetId,

    #[error("Actor id is not a valid UUID")]
    InvalidActorId,

    #[error("Target id is not a valid UUID")]
    InvalidTargetId,
}

impl FollowCommand {
    pub fn new(actor: &str, target: &str) -> Result<Self, FollowCommandError> {
        if actor.trim().is_empty() {
            return Err(FollowCommandError::MissingActorId);
        }
        if target.trim().is_empty() {
            return Err(FollowCommandError::MissingTargetId);
        }

        let actor = UserId::parse(actor).map_err(|_| FollowCommandError::InvalidActorId)?;
        let target = UserId::parse(target).map_err(|_| FollowCommandError::InvalidTargetId)?;

        Ok(Self { actor, target })
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn target(&self) -> UserId {
        self.target
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowUserError {
    #[error("User already being followed")]
    AlreadyFollowing,

    #[error("User not found")]
    UserNotFound,

    #[error("Graph store unavailable: {0}")]
    StoreUnavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait FollowUserUseCase: Send + Sync {
    async fn execute(&self, command: FollowCommand) -> Result<EdgeRef, FollowUserError>;
}
