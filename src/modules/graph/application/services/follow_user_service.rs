use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::graph::application::{
    domain::entities::{EdgeLabel, EdgeRef},
    ports::{
        incoming::use_cases::{FollowCommand, FollowUserError, FollowUserUseCase},
        outgoing::{GraphStore, GraphStoreError, NewEdge},
    },
};

/// Creates `follows` edges.
///
/// The existence check only produces a friendly error for the common case
/// and only sees edges between active users, so a deleted endpoint falls
/// through to the insert and reads as not found. The store's uniqueness
/// constraint on insert is what actually prevents duplicates when two
/// requests race.
#[derive(Debug, Clone)]
pub struct FollowUserService<G>
where
    G: GraphStore + Send + Sync,
{
    store: G,
}

impl<G> FollowUserService<G>
where
    G: GraphStore + Send + Sync,
{
    pub fn new(store: G) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<G> FollowUserUseCase for FollowUserService<G>
where
    G: GraphStore + Send + Sync,
{
    async fn execute(&self, command: FollowCommand) -> Result<EdgeRef, FollowUserError> {
        let actor = command.actor();
        let target = command.target();

        let existing = self
            .store
            .find_edge(actor, target, EdgeLabel::Follows)
            .await
            .map_err(|e| {
                error!(%actor, %target, "follow pre-check failed: {}", e);
                FollowUserError::StoreUnavailable(e.to_string())
            })?;

        if existing.is_some() {
            warn!(%actor, %target, "user already being followed");
            return Err(FollowUserError::AlreadyFollowing);
        }

        let edge = NewEdge {
            from: actor,
            to: target,
            label: EdgeLabel::Follows,
        };

        match self.store.insert_edge(edge).await {
            Ok(edge) => {
                info!(%actor, %target, edge_id = %edge.id, "follow edge created");
                Ok(edge.to_ref())
            }
            Err(GraphStoreError::EdgeAlreadyExists) => {
                warn!(%actor, %target, "concurrent follow rejected by store");
                Err(FollowUserError::AlreadyFollowing)
            }
            Err(GraphStoreError::VertexNotFound) => {
                warn!(%actor, %target, "follow between unknown users");
                Err(FollowUserError::UserNotFound)
            }
            Err(GraphStoreError::DatabaseError(e)) => {
                error!(%actor, %target, "follow insert failed: {}", e);
                Err(FollowUserError::StoreUnavailable(e))
            }
        }
    }
}
