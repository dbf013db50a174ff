use async_trait::async_trait;
use std::collections::HashMap;
use tracing::error;

use crate::graph::application::{
    domain::entities::{Direction, EdgeLabel},
    ports::{
        incoming::use_cases::{ListConnectionsError, ListConnectionsUseCase},
        outgoing::GraphStore,
    },
};
use crate::user::application::{
    domain::entities::{UserId, UserSummary},
    ports::outgoing::UserQuery,
};

pub const CONNECTION_LIMIT: u64 = 100;

#[derive(Debug, Clone)]
pub struct ListConnectionsService<G, Q>
where
    G: GraphStore + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    store: G,
    users: Q,
}

impl<G, Q> ListConnectionsService<G, Q>
where
    G: GraphStore + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    pub fn new(store: G, users: Q) -> Self {
        Self { store, users }
    }
}

#[async_trait]
impl<G, Q> ListConnectionsUseCase for ListConnectionsService<G, Q>
where
    G: GraphStore + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        direction: Direction,
    ) -> Result<Vec<UserSummary>, ListConnectionsError> {
        let exists = self
            .users
            .find_by_id(user)
            .await
            .map_err(|e| ListConnectionsError::QueryFailed(e.to_string()))?
            .is_some();

        if !exists {
            return Err(ListConnectionsError::UserNotFound);
        }

        let edges = self
            .store
            .neighbours(user, direction, EdgeLabel::Follows, CONNECTION_LIMIT)
            .await
            .map_err(|e| {
                error!(user_id = %user, ?direction, "graph traversal failed: {}", e);
                ListConnectionsError::QueryFailed(e.to_string())
            })?;

        let ids: Vec<UserId> = edges.iter().map(|e| e.neighbour(direction)).collect();

        let mut by_id: HashMap<UserId, UserSummary> = self
            .users
            .find_summaries(&ids)
            .await
            .map_err(|e| ListConnectionsError::QueryFailed(e.to_string()))?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        // Keep traversal order (newest edge first); deleted users drop out.
        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }
}
