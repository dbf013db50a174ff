use async_trait::async_trait;

use crate::graph::application::domain::entities::{Direction, Edge, EdgeLabel};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct NewEdge {
    pub from: UserId,
    pub to: UserId,
    pub label: EdgeLabel,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GraphStoreError {
    #[error("Edge already exists")]
    EdgeAlreadyExists,

    /// One of the endpoints is missing or no longer active.
    #[error("Vertex not found")]
    VertexNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Directed, labeled edges between users.
///
/// The store enforces at most one edge per `(from, to, label)`;
/// `insert_edge` reports a duplicate as `EdgeAlreadyExists` no matter how
/// many callers race on the same key.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// One-hop lookup of the edge `from -[label]-> to`. Edges touching an
    /// inactive user are not returned.
    async fn find_edge(
        &self,
        from: UserId,
        to: UserId,
        label: EdgeLabel,
    ) -> Result<Option<Edge>, GraphStoreError>;

    async fn insert_edge(&self, edge: NewEdge) -> Result<Edge, GraphStoreError>;

    /// One-hop traversal to active neighbours, newest edges first.
    async fn neighbours(
        &self,
        vertex: UserId,
        direction: Direction,
        label: EdgeLabel,
        limit: u64,
    ) -> Result<Vec<Edge>, GraphStoreError>;
}
