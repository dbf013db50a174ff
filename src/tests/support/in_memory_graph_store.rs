use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::graph::application::domain::entities::{Direction, Edge, EdgeLabel};
use crate::graph::application::ports::outgoing::{GraphStore, GraphStoreError, NewEdge};
use crate::user::application::domain::entities::UserId;

#[derive(Default)]
struct GraphState {
    vertices: HashSet<UserId>,
    edges: Vec<Edge>,
    failure: Option<String>,
}

/// Graph store backed by a vector of edges.
///
/// Enforces the same `(from, to, label)` uniqueness as the database index,
/// so racing inserts behave like they do against Postgres.
#[derive(Clone, Default)]
pub struct InMemoryGraphStore {
    state: Arc<Mutex<GraphState>>,
}

impl InMemoryGraphStore {
    pub fn with_users(users: impl IntoIterator<Item = UserId>) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().vertices.extend(users);
        store
    }

    /// Soft-deletes `user`; its edges stay but stop being visible.
    pub fn deactivate(&self, user: UserId) {
        self.state.lock().unwrap().vertices.remove(&user);
    }

    pub fn edge_count(&self, from: UserId, to: UserId, label: EdgeLabel) -> usize {
        self.state
            .lock()
            .unwrap()
            .edges
            .iter()
            .filter(|e| e.from == from && e.to == to && e.label == label)
            .count()
    }

    pub fn total_edges(&self) -> usize {
        self.state.lock().unwrap().edges.len()
    }

    /// Every subsequent call fails with a database error carrying `message`.
    pub fn fail_with(&self, message: &str) {
        self.state.lock().unwrap().failure = Some(message.to_string());
    }

    fn check_failure(state: &GraphState) -> Result<(), GraphStoreError> {
        match &state.failure {
            Some(msg) => Err(GraphStoreError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn find_edge(
        &self,
        from: UserId,
        to: UserId,
        label: EdgeLabel,
    ) -> Result<Option<Edge>, GraphStoreError> {
        let found = {
            let state = self.state.lock().unwrap();
            Self::check_failure(&state)?;
            state
                .edges
                .iter()
                .filter(|e| state.vertices.contains(&e.from) && state.vertices.contains(&e.to))
                .find(|e| e.from == from && e.to == to && e.label == label)
                .cloned()
        };

        // Give concurrent callers a chance to pass the same pre-check.
        tokio::task::yield_now().await;

        Ok(found)
    }

    async fn insert_edge(&self, edge: NewEdge) -> Result<Edge, GraphStoreError> {
        let mut state = self.state.lock().unwrap();
        Self::check_failure(&state)?;

        if !state.vertices.contains(&edge.from) || !state.vertices.contains(&edge.to) {
            return Err(GraphStoreError::VertexNotFound);
        }
        if state
            .edges
            .iter()
            .any(|e| e.from == edge.from && e.to == edge.to && e.label == edge.label)
        {
            return Err(GraphStoreError::EdgeAlreadyExists);
        }

        let created = Edge {
            id: Uuid::new_v4(),
            from: edge.from,
            to: edge.to,
            label: edge.label,
            created_at: Utc::now(),
        };
        state.edges.push(created.clone());

        Ok(created)
    }

    async fn neighbours(
        &self,
        vertex: UserId,
        direction: Direction,
        label: EdgeLabel,
        limit: u64,
    ) -> Result<Vec<Edge>, GraphStoreError> {
        let state = self.state.lock().unwrap();
        Self::check_failure(&state)?;

        let edges = state
            .edges
            .iter()
            .rev()
            .filter(|e| e.label == label)
            .filter(|e| match direction {
                Direction::Outbound => e.from == vertex,
                Direction::Inbound => e.to == vertex,
            })
            .filter(|e| state.vertices.contains(&e.neighbour(direction)))
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(edges)
    }
}
