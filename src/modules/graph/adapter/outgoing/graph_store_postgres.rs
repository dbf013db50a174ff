use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, QueryResult,
    Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::application::{
    domain::entities::{Direction, Edge, EdgeLabel},
    ports::outgoing::{GraphStore, GraphStoreError, NewEdge},
};
use crate::shared::persistence::is_unique_violation;
use crate::user::application::domain::entities::UserId;

use super::sea_orm_entity::social_edges::Entity as EdgeEntity;

/// Graph store backed by the `social_edges` table.
#[derive(Debug, Clone)]
pub struct GraphStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl GraphStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Guarded insert:
    /// - both endpoints must be active users
    /// - on conflict (from_user, to_user, label) do nothing
    fn guarded_insert_stmt(id: Uuid, edge: &NewEdge, created_at: chrono::DateTime<Utc>) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO social_edges (id, from_user, to_user, label, created_at)
            SELECT $1, a.id, t.id, $4, $5
            FROM users a
            JOIN users t
              ON t.id = $3
             AND t.status = 'active'
            WHERE a.id = $2
              AND a.status = 'active'
            ON CONFLICT (from_user, to_user, label) DO NOTHING
            "#,
            vec![
                id.into(),
                edge.from.value().into(),
                edge.to.value().into(),
                edge.label.into(),
                created_at.fixed_offset().into(),
            ],
        )
    }

    /// Explains a guarded insert that affected no rows.
    fn probe_stmt(edge: &NewEdge) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              EXISTS (
                SELECT 1 FROM users u
                WHERE u.id = $1 AND u.status = 'active'
              ) AS from_ok,
              EXISTS (
                SELECT 1 FROM users u
                WHERE u.id = $2 AND u.status = 'active'
              ) AS to_ok,
              EXISTS (
                SELECT 1 FROM social_edges e
                WHERE e.from_user = $1 AND e.to_user = $2 AND e.label = $3
              ) AS edge_exists
            "#,
            vec![
                edge.from.value().into(),
                edge.to.value().into(),
                edge.label.into(),
            ],
        )
    }

    /// Edge lookup that ignores edges touching an inactive user.
    fn find_edge_stmt(from: UserId, to: UserId, label: EdgeLabel) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT e.id, e.from_user, e.to_user, e.label, e.created_at
            FROM social_edges e
            JOIN users a ON a.id = e.from_user AND a.status = 'active'
            JOIN users t ON t.id = e.to_user AND t.status = 'active'
            WHERE e.from_user = $1 AND e.to_user = $2 AND e.label = $3
            LIMIT 1
            "#,
            vec![from.value().into(), to.value().into(), label.into()],
        )
    }

    /// One hop from `vertex`; the limit applies after inactive neighbours
    /// are dropped.
    fn neighbours_stmt(
        vertex: UserId,
        direction: Direction,
        label: EdgeLabel,
        limit: u64,
    ) -> Statement {
        let (anchor, neighbour) = match direction {
            Direction::Outbound => ("from_user", "to_user"),
            Direction::Inbound => ("to_user", "from_user"),
        };

        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT e.id, e.from_user, e.to_user, e.label, e.created_at
                FROM social_edges e
                JOIN users n ON n.id = e.{neighbour} AND n.status = 'active'
                WHERE e.{anchor} = $1 AND e.label = $2
                ORDER BY e.created_at DESC
                LIMIT $3
                "#
            ),
            vec![
                vertex.value().into(),
                label.into(),
                i64::try_from(limit).unwrap_or(i64::MAX).into(),
            ],
        )
    }

    fn map_db_err(e: DbErr) -> GraphStoreError {
        if is_unique_violation(&e) {
            GraphStoreError::EdgeAlreadyExists
        } else {
            GraphStoreError::DatabaseError(e.to_string())
        }
    }

    /// Missing endpoints win over an existing edge.
    async fn resolve_insert_failure(&self, edge: &NewEdge) -> GraphStoreError {
        let row = match self.db.query_one(Self::probe_stmt(edge)).await {
            Ok(Some(row)) => row,
            Ok(None) => {
                return GraphStoreError::DatabaseError("Probe query returned no rows".to_string())
            }
            Err(e) => return Self::map_db_err(e),
        };

        let (from_ok, to_ok, edge_exists) = match Self::probe_flags(&row) {
            Ok(flags) => flags,
            Err(e) => return Self::map_db_err(e),
        };

        if !from_ok || !to_ok {
            return GraphStoreError::VertexNotFound;
        }
        if edge_exists {
            return GraphStoreError::EdgeAlreadyExists;
        }

        GraphStoreError::DatabaseError("Unexpected insert resolution state".to_string())
    }

    fn probe_flags(row: &QueryResult) -> Result<(bool, bool, bool), DbErr> {
        Ok((
            row.try_get("", "from_ok")?,
            row.try_get("", "to_ok")?,
            row.try_get("", "edge_exists")?,
        ))
    }
}

#[async_trait]
impl GraphStore for GraphStorePostgres {
    async fn find_edge(
        &self,
        from: UserId,
        to: UserId,
        label: EdgeLabel,
    ) -> Result<Option<Edge>, GraphStoreError> {
        let model = EdgeEntity::find()
            .from_raw_sql(Self::find_edge_stmt(from, to, label))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_edge()))
    }

    async fn insert_edge(&self, edge: NewEdge) -> Result<Edge, GraphStoreError> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        let result = self
            .db
            .execute(Self::guarded_insert_stmt(id, &edge, created_at))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(self.resolve_insert_failure(&edge).await);
        }

        Ok(Edge {
            id,
            from: edge.from,
            to: edge.to,
            label: edge.label,
            created_at,
        })
    }

    async fn neighbours(
        &self,
        vertex: UserId,
        direction: Direction,
        label: EdgeLabel,
        limit: u64,
    ) -> Result<Vec<Edge>, GraphStoreError> {
        let models = EdgeEntity::find()
            .from_raw_sql(Self::neighbours_stmt(vertex, direction, label, limit))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_edge()).collect())
    }
}
