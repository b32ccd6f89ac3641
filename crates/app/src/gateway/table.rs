//! Storage mapping for entity types.

use async_trait::async_trait;
use sqlx::SqliteConnection;

use crate::domain::entity::{Entity, EntityId};

/// Maps an [`Entity`] onto its table and join rows.
///
/// Implementations run their statements on the connection they are given and
/// never commit; the surrounding [`UnitOfWork`](super::UnitOfWork) owns the
/// transaction.
#[async_trait]
pub trait Table: Entity {
    /// Every row, ordered by id.
    async fn select_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, sqlx::Error>;

    async fn select_by_id(
        conn: &mut SqliteConnection,
        id: EntityId,
    ) -> Result<Option<Self>, sqlx::Error>;

    /// Inserts the row and its associations, returning the assigned id.
    async fn insert(conn: &mut SqliteConnection, entity: &Self) -> Result<EntityId, sqlx::Error>;

    /// Overwrites the row and its associations, returning the number of rows matched.
    async fn replace(conn: &mut SqliteConnection, entity: &Self) -> Result<u64, sqlx::Error>;

    /// Deletes the row, returning the number of rows removed.
    async fn delete(conn: &mut SqliteConnection, id: EntityId) -> Result<u64, sqlx::Error>;
}
