//! Entities service.

use std::marker::PhantomData;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        entity::{Entity, EntityId},
        errors::EntitiesServiceError,
    },
    gateway::{Table, UnitOfWork},
};

/// Gateway-backed service for any [`Table`] entity.
#[derive(Debug)]
pub struct SqliteEntitiesService<T> {
    db: Db,
    entity: PhantomData<fn() -> T>,
}

impl<T: Table> SqliteEntitiesService<T> {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Table> EntitiesService<T> for SqliteEntitiesService<T> {
    async fn list(&self) -> Result<Vec<T>, EntitiesServiceError> {
        let mut uow = UnitOfWork::begin(&self.db).await?;

        let entities = uow.list_all::<T>().await?;

        uow.commit().await?;

        Ok(entities)
    }

    async fn get(&self, id: EntityId) -> Result<T, EntitiesServiceError> {
        let mut uow = UnitOfWork::begin(&self.db).await?;

        let entity = uow.find_by_id::<T>(id).await?;

        uow.commit().await?;

        entity.ok_or(EntitiesServiceError::NotFound)
    }

    async fn create(&self, entity: T) -> Result<T, EntitiesServiceError> {
        let mut uow = UnitOfWork::begin_write(&self.db).await?;

        let created = uow.add(entity).await?;

        uow.commit().await?;

        Ok(created)
    }

    async fn update(&self, entity: T) -> Result<(), EntitiesServiceError> {
        let mut uow = UnitOfWork::begin_write(&self.db).await?;

        uow.mark_modified(&entity).await?;

        uow.commit().await
    }

    async fn delete(&self, id: EntityId) -> Result<(), EntitiesServiceError> {
        let mut uow = UnitOfWork::begin_write(&self.db).await?;

        let Some(entity) = uow.find_by_id::<T>(id).await? else {
            return Err(EntitiesServiceError::NotFound);
        };

        uow.remove(&entity).await?;

        uow.commit().await
    }
}

#[automock]
#[async_trait]
pub trait EntitiesService<T: Entity>: Send + Sync {
    /// Retrieves every entity.
    async fn list(&self) -> Result<Vec<T>, EntitiesServiceError>;

    /// Retrieves a single entity.
    async fn get(&self, id: EntityId) -> Result<T, EntitiesServiceError>;

    /// Stores a new entity, ignoring its id, and returns it with the assigned id.
    async fn create(&self, entity: T) -> Result<T, EntitiesServiceError>;

    /// Replaces the entity with the same id.
    async fn update(&self, entity: T) -> Result<(), EntitiesServiceError>;

    /// Deletes the entity with the given id.
    async fn delete(&self, id: EntityId) -> Result<(), EntitiesServiceError>;
}
