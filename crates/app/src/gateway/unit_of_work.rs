//! Unit of work over a single transaction.

use sqlx::{Sqlite, Transaction};
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        entity::{Entity, EntityId},
        errors::EntitiesServiceError,
    },
    gateway::Table,
};

/// Stages mutations inside one open transaction.
///
/// Nothing staged here is visible to other connections until [`commit`](Self::commit)
/// succeeds. Dropping a unit of work without committing rolls everything back.
#[derive(Debug)]
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
    missing: Option<(&'static str, EntityId)>,
}

impl UnitOfWork {
    /// Open a unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error when the transaction cannot be started.
    pub async fn begin(db: &Db) -> Result<Self, EntitiesServiceError> {
        Ok(Self {
            tx: db.begin().await?,
            missing: None,
        })
    }

    /// Open a unit of work that will stage mutations.
    ///
    /// The write lock is taken up front, so concurrent writers queue on the
    /// busy timeout rather than failing on a stale read snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when the transaction cannot be started.
    pub async fn begin_write(db: &Db) -> Result<Self, EntitiesServiceError> {
        Ok(Self {
            tx: db.begin_write().await?,
            missing: None,
        })
    }

    /// Every stored instance of `T`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails.
    #[tracing::instrument(
        name = "gateway.list_all",
        skip(self),
        fields(entity_type = T::type_as_str()),
        err
    )]
    pub async fn list_all<T: Table>(&mut self) -> Result<Vec<T>, EntitiesServiceError> {
        Ok(T::select_all(&mut self.tx).await?)
    }

    /// Look up `T` by primary key.
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails.
    #[tracing::instrument(
        name = "gateway.find_by_id",
        skip(self),
        fields(entity_type = T::type_as_str()),
        err
    )]
    pub async fn find_by_id<T: Table>(
        &mut self,
        id: EntityId,
    ) -> Result<Option<T>, EntitiesServiceError> {
        Ok(T::select_by_id(&mut self.tx, id).await?)
    }

    /// Stage a new instance. The returned entity carries the id assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`EntitiesServiceError::Validation`] when a required field is missing,
    /// or a storage error when the insert is rejected.
    #[tracing::instrument(
        name = "gateway.add",
        skip(self, entity),
        fields(entity_type = T::type_as_str()),
        err
    )]
    pub async fn add<T: Table>(&mut self, entity: T) -> Result<T, EntitiesServiceError> {
        entity.validate()?;

        let id = T::insert(&mut self.tx, &entity).await?;

        debug!(id, "staged insert");

        Ok(entity.with_id(id))
    }

    /// Stage a full replacement of the row with the entity's id.
    ///
    /// An unknown id is not reported here; the following [`commit`](Self::commit)
    /// fails with [`EntitiesServiceError::NotFound`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`EntitiesServiceError::Validation`] when a required field is missing,
    /// or a storage error when the update is rejected.
    #[tracing::instrument(
        name = "gateway.mark_modified",
        skip(self, entity),
        fields(entity_type = T::type_as_str(), id = entity.id()),
        err
    )]
    pub async fn mark_modified<T: Table>(&mut self, entity: &T) -> Result<(), EntitiesServiceError> {
        entity.validate()?;

        if T::replace(&mut self.tx, entity).await? == 0 {
            self.missing.get_or_insert((T::type_as_str(), entity.id()));
        }

        Ok(())
    }

    /// Stage deletion of the row matching the entity's id.
    ///
    /// # Errors
    ///
    /// Returns an error when the delete is rejected.
    #[tracing::instrument(
        name = "gateway.remove",
        skip(self, entity),
        fields(entity_type = T::type_as_str(), id = entity.id()),
        err
    )]
    pub async fn remove<T: Table>(&mut self, entity: &T) -> Result<(), EntitiesServiceError> {
        if T::delete(&mut self.tx, entity.id()).await? == 0 {
            self.missing.get_or_insert((T::type_as_str(), entity.id()));
        }

        Ok(())
    }

    /// Persist everything staged since [`begin`](Self::begin), or nothing at all.
    ///
    /// # Errors
    ///
    /// Returns [`EntitiesServiceError::NotFound`] when a staged replacement or
    /// deletion matched no row, or a storage error when the commit fails.
    pub async fn commit(self) -> Result<(), EntitiesServiceError> {
        if let Some((entity_type, id)) = self.missing {
            debug!(entity_type, id, "rolling back: staged change matched no row");

            self.tx.rollback().await?;

            return Err(EntitiesServiceError::NotFound);
        }

        self.tx.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use testresult::TestResult;

    use crate::{
        database::{self, PoolSettings},
        domain::{EntitiesService, SqliteEntitiesService, categories::models::Category},
        test::TestContext,
    };

    use super::*;

    fn books() -> Category {
        Category {
            id: 0,
            name: "Books".to_string(),
            products: BTreeSet::new(),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_ids_in_insertion_order() -> TestResult {
        let ctx = TestContext::new().await?;

        let mut uow = UnitOfWork::begin(&ctx.db).await?;

        let first = uow.add(books()).await?;
        let second = uow.add(books()).await?;

        uow.commit().await?;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_entity() -> TestResult {
        let ctx = TestContext::new().await?;

        let mut uow = UnitOfWork::begin(&ctx.db).await?;

        let result = uow
            .add(Category {
                name: " ".to_string(),
                ..books()
            })
            .await;

        assert!(
            matches!(result, Err(EntitiesServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_uncommitted_changes_are_discarded_on_drop() -> TestResult {
        let ctx = TestContext::new().await?;

        {
            let mut uow = UnitOfWork::begin(&ctx.db).await?;
            uow.add(books()).await?;
        }

        let mut uow = UnitOfWork::begin(&ctx.db).await?;
        let categories = uow.list_all::<Category>().await?;

        assert!(categories.is_empty(), "dropped unit of work must not persist");

        Ok(())
    }

    #[tokio::test]
    async fn test_commit_fails_and_rolls_back_when_replacement_misses() -> TestResult {
        let ctx = TestContext::new().await?;

        let mut uow = UnitOfWork::begin(&ctx.db).await?;

        uow.add(books()).await?;
        uow.mark_modified(&books().with_id(42)).await?;

        let result = uow.commit().await;

        assert!(
            matches!(result, Err(EntitiesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        let mut uow = UnitOfWork::begin(&ctx.db).await?;
        let categories = uow.list_all::<Category>().await?;

        assert!(categories.is_empty(), "failed commit must not partially apply");

        Ok(())
    }

    #[tokio::test]
    async fn test_staged_changes_invisible_to_other_connections() -> TestResult {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}", dir.path().join("catalog.db").display());

        let pool = database::connect(
            &url,
            PoolSettings {
                max_connections: 2,
                ..PoolSettings::default()
            },
        )
        .await?;

        database::migrate(&pool).await?;

        let db = Db::new(pool);

        let mut writer = UnitOfWork::begin(&db).await?;
        let created = writer.add(books()).await?;

        let mut reader = UnitOfWork::begin(&db).await?;
        let before = reader.find_by_id::<Category>(created.id).await?;
        reader.commit().await?;

        writer.commit().await?;

        let mut reader = UnitOfWork::begin(&db).await?;
        let after = reader.find_by_id::<Category>(created.id).await?;

        assert!(before.is_none(), "staged insert leaked before commit");
        assert_eq!(after.map(|category| category.name), Some("Books".to_string()));

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_deletes_of_distinct_rows_all_succeed() -> TestResult {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}", dir.path().join("catalog.db").display());

        let pool = database::connect(&url, PoolSettings::default()).await?;
        database::migrate(&pool).await?;

        let db = Db::new(pool);
        let categories = SqliteEntitiesService::<Category>::new(db.clone());

        let mut ids = Vec::new();

        for _ in 0..20 {
            ids.push(categories.create(books()).await?.id);
        }

        let mut deletes = tokio::task::JoinSet::new();

        for id in ids {
            let db = db.clone();

            deletes.spawn(async move {
                SqliteEntitiesService::<Category>::new(db).delete(id).await
            });
        }

        while let Some(result) = deletes.join_next().await {
            result??;
        }

        assert!(
            categories.list().await?.is_empty(),
            "every category should be deleted"
        );

        Ok(())
    }
}
