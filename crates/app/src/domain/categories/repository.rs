//! Categories Repository

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::{FromRow, Row, SqliteConnection, query, query_as, query_scalar, sqlite::SqliteRow};

use crate::{
    domain::{
        associations::{self, Side},
        categories::models::Category,
        entity::EntityId,
    },
    gateway::Table,
};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const UPDATE_CATEGORY_SQL: &str = include_str!("sql/update_category.sql");
const DELETE_CATEGORY_SQL: &str = include_str!("sql/delete_category.sql");

impl<'r> FromRow<'r, SqliteRow> for Category {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("Id")?,
            name: row.try_get("Name")?,
            products: BTreeSet::new(),
        })
    }
}

#[async_trait]
impl Table for Category {
    async fn select_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, sqlx::Error> {
        let mut categories: Vec<Self> = query_as(LIST_CATEGORIES_SQL)
            .fetch_all(&mut *conn)
            .await?;

        let mut links = associations::all_linked(conn, Side::Category).await?;

        for category in &mut categories {
            category.products = links.remove(&category.id).unwrap_or_default();
        }

        Ok(categories)
    }

    async fn select_by_id(
        conn: &mut SqliteConnection,
        id: EntityId,
    ) -> Result<Option<Self>, sqlx::Error> {
        let Some(mut category) = query_as::<_, Self>(GET_CATEGORY_SQL)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        category.products = associations::linked(conn, Side::Category, id).await?;

        Ok(Some(category))
    }

    async fn insert(conn: &mut SqliteConnection, entity: &Self) -> Result<EntityId, sqlx::Error> {
        let id: EntityId = query_scalar(CREATE_CATEGORY_SQL)
            .bind(&entity.name)
            .fetch_one(&mut *conn)
            .await?;

        associations::replace(conn, Side::Category, id, &entity.products).await?;

        Ok(id)
    }

    async fn replace(conn: &mut SqliteConnection, entity: &Self) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_CATEGORY_SQL)
            .bind(entity.id)
            .bind(&entity.name)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        if rows_affected > 0 {
            associations::replace(conn, Side::Category, entity.id, &entity.products).await?;
        }

        Ok(rows_affected)
    }

    async fn delete(conn: &mut SqliteConnection, id: EntityId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CATEGORY_SQL)
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
