//! Products Repository

use std::collections::BTreeSet;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, SqliteConnection, query, query_as, query_scalar, sqlite::SqliteRow};

use crate::{
    domain::{
        associations::{self, Side},
        entity::EntityId,
        products::models::Product,
    },
    gateway::Table,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

fn decimal_column(row: &SqliteRow, column: &str) -> sqlx::Result<Decimal> {
    row.try_get::<String, _>(column)?
        .parse::<Decimal>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}

impl<'r> FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("Id")?,
            title: row.try_get("Title")?,
            price: decimal_column(row, "Price")?,
            discounted_price: decimal_column(row, "DiscountedPrice")?,
            description: row.try_get("Description")?,
            image: row.try_get("Image")?,
            categories: BTreeSet::new(),
        })
    }
}

#[async_trait]
impl Table for Product {
    async fn select_all(conn: &mut SqliteConnection) -> Result<Vec<Self>, sqlx::Error> {
        let mut products: Vec<Self> = query_as(LIST_PRODUCTS_SQL).fetch_all(&mut *conn).await?;

        let mut links = associations::all_linked(conn, Side::Product).await?;

        for product in &mut products {
            product.categories = links.remove(&product.id).unwrap_or_default();
        }

        Ok(products)
    }

    async fn select_by_id(
        conn: &mut SqliteConnection,
        id: EntityId,
    ) -> Result<Option<Self>, sqlx::Error> {
        let Some(mut product) = query_as::<_, Self>(GET_PRODUCT_SQL)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        product.categories = associations::linked(conn, Side::Product, id).await?;

        Ok(Some(product))
    }

    async fn insert(conn: &mut SqliteConnection, entity: &Self) -> Result<EntityId, sqlx::Error> {
        let id: EntityId = query_scalar(CREATE_PRODUCT_SQL)
            .bind(&entity.title)
            .bind(entity.price.to_string())
            .bind(entity.discounted_price.to_string())
            .bind(&entity.description)
            .bind(&entity.image)
            .fetch_one(&mut *conn)
            .await?;

        associations::replace(conn, Side::Product, id, &entity.categories).await?;

        Ok(id)
    }

    async fn replace(conn: &mut SqliteConnection, entity: &Self) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_PRODUCT_SQL)
            .bind(entity.id)
            .bind(&entity.title)
            .bind(entity.price.to_string())
            .bind(entity.discounted_price.to_string())
            .bind(&entity.description)
            .bind(&entity.image)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        if rows_affected > 0 {
            associations::replace(conn, Side::Product, entity.id, &entity.categories).await?;
        }

        Ok(rows_affected)
    }

    async fn delete(conn: &mut SqliteConnection, id: EntityId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
