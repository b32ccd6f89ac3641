//! Category/Product join rows.
//!
//! The many-to-many association is stored once, as id pairs, and read from
//! whichever side is being loaded.

use std::collections::{BTreeMap, BTreeSet};

use sqlx::{SqliteConnection, query, query_as, query_scalar};

use crate::domain::entity::EntityId;

const LIST_LINKS_SQL: &str = include_str!("sql/list_links.sql");
const PRODUCTS_OF_CATEGORY_SQL: &str = include_str!("sql/products_of_category.sql");
const CATEGORIES_OF_PRODUCT_SQL: &str = include_str!("sql/categories_of_product.sql");
const DELETE_CATEGORY_LINKS_SQL: &str = include_str!("sql/delete_category_links.sql");
const DELETE_PRODUCT_LINKS_SQL: &str = include_str!("sql/delete_product_links.sql");
const CREATE_LINK_SQL: &str = include_str!("sql/create_link.sql");

/// The end of the association a query is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Category,
    Product,
}

impl Side {
    const fn select_sql(self) -> &'static str {
        match self {
            Self::Category => PRODUCTS_OF_CATEGORY_SQL,
            Self::Product => CATEGORIES_OF_PRODUCT_SQL,
        }
    }

    const fn delete_sql(self) -> &'static str {
        match self {
            Self::Category => DELETE_CATEGORY_LINKS_SQL,
            Self::Product => DELETE_PRODUCT_LINKS_SQL,
        }
    }

    /// Orders `(owner, other)` as `(category, product)`.
    const fn pair(self, owner: EntityId, other: EntityId) -> (EntityId, EntityId) {
        match self {
            Self::Category => (owner, other),
            Self::Product => (other, owner),
        }
    }
}

/// Ids linked to `owner`.
pub(crate) async fn linked(
    conn: &mut SqliteConnection,
    side: Side,
    owner: EntityId,
) -> Result<BTreeSet<EntityId>, sqlx::Error> {
    let ids: Vec<EntityId> = query_scalar(side.select_sql())
        .bind(owner)
        .fetch_all(&mut *conn)
        .await?;

    Ok(ids.into_iter().collect())
}

/// Linked ids for every owner on `side` that has at least one link.
pub(crate) async fn all_linked(
    conn: &mut SqliteConnection,
    side: Side,
) -> Result<BTreeMap<EntityId, BTreeSet<EntityId>>, sqlx::Error> {
    let rows: Vec<(EntityId, EntityId)> = query_as(LIST_LINKS_SQL).fetch_all(&mut *conn).await?;

    let mut links: BTreeMap<EntityId, BTreeSet<EntityId>> = BTreeMap::new();

    for (category, product) in rows {
        let (owner, other) = match side {
            Side::Category => (category, product),
            Side::Product => (product, category),
        };

        links.entry(owner).or_default().insert(other);
    }

    Ok(links)
}

/// Replaces every link of `owner` with `others`.
#[tracing::instrument(
    name = "associations.replace",
    skip(conn, others),
    fields(link_count = others.len()),
    err
)]
pub(crate) async fn replace(
    conn: &mut SqliteConnection,
    side: Side,
    owner: EntityId,
    others: &BTreeSet<EntityId>,
) -> Result<(), sqlx::Error> {
    query(side.delete_sql())
        .bind(owner)
        .execute(&mut *conn)
        .await?;

    for &other in others {
        let (category, product) = side.pair(owner, other);

        query(CREATE_LINK_SQL)
            .bind(category)
            .bind(product)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}
