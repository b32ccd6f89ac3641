//! Product resource

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_app::{
    context::AppContext,
    domain::{EntitiesService, entity::EntityId, products::Product},
};

use crate::resources::{RequestBody, Resource};

/// Product create/update body.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductRequest {
    pub id: Option<EntityId>,
    pub title: String,

    /// Omitted prices read as zero.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(default, with = "rust_decimal::serde::float")]
    pub discounted_price: Decimal,

    pub description: String,
    pub image: String,

    /// Ids of linked categories; omitted means none.
    #[serde(default)]
    pub categories: Vec<EntityId>,
}

impl RequestBody for ProductRequest {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl From<ProductRequest> for Product {
    fn from(request: ProductRequest) -> Self {
        Product {
            id: request.id.unwrap_or_default(),
            title: request.title,
            price: request.price,
            discounted_price: request.discounted_price,
            description: request.description,
            image: request.image,
            categories: request.categories.into_iter().collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: EntityId,
    pub title: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub discounted_price: Decimal,

    pub description: String,
    pub image: String,
    pub categories: Vec<EntityId>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            discounted_price: product.discounted_price,
            description: product.description,
            image: product.image,
            categories: product.categories.into_iter().collect(),
        }
    }
}

impl Resource for Product {
    type Request = ProductRequest;
    type Response = ProductResponse;

    fn service(app: &AppContext) -> &Arc<dyn EntitiesService<Self>> {
        &app.products
    }
}
