//! Category resource

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use catalog_app::{
    context::AppContext,
    domain::{EntitiesService, categories::Category, entity::EntityId},
};

use crate::resources::{RequestBody, Resource};

/// Category create/update body.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryRequest {
    pub id: Option<EntityId>,
    pub name: String,

    /// Ids of linked products; omitted means none.
    #[serde(default)]
    pub products: Vec<EntityId>,
}

impl RequestBody for CategoryRequest {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl From<CategoryRequest> for Category {
    fn from(request: CategoryRequest) -> Self {
        Category {
            id: request.id.unwrap_or_default(),
            name: request.name,
            products: request.products.into_iter().collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct CategoryResponse {
    pub id: EntityId,
    pub name: String,
    pub products: Vec<EntityId>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            products: category.products.into_iter().collect(),
        }
    }
}

impl Resource for Category {
    type Request = CategoryRequest;
    type Response = CategoryResponse;

    fn service(app: &AppContext) -> &Arc<dyn EntitiesService<Self>> {
        &app.categories
    }
}
