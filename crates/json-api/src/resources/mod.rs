//! Generic JSON resources.
//!
//! Any entity with a [`Resource`] mapping is exposed under a path prefix with
//! the same five routes:
//!
//! | Method   | Path             | Success                                  |
//! |----------|------------------|------------------------------------------|
//! | `GET`    | `/{prefix}`      | `200` with every entity                  |
//! | `GET`    | `/{prefix}/{id}` | `200` with one entity                    |
//! | `POST`   | `/{prefix}`      | `201` with the created entity            |
//! | `PUT`    | `/{prefix}`      | `204`, the body carries the id           |
//! | `DELETE` | `/{prefix}/{id}` | `204`                                    |
//!
//! An unknown id answers `404` with an empty body.

use std::sync::Arc;

use salvo::Router;
use serde::{Serialize, de::DeserializeOwned};

use catalog_app::{
    context::AppContext,
    domain::{
        EntitiesService,
        entity::{Entity, EntityId},
    },
};

pub(crate) mod categories;
mod errors;
mod handlers;
pub(crate) mod products;

pub(crate) use errors::catcher;

use handlers::{Create, Delete, Get, Index, Update};

/// A request body accepted by create and update.
pub(crate) trait RequestBody: DeserializeOwned + Send + 'static {
    /// Identity named in the body, required by update and ignored by create.
    fn id(&self) -> Option<EntityId>;
}

/// HTTP mapping of an entity type.
pub(crate) trait Resource: Entity {
    type Request: RequestBody + Into<Self>;
    type Response: Serialize + From<Self> + Send + 'static;

    /// The service handling this entity type.
    fn service(app: &AppContext) -> &Arc<dyn EntitiesService<Self>>;
}

/// Builds the router exposing `T` under `prefix`.
pub(crate) fn resource<T: Resource>(prefix: &str) -> Router {
    let segment = prefix.trim_matches('/').to_owned();
    let location_prefix = format!("/{segment}");

    Router::with_path(segment)
        .get(Index::<T>::new())
        .post(Create::<T>::new(location_prefix))
        .put(Update::<T>::new())
        .push(
            Router::with_path("{id:num}")
                .get(Get::<T>::new())
                .delete(Delete::<T>::new()),
        )
}
