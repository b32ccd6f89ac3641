//! List Handler

use std::marker::PhantomData;

use salvo::{async_trait, prelude::*};

use crate::{
    extensions::*,
    resources::{Resource, errors::into_status_error},
};

use super::render_error;

/// `GET /{prefix}`
pub(crate) struct Index<T>(PhantomData<fn() -> T>);

impl<T> Index<T> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Resource> Index<T> {
    async fn respond(depot: &Depot) -> Result<Json<Vec<T::Response>>, StatusError> {
        let state = depot.state_or_500()?;

        let entities = T::service(&state.app)
            .list()
            .await
            .map_err(into_status_error)?;

        Ok(Json(entities.into_iter().map(T::Response::from).collect()))
    }
}

#[async_trait]
impl<T: Resource> Handler for Index<T> {
    async fn handle(
        &self,
        _req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        match Self::respond(depot).await {
            Ok(body) => res.render(body),
            Err(error) => render_error(res, error),
        }
    }
}
