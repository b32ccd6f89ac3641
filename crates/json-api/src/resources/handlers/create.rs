//! Create Handler

use std::marker::PhantomData;

use salvo::{async_trait, http::header::LOCATION, prelude::*};

use crate::{
    extensions::*,
    resources::{Resource, errors::into_status_error},
};

use super::render_error;

/// `POST /{prefix}`
pub(crate) struct Create<T> {
    location_prefix: String,
    entity: PhantomData<fn() -> T>,
}

impl<T> Create<T> {
    /// `location_prefix` is the collection path the created id is appended to.
    pub(crate) fn new(location_prefix: String) -> Self {
        Self {
            location_prefix,
            entity: PhantomData,
        }
    }
}

impl<T: Resource> Create<T> {
    async fn respond(
        &self,
        req: &mut Request,
        depot: &Depot,
        res: &mut Response,
    ) -> Result<Json<T::Response>, StatusError> {
        let request = req
            .parse_json::<T::Request>()
            .await
            .or_400("Invalid payload")?;

        let state = depot.state_or_500()?;

        let created = T::service(&state.app)
            .create(request.into())
            .await
            .map_err(into_status_error)?;

        res.add_header(
            LOCATION,
            format!("{}/{}", self.location_prefix, created.id()),
            true,
        )
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

        Ok(Json(T::Response::from(created)))
    }
}

#[async_trait]
impl<T: Resource> Handler for Create<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        match self.respond(req, depot, res).await {
            Ok(body) => res.render(body),
            Err(error) => render_error(res, error),
        }
    }
}
