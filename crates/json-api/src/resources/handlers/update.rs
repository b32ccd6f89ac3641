//! Update Handler

use std::marker::PhantomData;

use salvo::{async_trait, prelude::*};

use crate::{
    extensions::*,
    resources::{RequestBody, Resource, errors::into_status_error},
};

use super::render_error;

/// `PUT /{prefix}`, the body names the entity being replaced.
pub(crate) struct Update<T>(PhantomData<fn() -> T>);

impl<T> Update<T> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Resource> Update<T> {
    async fn respond(req: &mut Request, depot: &Depot) -> Result<(), StatusError> {
        let request = req
            .parse_json::<T::Request>()
            .await
            .or_400("Invalid payload")?;

        if request.id().is_none() {
            return Err(StatusError::bad_request().brief("id is required"));
        }

        let state = depot.state_or_500()?;

        T::service(&state.app)
            .update(request.into())
            .await
            .map_err(into_status_error)
    }
}

#[async_trait]
impl<T: Resource> Handler for Update<T> {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        match Self::respond(req, depot).await {
            Ok(()) => {
                res.status_code(StatusCode::NO_CONTENT);
            }
            Err(error) => render_error(res, error),
        }
    }
}
