//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use catalog_app::domain::{categories::Category, products::Product};

use crate::{
    healthcheck,
    observability::{metrics_handler, request_logging},
    resources::{catcher, resource},
    state::State,
};

fn app_router(state: Arc<State>, metrics_enabled: bool) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(resource::<Category>("/categories"))
        .push(resource::<Product>("/products"));

    if metrics_enabled {
        router.push(Router::with_path("metrics").get(metrics_handler))
    } else {
        router
    }
}

/// The app router behind the catcher that keeps `404` bodies empty.
pub(crate) fn app_service(state: Arc<State>, metrics_enabled: bool) -> Service {
    Service::new(app_router(state, metrics_enabled)).catcher(catcher())
}
