//! Entities service error mapping.

use salvo::{catcher::Catcher, prelude::*};
use tracing::{debug, error};

use catalog_app::domain::EntitiesServiceError;

pub(crate) fn into_status_error(error: EntitiesServiceError) -> StatusError {
    match error {
        EntitiesServiceError::NotFound => {
            debug!("entity not found");

            StatusError::not_found()
        }
        EntitiesServiceError::Validation(reason) => {
            StatusError::bad_request().brief(reason.to_string())
        }
        EntitiesServiceError::InvalidReference => {
            StatusError::bad_request().brief("Related resource not found")
        }
        EntitiesServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Missing required data")
        }
        EntitiesServiceError::Persistence(source) => {
            error!("storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Leaves `404` responses without a body instead of salvo's error page.
#[handler]
async fn bare_not_found(res: &mut Response, ctrl: &mut FlowCtrl) {
    if res.status_code == Some(StatusCode::NOT_FOUND) {
        ctrl.skip_rest();
    }
}

pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(bare_not_found)
}
