//! Resource Handlers
//!
//! Salvo's handler macros do not accept generic functions, so each route is a
//! small generic struct implementing [`salvo::Handler`] directly.

mod create;
mod delete;
mod get;
mod index;
mod update;

pub(crate) use create::Create;
pub(crate) use delete::Delete;
pub(crate) use get::Get;
pub(crate) use index::Index;
pub(crate) use update::Update;

use salvo::prelude::*;

use catalog_app::domain::entity::EntityId;

/// Reads the numeric `{id}` path parameter.
fn path_id(req: &Request) -> Result<EntityId, StatusError> {
    req.param::<EntityId>("id")
        .ok_or_else(StatusError::not_found)
}

/// Renders a failed request. Missing entities answer with a bare `404`.
fn render_error(res: &mut Response, error: StatusError) {
    if error.code == StatusCode::NOT_FOUND {
        res.status_code(StatusCode::NOT_FOUND);
    } else {
        res.render(error);
    }
}
