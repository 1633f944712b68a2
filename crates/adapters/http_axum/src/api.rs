//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod resources;

use axum::Router;
use axum::routing::any;

use procgate_app::ports::ProcedureStore;

use crate::state::AppState;

/// Build the resource sub-router.
///
/// Routes are shaped, not named: `/{resource}` and `/{resource}/{id}`
/// serve every entry in the routing table, so registering a new resource
/// at startup needs no new route here.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ProcedureStore + Send + Sync + 'static,
{
    Router::new()
        .route("/{resource}", any(resources::collection::<S>))
        .route("/{resource}/{id}", any(resources::item::<S>))
}
