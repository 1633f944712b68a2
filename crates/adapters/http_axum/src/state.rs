//! Shared application state for axum handlers.

use std::sync::Arc;

use procgate_app::dispatcher::Dispatcher;
use procgate_app::ports::ProcedureStore;
use procgate_app::registry::ResourceRegistry;

use crate::auth::BearerAuth;

/// Everything the HTTP handlers need, shared across requests.
///
/// Generic over the procedure store so the router can be exercised with
/// in-memory stubs in tests and with the SQLite store in production.
pub struct AppState<S> {
    /// Verb-to-procedure dispatch pipeline.
    pub dispatcher: Arc<Dispatcher<S>>,
    /// Routing table mapping URL slugs onto registered resources.
    pub registry: Arc<ResourceRegistry>,
    /// Bearer-token policy applied to every route except `/ping`.
    pub auth: Arc<BearerAuth>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            registry: Arc::clone(&self.registry),
            auth: Arc::clone(&self.auth),
        }
    }
}

impl<S> AppState<S>
where
    S: ProcedureStore + Send + Sync + 'static,
{
    /// Build state from owned parts, wrapping each in an [`Arc`].
    #[must_use]
    pub fn new(dispatcher: Dispatcher<S>, registry: ResourceRegistry, auth: BearerAuth) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            registry: Arc::new(registry),
            auth: Arc::new(auth),
        }
    }

    /// Build state from parts that are already shared.
    #[must_use]
    pub fn from_arcs(
        dispatcher: Arc<Dispatcher<S>>,
        registry: Arc<ResourceRegistry>,
        auth: Arc<BearerAuth>,
    ) -> Self {
        Self {
            dispatcher,
            registry,
            auth,
        }
    }
}
