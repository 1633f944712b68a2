//! Dispatcher — the single generic pipeline from verb to procedure outcome.

use procgate_domain::error::DispatchError;
use procgate_domain::procedure::ProcedureName;
use procgate_domain::request::DispatchRequest;
use procgate_domain::verb::ExecutionMode;
use serde_json::{Map, Value};

use crate::ports::ProcedureStore;

/// Application service dispatching requests to the procedure store.
///
/// The dispatcher is stateless. Every call derives the procedure name from
/// verb and entity, builds the parameter set, runs one of the two execution
/// strategies, and normalizes the outcome into "present value" or
/// "absent". Concurrent calls share nothing but the store handle.
pub struct Dispatcher<S> {
    store: S,
}

impl<S: ProcedureStore> Dispatcher<S> {
    /// Create a dispatcher backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Execute one request and normalize its outcome.
    ///
    /// Row-count calls (`patch`, `delete`) yield `Some({})` when at least
    /// one row was affected and `None` otherwise. Scalar calls (`get`,
    /// `put`) yield the parsed JSON value when the procedure returned a
    /// non-null scalar and `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Json`] when the payload cannot be
    /// serialized or the scalar result is not valid JSON, and
    /// [`DispatchError::Store`] for failures reported by the store,
    /// propagated unmodified.
    pub async fn execute(&self, request: &DispatchRequest) -> Result<Option<Value>, DispatchError> {
        let procedure = ProcedureName::derive(request.verb(), request.entity());
        tracing::debug!(procedure = %procedure, "executing procedure");
        let params = request.params()?;
        match request.verb().mode() {
            ExecutionMode::RowCount => {
                let affected = self.store.run_rowcount(&procedure, &params).await?;
                Ok((affected > 0).then(|| Value::Object(Map::new())))
            }
            ExecutionMode::Scalar => match self.store.run_scalar(&procedure, &params).await? {
                Some(text) => Ok(Some(serde_json::from_str(&text)?)),
                None => Ok(None),
            },
        }
    }
}
