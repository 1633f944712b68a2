//! Procedure store port — execution of named procedures.

use std::future::Future;

use procgate_domain::error::DispatchError;
use procgate_domain::procedure::ProcedureName;
use procgate_domain::request::ProcedureParams;

/// Executes named procedures against the backing data store.
///
/// Implementations acquire a connection per call, scope it to that call,
/// and release it on every path, including errors. No retries, no explicit
/// timeouts, no batching, no state shared between calls.
pub trait ProcedureStore {
    /// Run a scalar-returning procedure (`get`, `put`).
    ///
    /// Returns the single JSON text value the procedure produced, or `None`
    /// when it produced no row or a null scalar.
    fn run_scalar(
        &self,
        procedure: &ProcedureName,
        params: &ProcedureParams,
    ) -> impl Future<Output = Result<Option<String>, DispatchError>> + Send;

    /// Run a row-count-returning procedure (`patch`, `delete`).
    ///
    /// Returns the number of rows the procedure affected.
    fn run_rowcount(
        &self,
        procedure: &ProcedureName,
        params: &ProcedureParams,
    ) -> impl Future<Output = Result<u64, DispatchError>> + Send;
}

impl<T: ProcedureStore + Send + Sync> ProcedureStore for std::sync::Arc<T> {
    fn run_scalar(
        &self,
        procedure: &ProcedureName,
        params: &ProcedureParams,
    ) -> impl Future<Output = Result<Option<String>, DispatchError>> + Send {
        (**self).run_scalar(procedure, params)
    }

    fn run_rowcount(
        &self,
        procedure: &ProcedureName,
        params: &ProcedureParams,
    ) -> impl Future<Output = Result<u64, DispatchError>> + Send {
        (**self).run_rowcount(procedure, params)
    }
}
