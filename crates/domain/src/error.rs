//! Common error types used across the workspace.

/// Errors raised while dispatching a verb to a procedure.
///
/// Absent results are deliberately not errors: "nothing found" and
/// "nothing changed" are `Ok(None)` dispatch outcomes, and the HTTP
/// boundary decides which status they become. Each layer defines its own
/// typed errors and converts into this enum via `From`, boxing the source.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The verb string is outside the closed `get`/`put`/`patch`/`delete`
    /// set. Raised at the boundary, before any store interaction.
    #[error("unsupported verb '{0}'")]
    UnsupportedVerb(String),

    /// An entity name failed validation.
    #[error("invalid entity name '{0}'")]
    InvalidEntityName(String),

    /// A resource registration claimed a path slug already in use.
    #[error("duplicate resource slug '{0}'")]
    DuplicateResource(String),

    /// Payload serialization or result parsing failed mid-dispatch.
    #[error("JSON error in dispatch round trip")]
    Json(#[from] serde_json::Error),

    /// The data store reported a failure; carried unmodified.
    #[error("data store error")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}
