//! Store-specific error type wrapping sqlx errors.

use procgate_domain::error::DispatchError;
use procgate_domain::procedure::ProcedureName;

/// Errors originating from the `SQLite` procedure store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A derived procedure name has no catalog entry.
    #[error("unknown procedure '{0}'")]
    UnknownProcedure(ProcedureName),

    /// A catalog registration reused an existing procedure name.
    #[error("procedure '{0}' registered twice")]
    DuplicateProcedure(ProcedureName),

    /// The statement declares a parameter the call did not supply.
    #[error("procedure '{procedure}' requires the {slot} parameter")]
    MissingParameter {
        procedure: ProcedureName,
        slot: &'static str,
    },
}

impl From<StoreError> for DispatchError {
    fn from(err: StoreError) -> Self {
        Self::Store(Box::new(err))
    }
}
