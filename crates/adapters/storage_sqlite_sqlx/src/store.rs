//! `SQLite` implementation of [`ProcedureStore`].

use sqlx::SqlitePool;

use procgate_app::ports::ProcedureStore;
use procgate_domain::error::DispatchError;
use procgate_domain::procedure::ProcedureName;
use procgate_domain::request::ProcedureParams;

use crate::catalog::{ParamSlot, ProcedureCatalog, ProcedureDef};
use crate::error::StoreError;

/// `SQLite`-backed procedure store.
///
/// Each call resolves the derived name through the catalog, binds the
/// statement's declared parameters in order, and executes on a pooled
/// connection scoped to that call.
pub struct SqliteProcedureStore {
    pool: SqlitePool,
    catalog: ProcedureCatalog,
}

impl SqliteProcedureStore {
    /// Create a store over a pool and a fully registered catalog.
    #[must_use]
    pub fn new(pool: SqlitePool, catalog: ProcedureCatalog) -> Self {
        Self { pool, catalog }
    }

    fn resolve(&self, procedure: &ProcedureName) -> Result<&ProcedureDef, StoreError> {
        self.catalog
            .get(procedure)
            .ok_or_else(|| StoreError::UnknownProcedure(procedure.clone()))
    }
}

fn required_id(procedure: &ProcedureName, params: &ProcedureParams) -> Result<i64, StoreError> {
    params.id.ok_or_else(|| StoreError::MissingParameter {
        procedure: procedure.clone(),
        slot: ParamSlot::Id.name(),
    })
}

fn required_json(
    procedure: &ProcedureName,
    params: &ProcedureParams,
) -> Result<String, StoreError> {
    params.json.clone().ok_or_else(|| StoreError::MissingParameter {
        procedure: procedure.clone(),
        slot: ParamSlot::Json.name(),
    })
}

impl ProcedureStore for SqliteProcedureStore {
    async fn run_scalar(
        &self,
        procedure: &ProcedureName,
        params: &ProcedureParams,
    ) -> Result<Option<String>, DispatchError> {
        let def = self.resolve(procedure)?;

        let mut query = sqlx::query_scalar::<_, Option<String>>(def.sql());
        for slot in def.params() {
            query = match slot {
                ParamSlot::Id => query.bind(required_id(procedure, params)?),
                ParamSlot::Json => query.bind(required_json(procedure, params)?),
            };
        }

        let value = query
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from)?;

        Ok(value.flatten())
    }

    async fn run_rowcount(
        &self,
        procedure: &ProcedureName,
        params: &ProcedureParams,
    ) -> Result<u64, DispatchError> {
        let def = self.resolve(procedure)?;

        let mut query = sqlx::query(def.sql());
        for slot in def.params() {
            query = match slot {
                ParamSlot::Id => query.bind(required_id(procedure, params)?),
                ParamSlot::Json => query.bind(required_json(procedure, params)?),
            };
        }

        let result = query
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;

        Ok(result.rows_affected())
    }
}
