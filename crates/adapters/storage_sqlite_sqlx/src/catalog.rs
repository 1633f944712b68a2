//! Procedure catalog — the explicit statement registry behind `web.*`.
//!
//! `SQLite` has no stored procedures, so every dispatchable procedure is a
//! named statement registered here at startup. Executing a name with no
//! entry fails the same way a missing stored procedure would.

use std::collections::HashMap;

use procgate_domain::procedure::ProcedureName;

use crate::error::StoreError;

/// Which value a positional placeholder consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSlot {
    /// The integer key of the targeted row.
    Id,
    /// The canonical JSON text of the payload.
    Json,
}

impl ParamSlot {
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Json => "Json",
        }
    }
}

/// One named statement standing in for a stored procedure.
///
/// `params` fixes the bind order of the statement's numbered placeholders
/// (`?1`, `?2`, …); every declared slot must be present in the call's
/// parameter set.
#[derive(Debug, Clone)]
pub struct ProcedureDef {
    name: ProcedureName,
    sql: &'static str,
    params: &'static [ParamSlot],
}

impl ProcedureDef {
    /// Declare a procedure over a static statement.
    #[must_use]
    pub fn new(name: ProcedureName, sql: &'static str, params: &'static [ParamSlot]) -> Self {
        Self { name, sql, params }
    }

    #[must_use]
    pub fn name(&self) -> &ProcedureName {
        &self.name
    }

    #[must_use]
    pub fn sql(&self) -> &'static str {
        self.sql
    }

    #[must_use]
    pub fn params(&self) -> &'static [ParamSlot] {
        self.params
    }
}

/// Registry of every procedure the store can execute.
#[derive(Debug, Default)]
pub struct ProcedureCatalog {
    entries: HashMap<ProcedureName, ProcedureDef>,
}

impl ProcedureCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a procedure definition.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateProcedure`] when the name is already
    /// registered.
    pub fn register(&mut self, def: ProcedureDef) -> Result<(), StoreError> {
        if self.entries.contains_key(def.name()) {
            return Err(StoreError::DuplicateProcedure(def.name().clone()));
        }
        self.entries.insert(def.name().clone(), def);
        Ok(())
    }

    /// Resolve a derived procedure name to its definition.
    #[must_use]
    pub fn get(&self, name: &ProcedureName) -> Option<&ProcedureDef> {
        self.entries.get(name)
    }

    /// Number of registered procedures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
