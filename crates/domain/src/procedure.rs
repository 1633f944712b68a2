//! Procedure names — deterministic derivation of `web.<verb>_<entity>`.

use std::fmt;

use crate::entity::EntityName;
use crate::verb::Verb;

/// The schema every dispatchable procedure lives under.
pub const PROCEDURE_SCHEMA: &str = "web";

/// A fully derived procedure name such as `web.get_customers`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcedureName(String);

impl ProcedureName {
    /// Derive the procedure name for a verb acting on an entity.
    ///
    /// Derivation is a pure function: the same verb and entity always yield
    /// the same name, the result is entirely lowercase, and no IO is
    /// involved.
    #[must_use]
    pub fn derive(verb: Verb, entity: &EntityName) -> Self {
        Self(format!("{PROCEDURE_SCHEMA}.{verb}_{entity}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcedureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
