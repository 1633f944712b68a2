//! Dispatch requests — what the HTTP boundary hands the dispatcher.

use serde_json::Value;

use crate::entity::EntityName;
use crate::error::DispatchError;
use crate::verb::Verb;

/// One dispatchable operation: a verb applied to an entity, with up to two
/// optional inputs. Having neither an id nor a payload is valid (list).
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    verb: Verb,
    entity: EntityName,
    id: Option<i64>,
    payload: Option<Value>,
}

impl DispatchRequest {
    /// A request with neither id nor payload.
    #[must_use]
    pub fn new(verb: Verb, entity: EntityName) -> Self {
        Self {
            verb,
            entity,
            id: None,
            payload: None,
        }
    }

    /// Attach the integer key of the targeted row.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach a JSON payload. The value is passed through opaquely; nothing
    /// inspects or rewrites it before serialization.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    #[must_use]
    pub fn verb(&self) -> Verb {
        self.verb
    }

    #[must_use]
    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Build the parameter set for the derived procedure.
    ///
    /// The two parameters are included independently of each other: the id
    /// iff the request carries an id, the serialized payload iff the
    /// request carries a payload.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Json`] when the payload cannot be
    /// serialized.
    pub fn params(&self) -> Result<ProcedureParams, DispatchError> {
        let json = match &self.payload {
            Some(value) => Some(serde_json::to_string(value)?),
            None => None,
        };
        Ok(ProcedureParams { id: self.id, json })
    }
}

/// The named parameters bound to a procedure call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcedureParams {
    /// Present iff the request targeted a single row.
    pub id: Option<i64>,
    /// Canonical JSON text of the payload, present iff one was supplied.
    pub json: Option<String>,
}
