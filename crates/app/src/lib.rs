//! # procgate-app
//!
//! Application layer — the dispatch pipeline and **port definitions**.
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement (driven/outbound):
//!   - `ProcedureStore` — scalar and row-count execution of named procedures
//! - Provide the **dispatcher** use-case: derive `web.<verb>_<entity>`, bind
//!   the optional id/payload parameters, pick the execution strategy from
//!   the verb, and normalize outcomes into "present value" or "absent"
//! - Provide the **resource registry** — the explicit, startup-time table of
//!   dispatchable resources
//! - Orchestrate domain objects without knowing *how* execution or IO works
//!
//! ## Dependency rule
//! Depends on `procgate-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod dispatcher;
pub mod ports;
pub mod registry;
