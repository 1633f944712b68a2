//! # procgate-client
//!
//! Typed consumer of the procgate HTTP API, plus the support utilities a
//! front end needs around it.
//!
//! ## Responsibilities
//! - Call the REST surface with bearer authentication
//!   ([`customers::CustomerClient`] over [`http::ApiClient`])
//! - Cache expensive lookups with a TTL ([`cache::TtlCache`])
//! - Memoize the signed-in user's profile and derive telemetry
//!   enrichment from it ([`profile::ProfileService`])
//! - Record events and captured errors ([`telemetry::TelemetrySink`])
//! - Probe the API's failure paths on purpose ([`chaos::ChaosRunner`])
//!
//! ## Dependency rule
//! Stands alone: talks to the API over the wire and depends on no other
//! procgate crate.

pub mod cache;
pub mod chaos;
pub mod customers;
pub mod error;
pub mod http;
pub mod model;
pub mod profile;
pub mod telemetry;
