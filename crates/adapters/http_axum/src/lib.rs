//! # procgate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the generic JSON REST surface (`/{collection}`, `/{item}/{id}`)
//!   for every resource registered in the routing table (driving adapter)
//! - Translate HTTP methods into dispatch verbs at the boundary, before
//!   anything touches the data store
//! - Enforce the bearer-token policy on every route except `/ping`
//! - Map dispatch outcomes and errors into HTTP statuses and JSON bodies
//!
//! ## Dependency rule
//! Depends on `procgate-app` (for the dispatcher and the port traits) and
//! `procgate-domain` (for verbs, resources and requests). Never leaks axum
//! types into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;
