//! # procgate-domain
//!
//! Pure domain model for the procgate procedure gateway.
//!
//! ## Responsibilities
//! - Define **Verbs** (the closed operation set: `get`, `put`, `patch`, `delete`)
//! - Define **Entity names** (validated lowercase procedure fragments)
//! - Derive **Procedure names** (`web.<verb>_<entity>`, pure and deterministic)
//! - Define **Resources** (explicit item/collection declarations for routing)
//! - Define **Dispatch requests** (verb + entity + optional id + optional payload)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod entity;
pub mod procedure;
pub mod request;
pub mod resource;
pub mod verb;
