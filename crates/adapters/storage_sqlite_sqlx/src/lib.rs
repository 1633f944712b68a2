//! # procgate-adapter-storage-sqlite-sqlx
//!
//! `SQLite` procedure-execution adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `ProcedureStore` port defined in `procgate-app::ports`
//! - Realize the `web.*` procedure namespace as an explicit statement
//!   catalog registered at startup (`SQLite` has no stored procedures)
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Ship the demo `customer`/`customers` procedure set and its schema
//!
//! ## Dependency rule
//! Depends on `procgate-app` (for the port trait) and `procgate-domain`
//! (for names and parameters). The `app` and `domain` crates must never
//! reference this adapter.

pub mod catalog;
pub mod customers;
pub mod error;
pub mod pool;
pub mod store;

pub use self::catalog::{ParamSlot, ProcedureCatalog, ProcedureDef};
pub use self::error::StoreError;
pub use self::pool::{Config, Database};
pub use self::store::SqliteProcedureStore;
