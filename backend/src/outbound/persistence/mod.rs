//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the `ApplicationStore` port backed by PostgreSQL via the Diesel
//! ORM with async support through `diesel-async` and `bb8` connection
//! pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the store only translates between Diesel rows and
//!   domain records. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) never leave this module.
//! - **Embedded migrations**: the schema ships inside the binary and is
//!   applied at startup by [`run_migrations`].
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselApplicationStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tracker")).await?;
//! let store = DieselApplicationStore::new(pool);
//! ```

mod diesel_application_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_application_store::DieselApplicationStore;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
