//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local store used when no database is configured and
//!   by tests
//! - **persistence**: PostgreSQL-backed store using Diesel ORM
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod memory;
pub mod persistence;
