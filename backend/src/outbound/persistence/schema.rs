//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Job applications table.
    ///
    /// One flat row per record; `id` is the opaque primary key assigned by
    /// the service. There are no secondary indexes.
    job_applications (id) {
        /// Primary key.
        id -> Text,
        company -> Text,
        role -> Text,
        /// One of applied, interview, offer, rejected; NULL when unset.
        status -> Nullable<Text>,
        link -> Nullable<Text>,
        date_applied -> Nullable<Date>,
        notes -> Nullable<Text>,
        description -> Nullable<Text>,
    }
}
