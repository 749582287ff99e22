//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations/`
//! exactly; `diesel print-schema` can regenerate them from a live database.

diesel::table! {
    /// User records table.
    users (id) {
        /// Primary key assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        /// Display name.
        name -> Varchar,
        /// Email address.
        email -> Varchar,
        /// Record creation timestamp, set on insert.
        created_at -> Timestamptz,
        /// Last modification timestamp, set on insert and update.
        updated_at -> Timestamptz,
    }
}
