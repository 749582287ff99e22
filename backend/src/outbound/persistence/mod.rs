//! Persistence adapters implementing the [`UserStore`] port.
//!
//! Two interchangeable variants:
//!
//! - [`InMemoryUserStore`]: an ordered in-memory collection guarded by a
//!   mutex, used when no database is configured.
//! - [`DieselUserStore`]: PostgreSQL via the Diesel ORM with async support
//!   through `diesel-async` and `bb8` connection pooling.
//!
//! Diesel row structs (`models`) and table definitions (`schema`) are
//! internal implementation details, never exposed to the domain layer.
//!
//! [`UserStore`]: crate::domain::ports::UserStore

mod diesel_user_store;
mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use memory::InMemoryUserStore;
pub use pool::{DbPool, PoolConfig, PoolError};
