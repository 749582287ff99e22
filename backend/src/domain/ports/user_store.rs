//! Port abstraction over user record storage.
//!
//! Two interchangeable adapters implement this port: the in-memory collection
//! in `outbound::persistence::memory` and the PostgreSQL adapter in
//! `outbound::persistence::diesel_user_store`. Handlers depend only on the
//! trait so deployments pick one variant at startup.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, UserPatch};

use super::define_port_error;

define_port_error! {
    /// Failures raised by user store adapters.
    pub enum UserStoreError {
        /// The targeted record does not exist.
        NotFound { id: UserId } => "user {id} not found",
        /// Store connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
    }
}

/// CRUD contract shared by both store variants.
///
/// Absent records are an error only for `update`; `get` reports absence as
/// `None` and `delete` is an idempotent no-op.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return every live record, in insertion order for the in-memory
    /// variant and id order for the persistent one.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    /// Create a record, assigning a fresh identifier, and return it.
    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError>;

    /// Fetch a record by identifier; `None` when absent.
    async fn get(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Merge the supplied fields into an existing record and return the
    /// updated record. Fails with [`UserStoreError::NotFound`] when absent.
    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, UserStoreError>;

    /// Remove a record by identifier. A no-op when the record is absent.
    async fn delete(&self, id: UserId) -> Result<(), UserStoreError>;
}
