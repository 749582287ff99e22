//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain's [`UserStore`] port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Store backing the `/users` resource; variant chosen at startup.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Bundle the user store for injection into handlers.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
