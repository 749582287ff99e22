//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_store;

pub use user_store::{UserStore, UserStoreError};
