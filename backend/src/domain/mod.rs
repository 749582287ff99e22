//! Domain entities, errors, and ports.
//!
//! Purpose: define the strongly typed user record, the payload types accepted
//! by store mutations, and the transport-agnostic error envelope shared by
//! every adapter. Serialisation contracts (serde) are documented on each
//! type's Rustdoc.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::user::{NewUser, User, UserId, UserPatch};

/// Convenient result alias for operations that surface domain errors.
pub type ApiResult<T> = Result<T, Error>;
