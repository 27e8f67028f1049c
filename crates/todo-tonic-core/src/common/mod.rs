//! Shared, transport-agnostic pieces of the todo service: the error type and
//! the in-memory store. Nothing here knows about addresses, listeners, or
//! process lifecycle.

mod error;
pub mod store;

pub use error::*;
