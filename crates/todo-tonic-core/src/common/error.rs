//! Error types for the todo service.
//!
//! This module defines the central `Error` enum covering every failure the
//! core can report. It implements `From<Error>` for `tonic::Status` so
//! handlers can propagate failures to clients with `?`/`.into()` and the
//! status-code mapping stays in one place.
//!
//! ## Error Cases
//! - `NotFound`: an update targeted an id that was never assigned.
//! - `ServiceShutdown`: a request arrived while the service was shutting
//!   down.

use tonic::Status;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the todo service.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// No record with the given id exists in the store.
    #[error("no todo with id {id}")]
    NotFound { id: u64 },

    /// The service is in the process of shutting down.
    #[error("service is shutting down")]
    ServiceShutdown,
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { id } => Status::not_found(format!("no todo with id {id}")),
            Error::ServiceShutdown => Status::unavailable("service is shutting down"),
        }
    }
}
