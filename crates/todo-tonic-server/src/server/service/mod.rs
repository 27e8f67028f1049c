//! gRPC service implementations.
//!
//! Each handler implements a service trait generated from `todo.proto` and
//! maps between wire messages and the core store. Wire handling itself
//! (decode, transport, deadlines) belongs to tonic.
//!
//! ## Structure
//!
//! - [`todo`] - the todo collection service (`TodoHandler`).
//! - [`echo`] - the echo service (`EchoHandler`).

pub mod echo;
pub mod todo;
