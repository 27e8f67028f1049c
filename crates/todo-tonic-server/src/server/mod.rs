//! Server internals: configuration, logging setup, and the gRPC handlers.

pub mod config;
pub mod service;
pub mod telemetry;
