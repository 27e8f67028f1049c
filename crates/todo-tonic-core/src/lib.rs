#![doc = include_str!("../README.md")]

mod common;
pub use common::*;

/// Generated protobuf and gRPC bindings for the `todo` package.
pub mod proto {
    tonic::include_proto!("todo");

    /// Encoded file descriptor set, used by the server for v1 reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("todo_descriptor");
}
