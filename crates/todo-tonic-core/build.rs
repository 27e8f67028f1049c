//! Compiles the gRPC client and server bindings for `todo.proto` using
//! `tonic-prost-build`.
//!
//! A file descriptor set is written alongside the generated code so the
//! server binary can register v1 reflection without re-parsing the proto at
//! runtime.

use std::env;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("todo_descriptor.bin");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    tonic_prost_build::configure()
        .compile_with_config(config, &["proto/todo.proto"], &["proto"])
        .unwrap();
}
