// logtally - platform/mod.rs
//
// Platform abstraction layer: filesystem access and configuration.
// Dependencies: standard library, directories, serde, toml.
// Must NOT depend on: core, app.

pub mod config;
pub mod fs;
