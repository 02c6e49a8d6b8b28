// logtally - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: app, platform, or any filesystem access.

pub mod aggregate;
pub mod fibonacci;
pub mod filter;
pub mod income;
pub mod model;
pub mod parser;
pub mod report;
