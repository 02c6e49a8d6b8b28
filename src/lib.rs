// logtally - lib.rs
//
// Library entry point, exposing all modules for integration testing.
// The binaries in main.rs and bin/ are thin shells over this crate.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
