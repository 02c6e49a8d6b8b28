// logtally - app/mod.rs
//
// Application layer: argument resolution and orchestration.
// Dependencies: core, platform, util.

pub mod cli;
pub mod contacts;
pub mod pipeline;
