// file: src/cli/mod.rs
// version: 1.1.0
// guid: a7e1c3f9-2b48-4d06-8c5e-9f0b2d6a4e18

//! Command line interface for the EC2 bundler

pub mod args;
pub mod commands;
pub mod signal;

pub use args::Cli;
pub use commands::*;
pub use signal::{run_until_interrupted, RunOutcome};
