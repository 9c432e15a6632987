// file: src/lib.rs
// version: 1.0.0
// guid: f0a4d2b8-6c13-4e79-9b5a-1d8e3c7f0a26

//! # EC2 Bundler
//!
//! Turns a running EC2 instance into an instance-store AMI. Settings are
//! collected interactively and saved as they are answered; the bundling
//! itself is a fixed pipeline of remote commands run over one SSH session.

pub mod bundle;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod network;

pub use error::{BundlerError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
