// file: src/network/mod.rs
// version: 1.1.0
// guid: e2a7c5d9-0f31-4b86-8d4c-9a1e6f3b2c07

//! Remote execution over SSH

pub mod blocking;
pub mod executor;
pub mod shell;
pub mod ssh;

pub use blocking::BlockingCell;
pub use executor::RemoteExecutor;
pub use ssh::SshClient;
