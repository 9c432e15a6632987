// file: src/config/mod.rs
// version: 1.0.0
// guid: 9c2e5a17-4b0d-4f83-a6e1-2d7c8b3f5e90

//! Configuration module for the EC2 bundler
//!
//! Holds the flat configuration record, its YAML store, and the interactive
//! session that fills it in one field at a time.

pub mod prompt;
pub mod record;
pub mod session;
pub mod store;

pub use prompt::{Prompter, TerminalPrompter};
pub use record::{validate_image_name, ConfigField, ConfigRecord};
pub use session::ConfigSession;
pub use store::ConfigStore;
