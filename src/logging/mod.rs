// file: src/logging/mod.rs
// version: 1.0.0
// guid: 6a1d0e54-2c3f-4b8a-9e17-0f4c2d8b7a35

//! Diagnostic logging for the bundler

pub mod logger;

pub use logger::init_logger;
