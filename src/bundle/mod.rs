// file: src/bundle/mod.rs
// version: 1.0.0
// guid: 1a9d3f7c-4e25-4b80-a6c1-7f2e0d5b8c39

//! Instance-store AMI bundling pipeline
//!
//! Drives one remote host through a fixed, linear sequence: check the
//! toolchain, stage credentials, scrub history, detect the architecture,
//! bundle, upload, register, and scrub again. Any failing step ends the run.

pub mod arch;
pub mod cleanup;
pub mod credentials;
pub mod naming;
pub mod pipeline;
pub mod toolchain;

pub use arch::Architecture;
pub use naming::sanitize_name;
pub use pipeline::{extract_image_id, BundleOrchestrator, BundleOutcome, ElapsedReport};
pub use toolchain::{ToolFamily, ToolKind};

/// Root-only working directory credentials are moved into
pub const WORK_DIR: &str = "/mnt";

/// World-writable directory credentials are uploaded to first
pub const STAGING_DIR: &str = "/tmp";

/// Where the bundling tool writes the manifest and parts
pub const BUNDLE_DIR: &str = "/mnt/image";

/// Largest image the bundling tool may produce, in MB
pub const MAX_BUNDLE_SIZE_MB: u32 = 10240;

/// Paths left out of the filesystem snapshot
pub const BUNDLE_EXCLUDES: [&str; 3] = ["/mnt", "/home/ubuntu/.ssh", "/dev"];

/// Instance metadata URL that reports the running kernel id
pub const KERNEL_ID_URL: &str = "http://169.254.169.254/latest/meta-data/kernel-id";
