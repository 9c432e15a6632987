// file: src/bundle/toolchain.rs
// version: 1.0.0
// guid: 3b8f1e6d-2a47-4c09-9d5e-8c0a4f7b2d16

//! Remote tool families and how to invoke them
//!
//! The EC2 AMI/API tools and euca2ools drive the same pipeline with
//! different command names and flags, so each family is a small record
//! describing its version probes and command lines.

use super::arch::Architecture;
use super::{BUNDLE_DIR, BUNDLE_EXCLUDES, KERNEL_ID_URL, MAX_BUNDLE_SIZE_MB};
use crate::network::shell::quote;

/// Which tool family to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Ec2,
    Euca2ools,
}

/// One version query and the version it is known to work with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionProbe {
    pub label: &'static str,
    pub command: &'static str,
    pub expected: &'static str,
}

/// Outcome of comparing a version query against the known-good version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    Match(String),
    Mismatch(String),
    Missing,
}

impl VersionProbe {
    /// Compare the first line of the probe output with the expected version
    pub fn check(&self, output: &str) -> VersionCheck {
        let found = output.lines().next().unwrap_or("").trim();
        if found.is_empty() {
            VersionCheck::Missing
        } else if found == self.expected {
            VersionCheck::Match(found.to_string())
        } else {
            VersionCheck::Mismatch(found.to_string())
        }
    }

    /// Command line that prints the version, or nothing if the tool is absent
    pub fn command_line(&self) -> String {
        format!("{} 2>/dev/null || true", self.command)
    }
}

/// Everything the pipeline needs to know to invoke one bundle's tools
#[derive(Debug, Clone)]
pub struct BundleJob<'a> {
    pub arch: Architecture,
    pub image_name: &'a str,
    pub prefix: String,
    pub bucket_path: String,
    pub account_id: &'a str,
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub private_key: String,
    pub certificate: String,
}

impl BundleJob<'_> {
    /// Manifest written by the bundling step
    pub fn local_manifest(&self) -> String {
        format!("{}/{}.manifest.xml", BUNDLE_DIR, self.prefix)
    }

    /// Manifest location once uploaded
    pub fn remote_manifest(&self) -> String {
        format!("{}/{}.manifest.xml", self.bucket_path, self.prefix)
    }
}

/// Command names and flag layout for one tool family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFamily {
    pub kind: ToolKind,
    pub probes: Vec<VersionProbe>,
    pub bundle_vol: &'static str,
    pub upload_bundle: &'static str,
    pub register: &'static str,
    /// Whether registration authenticates with the X.509 key pair
    pub register_with_keys: bool,
}

impl ToolFamily {
    pub fn ec2() -> Self {
        Self {
            kind: ToolKind::Ec2,
            probes: vec![
                VersionProbe {
                    label: "EC2 API Tools",
                    command: "ec2-version",
                    expected: "1.3-57419 2010-08-31",
                },
                VersionProbe {
                    label: "EC2 AMI Tools",
                    command: "ec2-ami-tools-version",
                    expected: "1.3-49953 20071010",
                },
            ],
            bundle_vol: "ec2-bundle-vol",
            upload_bundle: "ec2-upload-bundle",
            register: "ec2-register",
            register_with_keys: true,
        }
    }

    pub fn euca2ools() -> Self {
        Self {
            kind: ToolKind::Euca2ools,
            probes: vec![VersionProbe {
                label: "euca2ools",
                command: "euca-version",
                expected: "euca2ools 1.3.1",
            }],
            bundle_vol: "euca-bundle-vol",
            upload_bundle: "euca-upload-bundle",
            register: "euca-register",
            register_with_keys: false,
        }
    }

    pub fn for_kind(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Ec2 => Self::ec2(),
            ToolKind::Euca2ools => Self::euca2ools(),
        }
    }

    /// Snapshot the root filesystem into `BUNDLE_DIR`.
    ///
    /// The kernel id is read from the metadata service by the remote shell
    /// at the moment the command runs.
    pub fn bundle_command(&self, job: &BundleJob<'_>) -> String {
        format!(
            "{} -r {} -d {} -p {} -u {} -k {} -c {} -s {} -e {} --kernel $(curl -s {})",
            self.bundle_vol,
            job.arch,
            BUNDLE_DIR,
            job.prefix,
            job.account_id,
            job.private_key,
            job.certificate,
            MAX_BUNDLE_SIZE_MB,
            BUNDLE_EXCLUDES.join(","),
            KERNEL_ID_URL,
        )
    }

    pub fn upload_command(&self, job: &BundleJob<'_>) -> String {
        format!(
            "{} -b {} -m {} -a {} -s {}",
            self.upload_bundle,
            job.bucket_path,
            job.local_manifest(),
            job.access_key,
            job.secret_key,
        )
    }

    pub fn register_command(&self, job: &BundleJob<'_>) -> String {
        if self.register_with_keys {
            format!(
                "{} -a {} -n {} -K {} -C {} {}",
                self.register,
                job.arch,
                quote(job.image_name),
                job.private_key,
                job.certificate,
                job.remote_manifest(),
            )
        } else {
            format!("{} {}", self.register, job.remote_manifest())
        }
    }
}

impl Default for ToolFamily {
    fn default() -> Self {
        Self::ec2()
    }
}
