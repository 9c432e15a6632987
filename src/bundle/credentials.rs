// file: src/bundle/credentials.rs
// version: 1.0.0
// guid: 4c1f8a6e-3d92-4b57-a0e8-6b2d9f4c7e30

//! Copying the X.509 key pair onto the host

use super::{STAGING_DIR, WORK_DIR};
use crate::error::BundlerError;
use crate::network::RemoteExecutor;
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// A local credential file and where it ends up remotely
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub local_path: PathBuf,
    pub file_name: String,
}

impl Credential {
    /// Resolve `~` and environment variables, and keep only the file name
    /// for the remote side
    pub fn from_config(path: &str) -> Result<Self> {
        let expanded = shellexpand::full(path.trim())
            .map_err(|e| BundlerError::config(format!("Cannot expand {}: {}", path, e)))?;
        let local_path = PathBuf::from(expanded.as_ref());

        let file_name = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                BundlerError::config(format!("{} does not name a file", local_path.display()))
            })?;

        Ok(Self {
            local_path,
            file_name,
        })
    }

    /// Upload target the session user can write to
    pub fn staging_path(&self) -> String {
        format!("{}/{}", STAGING_DIR, self.file_name)
    }

    /// Final, root-owned location used by the tools
    pub fn staged_path(&self) -> String {
        format!("{}/{}", WORK_DIR, self.file_name)
    }

    /// Upload to the staging directory, then move into place as root.
    ///
    /// The session user usually cannot write to the working directory, so
    /// this takes two hops.
    pub async fn stage<E: RemoteExecutor + ?Sized>(&self, executor: &mut E) -> Result<String> {
        if !self.local_path.is_file() {
            return Err(BundlerError::config(format!(
                "Credential file {} does not exist",
                self.local_path.display()
            )));
        }

        info!("Staging {} as {}", self.local_path.display(), self.staged_path());
        executor
            .upload(&self.local_path, &self.staging_path())
            .await?;
        executor
            .sudo(&format!("mv {} {}/", self.staging_path(), WORK_DIR))
            .await?;
        Ok(self.staged_path())
    }
}
