// file: src/network/executor.rs
// version: 1.0.0
// guid: c8f3a1e5-7b24-4d90-9e6a-2f5d0b8c4e13

//! Command execution trait for the bundle pipeline

use crate::Result;
use std::path::Path;

/// The three remote primitives the pipeline is built from.
///
/// Every call blocks until the remote process has exited and its output is
/// drained. A non-zero exit status is an error.
#[async_trait::async_trait]
pub trait RemoteExecutor {
    /// Run a command as the session user and return its stdout
    async fn run(&mut self, command: &str) -> Result<String>;

    /// Run a command as root and return its stdout
    async fn sudo(&mut self, command: &str) -> Result<String>;

    /// Copy a local file to a path on the remote host
    async fn upload(&mut self, local_path: &Path, remote_path: &str) -> Result<()>;
}

#[async_trait::async_trait]
impl RemoteExecutor for crate::network::SshClient {
    async fn run(&mut self, command: &str) -> Result<String> {
        self.execute_with_output(command).await
    }

    async fn sudo(&mut self, command: &str) -> Result<String> {
        let wrapped = crate::network::shell::privileged(command);
        self.execute_with_output(&wrapped).await
    }

    async fn upload(&mut self, local_path: &Path, remote_path: &str) -> Result<()> {
        self.upload_file(local_path, remote_path).await
    }
}
