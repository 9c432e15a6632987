// file: src/network/ssh.rs
// version: 1.1.0
// guid: d1b6e9f4-2a83-4c5d-b0e7-8f3a6c1d9e25

//! SSH client for the bundle host

use super::blocking::BlockingCell;
use crate::error::BundlerError;
use crate::Result;
use ssh2::{ExtendedData, Session};
use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

const DEFAULT_SSH_PORT: u16 = 22;

/// stderr is folded into the stdout stream of every command channel
const STDERR_HANDLING: ExtendedData = ExtendedData::Merge;

/// Append the default SSH port unless the host already names one
pub fn socket_address(host: &str) -> String {
    let host = host.trim();
    if host.starts_with('[') && host.ends_with(']') {
        // bracketed IPv6 literal without a port
        format!("{}:{}", host, DEFAULT_SSH_PORT)
    } else if host.starts_with('[') || host.matches(':').count() == 1 {
        host.to_string()
    } else if host.contains(':') {
        // bare IPv6 literal
        format!("[{}]:{}", host, DEFAULT_SSH_PORT)
    } else {
        format!("{}:{}", host, DEFAULT_SSH_PORT)
    }
}

/// Open, handshake and authenticate a session
fn open_session(address: &str, username: &str, key: Option<&Path>) -> Result<Session> {
    let tcp = TcpStream::connect(address)
        .map_err(|e| BundlerError::ssh(format!("Failed to connect to {}: {}", address, e)))?;

    let mut session = Session::new()
        .map_err(|e| BundlerError::ssh(format!("Failed to create SSH session: {}", e)))?;

    session.set_tcp_stream(tcp);
    session
        .handshake()
        .map_err(|e| BundlerError::ssh(format!("SSH handshake failed: {}", e)))?;

    match key {
        Some(key) => {
            debug!("Authenticating with key {}", key.display());
            session
                .userauth_pubkey_file(username, None, key, None)
                .map_err(|e| {
                    BundlerError::ssh(format!(
                        "SSH key authentication with {} failed: {}",
                        key.display(),
                        e
                    ))
                })?;
        }
        None => {
            session.userauth_agent(username).map_err(|e| {
                BundlerError::ssh(format!("SSH agent authentication failed: {}", e))
            })?;
        }
    }

    if !session.authenticated() {
        return Err(BundlerError::ssh("SSH authentication failed"));
    }
    Ok(session)
}

/// Run a command and collect exit status and output.
///
/// stderr is merged into stdout on the remote side, so a tool that writes a
/// lot of progress to stderr cannot fill the channel window while stdout is
/// being drained.
fn exec(session: &mut Session, command: &str) -> Result<(i32, String)> {
    let mut channel = session
        .channel_session()
        .map_err(|e| BundlerError::ssh(format!("Failed to create SSH channel: {}", e)))?;

    channel
        .handle_extended_data(STDERR_HANDLING)
        .map_err(|e| BundlerError::ssh(format!("Failed to merge stderr: {}", e)))?;

    channel
        .exec(command)
        .map_err(|e| BundlerError::ssh(format!("Failed to execute command: {}", e)))?;

    let mut output = String::new();
    channel
        .read_to_string(&mut output)
        .map_err(|e| BundlerError::ssh(format!("Failed to read output: {}", e)))?;

    channel
        .wait_close()
        .map_err(|e| BundlerError::ssh(format!("Failed to close SSH channel: {}", e)))?;

    let exit_status = channel
        .exit_status()
        .map_err(|e| BundlerError::ssh(format!("Failed to get exit status: {}", e)))?;

    Ok((exit_status, output))
}

/// Send a buffer to `remote_path` over SCP
fn scp_upload(session: &mut Session, content: &[u8], remote_path: &str) -> Result<()> {
    let mut remote_file = session
        .scp_send(Path::new(remote_path), 0o600, content.len() as u64, None)
        .map_err(|e| BundlerError::ssh(format!("Failed to create SCP channel: {}", e)))?;

    remote_file
        .write_all(content)
        .map_err(|e| BundlerError::ssh(format!("Failed to write file data: {}", e)))?;

    remote_file
        .send_eof()
        .map_err(|e| BundlerError::ssh(format!("Failed to send EOF: {}", e)))?;
    remote_file
        .wait_eof()
        .map_err(|e| BundlerError::ssh(format!("Failed to wait for EOF: {}", e)))?;
    remote_file
        .close()
        .map_err(|e| BundlerError::ssh(format!("Failed to close remote file: {}", e)))?;
    remote_file
        .wait_close()
        .map_err(|e| BundlerError::ssh(format!("Failed to wait for close: {}", e)))?;
    Ok(())
}

/// SSH client holding one session for the whole run.
///
/// Every `ssh2` call runs on the blocking pool, see [`BlockingCell`].
pub struct SshClient {
    session: BlockingCell<Session>,
    host: String,
}

impl SshClient {
    /// Create a new, unconnected client
    pub fn new() -> Self {
        Self {
            session: BlockingCell::empty(),
            host: String::new(),
        }
    }

    /// Connect and authenticate with the key file if given, otherwise the
    /// SSH agent
    pub async fn connect(&mut self, host: &str, username: &str, key: Option<&Path>) -> Result<()> {
        info!("Connecting to {} as {}", host, username);

        let address = socket_address(host);
        let username = username.to_string();
        let key: Option<PathBuf> = key.map(Path::to_path_buf);

        let session = tokio::task::spawn_blocking(move || {
            open_session(&address, &username, key.as_deref())
        })
        .await
        .map_err(|e| BundlerError::ssh(format!("SSH connect task failed: {}", e)))??;

        self.session = BlockingCell::new(session);
        self.host = host.to_string();

        info!("SSH connection established to {}", host);
        Ok(())
    }

    /// Execute command and return its output, failing on a non-zero exit
    pub async fn execute_with_output(&mut self, command: &str) -> Result<String> {
        debug!("Executing command: {}", command);

        let owned = command.to_string();
        let (exit_status, output) = self
            .session
            .with(move |session| exec(session, &owned))
            .await?;

        if exit_status != 0 {
            error!("Command failed with exit code {}", exit_status);
            if !output.trim().is_empty() {
                error!("OUTPUT: {}", output);
            }
            return Err(BundlerError::ProcessError {
                command: command.to_string(),
                exit_code: Some(exit_status),
                stderr: output,
            });
        }

        debug!("Command executed successfully: {} bytes of output", output.len());
        Ok(output)
    }

    /// Upload file to remote host over SCP
    pub async fn upload_file(&mut self, local_path: &Path, remote_path: &str) -> Result<()> {
        info!(
            "Uploading {} to {}:{}",
            local_path.display(),
            self.host,
            remote_path
        );

        let content = tokio::fs::read(local_path).await.map_err(|e| {
            BundlerError::config(format!("Failed to read {}: {}", local_path.display(), e))
        })?;

        let remote = remote_path.to_string();
        self.session
            .with(move |session| scp_upload(session, &content, &remote))
            .await?;

        info!("File upload completed");
        Ok(())
    }

    /// Disconnect SSH session
    pub fn disconnect(&mut self) {
        if let Some(session) = self.session.take() {
            let _ = session.disconnect(None, "", None);
            info!("SSH session disconnected");
        }
    }
}

impl Drop for SshClient {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl Default for SshClient {
    fn default() -> Self {
        Self::new()
    }
}
