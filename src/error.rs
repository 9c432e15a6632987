// file: src/error.rs
// version: 1.0.0
// guid: 3f6c1a2e-8b4d-4e71-9a0c-5d2e7b9f1c40

use thiserror::Error;

/// Result type alias for the bundler
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Error types for the EC2 bundler
#[derive(Error, Debug)]
pub enum BundlerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("SSH error: {0}")]
    SshError(String),

    #[error("Command '{command}' failed with exit code {exit_code:?}: {stderr}")]
    ProcessError {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Couldn't find {0}")]
    ToolchainMissing(String),

    #[error("Registration error: {0}")]
    RegistrationError(String),

    #[error("Prompt error: {0}")]
    PromptError(String),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl BundlerError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a new SSH error
    pub fn ssh(msg: impl Into<String>) -> Self {
        Self::SshError(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// A missing toolchain is the one precondition the pipeline treats as
    /// fatal before touching the host, so it gets its own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolchainMissing(_) => 2,
            _ => 1,
        }
    }
}
