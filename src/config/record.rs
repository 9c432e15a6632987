// file: src/config/record.rs
// version: 1.0.0
// guid: 4e8a1f3c-7d62-4b95-8c0a-1f5e9d2b6a73

//! The configuration record and its fields

use crate::error::BundlerError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Everything the bundler needs to know about one run.
///
/// All fields are plain strings so that a partially filled file written by an
/// interrupted session loads back without complaint. An empty `ssh_keypair`
/// means "use the SSH agent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    pub ec2_hostname: String,
    pub image_name: String,
    pub s3_bucket_name: String,
    pub ssh_user: String,
    pub ssh_keypair: String,
    pub amazon_account_id: String,
    pub amazon_access_key: String,
    pub amazon_secret_key: String,
    pub ec2_cert: String,
    pub ec2_private_key: String,
}

/// Named handle for each field of [`ConfigRecord`], in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Hostname,
    ImageName,
    BucketName,
    SshUser,
    SshKeypair,
    AccountId,
    AccessKey,
    SecretKey,
    Certificate,
    PrivateKey,
}

impl ConfigField {
    pub const ALL: [ConfigField; 10] = [
        ConfigField::Hostname,
        ConfigField::ImageName,
        ConfigField::BucketName,
        ConfigField::SshUser,
        ConfigField::SshKeypair,
        ConfigField::AccountId,
        ConfigField::AccessKey,
        ConfigField::SecretKey,
        ConfigField::Certificate,
        ConfigField::PrivateKey,
    ];

    /// Key used in the YAML file
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::Hostname => "ec2_hostname",
            ConfigField::ImageName => "image_name",
            ConfigField::BucketName => "s3_bucket_name",
            ConfigField::SshUser => "ssh_user",
            ConfigField::SshKeypair => "ssh_keypair",
            ConfigField::AccountId => "amazon_account_id",
            ConfigField::AccessKey => "amazon_access_key",
            ConfigField::SecretKey => "amazon_secret_key",
            ConfigField::Certificate => "ec2_cert",
            ConfigField::PrivateKey => "ec2_private_key",
        }
    }

    /// Human readable prompt label
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::Hostname => "EC2 hostname to bundle",
            ConfigField::ImageName => "AMI name",
            ConfigField::BucketName => "S3 bucket name",
            ConfigField::SshUser => "SSH username",
            ConfigField::SshKeypair => "SSH keypair path (optional)",
            ConfigField::AccountId => "Amazon Account ID (xxxx-xxxx-xxxx)",
            ConfigField::AccessKey => "Amazon Access Key ID",
            ConfigField::SecretKey => "Amazon Secret Access Key",
            ConfigField::Certificate => "EC2 certificate path",
            ConfigField::PrivateKey => "EC2 private key path",
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, ConfigField::SshKeypair)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigField::SecretKey)
    }
}

impl ConfigRecord {
    pub fn get(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::Hostname => &self.ec2_hostname,
            ConfigField::ImageName => &self.image_name,
            ConfigField::BucketName => &self.s3_bucket_name,
            ConfigField::SshUser => &self.ssh_user,
            ConfigField::SshKeypair => &self.ssh_keypair,
            ConfigField::AccountId => &self.amazon_account_id,
            ConfigField::AccessKey => &self.amazon_access_key,
            ConfigField::SecretKey => &self.amazon_secret_key,
            ConfigField::Certificate => &self.ec2_cert,
            ConfigField::PrivateKey => &self.ec2_private_key,
        }
    }

    pub fn set(&mut self, field: ConfigField, value: impl Into<String>) {
        let slot = match field {
            ConfigField::Hostname => &mut self.ec2_hostname,
            ConfigField::ImageName => &mut self.image_name,
            ConfigField::BucketName => &mut self.s3_bucket_name,
            ConfigField::SshUser => &mut self.ssh_user,
            ConfigField::SshKeypair => &mut self.ssh_keypair,
            ConfigField::AccountId => &mut self.amazon_account_id,
            ConfigField::AccessKey => &mut self.amazon_access_key,
            ConfigField::SecretKey => &mut self.amazon_secret_key,
            ConfigField::Certificate => &mut self.ec2_cert,
            ConfigField::PrivateKey => &mut self.ec2_private_key,
        };
        *slot = value.into();
    }

    /// SSH key path, if one was configured
    pub fn ssh_key_path(&self) -> Option<&str> {
        let path = self.ssh_keypair.trim();
        if path.is_empty() {
            None
        } else {
            Some(path)
        }
    }

    /// Fields that are required but still empty
    pub fn missing_fields(&self) -> Vec<ConfigField> {
        ConfigField::ALL
            .iter()
            .copied()
            .filter(|f| !f.is_optional() && self.get(*f).trim().is_empty())
            .collect()
    }

    /// Check the record is complete enough to run the pipeline.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let keys: Vec<&str> = missing.iter().map(|f| f.key()).collect();
            return Err(BundlerError::validation(format!(
                "Missing required configuration: {}",
                keys.join(", ")
            )));
        }
        Ok(())
    }
}

/// Check an AMI name against the registration rules: 3 to 128 characters of
/// letters, digits, whitespace, and `( ) . - / _`.
pub fn validate_image_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    let allowed = |c: char| c.is_ascii_alphanumeric() || c.is_whitespace() || "().-/_".contains(c);

    if !(3..=128).contains(&len) || !name.chars().all(allowed) {
        return Err(BundlerError::validation(
            "AMI name must be between 3 and 128 characters long, and may contain letters, numbers, '(', ')', '.', '-', '/' and '_'.",
        ));
    }
    Ok(())
}
