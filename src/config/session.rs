// file: src/config/session.rs
// version: 1.0.0
// guid: 8f1c4a36-9d27-4e50-b3a8-0e6d5c2b7f14

//! Interactive, write-through configuration session

use super::record::{validate_image_name, ConfigField, ConfigRecord};
use super::{ConfigStore, Prompter};
use crate::console::StatusReporter;
use crate::Result;
use tracing::debug;

/// Default SSH login when none has been stored
pub const DEFAULT_SSH_USER: &str = "root";

/// A loaded record plus the store it is saved back to after every change
pub struct ConfigSession {
    store: ConfigStore,
    record: ConfigRecord,
}

impl ConfigSession {
    /// Load the record from the store
    pub fn open(store: ConfigStore) -> Result<Self> {
        let record = store.load()?;
        Ok(Self { store, record })
    }

    pub fn record(&self) -> &ConfigRecord {
        &self.record
    }

    pub fn into_record(self) -> ConfigRecord {
        self.record
    }

    /// Update one field and persist the whole record immediately
    pub fn set(&mut self, field: ConfigField, value: impl Into<String>) -> Result<()> {
        self.record.set(field, value);
        debug!("Updated {}", field.key());
        self.store.save(&self.record)
    }

    /// Ask for one field, using the stored value as the default
    fn ask<P: Prompter>(&mut self, prompter: &mut P, field: ConfigField) -> Result<()> {
        let stored = self.record.get(field).to_string();
        let default = if stored.is_empty() && field == ConfigField::SshUser {
            DEFAULT_SSH_USER.to_string()
        } else {
            stored
        };

        let value = prompter.prompt(field.label(), &default, field.is_optional())?;
        self.set(field, value)
    }

    /// Walk every field in order. The AMI name is asked again until it is
    /// acceptable, and each answer is saved as soon as it is given.
    pub fn collect<P, R>(&mut self, prompter: &mut P, reporter: &R) -> Result<()>
    where
        P: Prompter,
        R: StatusReporter + ?Sized,
    {
        reporter.success("\nWelcome to EC2 Bundler!\n=======================\n");
        self.ask(prompter, ConfigField::Hostname)?;

        loop {
            self.ask(prompter, ConfigField::ImageName)?;
            match validate_image_name(&self.record.image_name) {
                Ok(()) => break,
                Err(e) => reporter.fatal(&e.to_string()),
            }
        }

        self.ask(prompter, ConfigField::BucketName)?;

        reporter.success(&format!(
            "\nHow should I connect to '{}'?\n",
            self.record.ec2_hostname
        ));
        self.ask(prompter, ConfigField::SshUser)?;
        self.ask(prompter, ConfigField::SshKeypair)?;

        reporter.success("\nAWS Credentials\n");
        for field in [
            ConfigField::AccountId,
            ConfigField::AccessKey,
            ConfigField::SecretKey,
            ConfigField::Certificate,
            ConfigField::PrivateKey,
        ] {
            self.ask(prompter, field)?;
        }

        reporter.success("Configuration completed.\n\n");
        Ok(())
    }
}
