// file: src/cli/commands.rs
// version: 1.1.0
// guid: c5a9e1d7-3f62-4b08-9d4a-7e2b0c8f6d39

//! Command implementations

use crate::bundle::{BundleOrchestrator, BundleOutcome, ToolFamily, ToolKind};
use crate::config::{
    validate_image_name, ConfigField, ConfigRecord, ConfigSession, ConfigStore, TerminalPrompter,
};
use crate::console::{ConsoleReporter, StatusReporter};
use crate::error::BundlerError;
use crate::network::SshClient;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Ask for every setting, saving each answer as it is given.
///
/// Terminal reads block, so the prompts run on the blocking pool and Ctrl+C
/// is still noticed while waiting for an answer.
pub async fn configure_command(config_path: &Path) -> Result<ConfigRecord> {
    let store = ConfigStore::new(config_path);
    tokio::task::spawn_blocking(move || -> Result<ConfigRecord> {
        let mut session = ConfigSession::open(store)?;
        session.collect(&mut TerminalPrompter::new(), &ConsoleReporter::new())?;
        Ok(session.into_record())
    })
    .await
    .map_err(|e| BundlerError::PromptError(format!("Prompt task failed: {}", e)))?
}

/// Collect settings (unless told not to), then run the bundle pipeline
pub async fn bundle_command(
    config_path: &Path,
    tools: ToolKind,
    no_prompt: bool,
) -> Result<BundleOutcome> {
    let record = if no_prompt {
        ConfigStore::new(config_path).load()?
    } else {
        configure_command(config_path).await?
    };
    record.validate()?;
    validate_image_name(&record.image_name)?;

    let key = record.ssh_key_path().map(expand_path).transpose()?;

    info!(
        "Bundling {} with {:?} tools",
        record.ec2_hostname, tools
    );

    let mut ssh = SshClient::new();
    ssh.connect(&record.ec2_hostname, &record.ssh_user, key.as_deref())
        .await?;

    let reporter = ConsoleReporter::new();
    let outcome = BundleOrchestrator::new(&mut ssh, &reporter, ToolFamily::for_kind(tools))
        .run(&record)
        .await;

    ssh.disconnect();
    outcome
}

/// Print the saved settings, masking the secret key
pub async fn show_config_command(config_path: &Path) -> Result<()> {
    let store = ConfigStore::new(config_path);
    let record = store.load()?;
    let reporter = ConsoleReporter::new();

    reporter.success(&format!("Settings in {}", store.path().display()));
    for line in describe_record(&record) {
        println!("{}", line);
    }

    let missing = record.missing_fields();
    if !missing.is_empty() {
        let keys: Vec<&str> = missing.iter().map(|f| f.key()).collect();
        reporter.warning(&format!("Still missing: {}", keys.join(", ")));
    }
    Ok(())
}

/// One `key: value` line per field, secrets masked
pub fn describe_record(record: &ConfigRecord) -> Vec<String> {
    ConfigField::ALL
        .iter()
        .map(|field| {
            let value = record.get(*field);
            let shown = if field.is_secret() {
                mask_secret(value)
            } else {
                value.to_string()
            };
            format!("{}: {}", field.key(), shown)
        })
        .collect()
}

/// Hide all but the last four characters
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

fn expand_path(path: &str) -> Result<PathBuf> {
    shellexpand::full(path)
        .map(|p| PathBuf::from(p.as_ref()))
        .map_err(|e| BundlerError::config(format!("Cannot expand {}: {}", path, e)))
}
