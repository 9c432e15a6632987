// file: src/bundle/cleanup.rs
// version: 1.0.0
// guid: 9a5e2c83-6f1b-4d70-b4a9-0e7c3d8f5b21

//! Scrubbing bundle leftovers and shell history from the host
//!
//! Runs before and after bundling. Every command succeeds when there is
//! nothing to remove, so the sweep can run any number of times.

use super::{BUNDLE_DIR, WORK_DIR};
use crate::network::RemoteExecutor;
use crate::Result;
use tracing::debug;

/// Who a remote command runs as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    User,
    Root,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    pub privilege: Privilege,
    pub command: String,
}

impl RemoteCommand {
    fn user(command: impl Into<String>) -> Self {
        Self {
            privilege: Privilege::User,
            command: command.into(),
        }
    }

    fn root(command: impl Into<String>) -> Self {
        Self {
            privilege: Privilege::Root,
            command: command.into(),
        }
    }

    pub async fn run<E: RemoteExecutor + ?Sized>(&self, executor: &mut E) -> Result<String> {
        match self.privilege {
            Privilege::User => executor.run(&self.command).await,
            Privilege::Root => executor.sudo(&self.command).await,
        }
    }
}

/// The cleanup sweep, in order.
///
/// Log files are truncated by copying `/dev/null` over them rather than
/// deleted, so ownership and modes survive for the daemons writing them.
pub fn cleanup_commands() -> Vec<RemoteCommand> {
    vec![
        RemoteCommand::root(format!("rm -fr {}", BUNDLE_DIR)),
        RemoteCommand::root(format!("rm --force {0} {0}.*", BUNDLE_DIR)),
        RemoteCommand::user("rm -f ~/.*hist*"),
        RemoteCommand::root("rm -f /root/.*hist*"),
        RemoteCommand::root("rm -f /var/log/*.gz"),
        RemoteCommand::root(
            "find /var/log -name mysql -prune -o -type f -print | while read i; do cp /dev/null \"$i\"; done",
        ),
    ]
}

/// Run the whole sweep, stopping at the first failing command
pub async fn clean_history<E: RemoteExecutor + ?Sized>(executor: &mut E) -> Result<()> {
    debug!("Cleaning bundle artifacts under {} and shell history", WORK_DIR);
    for command in cleanup_commands() {
        command.run(executor).await?;
    }
    Ok(())
}
