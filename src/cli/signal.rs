// file: src/cli/signal.rs
// version: 1.0.0
// guid: 8a3e6c21-f0d9-4b74-9c15-3e7b2a0d5f68

//! Racing a command against Ctrl+C

use std::future::Future;
use tokio::signal;
use tracing::warn;

/// Standard exit code for a run stopped by Ctrl+C
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome<T> {
    Completed(T),
    Interrupted,
}

/// Drive `future` until it finishes or Ctrl+C arrives.
///
/// Installing the handler turns off the default terminate-on-SIGINT, so
/// `future` must yield while it waits on blocking work; remote calls go
/// through [`crate::network::BlockingCell`] for that reason.
pub async fn run_until_interrupted<F: Future>(future: F) -> RunOutcome<F::Output> {
    let interrupted = async {
        if signal::ctrl_c().await.is_err() {
            // No handler: never resolve, leave the default behaviour in place
            std::future::pending::<()>().await;
        }
        warn!("Received Ctrl+C, stopping");
    };

    tokio::select! {
        biased;
        _ = interrupted => RunOutcome::Interrupted,
        output = future => RunOutcome::Completed(output),
    }
}
