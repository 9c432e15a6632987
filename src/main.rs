// file: src/main.rs
// version: 1.1.0
// guid: d8c2f6a4-1e97-4b53-a0c8-5b3e9d1f7a62

//! EC2 Bundler - Main entry point

use clap::Parser;
use ec2_bundler::{
    cli::{
        args::Cli,
        args::Commands,
        commands::*,
        signal::{run_until_interrupted, RunOutcome, INTERRUPTED_EXIT_CODE},
    },
    console::{ConsoleReporter, StatusReporter},
    logging::logger,
    BundlerError,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
    }

    let command_future = async {
        match cli.command {
            Commands::Configure => configure_command(&cli.config).await.map(|_| ()),
            Commands::Bundle { tools, no_prompt } => {
                bundle_command(&cli.config, tools.into(), no_prompt)
                    .await
                    .map(|_| ())
            }
            Commands::ShowConfig => show_config_command(&cli.config).await,
        }
    };

    let result = match run_until_interrupted(command_future).await {
        RunOutcome::Completed(result) => result,
        RunOutcome::Interrupted => std::process::exit(INTERRUPTED_EXIT_CODE),
    };

    if let Err(e) = result {
        // The pipeline already printed its own red line for a missing toolchain
        if !matches!(e, BundlerError::ToolchainMissing(_)) {
            ConsoleReporter::new().fatal(&e.to_string());
        }
        std::process::exit(e.exit_code());
    }
}
