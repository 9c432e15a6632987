// file: src/cli/args.rs
// version: 1.0.0
// guid: b2f8d4a0-7c35-4e91-a6d3-0e9c1b5f8a47

//! Command line argument definitions

use crate::bundle::ToolKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ec2-bundler")]
#[command(about = "Bundle a running EC2 instance into an instance-store AMI")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Where answers are saved between runs
    #[arg(
        short,
        long,
        global = true,
        env = "EC2_BUNDLER_CONFIG",
        default_value = crate::config::store::DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask for every setting and save the answers
    Configure,

    /// Bundle, upload and register the configured instance
    Bundle {
        #[arg(short, long, value_enum, default_value = "ec2")]
        tools: ToolsArg,

        #[arg(long, help = "Use the saved settings without asking")]
        no_prompt: bool,
    },

    /// Print the saved settings with secrets masked
    ShowConfig,
}

/// Tool family argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolsArg {
    Ec2,
    Euca2ools,
}

impl From<ToolsArg> for ToolKind {
    fn from(tools: ToolsArg) -> Self {
        match tools {
            ToolsArg::Ec2 => ToolKind::Ec2,
            ToolsArg::Euca2ools => ToolKind::Euca2ools,
        }
    }
}
