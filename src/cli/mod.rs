//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod demo;
mod logging;

pub use commands::{ConfigSubcommand, handle_config_command};
pub use demo::demo_stores;
pub use logging::*;

use clap::{Parser, Subcommand};

/// kswitch - keyboard-driven resource switcher for Kubernetes dashboards
#[derive(Parser, Debug)]
#[command(name = "kswitch")]
#[command(about = "Keyboard-driven resource switcher for Kubernetes dashboards", long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Use built-in sample data instead of a cluster
    #[arg(long)]
    pub demo: bool,

    /// Configuration subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}
