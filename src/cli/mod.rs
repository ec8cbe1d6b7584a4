// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Website scheduler & autofill vault (extension demo)", long_about = None)]
pub struct Args {
    /// Directory for persisted state
    #[arg(long, env = "AUTOTAB_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Persist the schedule list across restarts (the original keeps it in memory only)
    #[arg(long, env = "AUTOTAB_PERSIST_SCHEDULES")]
    pub persist_schedules: bool,

    /// Command to execute; omit for the interactive menu
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
