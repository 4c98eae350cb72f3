use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "td")]
#[command(about = "Team dashboard client: accounts, profile and dashboard")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (defaults to $TD_CONFIG_DIR, then ./.td)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}
