use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edjournal")]
#[command(about = "Decode the Elite Dangerous player journal into typed events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log verbosity; falls back to RUST_LOG, then warn
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Decode a journal file and print its events")]
    Decode {
        file: PathBuf,

        #[arg(long, default_value = "json")]
        format: OutputFormat,
    },

    #[command(about = "Follow the live journal until Ctrl-C")]
    Watch {
        #[arg(long, help = "Journal directory (overrides config and EDJOURNAL_DIR)")]
        dir: Option<PathBuf>,

        #[arg(long, help = "Config file (default: <config dir>/edjournal/config.toml)")]
        config: Option<PathBuf>,

        #[arg(long, default_value = "json")]
        format: OutputFormat,

        #[arg(long, help = "Replay the newest journal before following it")]
        from_start: bool,
    },

    #[command(about = "List the journal event kinds this build understands")]
    Kinds,
}
