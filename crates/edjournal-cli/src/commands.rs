use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::types::LogLevel;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    match cli.command {
        Commands::Decode { file, format } => handlers::decode::handle(&file, format),

        Commands::Watch {
            dir,
            config,
            format,
            from_start,
        } => {
            let ctx = ExecutionContext::new(config);
            handlers::watch::handle(&ctx, dir, format, from_start)
        }

        Commands::Kinds => handlers::kinds::handle(),
    }
}

fn init_logging(level: Option<LogLevel>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Already initialised when run twice in one process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
