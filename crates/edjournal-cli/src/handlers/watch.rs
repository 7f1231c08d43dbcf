use crate::context::ExecutionContext;
use crate::render::render;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use edjournal_runtime::JournalMonitor;
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;

pub fn handle(
    ctx: &ExecutionContext,
    dir: Option<PathBuf>,
    format: OutputFormat,
    from_start: bool,
) -> Result<()> {
    let mut config = ctx.config()?.clone();
    if dir.is_some() {
        config.journal_dir = dir;
    }
    if from_start {
        config.start_at_end = false;
    }
    let journal_dir = config.journal_dir()?;

    let mut monitor = JournalMonitor::new(config, move |event| match render(&event, format) {
        Ok(line) => {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
        Err(err) => tracing::warn!(error = %err, raw = %event.raw, "Failed to render event"),
    });

    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .context("Failed to install Ctrl-C handler")?;

    monitor
        .start()
        .with_context(|| format!("Failed to watch {}", journal_dir.display()))?;
    eprintln!(
        "{} {} watching {} (Ctrl-C to stop)",
        monitor.name(),
        monitor.version(),
        journal_dir.display()
    );

    let _ = rx.recv();
    monitor.stop();
    Ok(())
}
