use crate::render::render;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use edjournal_decoder::JournalDecoder;
use edjournal_runtime::FleetTracker;
use std::io::Write;
use std::path::Path;

pub fn handle(path: &Path, format: OutputFormat) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read journal: {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let fleet = FleetTracker::new();
    let decoder = JournalDecoder::new(fleet.registry());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut lines = 0usize;
    let mut events = 0usize;

    for line in content.lines() {
        lines += 1;
        let Some(event) = decoder.decode(line) else {
            continue;
        };
        fleet.apply(&event);
        writeln!(out, "{}", render(&event, format)?)?;
        events += 1;
    }
    out.flush()?;

    tracing::info!(path = %path.display(), lines, events, "Decoded journal");
    Ok(())
}
