use anyhow::Result;
use edjournal_decoder::{DecoderRegistry, Registration};
use std::io::Write;

pub fn handle() -> Result<()> {
    let registry = DecoderRegistry::builtin();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (kind, registration) in registry.kinds() {
        let status = match registration {
            Registration::Decode(_) => "decoded",
            Registration::Ignore => "ignored",
        };
        writeln!(out, "{:<28} {}", kind, status)?;
    }
    out.flush()?;
    Ok(())
}
