// NOTE: Output Streams
//
// stdout carries events only, one per line, so `decode` and `watch` can be
// piped into jq or another program. Diagnostics from the decoder and the
// monitor go through tracing to stderr; `--log-level debug` shows every line
// that did not become an event, with the raw text attached.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod render;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
