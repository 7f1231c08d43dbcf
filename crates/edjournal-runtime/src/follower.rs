use crate::Result;
use regex::Regex;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

// NOTE: Follow Semantics
//
// The game appends to one journal at a time and starts a new file for each
// session. The follower keeps a byte offset into the newest journal and only
// hands out complete, newline-terminated lines; a trailing partial line stays
// buffered until the rest of it arrives. When a newer journal appears, the
// rest of the old one is drained before switching. A file that shrinks was
// rewritten and is read again from the start.

/// Tails the newest journal in a directory
#[derive(Debug)]
pub struct JournalFollower {
    dir: PathBuf,
    pattern: Regex,
    current: Option<PathBuf>,
    offset: u64,
    pending: Vec<u8>,
}

impl JournalFollower {
    pub fn new(dir: impl Into<PathBuf>, pattern: Regex) -> Self {
        Self {
            dir: dir.into(),
            pattern,
            current: None,
            offset: 0,
            pending: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Journal currently followed
    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Bytes of the current journal consumed so far, partial line included
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Newest journal in the directory, by modification time then name
    pub fn find_latest(&self) -> Result<Option<PathBuf>> {
        let mut latest: Option<(SystemTime, String, PathBuf)> = None;

        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.pattern.is_match(&name) {
                continue;
            }
            let modified = entry.metadata()?.modified()?;
            let candidate = (modified, name, entry.into_path());
            if latest
                .as_ref()
                .is_none_or(|best| (&candidate.0, &candidate.1) > (&best.0, &best.1))
            {
                latest = Some(candidate);
            }
        }

        Ok(latest.map(|(_, _, path)| path))
    }

    /// Attach to the newest journal, skipping its existing content when `at_end`
    pub fn attach(&mut self, at_end: bool) -> Result<Option<&Path>> {
        self.pending.clear();
        self.offset = 0;
        self.current = self.find_latest()?;

        if let Some(path) = &self.current {
            if at_end {
                self.offset = std::fs::metadata(path)?.len();
            }
            tracing::info!(path = %path.display(), offset = self.offset, "Attached to journal");
        } else {
            tracing::info!(dir = %self.dir.display(), "No journal yet, waiting");
        }

        Ok(self.current.as_deref())
    }

    /// Complete lines written since the last poll, in file order
    pub fn poll(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        let latest = self.find_latest()?;
        if latest.is_some() && latest != self.current {
            if self.current.is_some() {
                self.read_new(&mut lines)?;
                if !self.pending.is_empty() {
                    tracing::warn!(
                        bytes = self.pending.len(),
                        "Dropping unterminated line at end of previous journal"
                    );
                }
            }
            if let Some(path) = &latest {
                tracing::info!(path = %path.display(), "Switched to newer journal");
            }
            self.current = latest;
            self.offset = 0;
            self.pending.clear();
        }

        self.read_new(&mut lines)?;
        Ok(lines)
    }

    fn read_new(&mut self, lines: &mut Vec<String>) -> Result<()> {
        let Some(path) = &self.current else {
            return Ok(());
        };

        let len = std::fs::metadata(path)?.len();
        if len < self.offset {
            tracing::info!(path = %path.display(), "Journal shrank, reading from start");
            self.offset = 0;
            self.pending.clear();
        }
        if len == self.offset {
            return Ok(());
        }

        let mut file = File::open(path)?;
        file.seek(SeekFrom::Start(self.offset))?;
        let read = file.read_to_end(&mut self.pending)?;
        self.offset += read as u64;

        if let Some(end) = self.pending.iter().rposition(|&b| b == b'\n') {
            let complete: Vec<u8> = self.pending.drain(..=end).collect();
            lines.extend(
                String::from_utf8_lossy(&complete)
                    .split('\n')
                    .map(|line| line.trim_end_matches('\r'))
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string),
            );
        }

        Ok(())
    }
}
