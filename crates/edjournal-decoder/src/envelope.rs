use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::fields::FieldBag;
use crate::normalize::parse_timestamp;
use crate::Result;

static JSON_OBJECT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{.*\}$").unwrap());

/// Timestamp, kind and fields of one journal line
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub timestamp: DateTime<Utc>,
    pub kind: String,
    pub fields: FieldBag,
}

/// Why a line produced no envelope without being an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Failed the cheap structural check, e.g. a blank line
    NotJsonObject,
    /// Valid object without an `event` field
    MissingKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Envelope(Envelope),
    Skipped(SkipReason),
}

/// Validate a raw line and pull out its envelope.
///
/// Errors cover lines that look like JSON objects but cannot be read:
/// broken JSON, a non-string `event`, an unparseable `timestamp`.
pub fn extract(raw: &str) -> Result<Extraction> {
    let line = raw.trim();
    if !JSON_OBJECT_LINE.is_match(line) {
        return Ok(Extraction::Skipped(SkipReason::NotJsonObject));
    }

    let fields = FieldBag::parse(line)?;
    let view = fields.fields();

    let timestamp = match view.opt_str("timestamp")? {
        Some(value) => parse_timestamp(value)?,
        None => {
            tracing::warn!(raw = %raw, "Event without timestamp; using current time");
            Utc::now()
        }
    };

    let Some(kind) = view.opt_str("event")? else {
        tracing::warn!(raw = %raw, "Event without event field");
        return Ok(Extraction::Skipped(SkipReason::MissingKind));
    };
    let kind = kind.to_string();

    Ok(Extraction::Envelope(Envelope {
        timestamp,
        kind,
        fields,
    }))
}
