use std::collections::BTreeMap;

use edjournal_types::EventPayload;

use crate::context::DecodeContext;
use crate::decoders;
use crate::Result;

/// Decoding routine for one journal kind.
///
/// `Ok(None)` means the line was understood but carries nothing worth an
/// event (e.g. a zero-credit legacy bounty).
pub type DecodeFn = fn(&mut DecodeContext<'_>) -> Result<Option<EventPayload>>;

#[derive(Debug, Clone, Copy)]
pub enum Registration {
    Decode(DecodeFn),
    Ignore,
}

#[derive(Debug, Clone, Copy)]
pub enum Lookup {
    Decoder(DecodeFn),
    Ignored,
    Unknown,
}

/// Kinds the game writes that carry nothing the monitor reports on
const IGNORED_KINDS: &[&str] = &["Fileheader", "Music", "Continued", "RedeemVoucher", "Cargo"];

/// Table from journal `event` string to its decoding routine
#[derive(Debug, Clone, Default)]
pub struct DecoderRegistry {
    entries: BTreeMap<String, Registration>,
}

impl DecoderRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every kind this crate knows how to decode or deliberately ignores
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        decoders::register_all(&mut registry);
        for kind in IGNORED_KINDS {
            registry.ignore(*kind);
        }
        registry
    }

    /// Add or replace the routine for `kind`
    pub fn register(&mut self, kind: impl Into<String>, decode: DecodeFn) {
        self.entries
            .insert(kind.into(), Registration::Decode(decode));
    }

    pub fn ignore(&mut self, kind: impl Into<String>) {
        self.entries.insert(kind.into(), Registration::Ignore);
    }

    pub fn lookup(&self, kind: &str) -> Lookup {
        match self.entries.get(kind) {
            Some(Registration::Decode(decode)) => Lookup::Decoder(*decode),
            Some(Registration::Ignore) => Lookup::Ignored,
            None => Lookup::Unknown,
        }
    }

    /// Registered kinds in name order
    pub fn kinds(&self) -> impl Iterator<Item = (&str, Registration)> {
        self.entries
            .iter()
            .map(|(kind, registration)| (kind.as_str(), *registration))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
