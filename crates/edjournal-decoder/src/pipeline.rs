use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::PoisonError;

use edjournal_types::{Event, EventPayload};

use crate::context::DecodeContext;
use crate::envelope::{Envelope, Extraction, SkipReason, extract};
use crate::registry::{DecodeFn, DecoderRegistry, Lookup};
use crate::resolvers::Resolvers;
use crate::vehicles::SharedRegistry;
use crate::{Error, Result};

// NOTE: Failure Policy
//
// Nothing a journal line contains may take the host process down. Every
// failure becomes an Outcome the caller can inspect, and `decode` logs it
// with the raw line attached. Decoders run under catch_unwind; a panic
// inside one fails that line only and a poisoned registry lock is reclaimed.

/// What became of one raw line
#[derive(Debug)]
pub enum Outcome {
    Decoded(Event),
    /// Known kind that produced no event (ignored kind, zero bounty, NPC speech)
    Handled { kind: String },
    /// Kind with no registered decoder
    Unhandled { kind: String },
    Skipped(SkipReason),
    Failed(Error),
}

impl Outcome {
    pub fn into_event(self) -> Option<Event> {
        match self {
            Outcome::Decoded(event) => Some(event),
            _ => None,
        }
    }
}

/// Raw line in, typed event out
pub struct JournalDecoder {
    registry: DecoderRegistry,
    resolvers: Resolvers,
    vehicles: SharedRegistry,
}

impl JournalDecoder {
    /// Decoder with the built-in registry and lookup tables
    pub fn new(vehicles: SharedRegistry) -> Self {
        Self::with_parts(DecoderRegistry::builtin(), Resolvers::builtin(), vehicles)
    }

    pub fn with_parts(
        registry: DecoderRegistry,
        resolvers: Resolvers,
        vehicles: SharedRegistry,
    ) -> Self {
        Self {
            registry,
            resolvers,
            vehicles,
        }
    }

    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    pub fn vehicles(&self) -> SharedRegistry {
        self.vehicles.clone()
    }

    pub fn classify(&self, raw: &str) -> Outcome {
        let envelope = match extract(raw) {
            Ok(Extraction::Envelope(envelope)) => envelope,
            Ok(Extraction::Skipped(reason)) => return Outcome::Skipped(reason),
            Err(err) => return Outcome::Failed(err),
        };

        match self.registry.lookup(&envelope.kind) {
            Lookup::Unknown => Outcome::Unhandled {
                kind: envelope.kind,
            },
            Lookup::Ignored => Outcome::Handled {
                kind: envelope.kind,
            },
            Lookup::Decoder(decode) => match self.run(decode, &envelope) {
                Ok(Some(payload)) => Outcome::Decoded(Event::new(envelope.timestamp, payload, raw)),
                Ok(None) => Outcome::Handled {
                    kind: envelope.kind,
                },
                Err(err) => Outcome::Failed(err),
            },
        }
    }

    fn run(&self, decode: DecodeFn, envelope: &Envelope) -> Result<Option<EventPayload>> {
        let mut vehicles = self.vehicles.lock().unwrap_or_else(PoisonError::into_inner);
        let mut ctx = DecodeContext::new(
            envelope.timestamp,
            &envelope.kind,
            envelope.fields.fields(),
            &self.resolvers,
            &mut *vehicles,
        );

        catch_unwind(AssertUnwindSafe(|| decode(&mut ctx))).unwrap_or_else(|payload| {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(Error::Panic(msg))
        })
    }

    /// Decode one line, logging anything that did not become an event
    pub fn decode(&self, raw: &str) -> Option<Event> {
        match self.classify(raw) {
            Outcome::Decoded(event) => {
                tracing::debug!(event = event.name(), "Handled event");
                Some(event)
            }
            Outcome::Handled { kind } => {
                tracing::debug!(kind = %kind, "Handled event");
                None
            }
            Outcome::Unhandled { kind } => {
                tracing::debug!(kind = %kind, raw = %raw, "Unhandled event");
                None
            }
            Outcome::Skipped(reason) => {
                tracing::trace!(?reason, raw = %raw, "Skipped line");
                None
            }
            Outcome::Failed(err) => {
                tracing::warn!(error = %err, raw = %raw, "Failed to parse line");
                None
            }
        }
    }

    /// Decode `raw` and hand the event to `handler`, if there is one
    pub fn forward<F>(&self, raw: &str, mut handler: F) -> bool
    where
        F: FnMut(Event),
    {
        match self.decode(raw) {
            Some(event) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    /// Decode lines in order, keeping the events
    pub fn decode_lines<'a, I>(&self, lines: I) -> Vec<Event>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.decode(line))
            .collect()
    }
}

impl std::fmt::Debug for JournalDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalDecoder")
            .field("kinds", &self.registry.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicles::Fleet;

    fn decoder() -> JournalDecoder {
        JournalDecoder::new(Fleet::new().shared())
    }

    #[test]
    fn test_outcomes() {
        let decoder = decoder();
        assert!(matches!(
            decoder.classify(r#"{"timestamp":"2017-10-06T23:47:32Z","event":"HeatWarning"}"#),
            Outcome::Decoded(_)
        ));
        assert!(matches!(
            decoder.classify(r#"{"timestamp":"2017-10-06T23:47:32Z","event":"Music","MusicTrack":"NoTrack"}"#),
            Outcome::Handled { .. }
        ));
        assert!(matches!(
            decoder.classify(r#"{"timestamp":"2017-10-06T23:47:32Z","event":"Teleported"}"#),
            Outcome::Unhandled { kind } if kind == "Teleported"
        ));
        assert!(matches!(
            decoder.classify("hello world"),
            Outcome::Skipped(SkipReason::NotJsonObject)
        ));
        assert!(matches!(
            decoder.classify(r#"{"timestamp":"2017-10-06T23:47:32Z","event":"HullDamage"}"#),
            Outcome::Failed(Error::MissingField(field)) if field == "Health"
        ));
    }

    #[test]
    fn test_panicking_decoder_fails_the_line_only() {
        let mut registry = DecoderRegistry::builtin();
        registry.register("Explode", |_| panic!("boom"));
        let decoder =
            JournalDecoder::with_parts(registry, Resolvers::builtin(), Fleet::new().shared());

        match decoder.classify(r#"{"event":"Explode"}"#) {
            Outcome::Failed(Error::Panic(msg)) => assert_eq!(msg, "boom"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(decoder.decode(r#"{"event":"HeatDamage"}"#).is_some());
    }

    #[test]
    fn test_forward_only_calls_handler_for_events() {
        let decoder = decoder();
        let mut seen = Vec::new();

        assert!(decoder.forward(r#"{"event":"ShieldState","ShieldsUp":false}"#, |e| {
            seen.push(e)
        }));
        assert!(!decoder.forward(r#"{"event":"Music"}"#, |e| seen.push(e)));

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].payload, EventPayload::ShieldsDown);
    }

    #[test]
    fn test_raw_line_is_stamped_verbatim() {
        let raw = r#"{ "timestamp":"2017-10-06T23:47:32Z", "event":"SelfDestruct" }"#;
        let event = decoder().decode(raw).unwrap();
        assert_eq!(event.raw, raw);
    }
}
