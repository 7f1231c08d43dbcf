use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::payload::EventPayload;

// NOTE: Event Shape
//
// 1. One journal line produces at most one Event. Lines that fan out by
//    content (Promotion, VehicleSwitch, Scan, ShieldState, CommitCrime) pick a
//    single variant, never several.
//
// 2. The raw line travels with the event so any downstream surprise can be
//    traced back to the exact bytes the game wrote.
//
// 3. Fractional quantities are rust_decimal::Decimal and credits are whole
//    i64; binary floats never leave the decoder.

/// Decoded journal event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event timestamp (UTC)
    pub timestamp: DateTime<Utc>,

    /// Event type and content (flattened enum)
    #[serde(flatten)]
    pub payload: EventPayload,

    /// Journal line exactly as read
    pub raw: String,
}

impl Event {
    pub fn new(timestamp: DateTime<Utc>, payload: EventPayload, raw: impl Into<String>) -> Self {
        Self {
            timestamp,
            payload,
            raw: raw.into(),
        }
    }

    /// Human-readable event name, e.g. "Federation promotion"
    pub fn name(&self) -> &'static str {
        self.payload.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::payload::StationPayload;

    #[test]
    fn test_serialization() {
        let event = Event::new(
            Utc::now(),
            EventPayload::Undocked(StationPayload {
                station: Some("Jameson Memorial".to_string()),
            }),
            r#"{"event":"Undocked","StationName":"Jameson Memorial"}"#,
        );

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized.payload {
            EventPayload::Undocked(payload) => {
                assert_eq!(payload.station.as_deref(), Some("Jameson Memorial"))
            }
            _ => panic!("Wrong payload type"),
        }
        assert_eq!(deserialized.raw, event.raw);
    }
}
