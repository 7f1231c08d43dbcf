use edjournal_decoder::{Fleet, SharedRegistry, VehicleRegistry};
use edjournal_types::{Event, EventPayload, Vehicle};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Keeps the commander's fleet in step with decoded events.
///
/// The decoder adds ships it has not seen before to the registry. Which ship
/// is current, and dropping sold ships, is handled here after each event.
#[derive(Debug, Clone, Default)]
pub struct FleetTracker {
    fleet: Arc<Mutex<Fleet>>,
}

impl FleetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry handle to give the decoder
    pub fn registry(&self) -> SharedRegistry {
        self.fleet.clone()
    }

    pub fn current(&self) -> Option<Vehicle> {
        self.lock().current()
    }

    /// Stored ships, by local id
    pub fn stored(&self) -> Vec<Vehicle> {
        self.lock().stored().cloned().collect()
    }

    /// Update the fleet for one decoded event
    pub fn apply(&self, event: &Event) {
        let mut fleet = self.lock();
        match &event.payload {
            EventPayload::CommanderContinued(p) => {
                fleet.set_current(p.ship.clone());
            }
            EventPayload::ShipDelivered(p) => {
                fleet.set_current(p.ship.clone());
            }
            EventPayload::ShipSwapped(p) => {
                if let Some(sold) = &p.sold_ship {
                    fleet.remove(sold.local_id);
                }
                fleet.set_current(p.ship.clone());
            }
            EventPayload::ShipPurchased(p) => {
                if let Some(sold) = &p.sold_ship {
                    fleet.remove(sold.local_id);
                }
            }
            EventPayload::ShipSold(p) => {
                fleet.remove(p.ship.local_id);
            }
            _ => return,
        }
        tracing::debug!(
            event = event.name(),
            current = ?fleet.current().map(|v| v.model),
            "Fleet updated"
        );
    }

    fn lock(&self) -> MutexGuard<'_, Fleet> {
        self.fleet.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edjournal_decoder::JournalDecoder;

    fn replay(tracker: &FleetTracker, lines: &[&str]) {
        let decoder = JournalDecoder::new(tracker.registry());
        for line in lines {
            decoder.forward(line, |event| tracker.apply(&event));
        }
    }

    #[test]
    fn test_load_game_sets_current() {
        let tracker = FleetTracker::new();
        replay(
            &tracker,
            &[r#"{"timestamp":"2017-01-01T00:00:00Z","event":"LoadGame","Commander":"Jameson","Ship":"CobraMkIII","ShipID":1,"Credits":1000}"#],
        );

        let current = tracker.current().unwrap();
        assert_eq!(current.local_id, 1);
        assert_eq!(current.model, "Cobra Mk III");
        assert!(tracker.stored().is_empty());
    }

    #[test]
    fn test_swap_stores_previous_ship() {
        let tracker = FleetTracker::new();
        replay(
            &tracker,
            &[
                r#"{"timestamp":"2017-01-01T00:00:00Z","event":"LoadGame","Ship":"CobraMkIII","ShipID":1,"Credits":1000}"#,
                r#"{"timestamp":"2017-01-01T00:01:00Z","event":"ShipyardSwap","ShipType":"Anaconda","ShipID":7,"StoreOldShip":"CobraMkIII","StoreShipID":1}"#,
            ],
        );

        assert_eq!(tracker.current().unwrap().local_id, 7);
        let stored = tracker.stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].model, "Cobra Mk III");
    }

    #[test]
    fn test_delivery_then_sale() {
        let tracker = FleetTracker::new();
        replay(
            &tracker,
            &[
                r#"{"timestamp":"2017-01-01T00:00:00Z","event":"LoadGame","Ship":"SideWinder","ShipID":1,"Credits":1000}"#,
                r#"{"timestamp":"2017-01-01T00:01:00Z","event":"ShipyardBuy","ShipType":"Eagle","ShipPrice":4000,"StoreOldShip":"SideWinder","StoreShipID":1}"#,
                r#"{"timestamp":"2017-01-01T00:01:10Z","event":"ShipyardNew","ShipType":"Eagle","NewShipID":2}"#,
                r#"{"timestamp":"2017-01-01T00:02:00Z","event":"ShipyardSell","ShipType":"SideWinder","SellShipID":1,"ShipPrice":3000}"#,
            ],
        );

        assert_eq!(tracker.current().unwrap().model, "Eagle");
        assert!(tracker.stored().is_empty());
    }

    #[test]
    fn test_unrelated_events_leave_fleet_alone() {
        let tracker = FleetTracker::new();
        replay(
            &tracker,
            &[r#"{"timestamp":"2017-01-01T00:00:00Z","event":"HeatWarning"}"#],
        );
        assert!(tracker.current().is_none());
    }
}
