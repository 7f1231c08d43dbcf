use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use edjournal_types::Vehicle;

/// Session state the decoders consult to name the ships an event refers to
pub trait VehicleRegistry: Send {
    /// Vehicle the commander is currently flying
    fn current(&self) -> Option<Vehicle>;

    /// Stored vehicle by local id
    fn find(&self, local_id: i64) -> Option<Vehicle>;

    /// Synthesize a vehicle from its model template.
    ///
    /// The vehicle takes `local_id`, or 0 when the id is unknown.
    fn create(&mut self, local_id: Option<i64>, ed_model: Option<&str>) -> Vehicle;
}

/// Registry handle shared between the decoder and whoever tracks the fleet
pub type SharedRegistry = Arc<Mutex<dyn VehicleRegistry>>;

/// Vehicle lookup used by every shipyard and session event.
///
/// - neither id nor model: the current vehicle
/// - an id: the current vehicle if its id matches, else the stored one
/// - otherwise, or when nothing matched: a newly created vehicle
pub fn resolve_vehicle(
    registry: &mut dyn VehicleRegistry,
    local_id: Option<i64>,
    ed_model: Option<&str>,
) -> Vehicle {
    let found = match local_id {
        None if ed_model.is_none() => registry.current(),
        None => None,
        Some(id) => registry
            .current()
            .filter(|current| current.local_id == id)
            .or_else(|| registry.find(id)),
    };
    match found {
        Some(vehicle) => vehicle,
        None => registry.create(local_id, ed_model),
    }
}

/// In-memory registry: the current vehicle plus stored ships by local id
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    current: Option<Vehicle>,
    stored: BTreeMap<i64, Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> Arc<Mutex<Fleet>> {
        Arc::new(Mutex::new(self))
    }

    /// Make `vehicle` current; the previous current vehicle is stored
    pub fn set_current(&mut self, vehicle: Vehicle) {
        let local_id = vehicle.local_id;
        self.stored.remove(&local_id);
        if let Some(previous) = self.current.replace(vehicle)
            && previous.local_id != local_id
        {
            self.stored.insert(previous.local_id, previous);
        }
    }

    pub fn store(&mut self, vehicle: Vehicle) {
        self.stored.insert(vehicle.local_id, vehicle);
    }

    /// Forget a vehicle, current or stored
    pub fn remove(&mut self, local_id: i64) -> Option<Vehicle> {
        if self.current.as_ref().is_some_and(|v| v.local_id == local_id) {
            return self.current.take();
        }
        self.stored.remove(&local_id)
    }

    pub fn stored(&self) -> impl Iterator<Item = &Vehicle> {
        self.stored.values()
    }
}

impl VehicleRegistry for Fleet {
    fn current(&self) -> Option<Vehicle> {
        self.current.clone()
    }

    fn find(&self, local_id: i64) -> Option<Vehicle> {
        self.stored.get(&local_id).cloned()
    }

    fn create(&mut self, local_id: Option<i64>, ed_model: Option<&str>) -> Vehicle {
        let vehicle = Vehicle::from_template(local_id.unwrap_or(0), ed_model);
        if local_id.is_some() {
            self.stored.insert(vehicle.local_id, vehicle.clone());
        }
        vehicle
    }
}
