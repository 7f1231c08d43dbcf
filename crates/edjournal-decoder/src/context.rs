use chrono::{DateTime, Utc};
use edjournal_types::{Commodity, Material, Rating, RatingLadder, SystemControl, Vehicle};

use crate::fields::Fields;
use crate::resolvers::{Resolve, Resolvers};
use crate::vehicles::{VehicleRegistry, resolve_vehicle};
use crate::Result;

/// A ship named by a line but not yet resolved against the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleRef<'a> {
    pub local_id: i64,
    pub ed_model: Option<&'a str>,
}

/// Everything a decoding routine may read or touch for one journal line
pub struct DecodeContext<'a> {
    pub timestamp: DateTime<Utc>,
    pub kind: &'a str,
    pub fields: Fields<'a>,
    pub resolvers: &'a Resolvers,
    vehicles: &'a mut dyn VehicleRegistry,
}

impl<'a> DecodeContext<'a> {
    pub fn new(
        timestamp: DateTime<Utc>,
        kind: &'a str,
        fields: Fields<'a>,
        resolvers: &'a Resolvers,
        vehicles: &'a mut dyn VehicleRegistry,
    ) -> Self {
        Self {
            timestamp,
            kind,
            fields,
            resolvers,
            vehicles,
        }
    }

    /// Resolve a ship, creating it in the registry when unknown.
    ///
    /// Call this last: a line that fails after a vehicle was created
    /// would leave that vehicle behind.
    pub fn vehicle(&mut self, local_id: Option<i64>, ed_model: Option<&str>) -> Vehicle {
        resolve_vehicle(self.vehicles, local_id, ed_model)
    }

    /// Optional vehicle reference, e.g. `SellShipID` + `SellOldShip`.
    ///
    /// Only reads the fields; pass the result to `vehicle_from` once every
    /// other field of the line has been read.
    pub fn vehicle_ref(&self, id_key: &str, model_key: &str) -> Result<Option<VehicleRef<'a>>> {
        let Some(local_id) = self.fields.opt_int(id_key)? else {
            return Ok(None);
        };
        Ok(Some(VehicleRef {
            local_id,
            ed_model: self.fields.opt_str(model_key)?,
        }))
    }

    pub fn vehicle_from(&mut self, reference: Option<VehicleRef<'_>>) -> Option<Vehicle> {
        reference.map(|r| self.vehicle(Some(r.local_id), r.ed_model))
    }

    /// Faction string from `key`, with superpowers replaced by their display name
    pub fn faction(&self, key: &str) -> Result<Option<String>> {
        Ok(self.resolvers.faction_name(self.fields.opt_str(key)?))
    }

    /// Allegiance, controlling faction and economy block shared by
    /// Docked, FSDJump and Location
    pub fn control(&self) -> Result<SystemControl> {
        let r = self.resolvers;
        Ok(SystemControl {
            allegiance: self.resolve(&*r.superpower, "Allegiance")?,
            faction: self.faction("Faction")?,
            faction_state: self.resolve(&*r.faction_state, "FactionState")?,
            economy: self.resolve(&*r.economy, "Economy")?,
            government: self.resolve(&*r.government, "Government")?,
            security: self.resolve(&*r.security, "Security")?,
        })
    }

    /// Resolve the code in `key`; a miss leaves the value absent
    pub fn resolve<T>(&self, resolver: &dyn Resolve<T>, key: &str) -> Result<Option<T>> {
        Ok(self
            .fields
            .opt_str(key)?
            .and_then(|code| resolver.resolve(code)))
    }

    pub fn commodity(&self, key: &str) -> Result<Option<Commodity>> {
        let Some(code) = self.fields.opt_str(key)? else {
            return Ok(None);
        };
        let commodity = self.resolvers.commodity.resolve(code);
        if commodity.is_none() {
            tracing::error!(kind = self.kind, code, "Failed to map commodity");
        }
        Ok(commodity)
    }

    pub fn material(&self, key: &str) -> Result<Option<Material>> {
        let Some(code) = self.fields.opt_str(key)? else {
            return Ok(None);
        };
        let material = self.resolvers.material.resolve(code);
        if material.is_none() {
            tracing::debug!(kind = self.kind, code, "Unknown material");
        }
        Ok(material)
    }

    /// Rank number on `ladder`; out-of-range ranks read as absent
    pub fn rating(&self, ladder: RatingLadder, key: &str) -> Result<Option<Rating>> {
        Ok(self
            .fields
            .opt_int(key)?
            .and_then(|rank| Rating::from_rank(ladder, rank)))
    }
}
