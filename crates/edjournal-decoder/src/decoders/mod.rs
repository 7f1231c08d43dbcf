// NOTE: Decoder Modules
//
// One module per area of play. Each exposes `register`, which adds its
// kinds to the registry; the routines themselves stay private. Routines read
// fields through DecodeContext so lookup misses, faction renaming and vehicle
// resolution behave the same everywhere.

mod combat;
mod commander;
mod comms;
mod exploration;
mod materials;
mod missions;
mod ranks;
mod shipyard;
mod station;
mod trade;
mod travel;

use crate::registry::DecoderRegistry;

pub(crate) fn register_all(registry: &mut DecoderRegistry) {
    travel::register(registry);
    station::register(registry);
    combat::register(registry);
    ranks::register(registry);
    trade::register(registry);
    exploration::register(registry);
    materials::register(registry);
    shipyard::register(registry);
    comms::register(registry);
    commander::register(registry);
    missions::register(registry);
}
