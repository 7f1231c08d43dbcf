use edjournal_types::{
    EventPayload, FighterLaunchedPayload, ShipPayload, ShipPurchasedPayload, ShipSoldPayload,
    ShipSwappedPayload, ShipTransferPayload, SrvLaunchedPayload,
};

use crate::context::DecodeContext;
use crate::registry::DecoderRegistry;
use crate::Result;

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("ShipyardBuy", shipyard_buy);
    registry.register("ShipyardNew", shipyard_new);
    registry.register("ShipyardSell", shipyard_sell);
    registry.register("ShipyardSwap", shipyard_swap);
    registry.register("ShipyardTransfer", shipyard_transfer);
    registry.register("LaunchSRV", launch_srv);
    registry.register("DockSRV", |_| Ok(Some(EventPayload::SrvDocked)));
    registry.register("LaunchFighter", launch_fighter);
    registry.register("DockFighter", |_| Ok(Some(EventPayload::FighterDocked)));
    registry.register("VehicleSwitch", vehicle_switch);
}

// NOTE: Resolve Ships Last
//
// Resolving a ship the registry does not know creates it there. Every
// routine below reads and type-checks all of its fields first and resolves
// ships only after that, so a line that fails leaves the registry as it was.

// The new ship has no local id until ShipyardNew, so it is resolved by
// model alone.
fn shipyard_buy(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let ship_model = ctx.fields.opt_str("ShipType")?;
    let price = ctx.fields.int("ShipPrice")?;
    let stored_ref = ctx.vehicle_ref("StoreShipID", "StoreOldShip")?;
    let sold_ref = ctx.vehicle_ref("SellShipID", "SellOldShip")?;
    let sold_price = ctx.fields.opt_int("SellPrice")?;

    let ship = ctx.vehicle(None, ship_model);
    Ok(Some(EventPayload::ShipPurchased(ShipPurchasedPayload {
        ship,
        price,
        sold_ship: ctx.vehicle_from(sold_ref),
        sold_price,
        stored_ship: ctx.vehicle_from(stored_ref),
    })))
}

fn shipyard_new(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let local_id = ctx.fields.int("NewShipID")?;
    let ship_model = ctx.fields.opt_str("ShipType")?;
    let ship = ctx.vehicle(Some(local_id), ship_model);
    Ok(Some(EventPayload::ShipDelivered(ShipPayload { ship })))
}

fn shipyard_sell(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let local_id = ctx.fields.int("SellShipID")?;
    let ship_model = ctx.fields.opt_str("ShipType")?;
    let price = ctx.fields.int("ShipPrice")?;

    let ship = ctx.vehicle(Some(local_id), ship_model);
    Ok(Some(EventPayload::ShipSold(ShipSoldPayload { ship, price })))
}

fn shipyard_swap(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let local_id = ctx.fields.int("ShipID")?;
    let ship_model = ctx.fields.opt_str("ShipType")?;
    let stored_ref = ctx.vehicle_ref("StoreShipID", "StoreOldShip")?;
    let sold_ref = ctx.vehicle_ref("SellShipID", "SellOldShip")?;

    let ship = ctx.vehicle(Some(local_id), ship_model);
    Ok(Some(EventPayload::ShipSwapped(ShipSwappedPayload {
        ship,
        sold_ship: ctx.vehicle_from(sold_ref),
        stored_ship: ctx.vehicle_from(stored_ref),
    })))
}

fn shipyard_transfer(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let local_id = ctx.fields.int("ShipID")?;
    let ship_model = ctx.fields.opt_str("ShipType")?;
    let system = ctx.fields.opt_string("System")?;
    let distance = ctx.fields.decimal("Distance")?;
    let price = ctx.fields.int("TransferPrice")?;

    let ship = ctx.vehicle(Some(local_id), ship_model);
    Ok(Some(EventPayload::ShipTransferInitiated(ShipTransferPayload {
        ship,
        system,
        distance,
        price,
    })))
}

fn launch_srv(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::SrvLaunched(SrvLaunchedPayload {
        loadout: ctx.fields.opt_string("Loadout")?,
    })))
}

fn launch_fighter(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::FighterLaunched(FighterLaunchedPayload {
        loadout: ctx.fields.opt_string("Loadout")?,
        player_controlled: ctx.fields.bool("PlayerControlled")?,
    })))
}

fn vehicle_switch(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    match ctx.fields.opt_str("To")? {
        Some("Fighter") => Ok(Some(EventPayload::ControllingFighter)),
        Some("Mothership") => Ok(Some(EventPayload::ControllingShip)),
        _ => Ok(None),
    }
}
