use edjournal_types::{
    EventPayload, JumpedPayload, LocationPayload, NormalSpacePayload, StarPosition,
    SurfacePositionPayload, SystemPayload,
};

use crate::context::DecodeContext;
use crate::normalize::quantize_coordinate;
use crate::registry::DecoderRegistry;
use crate::{Error, Result};

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("Touchdown", touchdown);
    registry.register("Liftoff", liftoff);
    registry.register("SupercruiseEntry", supercruise_entry);
    registry.register("SupercruiseExit", supercruise_exit);
    registry.register("FSDJump", fsd_jump);
    registry.register("Location", location);
}

fn star_position(ctx: &DecodeContext<'_>) -> Result<StarPosition> {
    match ctx.fields.decimals("StarPos")?.as_slice() {
        [x, y, z] => Ok(StarPosition {
            x: quantize_coordinate(*x),
            y: quantize_coordinate(*y),
            z: quantize_coordinate(*z),
        }),
        _ => Err(Error::FieldType {
            field: "StarPos".to_string(),
            expected: "three coordinates",
        }),
    }
}

fn surface_position(ctx: &DecodeContext<'_>) -> Result<SurfacePositionPayload> {
    Ok(SurfacePositionPayload {
        latitude: ctx.fields.decimal("Latitude")?,
        longitude: ctx.fields.decimal("Longitude")?,
    })
}

fn touchdown(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::Touchdown(surface_position(ctx)?)))
}

fn liftoff(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::Liftoff(surface_position(ctx)?)))
}

fn supercruise_entry(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::EnteredSupercruise(SystemPayload {
        system: ctx.fields.opt_string("StarSystem")?,
    })))
}

fn supercruise_exit(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::EnteredNormalSpace(NormalSpacePayload {
        system: ctx.fields.opt_string("StarSystem")?,
        body: ctx.fields.opt_string("Body")?,
        body_type: ctx.fields.opt_string("BodyType")?,
    })))
}

fn fsd_jump(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::Jumped(JumpedPayload {
        system: ctx.fields.opt_string("StarSystem")?,
        position: star_position(ctx)?,
        fuel_used: ctx.fields.decimal("FuelUsed")?,
        fuel_remaining: ctx.fields.decimal("FuelLevel")?,
        control: ctx.control()?,
    })))
}

fn location(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::Location(LocationPayload {
        system: ctx.fields.opt_string("StarSystem")?,
        position: star_position(ctx)?,
        body: ctx.fields.opt_string("Body")?,
        body_type: ctx.fields.opt_string("BodyType")?,
        docked: ctx.fields.bool("Docked")?,
        control: ctx.control()?,
    })))
}
