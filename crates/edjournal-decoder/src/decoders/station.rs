use edjournal_types::{
    DockedPayload, DockingDeniedPayload, DockingGrantedPayload, EventPayload, StationPayload,
};

use crate::context::DecodeContext;
use crate::registry::DecoderRegistry;
use crate::Result;

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("Docked", docked);
    registry.register("Undocked", undocked);
    registry.register("DockingRequested", docking_requested);
    registry.register("DockingGranted", docking_granted);
    registry.register("DockingDenied", docking_denied);
    registry.register("DockingCancelled", docking_cancelled);
    registry.register("DockingTimeout", docking_timeout);
}

fn station(ctx: &DecodeContext<'_>) -> Result<StationPayload> {
    Ok(StationPayload {
        station: ctx.fields.opt_string("StationName")?,
    })
}

fn docked(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::Docked(DockedPayload {
        system: ctx.fields.opt_string("StarSystem")?,
        station: ctx.fields.opt_string("StationName")?,
        control: ctx.control()?,
    })))
}

fn undocked(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::Undocked(station(ctx)?)))
}

fn docking_requested(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::DockingRequested(station(ctx)?)))
}

fn docking_granted(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::DockingGranted(DockingGrantedPayload {
        station: ctx.fields.opt_string("StationName")?,
        landing_pad: ctx.fields.int("LandingPad")?,
    })))
}

fn docking_denied(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::DockingDenied(DockingDeniedPayload {
        station: ctx.fields.opt_string("StationName")?,
        reason: ctx.fields.opt_string("Reason")?,
    })))
}

fn docking_cancelled(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::DockingCancelled(station(ctx)?)))
}

fn docking_timeout(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::DockingTimedOut(station(ctx)?)))
}
