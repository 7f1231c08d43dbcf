use edjournal_types::{
    ClearedSavePayload, CommanderContinuedPayload, CommanderStartedPayload, CrewAssignedPayload,
    CrewFiredPayload, CrewHiredPayload, EventPayload, RatingLadder,
};

use crate::context::DecodeContext;
use crate::registry::DecoderRegistry;
use crate::Result;

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("LoadGame", load_game);
    registry.register("NewCommander", new_commander);
    registry.register("ClearSavedGame", clear_saved_game);
    registry.register("CrewHire", crew_hire);
    registry.register("CrewFire", crew_fire);
    registry.register("CrewAssign", crew_assign);
}

fn load_game(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let local_id = ctx.fields.opt_int("ShipID")?;
    let ship_model = ctx.fields.opt_str("Ship")?;
    let commander = ctx.fields.opt_string("Commander")?;
    let mode = ctx.resolve(&*ctx.resolvers.game_mode, "GameMode")?;
    let group = ctx.fields.opt_string("Group")?;
    let credits = ctx.fields.int("Credits")?;

    // Ship last, once nothing else can fail the line
    let ship = ctx.vehicle(local_id, ship_model);
    Ok(Some(EventPayload::CommanderContinued(
        CommanderContinuedPayload {
            commander,
            ship,
            mode,
            group,
            credits,
        },
    )))
}

fn new_commander(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::CommanderStarted(CommanderStartedPayload {
        name: ctx.fields.opt_string("Name")?,
        package: ctx.fields.opt_string("Package")?,
    })))
}

fn clear_saved_game(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ClearedSave(ClearedSavePayload {
        name: ctx.fields.opt_string("Name")?,
    })))
}

fn crew_hire(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::CrewHired(CrewHiredPayload {
        name: ctx.fields.opt_string("Name")?,
        faction: ctx.faction("Faction")?,
        price: ctx.fields.int("Cost")?,
        rating: ctx.rating(RatingLadder::Combat, "CombatRank")?,
    })))
}

fn crew_fire(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::CrewFired(CrewFiredPayload {
        name: ctx.fields.opt_string("Name")?,
    })))
}

fn crew_assign(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::CrewAssigned(CrewAssignedPayload {
        name: ctx.fields.opt_string("Name")?,
        role: ctx.fields.opt_string("Role")?,
    })))
}
