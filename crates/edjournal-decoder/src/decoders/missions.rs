use edjournal_types::{
    EventPayload, MissionAbandonedPayload, MissionAcceptedPayload, MissionCompletedPayload,
};

use crate::context::DecodeContext;
use crate::normalize::parse_timestamp;
use crate::registry::DecoderRegistry;
use crate::Result;

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("MissionAccepted", mission_accepted);
    registry.register("MissionCompleted", mission_completed);
    registry.register("MissionAbandoned", mission_abandoned);
    registry.register("CommunityGoalJoin", community_goal_join);
    registry.register("CommunityGoalReward", community_goal_reward);
}

fn mission_accepted(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let expiry = ctx
        .fields
        .opt_str("Expiry")?
        .map(parse_timestamp)
        .transpose()?;

    Ok(Some(EventPayload::MissionAccepted(MissionAcceptedPayload {
        mission_id: Some(ctx.fields.int("MissionID")?),
        name: ctx.fields.opt_string("Name")?,
        system: None,
        faction: ctx.faction("Faction")?,
        community_goal: false,
        expiry,
    })))
}

fn mission_completed(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::MissionCompleted(MissionCompletedPayload {
        mission_id: Some(ctx.fields.int("MissionID")?),
        name: ctx.fields.opt_string("Name")?,
        system: None,
        community_goal: false,
        reward: ctx.fields.opt_int("Reward")?.unwrap_or(0),
        donation: ctx.fields.opt_int("Donation")?.unwrap_or(0),
    })))
}

fn mission_abandoned(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::MissionAbandoned(MissionAbandonedPayload {
        mission_id: ctx.fields.int("MissionID")?,
        name: ctx.fields.opt_string("Name")?,
    })))
}

fn community_goal_join(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::MissionAccepted(MissionAcceptedPayload {
        mission_id: None,
        name: ctx.fields.opt_string("Name")?,
        system: ctx.fields.opt_string("System")?,
        faction: None,
        community_goal: true,
        expiry: None,
    })))
}

fn community_goal_reward(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::MissionCompleted(MissionCompletedPayload {
        mission_id: None,
        name: ctx.fields.opt_string("Name")?,
        system: ctx.fields.opt_string("System")?,
        community_goal: true,
        reward: ctx.fields.opt_int("Reward")?.unwrap_or(0),
        donation: 0,
    })))
}
