use edjournal_types::{
    BondAwardedPayload, BountyAwardedPayload, CrimePayload, DiedPayload, EventPayload,
    FinePaidPayload, HullDamagedPayload, KilledPayload, Killer, Rating, RatingLadder, Reward,
    ShipInterdictedPayload, ShipInterdictionPayload,
};

use crate::context::DecodeContext;
use crate::normalize::sensible_health;
use crate::registry::DecoderRegistry;
use crate::{Error, Result};

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("Bounty", bounty);
    registry.register("CapShipBond", bond);
    registry.register("FactionKillBond", bond);
    registry.register("CommitCrime", commit_crime);
    registry.register("PayFines", pay_fines);
    registry.register("PayLegacyFines", pay_legacy_fines);
    registry.register("Interdicted", interdicted);
    registry.register("EscapeInterdiction", escape_interdiction);
    registry.register("Interdiction", interdiction);
    registry.register("PVPKill", pvp_kill);
    registry.register("Died", died);
    registry.register("HullDamage", hull_damage);
    registry.register("ShieldState", shield_state);
    registry.register("CockpitBreached", |_| Ok(Some(EventPayload::CockpitBreached)));
    registry.register("HeatWarning", |_| Ok(Some(EventPayload::HeatWarning)));
    registry.register("HeatDamage", |_| Ok(Some(EventPayload::HeatDamage)));
    registry.register("SelfDestruct", |_| Ok(Some(EventPayload::SelfDestruct)));
}

// Older journals write a single `Reward` with its `Faction`; newer ones write
// `TotalReward` plus a per-faction `Rewards` breakdown.
fn bounty(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let target = ctx.fields.opt_string("Target")?;
    let victim_faction = ctx.faction("VictimFaction")?;

    let (reward, rewards) = if ctx.fields.contains("Reward") {
        let reward = ctx.fields.int("Reward")?;
        if reward == 0 {
            tracing::debug!("Ignoring zero-credit bounty");
            return Ok(None);
        }
        let faction = ctx.faction("Faction")?;
        (reward, vec![Reward { faction, amount: reward }])
    } else {
        let rewards = ctx
            .fields
            .objects("Rewards")?
            .into_iter()
            .map(|entry| -> Result<Reward> {
                Ok(Reward {
                    faction: ctx.resolvers.faction_name(entry.opt_str("Faction")?),
                    amount: entry.int("Reward")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        (ctx.fields.int("TotalReward")?, rewards)
    };

    Ok(Some(EventPayload::BountyAwarded(BountyAwardedPayload {
        target,
        victim_faction,
        reward,
        rewards,
    })))
}

fn bond(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::BondAwarded(BondAwardedPayload {
        awarding_faction: ctx.faction("Faction")?,
        victim_faction: ctx.faction("VictimFaction")?,
        reward: ctx.fields.int("Reward")?,
    })))
}

fn commit_crime(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let crime_type = ctx.fields.opt_string("CrimeType")?;
    let faction = ctx.faction("Faction")?;
    let victim = ctx.fields.opt_string("Victim")?;

    if ctx.fields.contains("Fine") {
        Ok(Some(EventPayload::FineIncurred(CrimePayload {
            crime_type,
            faction,
            victim,
            amount: ctx.fields.int("Fine")?,
        })))
    } else {
        Ok(Some(EventPayload::BountyIncurred(CrimePayload {
            crime_type,
            faction,
            victim,
            amount: ctx.fields.int("Bounty")?,
        })))
    }
}

fn pay_fines(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::FinePaid(FinePaidPayload {
        amount: ctx.fields.int("Amount")?,
        legacy: false,
    })))
}

fn pay_legacy_fines(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::FinePaid(FinePaidPayload {
        amount: ctx.fields.int("Amount")?,
        legacy: true,
    })))
}

fn interdicted(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ShipInterdicted(ShipInterdictedPayload {
        succeeded: true,
        submitted: ctx.fields.bool("Submitted")?,
        is_commander: ctx.fields.bool("IsPlayer")?,
        interdictor: ctx.fields.opt_string("Interdictor")?,
        rating: ctx.rating(RatingLadder::Combat, "CombatRank")?,
        faction: ctx.faction("Faction")?,
        power: ctx.fields.opt_string("Power")?,
    })))
}

fn escape_interdiction(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ShipInterdicted(ShipInterdictedPayload {
        succeeded: false,
        submitted: false,
        is_commander: ctx.fields.bool("IsPlayer")?,
        interdictor: ctx.fields.opt_string("Interdictor")?,
        rating: None,
        faction: None,
        power: None,
    })))
}

fn interdiction(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ShipInterdiction(ShipInterdictionPayload {
        succeeded: ctx.fields.bool("Success")?,
        is_commander: ctx.fields.bool("IsPlayer")?,
        interdictee: ctx.fields.opt_string("Interdicted")?,
        rating: ctx.rating(RatingLadder::Combat, "CombatRank")?,
        faction: ctx.faction("Faction")?,
        power: ctx.fields.opt_string("Power")?,
    })))
}

fn pvp_kill(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::Killed(KilledPayload {
        victim: ctx.fields.opt_string("Victim")?,
        rating: ctx.rating(RatingLadder::Combat, "CombatRank")?,
    })))
}

fn combat_rating_named(name: Option<&str>) -> Option<Rating> {
    name.and_then(|name| Rating::from_ed_name(RatingLadder::Combat, name))
}

// A single killer is written inline as Killer*; a wing as a Killers array.
fn died(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let mut killers = Vec::new();

    if ctx.fields.contains("KillerName") {
        killers.push(Killer {
            name: ctx.fields.opt_string("KillerName")?,
            ship: ctx.fields.opt_string("KillerShip")?,
            rating: combat_rating_named(ctx.fields.opt_str("KillerRank")?),
        });
    }
    for killer in ctx.fields.objects("Killers")? {
        killers.push(Killer {
            name: killer.opt_string("Name")?,
            ship: killer.opt_string("Ship")?,
            rating: combat_rating_named(killer.opt_str("Rank")?),
        });
    }

    Ok(Some(EventPayload::Died(DiedPayload { killers })))
}

fn hull_damage(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let health = ctx.fields.decimal("Health")?;
    let percent = health
        .checked_mul(rust_decimal::Decimal::ONE_HUNDRED)
        .ok_or_else(|| Error::Number {
            field: "Health".to_string(),
            value: health.to_string(),
        })?;
    Ok(Some(EventPayload::HullDamaged(HullDamagedPayload {
        health: sensible_health(percent),
    })))
}

fn shield_state(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    if ctx.fields.bool("ShieldsUp")? {
        Ok(Some(EventPayload::ShieldsUp))
    } else {
        Ok(Some(EventPayload::ShieldsDown))
    }
}
