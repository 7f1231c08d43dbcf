use edjournal_types::{
    CommanderProgressPayload, CommanderRatingsPayload, EventPayload, PromotionPayload,
    RatingLadder,
};

use crate::context::DecodeContext;
use crate::registry::DecoderRegistry;
use crate::Result;

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("Promotion", promotion);
    registry.register("Progress", progress);
    registry.register("Rank", rank);
}

/// Journal field carrying each ladder's rank
const LADDER_FIELDS: [(RatingLadder, &str); 6] = [
    (RatingLadder::Combat, "Combat"),
    (RatingLadder::Trade, "Trade"),
    (RatingLadder::Exploration, "Explore"),
    (RatingLadder::Cqc, "CQC"),
    (RatingLadder::Empire, "Empire"),
    (RatingLadder::Federation, "Federation"),
];

fn promotion(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let Some((ladder, field)) = LADDER_FIELDS
        .into_iter()
        .find(|(_, field)| ctx.fields.contains(field))
    else {
        return Ok(None);
    };

    let Some(rating) = ctx.rating(ladder, field)? else {
        tracing::warn!(field, "Promotion to a rank outside the ladder");
        return Ok(None);
    };

    let promotion = PromotionPayload { rating };
    Ok(Some(match ladder {
        RatingLadder::Combat => EventPayload::CombatPromotion(promotion),
        RatingLadder::Trade => EventPayload::TradePromotion(promotion),
        RatingLadder::Exploration => EventPayload::ExplorationPromotion(promotion),
        RatingLadder::Cqc => EventPayload::CqcPromotion(promotion),
        RatingLadder::Empire => EventPayload::EmpirePromotion(promotion),
        RatingLadder::Federation => EventPayload::FederationPromotion(promotion),
    }))
}

fn progress(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let f = ctx.fields;
    Ok(Some(EventPayload::CommanderProgress(CommanderProgressPayload {
        combat: f.int("Combat")?,
        trade: f.int("Trade")?,
        exploration: f.int("Explore")?,
        cqc: f.int("CQC")?,
        empire: f.int("Empire")?,
        federation: f.int("Federation")?,
    })))
}

fn rank(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::CommanderRatings(CommanderRatingsPayload {
        combat: ctx.rating(RatingLadder::Combat, "Combat")?,
        trade: ctx.rating(RatingLadder::Trade, "Trade")?,
        exploration: ctx.rating(RatingLadder::Exploration, "Explore")?,
        cqc: ctx.rating(RatingLadder::Cqc, "CQC")?,
        empire: ctx.rating(RatingLadder::Empire, "Empire")?,
        federation: ctx.rating(RatingLadder::Federation, "Federation")?,
    })))
}
