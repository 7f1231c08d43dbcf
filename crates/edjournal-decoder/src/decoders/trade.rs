use edjournal_types::{
    CommodityCollectedPayload, CommodityEjectedPayload, CommodityPurchasedPayload,
    CommodityRefinedPayload, CommoditySoldPayload, DataPurchasedPayload, EventPayload,
    LimpetTradePayload, PricePayload, ShipRebootedPayload, ShipRefuelledPayload,
    ShipRepairedPayload,
};

use crate::context::DecodeContext;
use crate::registry::DecoderRegistry;
use crate::Result;

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("CollectCargo", collect_cargo);
    registry.register("EjectCargo", eject_cargo);
    registry.register("MiningRefined", mining_refined);
    registry.register("MarketBuy", market_buy);
    registry.register("MarketSell", market_sell);
    registry.register("BuyDrones", buy_drones);
    registry.register("SellDrones", sell_drones);
    registry.register("BuyTradeData", buy_trade_data);
    registry.register("BuyAmmo", buy_ammo);
    registry.register("RefuelPartial", refuel);
    registry.register("RefuelAll", refuel);
    registry.register("Repair", repair);
    registry.register("RepairAll", repair_all);
    registry.register("RebootRepair", reboot_repair);
}

fn collect_cargo(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::CommodityCollected(
        CommodityCollectedPayload {
            commodity: ctx.commodity("Type")?,
            stolen: ctx.fields.bool("Stolen")?,
        },
    )))
}

fn eject_cargo(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::CommodityEjected(CommodityEjectedPayload {
        commodity: ctx.commodity("Type")?,
        amount: ctx.fields.int("Count")?,
        abandoned: ctx.fields.bool("Abandoned")?,
    })))
}

fn mining_refined(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::CommodityRefined(CommodityRefinedPayload {
        commodity: ctx.commodity("Type")?,
    })))
}

fn market_buy(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::CommodityPurchased(
        CommodityPurchasedPayload {
            commodity: ctx.commodity("Type")?,
            amount: ctx.fields.int("Count")?,
            price: ctx.fields.int("BuyPrice")?,
        },
    )))
}

fn market_sell(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let price = ctx.fields.int("SellPrice")?;
    let paid = ctx.fields.int("AvgPricePaid")?;
    Ok(Some(EventPayload::CommoditySold(CommoditySoldPayload {
        commodity: ctx.commodity("Type")?,
        amount: ctx.fields.int("Count")?,
        price,
        profit: price - paid,
        illegal: ctx.fields.flag("IllegalGoods")?,
        stolen: ctx.fields.flag("StolenGoods")?,
        black_market: ctx.fields.flag("BlackMarket")?,
    })))
}

fn buy_drones(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::LimpetPurchased(LimpetTradePayload {
        amount: ctx.fields.int("Count")?,
        price: ctx.fields.int("BuyPrice")?,
    })))
}

fn sell_drones(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::LimpetSold(LimpetTradePayload {
        amount: ctx.fields.int("Count")?,
        price: ctx.fields.int("SellPrice")?,
    })))
}

fn buy_trade_data(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::TradeDataPurchased(DataPurchasedPayload {
        system: ctx.fields.opt_string("System")?,
        price: ctx.fields.int("Cost")?,
    })))
}

fn buy_ammo(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ShipRestocked(PricePayload {
        price: ctx.fields.int("Cost")?,
    })))
}

fn refuel(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ShipRefuelled(ShipRefuelledPayload {
        price: ctx.fields.int("Cost")?,
        amount: ctx.fields.decimal("Amount")?,
    })))
}

fn repair(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ShipRepaired(ShipRepairedPayload {
        item: ctx.fields.opt_string("Item")?,
        price: ctx.fields.int("Cost")?,
    })))
}

fn repair_all(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ShipRepaired(ShipRepairedPayload {
        item: None,
        price: ctx.fields.int("Cost")?,
    })))
}

fn reboot_repair(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ShipRebooted(ShipRebootedPayload {
        modules: ctx.fields.strings("Modules")?,
    })))
}
