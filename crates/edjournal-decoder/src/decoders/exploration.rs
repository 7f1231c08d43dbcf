use edjournal_types::{
    BodyScannedPayload, DataPurchasedPayload, EventPayload, ExplorationDataSoldPayload,
    MaterialPresence, Ring, ScannedBody, ScreenshotPayload, SignalSourcePayload,
    StarScannedPayload,
};

use crate::context::DecodeContext;
use crate::fields::Fields;
use crate::registry::DecoderRegistry;
use crate::resolvers::Resolve;
use crate::{Error, Result};

const YEARS_PER_MEGAYEAR: i64 = 1_000_000;

pub(super) fn register(registry: &mut DecoderRegistry) {
    registry.register("Scan", scan);
    registry.register("BuyExplorationData", buy_exploration_data);
    registry.register("SellExplorationData", sell_exploration_data);
    registry.register("USSDrop", uss_drop);
    registry.register("Screenshot", screenshot);
}

fn ring(ctx: &DecodeContext<'_>, ring: Fields<'_>) -> Result<Ring> {
    Ok(Ring {
        name: ring.opt_string("Name")?,
        composition: ring
            .opt_str("RingClass")?
            .and_then(|class| ctx.resolvers.composition.resolve(class)),
        mass: ring.decimal("MassMT")?,
        inner_radius: ring.decimal("InnerRad")?,
        outer_radius: ring.decimal("OuterRad")?,
    })
}

fn scanned_body(ctx: &DecodeContext<'_>) -> Result<ScannedBody> {
    let f = ctx.fields;
    let rings = f
        .objects("Rings")?
        .into_iter()
        .map(|r| ring(ctx, r))
        .collect::<Result<Vec<_>>>()?;

    Ok(ScannedBody {
        name: f.opt_string("BodyName")?,
        distance_from_arrival: f.decimal("DistanceFromArrivalLS")?,
        radius: f.decimal("Radius")?,
        orbital_period: f.opt_decimal("OrbitalPeriod")?,
        rotation_period: f.decimal("RotationPeriod")?,
        semi_major_axis: f.opt_decimal("SemiMajorAxis")?,
        eccentricity: f.opt_decimal("Eccentricity")?,
        orbital_inclination: f.opt_decimal("OrbitalInclination")?,
        periapsis: f.opt_decimal("Periapsis")?,
        rings,
    })
}

/// Surface composition; materials missing from the table are left out
fn surface_materials(ctx: &DecodeContext<'_>) -> Result<Vec<MaterialPresence>> {
    let Some(materials) = ctx.fields.object("Materials")? else {
        return Ok(Vec::new());
    };
    let mut presence = Vec::new();
    for code in materials.keys() {
        let percentage = materials.decimal(code)?;
        match ctx.resolvers.material.resolve(code) {
            Some(material) => presence.push(MaterialPresence {
                material,
                percentage,
            }),
            None => tracing::debug!(code, "Skipping unknown surface material"),
        }
    }
    Ok(presence)
}

// Stars carry StarType; everything else is a planet or moon.
fn scan(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    let body = scanned_body(ctx)?;
    let f = ctx.fields;

    if f.contains("StarType") {
        let megayears = f.int("Age_MY")?;
        let age = megayears
            .checked_mul(YEARS_PER_MEGAYEAR)
            .ok_or_else(|| Error::Number {
                field: "Age_MY".to_string(),
                value: megayears.to_string(),
            })?;
        return Ok(Some(EventPayload::StarScanned(StarScannedPayload {
            body,
            star_type: f.opt_string("StarType")?,
            stellar_mass: f.decimal("StellarMass")?,
            absolute_magnitude: f.decimal("AbsoluteMagnitude")?,
            age,
            temperature: f.decimal("SurfaceTemperature")?,
        })));
    }

    Ok(Some(EventPayload::BodyScanned(BodyScannedPayload {
        body,
        body_class: f.opt_string("PlanetClass")?,
        gravity: f.decimal("SurfaceGravity")?,
        temperature: f.decimal("SurfaceTemperature")?,
        pressure: f.decimal("SurfacePressure")?,
        tidally_locked: f.bool("TidalLock")?,
        landable: f.bool("Landable")?,
        atmosphere: f.opt_string("Atmosphere")?,
        volcanism: f.opt_string("Volcanism")?,
        materials: surface_materials(ctx)?,
        terraform_state: f.opt_string("TerraformState")?,
    })))
}

fn buy_exploration_data(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ExplorationDataPurchased(
        DataPurchasedPayload {
            system: ctx.fields.opt_string("System")?,
            price: ctx.fields.int("Cost")?,
        },
    )))
}

fn sell_exploration_data(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::ExplorationDataSold(
        ExplorationDataSoldPayload {
            systems: ctx.fields.strings("Systems")?,
            first_discoveries: ctx.fields.strings("Discovered")?,
            reward: ctx.fields.int("BaseValue")?,
            bonus: ctx.fields.int("Bonus")?,
        },
    )))
}

fn uss_drop(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::EnteredSignalSource(SignalSourcePayload {
        source: ctx.fields.opt_string("USSType")?,
        threat: ctx.fields.int("USSThreat")?,
    })))
}

fn screenshot(ctx: &mut DecodeContext<'_>) -> Result<Option<EventPayload>> {
    Ok(Some(EventPayload::Screenshot(ScreenshotPayload {
        filename: ctx.fields.opt_string("Filename")?,
        width: ctx.fields.int("Width")?,
        height: ctx.fields.int("Height")?,
        system: ctx.fields.opt_string("System")?,
        body: ctx.fields.opt_string("Body")?,
    })))
}
