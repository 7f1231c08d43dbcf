use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::{Error, Result};

// NOTE: Rounding
//
// The game rounds with decimal midpoint-to-even. Every rounding step here
// uses RoundingStrategy::MidpointNearestEven so a coordinate or health value
// decoded here matches what the game itself would show.

const COORDINATE_STEPS: Decimal = Decimal::from_parts(32, 0, 0, false, 0);
const HEALTH_PRECISION_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Snap a galactic coordinate to the game's 1/32 light-year grid.
///
/// Idempotent: quantizing an already quantized value returns it unchanged.
pub fn quantize_coordinate(value: Decimal) -> Decimal {
    let Some(scaled) = value.checked_mul(COORDINATE_STEPS) else {
        return value;
    };
    let steps = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    (steps / COORDINATE_STEPS).normalize()
}

/// Round a percentage: one decimal place below 10, whole units otherwise
pub fn sensible_health(health: Decimal) -> Decimal {
    let places = if health < HEALTH_PRECISION_THRESHOLD {
        1
    } else {
        0
    };
    health
        .round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
        .normalize()
}

/// Convert a JSON float to fixed point via its shortest decimal text.
///
/// `0.1` becomes exactly `0.1` rather than the nearest binary fraction.
/// Returns None when the value is outside the Decimal range.
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

/// Parse a journal timestamp and convert it to UTC.
///
/// Values with an offset are taken as-is; zone-less values are read as
/// local time.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(err) => err,
    };

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(local_to_utc(naive));
        }
    }

    Err(Error::Timestamp {
        value: value.to_string(),
        source: rfc3339_err,
    })
}

fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Skipped by a DST transition
        None => naive.and_utc(),
    }
}

/// `$cmdr_decorate:#name=Jameson;` becomes `Commander Jameson`
pub fn decorate_commander(name: &str) -> String {
    name.replace("$cmdr_decorate:#name=", "Commander ")
        .replace(';', "")
}
