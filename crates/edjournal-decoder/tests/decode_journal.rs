use edjournal_decoder::{Fleet, JournalDecoder, Outcome, VehicleRegistry};
use edjournal_types::{EventPayload, MaterialCategory, RatingLadder, Vehicle};
use rust_decimal_macros::dec;
use std::path::Path;

fn decoder() -> JournalDecoder {
    JournalDecoder::new(Fleet::new().shared())
}

fn decode_one(raw: &str) -> EventPayload {
    decoder()
        .decode(raw)
        .unwrap_or_else(|| panic!("no event for {raw}"))
        .payload
}

#[test]
fn test_sample_journal() {
    let path = Path::new("tests/samples/journal.log");
    let content = std::fs::read_to_string(path).expect("Failed to read sample journal");

    let events = decoder().decode_lines(content.lines());
    let names: Vec<_> = events.iter().map(|e| e.name()).collect();

    assert_eq!(
        names,
        vec![
            "Commander continued",
            "Commander ratings",
            "Commander progress",
            "Location",
            "Commodity purchased",
            "Undocked",
            "Jumped",
            "Bounty awarded",
            "Hull damaged",
            "Shields up",
            "Federation promotion",
            "Message received",
            "Body scanned",
            "Docked",
            "Commodity sold",
            "Ship purchased",
            "Ship delivered",
            "Ship transfer initiated",
            "Mission accepted",
            "Synthesised",
            "Died",
        ]
    );

    for event in &events {
        assert!(
            content.lines().any(|line| line == event.raw),
            "raw line not stamped verbatim: {}",
            event.raw
        );
    }
}

#[test]
fn test_jump_snapshot() {
    let payload = decode_one(
        r#"{ "timestamp":"2017-10-06T21:08:02Z", "event":"FSDJump", "StarSystem":"LHS 3447", "StarPos":[-43.188,-5.281,35.656], "Allegiance":"Independent", "Economy":"$economy_Extraction;", "Government":"$government_Cooperative;", "Security":"$SYSTEM_SECURITY_medium;", "FuelUsed":1.652315, "FuelLevel":14.347685, "Faction":"LHS 3447 Cooperative", "FactionState":"Boom" }"#,
    );

    insta::assert_json_snapshot!(payload, @r###"
    {
      "type": "jumped",
      "content": {
        "system": "LHS 3447",
        "position": {
          "x": "-43.1875",
          "y": "-5.28125",
          "z": "35.65625"
        },
        "fuel_used": "1.652315",
        "fuel_remaining": "14.347685",
        "allegiance": "Independent",
        "faction": "LHS 3447 Cooperative",
        "faction_state": "Boom",
        "economy": "Extraction",
        "government": "Cooperative",
        "security": "Medium"
      }
    }
    "###);
}

#[test]
fn test_federation_promotion_example() {
    let event = decoder()
        .decode(r#"{"timestamp":"2017-10-06T23:47:32Z","event":"Promotion","Federation":13}"#)
        .unwrap();

    assert_eq!(event.timestamp.to_rfc3339(), "2017-10-06T23:47:32+00:00");
    match event.payload {
        EventPayload::FederationPromotion(promotion) => {
            assert_eq!(promotion.rating.ladder(), RatingLadder::Federation);
            assert_eq!(promotion.rating.rank(), 13);
            assert_eq!(promotion.rating.name(), "Vice Admiral");
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[test]
fn test_touchdown_without_timestamp_example() {
    let before = chrono::Utc::now();
    let event = decoder()
        .decode(r#"{"event":"Touchdown","Latitude":10.0,"Longitude":20.0}"#)
        .unwrap();

    assert!(event.timestamp >= before);
    match event.payload {
        EventPayload::Touchdown(position) => {
            assert_eq!(position.latitude, dec!(10));
            assert_eq!(position.longitude, dec!(20));
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[test]
fn test_plain_text_yields_nothing() {
    let decoder = decoder();
    assert!(decoder.decode("hello world").is_none());
    assert!(decoder.decode("").is_none());
    assert!(decoder.decode("{\"event\":").is_none());
}

#[test]
fn test_bounty_encodings_normalize_alike() {
    let legacy = decode_one(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Bounty","Reward":5000,"Faction":"$faction_Empire;","VictimFaction":"Kumo Crew","Target":"anaconda"}"#,
    );
    let current = decode_one(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Bounty","Rewards":[{"Faction":"Empire","Reward":5000}],"TotalReward":5000,"VictimFaction":"Kumo Crew","Target":"anaconda"}"#,
    );

    assert_eq!(legacy, current);
    match current {
        EventPayload::BountyAwarded(bounty) => {
            assert_eq!(bounty.reward, 5000);
            assert_eq!(bounty.rewards.len(), 1);
            assert_eq!(bounty.rewards[0].faction.as_deref(), Some("Empire"));
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[test]
fn test_legacy_zero_bounty_is_dropped() {
    let outcome = decoder().classify(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Bounty","Reward":0,"Faction":"Empire","VictimFaction":"Kumo Crew"}"#,
    );
    assert!(matches!(outcome, Outcome::Handled { kind } if kind == "Bounty"));
}

#[test]
fn test_promotion_fans_out_by_ladder() {
    let cases = [
        ("Combat", 8, "Combat promotion", "Elite"),
        ("Trade", 2, "Trade promotion", "Peddler"),
        ("Explore", 4, "Exploration promotion", "Trailblazer"),
        ("CQC", 1, "CQC promotion", "Mostly Helpless"),
        ("Empire", 5, "Empire promotion", "Knight"),
        ("Federation", 3, "Federation promotion", "Midshipman"),
    ];

    for (field, rank, event_name, rank_name) in cases {
        let raw = format!(r#"{{"timestamp":"2017-01-01T00:00:00Z","event":"Promotion","{field}":{rank}}}"#);
        let event = decoder().decode(&raw).unwrap();
        assert_eq!(event.name(), event_name);
        let rating = match event.payload {
            EventPayload::CombatPromotion(p)
            | EventPayload::TradePromotion(p)
            | EventPayload::ExplorationPromotion(p)
            | EventPayload::CqcPromotion(p)
            | EventPayload::EmpirePromotion(p)
            | EventPayload::FederationPromotion(p) => p.rating,
            other => panic!("unexpected payload: {other:?}"),
        };
        assert_eq!(rating.name(), rank_name);
    }
}

#[test]
fn test_promotion_without_rating_is_handled() {
    let outcome =
        decoder().classify(r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Promotion"}"#);
    assert!(matches!(outcome, Outcome::Handled { .. }));
}

#[test]
fn test_delivery_then_transfer_keeps_vehicle_identity() {
    let fleet = Fleet::new().shared();
    let decoder = JournalDecoder::new(fleet.clone());

    let delivered = decoder
        .decode(r#"{"timestamp":"2017-01-01T00:00:00Z","event":"ShipyardNew","ShipType":"Mandalay","NewShipID":42}"#)
        .unwrap();
    let transferred = decoder
        .decode(r#"{"timestamp":"2017-01-01T00:01:00Z","event":"ShipyardTransfer","ShipType":"Mandalay","ShipID":42,"System":"Sol","Distance":12.5,"TransferPrice":900}"#)
        .unwrap();

    let EventPayload::ShipDelivered(delivered) = delivered.payload else {
        panic!("expected delivery");
    };
    let EventPayload::ShipTransferInitiated(transfer) = transferred.payload else {
        panic!("expected transfer");
    };
    assert_eq!(delivered.ship, transfer.ship);
    assert_eq!(transfer.ship.local_id, 42);
    assert_eq!(transfer.ship.model, "Mandalay");
    assert_eq!(fleet.lock().unwrap().find(42), Some(delivered.ship));
}

#[test]
fn test_failed_ship_lines_leave_fleet_untouched() {
    let fleet = Fleet::new().shared();
    let decoder = JournalDecoder::new(fleet.clone());

    let lines = [
        // ShipPrice missing
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"ShipyardSell","ShipType":"Eagle","SellShipID":7}"#,
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"LoadGame","Ship":"CobraMkIII","ShipID":3,"Credits":"lots"}"#,
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"ShipyardTransfer","ShipType":"Asp","ShipID":4,"System":"Sol","TransferPrice":900}"#,
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"ShipyardSwap","ShipType":"Anaconda","ShipID":5,"StoreOldShip":"Eagle","StoreShipID":"six"}"#,
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"ShipyardBuy","ShipType":"Asp","ShipPrice":6135660,"SellOldShip":"Eagle","SellShipID":8,"SellPrice":"free"}"#,
    ];
    for line in lines {
        assert!(
            matches!(decoder.classify(line), Outcome::Failed(_)),
            "{line}"
        );
    }

    let fleet = fleet.lock().unwrap();
    for local_id in [3, 4, 5, 7, 8] {
        assert!(fleet.find(local_id).is_none(), "ship {local_id} was stored");
    }
    assert!(fleet.current().is_none());
}

#[test]
fn test_interdiction_faction_is_resolved() {
    let interdicted = decode_one(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Interdicted","Submitted":false,"Interdictor":"Kaelin","IsPlayer":false,"Faction":"$faction_Empire;"}"#,
    );
    let EventPayload::ShipInterdicted(interdicted) = interdicted else {
        panic!("expected interdicted");
    };
    assert_eq!(interdicted.faction.as_deref(), Some("Empire"));

    let interdiction = decode_one(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Interdiction","Success":true,"Interdicted":"Kaelin","IsPlayer":false,"Faction":"$faction_Federation;"}"#,
    );
    let EventPayload::ShipInterdiction(interdiction) = interdiction else {
        panic!("expected interdiction");
    };
    assert_eq!(interdiction.faction.as_deref(), Some("Federation"));
}

#[test]
fn test_purchase_resolves_stored_ship_from_current() {
    let fleet = Fleet::new().shared();
    fleet
        .lock()
        .unwrap()
        .set_current(Vehicle::from_template(1, Some("CobraMkIII")));
    let decoder = JournalDecoder::new(fleet.clone());

    let event = decoder
        .decode(r#"{"timestamp":"2017-01-01T00:00:00Z","event":"ShipyardBuy","ShipType":"Asp","ShipPrice":6135660,"StoreOldShip":"CobraMkIII","StoreShipID":1}"#)
        .unwrap();
    let EventPayload::ShipPurchased(purchase) = event.payload else {
        panic!("expected purchase");
    };
    assert_eq!(purchase.ship.model, "Asp Explorer");
    assert_eq!(purchase.ship.local_id, 0);
    assert_eq!(purchase.stored_ship.map(|s| s.model).as_deref(), Some("Cobra Mk III"));
    assert!(purchase.sold_ship.is_none());
}

#[test]
fn test_scan_splits_stars_and_bodies() {
    let star = decode_one(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Scan","BodyName":"Sol","DistanceFromArrivalLS":0.0,"StarType":"G","StellarMass":1.0,"Radius":695700000.0,"AbsoluteMagnitude":4.83,"Age_MY":4600,"SurfaceTemperature":5778.0,"RotationPeriod":2164320.0,"Rings":[{"Name":"Sol A Belt","RingClass":"eRingClass_MetalRich","MassMT":1.2e10,"InnerRad":3.0e8,"OuterRad":4.5e8}]}"#,
    );
    let EventPayload::StarScanned(star) = star else {
        panic!("expected star");
    };
    assert_eq!(star.age, 4_600_000_000);
    assert_eq!(star.body.orbital_period, None);
    assert_eq!(star.body.rings.len(), 1);
    assert_eq!(star.body.rings[0].composition.map(|c| c.name()), Some("Metal Rich"));

    let body = decode_one(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Scan","BodyName":"Mercury","DistanceFromArrivalLS":190.0,"TidalLock":true,"PlanetClass":"Metal rich body","SurfaceGravity":3.7,"SurfaceTemperature":440.0,"SurfacePressure":0.0,"Landable":true,"Materials":{"iron":33.1,"adamantium":1.0},"RotationPeriod":5067031.0,"Radius":2439700.0}"#,
    );
    let EventPayload::BodyScanned(body) = body else {
        panic!("expected body");
    };
    assert!(body.tidally_locked);
    assert_eq!(body.materials.len(), 1);
    assert_eq!(body.materials[0].material.category, MaterialCategory::Element);
    assert_eq!(body.materials[0].percentage, dec!(33.1));
}

#[test]
fn test_commodity_miss_leaves_field_absent() {
    let payload = decode_one(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"CollectCargo","Type":"unobtainium","Stolen":false}"#,
    );
    let EventPayload::CommodityCollected(collected) = payload else {
        panic!("expected collection");
    };
    assert!(collected.commodity.is_none());
    assert!(!collected.stolen);
}

#[test]
fn test_market_sell_profit() {
    let payload = decode_one(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"MarketSell","Type":"gold","Count":12,"SellPrice":9511,"TotalSale":114132,"AvgPricePaid":9164,"StolenGoods":true}"#,
    );
    let EventPayload::CommoditySold(sold) = payload else {
        panic!("expected sale");
    };
    assert_eq!(sold.profit, 347);
    assert!(sold.stolen);
    assert!(!sold.illegal);
    assert!(!sold.black_market);
}

#[test]
fn test_died_reads_single_and_wing_killers() {
    let payload = decode_one(
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Died","Killers":[{"Name":"Cmdr Mara","Ship":"fdl","Rank":"Elite"},{"Name":"Cmdr Kay","Ship":"python","Rank":"Dangerous"}]}"#,
    );
    let EventPayload::Died(died) = payload else {
        panic!("expected death");
    };
    assert_eq!(died.killers.len(), 2);
    assert_eq!(died.killers[1].rating.map(|r| r.rank()), Some(6));
}

#[test]
fn test_vehicle_switch_targets() {
    assert_eq!(
        decode_one(r#"{"event":"VehicleSwitch","To":"Fighter"}"#),
        EventPayload::ControllingFighter
    );
    assert_eq!(
        decode_one(r#"{"event":"VehicleSwitch","To":"Mothership"}"#),
        EventPayload::ControllingShip
    );
    assert!(matches!(
        decoder().classify(r#"{"event":"VehicleSwitch","To":"SRV"}"#),
        Outcome::Handled { .. }
    ));
}

#[test]
fn test_wrong_field_type_fails_only_that_line() {
    let decoder = decoder();
    let lines = [
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"DockingGranted","StationName":"Abraham Lincoln","LandingPad":"seven"}"#,
        r#"{"timestamp":"2017-01-01T00:00:00Z","event":"DockingGranted","StationName":"Abraham Lincoln","LandingPad":7}"#,
    ];
    let events = decoder.decode_lines(lines);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0].payload,
        EventPayload::DockingGranted(granted) if granted.landing_pad == 7
    ));
}

#[test]
fn test_decoding_is_deterministic() {
    let raw = r#"{"timestamp":"2017-01-01T00:00:00Z","event":"Location","Docked":false,"StarSystem":"Sol","StarPos":[0.0,0.0,0.0],"Allegiance":"Federation","Faction":"Mother Gaia"}"#;
    let first = decoder().decode(raw).unwrap();
    let second = decoder().decode(raw).unwrap();
    assert_eq!(first, second);
}
