use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Commodity, Composition, Credits, Economy, FactionState, GameMode, Government, Material,
    MaterialAmount, MaterialPresence, Rating, SecurityLevel, Superpower, Vehicle,
};

/// Event payload variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
#[serde(rename_all = "snake_case")]
pub enum EventPayload {
    // --- Travel ---
    Docked(DockedPayload),
    Undocked(StationPayload),
    Touchdown(SurfacePositionPayload),
    Liftoff(SurfacePositionPayload),
    EnteredSupercruise(SystemPayload),
    EnteredNormalSpace(NormalSpacePayload),
    Jumped(JumpedPayload),
    Location(LocationPayload),

    // --- Docking control ---
    DockingRequested(StationPayload),
    DockingGranted(DockingGrantedPayload),
    DockingDenied(DockingDeniedPayload),
    DockingCancelled(StationPayload),
    DockingTimedOut(StationPayload),

    // --- Combat and law ---
    BountyAwarded(BountyAwardedPayload),
    BondAwarded(BondAwardedPayload),
    FineIncurred(CrimePayload),
    BountyIncurred(CrimePayload),
    FinePaid(FinePaidPayload),
    ShipInterdicted(ShipInterdictedPayload),
    ShipInterdiction(ShipInterdictionPayload),
    Killed(KilledPayload),
    Died(DiedPayload),
    HullDamaged(HullDamagedPayload),
    ShieldsUp,
    ShieldsDown,
    CockpitBreached,
    HeatWarning,
    HeatDamage,
    SelfDestruct,

    // --- Promotions ---
    CombatPromotion(PromotionPayload),
    TradePromotion(PromotionPayload),
    ExplorationPromotion(PromotionPayload),
    CqcPromotion(PromotionPayload),
    EmpirePromotion(PromotionPayload),
    FederationPromotion(PromotionPayload),

    // --- Trade and services ---
    CommodityCollected(CommodityCollectedPayload),
    CommodityEjected(CommodityEjectedPayload),
    CommodityRefined(CommodityRefinedPayload),
    CommodityPurchased(CommodityPurchasedPayload),
    CommoditySold(CommoditySoldPayload),
    LimpetPurchased(LimpetTradePayload),
    LimpetSold(LimpetTradePayload),
    TradeDataPurchased(DataPurchasedPayload),
    ShipRestocked(PricePayload),
    ShipRefuelled(ShipRefuelledPayload),
    ShipRepaired(ShipRepairedPayload),
    ShipRebooted(ShipRebootedPayload),

    // --- Exploration ---
    StarScanned(StarScannedPayload),
    BodyScanned(BodyScannedPayload),
    ExplorationDataPurchased(DataPurchasedPayload),
    ExplorationDataSold(ExplorationDataSoldPayload),
    EnteredSignalSource(SignalSourcePayload),
    Screenshot(ScreenshotPayload),

    // --- Materials ---
    MaterialCollected(MaterialCountPayload),
    MaterialDiscarded(MaterialCountPayload),
    MaterialDonated(MaterialCountPayload),
    MaterialDiscovered(MaterialDiscoveredPayload),
    Synthesised(SynthesisedPayload),

    // --- Shipyard and vehicles ---
    ShipPurchased(ShipPurchasedPayload),
    ShipDelivered(ShipPayload),
    ShipSold(ShipSoldPayload),
    ShipSwapped(ShipSwappedPayload),
    ShipTransferInitiated(ShipTransferPayload),
    SrvLaunched(SrvLaunchedPayload),
    SrvDocked,
    FighterLaunched(FighterLaunchedPayload),
    FighterDocked,
    ControllingFighter,
    ControllingShip,

    // --- Communication ---
    MessageReceived(MessageReceivedPayload),
    MessageSent(MessageSentPayload),

    // --- Commander ---
    CommanderContinued(CommanderContinuedPayload),
    CommanderStarted(CommanderStartedPayload),
    ClearedSave(ClearedSavePayload),
    CommanderProgress(CommanderProgressPayload),
    CommanderRatings(CommanderRatingsPayload),
    CrewHired(CrewHiredPayload),
    CrewFired(CrewFiredPayload),
    CrewAssigned(CrewAssignedPayload),

    // --- Missions ---
    MissionAccepted(MissionAcceptedPayload),
    MissionCompleted(MissionCompletedPayload),
    MissionAbandoned(MissionAbandonedPayload),
}

impl EventPayload {
    /// Human-readable event name
    pub fn name(&self) -> &'static str {
        match self {
            EventPayload::Docked(_) => "Docked",
            EventPayload::Undocked(_) => "Undocked",
            EventPayload::Touchdown(_) => "Touchdown",
            EventPayload::Liftoff(_) => "Liftoff",
            EventPayload::EnteredSupercruise(_) => "Entered supercruise",
            EventPayload::EnteredNormalSpace(_) => "Entered normal space",
            EventPayload::Jumped(_) => "Jumped",
            EventPayload::Location(_) => "Location",
            EventPayload::DockingRequested(_) => "Docking requested",
            EventPayload::DockingGranted(_) => "Docking granted",
            EventPayload::DockingDenied(_) => "Docking denied",
            EventPayload::DockingCancelled(_) => "Docking cancelled",
            EventPayload::DockingTimedOut(_) => "Docking timed out",
            EventPayload::BountyAwarded(_) => "Bounty awarded",
            EventPayload::BondAwarded(_) => "Bond awarded",
            EventPayload::FineIncurred(_) => "Fine incurred",
            EventPayload::BountyIncurred(_) => "Bounty incurred",
            EventPayload::FinePaid(_) => "Fine paid",
            EventPayload::ShipInterdicted(_) => "Ship interdicted",
            EventPayload::ShipInterdiction(_) => "Ship interdiction",
            EventPayload::Killed(_) => "Killed",
            EventPayload::Died(_) => "Died",
            EventPayload::HullDamaged(_) => "Hull damaged",
            EventPayload::ShieldsUp => "Shields up",
            EventPayload::ShieldsDown => "Shields down",
            EventPayload::CockpitBreached => "Cockpit breached",
            EventPayload::HeatWarning => "Heat warning",
            EventPayload::HeatDamage => "Heat damage",
            EventPayload::SelfDestruct => "Self destruct",
            EventPayload::CombatPromotion(_) => "Combat promotion",
            EventPayload::TradePromotion(_) => "Trade promotion",
            EventPayload::ExplorationPromotion(_) => "Exploration promotion",
            EventPayload::CqcPromotion(_) => "CQC promotion",
            EventPayload::EmpirePromotion(_) => "Empire promotion",
            EventPayload::FederationPromotion(_) => "Federation promotion",
            EventPayload::CommodityCollected(_) => "Commodity collected",
            EventPayload::CommodityEjected(_) => "Commodity ejected",
            EventPayload::CommodityRefined(_) => "Commodity refined",
            EventPayload::CommodityPurchased(_) => "Commodity purchased",
            EventPayload::CommoditySold(_) => "Commodity sold",
            EventPayload::LimpetPurchased(_) => "Limpet purchased",
            EventPayload::LimpetSold(_) => "Limpet sold",
            EventPayload::TradeDataPurchased(_) => "Trade data purchased",
            EventPayload::ShipRestocked(_) => "Ship restocked",
            EventPayload::ShipRefuelled(_) => "Ship refuelled",
            EventPayload::ShipRepaired(_) => "Ship repaired",
            EventPayload::ShipRebooted(_) => "Ship rebooted",
            EventPayload::StarScanned(_) => "Star scanned",
            EventPayload::BodyScanned(_) => "Body scanned",
            EventPayload::ExplorationDataPurchased(_) => "Exploration data purchased",
            EventPayload::ExplorationDataSold(_) => "Exploration data sold",
            EventPayload::EnteredSignalSource(_) => "Entered signal source",
            EventPayload::Screenshot(_) => "Screenshot",
            EventPayload::MaterialCollected(_) => "Material collected",
            EventPayload::MaterialDiscarded(_) => "Material discarded",
            EventPayload::MaterialDonated(_) => "Material donated",
            EventPayload::MaterialDiscovered(_) => "Material discovered",
            EventPayload::Synthesised(_) => "Synthesised",
            EventPayload::ShipPurchased(_) => "Ship purchased",
            EventPayload::ShipDelivered(_) => "Ship delivered",
            EventPayload::ShipSold(_) => "Ship sold",
            EventPayload::ShipSwapped(_) => "Ship swapped",
            EventPayload::ShipTransferInitiated(_) => "Ship transfer initiated",
            EventPayload::SrvLaunched(_) => "SRV launched",
            EventPayload::SrvDocked => "SRV docked",
            EventPayload::FighterLaunched(_) => "Fighter launched",
            EventPayload::FighterDocked => "Fighter docked",
            EventPayload::ControllingFighter => "Controlling fighter",
            EventPayload::ControllingShip => "Controlling ship",
            EventPayload::MessageReceived(_) => "Message received",
            EventPayload::MessageSent(_) => "Message sent",
            EventPayload::CommanderContinued(_) => "Commander continued",
            EventPayload::CommanderStarted(_) => "Commander started",
            EventPayload::ClearedSave(_) => "Cleared save",
            EventPayload::CommanderProgress(_) => "Commander progress",
            EventPayload::CommanderRatings(_) => "Commander ratings",
            EventPayload::CrewHired(_) => "Crew hired",
            EventPayload::CrewFired(_) => "Crew fired",
            EventPayload::CrewAssigned(_) => "Crew assigned",
            EventPayload::MissionAccepted(_) => "Mission accepted",
            EventPayload::MissionCompleted(_) => "Mission completed",
            EventPayload::MissionAbandoned(_) => "Mission abandoned",
        }
    }
}

// --- Shared pieces ---

/// Political make-up of the system or station the commander is at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemControl {
    pub allegiance: Option<Superpower>,
    /// Controlling faction; a superpower's display name when the faction is one
    pub faction: Option<String>,
    pub faction_state: Option<FactionState>,
    pub economy: Option<Economy>,
    pub government: Option<Government>,
    pub security: Option<SecurityLevel>,
}

/// Galactic coordinates in light years, quantized to 1/32
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarPosition {
    pub x: Decimal,
    pub y: Decimal,
    pub z: Decimal,
}

// --- Travel ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockedPayload {
    pub system: Option<String>,
    pub station: Option<String>,
    #[serde(flatten)]
    pub control: SystemControl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationPayload {
    pub station: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacePositionPayload {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemPayload {
    pub system: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalSpacePayload {
    pub system: Option<String>,
    pub body: Option<String>,
    pub body_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpedPayload {
    pub system: Option<String>,
    pub position: StarPosition,
    pub fuel_used: Decimal,
    pub fuel_remaining: Decimal,
    #[serde(flatten)]
    pub control: SystemControl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPayload {
    pub system: Option<String>,
    pub position: StarPosition,
    pub body: Option<String>,
    pub body_type: Option<String>,
    pub docked: bool,
    #[serde(flatten)]
    pub control: SystemControl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockingGrantedPayload {
    pub station: Option<String>,
    pub landing_pad: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockingDeniedPayload {
    pub station: Option<String>,
    pub reason: Option<String>,
}

// --- Combat and law ---

/// One faction's share of a bounty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub faction: Option<String>,
    pub amount: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BountyAwardedPayload {
    pub target: Option<String>,
    pub victim_faction: Option<String>,
    /// Sum over all rewards
    pub reward: Credits,
    pub rewards: Vec<Reward>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondAwardedPayload {
    pub awarding_faction: Option<String>,
    pub victim_faction: Option<String>,
    pub reward: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimePayload {
    pub crime_type: Option<String>,
    pub faction: Option<String>,
    pub victim: Option<String>,
    /// Fine or bounty, depending on the variant
    pub amount: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinePaidPayload {
    pub amount: Credits,
    /// Fines carried over from before the crime and punishment rework
    pub legacy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipInterdictedPayload {
    /// False when the commander escaped the interdiction
    pub succeeded: bool,
    pub submitted: bool,
    pub is_commander: bool,
    pub interdictor: Option<String>,
    pub rating: Option<Rating>,
    pub faction: Option<String>,
    pub power: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipInterdictionPayload {
    pub succeeded: bool,
    pub is_commander: bool,
    pub interdictee: Option<String>,
    pub rating: Option<Rating>,
    pub faction: Option<String>,
    pub power: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KilledPayload {
    pub victim: Option<String>,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Killer {
    pub name: Option<String>,
    pub ship: Option<String>,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiedPayload {
    pub killers: Vec<Killer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullDamagedPayload {
    /// Remaining hull integrity in percent
    pub health: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionPayload {
    pub rating: Rating,
}

// --- Trade and services ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityCollectedPayload {
    pub commodity: Option<Commodity>,
    pub stolen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityEjectedPayload {
    pub commodity: Option<Commodity>,
    pub amount: i64,
    pub abandoned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityRefinedPayload {
    pub commodity: Option<Commodity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityPurchasedPayload {
    pub commodity: Option<Commodity>,
    pub amount: i64,
    /// Price per unit
    pub price: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommoditySoldPayload {
    pub commodity: Option<Commodity>,
    pub amount: i64,
    /// Price per unit
    pub price: Credits,
    /// Sell price minus average price paid, per unit
    pub profit: Credits,
    pub illegal: bool,
    pub stolen: bool,
    pub black_market: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimpetTradePayload {
    pub amount: i64,
    pub price: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPurchasedPayload {
    pub system: Option<String>,
    pub price: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePayload {
    pub price: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRefuelledPayload {
    pub price: Credits,
    /// Tonnes of fuel taken on
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRepairedPayload {
    /// None for a full repair
    pub item: Option<String>,
    pub price: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRebootedPayload {
    pub modules: Vec<String>,
}

// --- Exploration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub name: Option<String>,
    pub composition: Option<Composition>,
    /// Megatonnes
    pub mass: Decimal,
    pub inner_radius: Decimal,
    pub outer_radius: Decimal,
}

/// Fields every scanned body carries, star or not
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedBody {
    pub name: Option<String>,
    pub distance_from_arrival: Decimal,
    pub radius: Decimal,
    pub orbital_period: Option<Decimal>,
    pub rotation_period: Decimal,
    pub semi_major_axis: Option<Decimal>,
    pub eccentricity: Option<Decimal>,
    pub orbital_inclination: Option<Decimal>,
    pub periapsis: Option<Decimal>,
    pub rings: Vec<Ring>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarScannedPayload {
    #[serde(flatten)]
    pub body: ScannedBody,
    pub star_type: Option<String>,
    pub stellar_mass: Decimal,
    pub absolute_magnitude: Decimal,
    /// Age in years
    pub age: i64,
    pub temperature: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyScannedPayload {
    #[serde(flatten)]
    pub body: ScannedBody,
    pub body_class: Option<String>,
    pub gravity: Decimal,
    pub temperature: Decimal,
    pub pressure: Decimal,
    pub tidally_locked: bool,
    pub landable: bool,
    pub atmosphere: Option<String>,
    pub volcanism: Option<String>,
    pub materials: Vec<MaterialPresence>,
    pub terraform_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationDataSoldPayload {
    pub systems: Vec<String>,
    pub first_discoveries: Vec<String>,
    pub reward: Credits,
    pub bonus: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSourcePayload {
    pub source: Option<String>,
    pub threat: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenshotPayload {
    pub filename: Option<String>,
    pub width: i64,
    pub height: i64,
    pub system: Option<String>,
    pub body: Option<String>,
}

// --- Materials ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCountPayload {
    pub material: Option<Material>,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDiscoveredPayload {
    pub material: Option<Material>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisedPayload {
    pub synthesis: Option<String>,
    pub materials: Vec<MaterialAmount>,
}

// --- Shipyard and vehicles ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipPayload {
    pub ship: Vehicle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipPurchasedPayload {
    pub ship: Vehicle,
    pub price: Credits,
    pub sold_ship: Option<Vehicle>,
    pub sold_price: Option<Credits>,
    pub stored_ship: Option<Vehicle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSoldPayload {
    pub ship: Vehicle,
    pub price: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSwappedPayload {
    pub ship: Vehicle,
    pub sold_ship: Option<Vehicle>,
    pub stored_ship: Option<Vehicle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipTransferPayload {
    pub ship: Vehicle,
    pub system: Option<String>,
    /// Light years
    pub distance: Decimal,
    pub price: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrvLaunchedPayload {
    pub loadout: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterLaunchedPayload {
    pub loadout: Option<String>,
    pub player_controlled: bool,
}

// --- Communication ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReceivedPayload {
    pub from: String,
    /// Sent by another commander rather than an NPC
    pub player: bool,
    pub channel: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSentPayload {
    pub to: Option<String>,
    pub message: Option<String>,
}

// --- Commander ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommanderContinuedPayload {
    pub commander: Option<String>,
    pub ship: Vehicle,
    pub mode: Option<GameMode>,
    pub group: Option<String>,
    pub credits: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommanderStartedPayload {
    pub name: Option<String>,
    pub package: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearedSavePayload {
    pub name: Option<String>,
}

/// Percent progress towards the next rank on each ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommanderProgressPayload {
    pub combat: i64,
    pub trade: i64,
    pub exploration: i64,
    pub cqc: i64,
    pub empire: i64,
    pub federation: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommanderRatingsPayload {
    pub combat: Option<Rating>,
    pub trade: Option<Rating>,
    pub exploration: Option<Rating>,
    pub cqc: Option<Rating>,
    pub empire: Option<Rating>,
    pub federation: Option<Rating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewHiredPayload {
    pub name: Option<String>,
    pub faction: Option<String>,
    pub price: Credits,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewFiredPayload {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewAssignedPayload {
    pub name: Option<String>,
    pub role: Option<String>,
}

// --- Missions ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionAcceptedPayload {
    /// None for community goals
    pub mission_id: Option<i64>,
    pub name: Option<String>,
    pub system: Option<String>,
    pub faction: Option<String>,
    pub community_goal: bool,
    pub expiry: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionCompletedPayload {
    pub mission_id: Option<i64>,
    pub name: Option<String>,
    pub system: Option<String>,
    pub community_goal: bool,
    pub reward: Credits,
    pub donation: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionAbandonedPayload {
    pub mission_id: i64,
    pub name: Option<String>,
}
