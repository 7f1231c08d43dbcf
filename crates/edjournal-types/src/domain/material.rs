use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    Element,
    Manufactured,
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Material {
    /// Journal code, e.g. `"iron"` or `"shieldpatternanalysis"`
    pub ed_name: String,
    pub name: String,
    pub category: MaterialCategory,
    /// 1 (very common) to 5 (very rare)
    pub grade: u8,
}

use MaterialCategory::{Data, Element, Manufactured};

// (code, name, category, grade)
const MATERIALS: &[(&str, &str, MaterialCategory, u8)] = &[
    ("carbon", "Carbon", Element, 1),
    ("iron", "Iron", Element, 1),
    ("nickel", "Nickel", Element, 1),
    ("phosphorus", "Phosphorus", Element, 1),
    ("sulphur", "Sulphur", Element, 1),
    ("chromium", "Chromium", Element, 2),
    ("germanium", "Germanium", Element, 2),
    ("manganese", "Manganese", Element, 2),
    ("vanadium", "Vanadium", Element, 2),
    ("zinc", "Zinc", Element, 2),
    ("arsenic", "Arsenic", Element, 3),
    ("niobium", "Niobium", Element, 3),
    ("selenium", "Selenium", Element, 3),
    ("tungsten", "Tungsten", Element, 3),
    ("zirconium", "Zirconium", Element, 3),
    ("cadmium", "Cadmium", Element, 3),
    ("mercury", "Mercury", Element, 3),
    ("molybdenum", "Molybdenum", Element, 3),
    ("tin", "Tin", Element, 3),
    ("yttrium", "Yttrium", Element, 3),
    ("antimony", "Antimony", Element, 4),
    ("polonium", "Polonium", Element, 4),
    ("ruthenium", "Ruthenium", Element, 4),
    ("technetium", "Technetium", Element, 4),
    ("tellurium", "Tellurium", Element, 4),
    ("chemicalstorageunits", "Chemical Storage Units", Manufactured, 1),
    ("compactcomposites", "Compact Composites", Manufactured, 1),
    ("gridresistors", "Grid Resistors", Manufactured, 1),
    ("heatconductionwiring", "Heat Conduction Wiring", Manufactured, 1),
    ("mechanicalscrap", "Mechanical Scrap", Manufactured, 1),
    ("salvagedalloys", "Salvaged Alloys", Manufactured, 1),
    ("wornshieldemitters", "Worn Shield Emitters", Manufactured, 1),
    ("chemicalprocessors", "Chemical Processors", Manufactured, 2),
    ("galvanisingalloys", "Galvanising Alloys", Manufactured, 2),
    ("heatdispersionplate", "Heat Dispersion Plate", Manufactured, 2),
    ("hybridcapacitors", "Hybrid Capacitors", Manufactured, 2),
    ("mechanicalequipment", "Mechanical Equipment", Manufactured, 2),
    ("shieldemitters", "Shield Emitters", Manufactured, 2),
    ("conductivecomponents", "Conductive Components", Manufactured, 3),
    ("electrochemicalarrays", "Electrochemical Arrays", Manufactured, 3),
    ("heatexchangers", "Heat Exchangers", Manufactured, 3),
    ("mechanicalcomponents", "Mechanical Components", Manufactured, 3),
    ("chemicalmanipulators", "Chemical Manipulators", Manufactured, 4),
    ("configurablecomponents", "Configurable Components", Manufactured, 4),
    ("militarygradealloys", "Military Grade Alloys", Manufactured, 5),
    ("exquisitefocuscrystals", "Exquisite Focus Crystals", Manufactured, 5),
    ("disruptedwakeechoes", "Atypical Disrupted Wake Echoes", Data, 1),
    ("scrambledemissiondata", "Exceptional Scrambled Emission Data", Data, 1),
    ("legacyfirmware", "Specialised Legacy Firmware", Data, 1),
    ("shieldcyclerecordings", "Distorted Shield Cycle Recordings", Data, 1),
    ("encryptedfiles", "Unusual Encrypted Files", Data, 1),
    ("fsdtelemetry", "Anomalous FSD Telemetry", Data, 2),
    ("shieldsoakanalysis", "Inconsistent Shield Soak Analysis", Data, 2),
    ("archivedemissiondata", "Irregular Emission Data", Data, 2),
    ("wakesolutions", "Strange Wake Solutions", Data, 3),
    ("shielddensityreports", "Untypical Shield Scans", Data, 3),
    ("shieldpatternanalysis", "Aberrant Shield Pattern Analysis", Data, 4),
    ("compactemissionsdata", "Abnormal Compact Emissions Data", Data, 5),
];

impl Material {
    /// Built-in material table. Matches on journal code or display name.
    pub fn from_ed_name(code: &str) -> Option<Self> {
        let code = crate::domain::strip_code(code, &[]);
        MATERIALS
            .iter()
            .find(|(ed_name, name, _, _)| {
                crate::domain::codes_match(ed_name, code) || crate::domain::codes_match(name, code)
            })
            .map(|(ed_name, name, category, grade)| Material {
                ed_name: ed_name.to_string(),
                name: name.to_string(),
                category: *category,
                grade: *grade,
            })
    }
}

/// Share of a material in a body's surface composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPresence {
    pub material: Material,
    /// Percentage, 0 to 100
    pub percentage: Decimal,
}

/// Which part of a [`MaterialAmount`] a setter touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialField {
    Amount,
    Minimum,
    Desired,
    Maximum,
}

/// Held quantity of one material plus optional inventory targets.
///
/// The material is fixed at construction. Setters report whether the value
/// actually changed so the caller can decide to notify observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialAmount {
    material: String,
    amount: i64,
    #[serde(default)]
    minimum: Option<i64>,
    #[serde(default)]
    desired: Option<i64>,
    #[serde(default)]
    maximum: Option<i64>,
}

impl MaterialAmount {
    pub fn new(material: impl Into<String>, amount: i64) -> Self {
        Self {
            material: material.into(),
            amount,
            minimum: None,
            desired: None,
            maximum: None,
        }
    }

    /// Inventory target with nothing held yet
    pub fn with_targets(
        material: impl Into<String>,
        minimum: Option<i64>,
        desired: Option<i64>,
        maximum: Option<i64>,
    ) -> Self {
        Self {
            material: material.into(),
            amount: 0,
            minimum,
            desired,
            maximum,
        }
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn minimum(&self) -> Option<i64> {
        self.minimum
    }

    pub fn desired(&self) -> Option<i64> {
        self.desired
    }

    pub fn maximum(&self) -> Option<i64> {
        self.maximum
    }

    pub fn set_amount(&mut self, amount: i64) -> bool {
        replace_if_changed(&mut self.amount, amount)
    }

    pub fn set_minimum(&mut self, minimum: Option<i64>) -> bool {
        replace_if_changed(&mut self.minimum, minimum)
    }

    pub fn set_desired(&mut self, desired: Option<i64>) -> bool {
        replace_if_changed(&mut self.desired, desired)
    }

    pub fn set_maximum(&mut self, maximum: Option<i64>) -> bool {
        replace_if_changed(&mut self.maximum, maximum)
    }

    /// Fields that differ from an earlier snapshot of the same material
    pub fn changes_since(&self, before: &MaterialAmount) -> Vec<MaterialField> {
        let mut changed = Vec::new();
        if self.amount != before.amount {
            changed.push(MaterialField::Amount);
        }
        if self.minimum != before.minimum {
            changed.push(MaterialField::Minimum);
        }
        if self.desired != before.desired {
            changed.push(MaterialField::Desired);
        }
        if self.maximum != before.maximum {
            changed.push(MaterialField::Maximum);
        }
        changed
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_lookup() {
        let iron = Material::from_ed_name("iron").unwrap();
        assert_eq!(iron.name, "Iron");
        assert_eq!(iron.category, MaterialCategory::Element);
        assert_eq!(iron.grade, 1);

        let data = Material::from_ed_name("shieldpatternanalysis").unwrap();
        assert_eq!(data.category, MaterialCategory::Data);
        assert!(Material::from_ed_name("adamantium").is_none());
    }

    #[test]
    fn test_setters_report_changes() {
        let mut amount = MaterialAmount::new("Iron", 5);
        assert!(!amount.set_amount(5));
        assert!(amount.set_amount(7));
        assert_eq!(amount.amount(), 7);

        assert!(amount.set_desired(Some(20)));
        assert!(!amount.set_desired(Some(20)));
        assert!(amount.set_desired(None));
        assert_eq!(amount.material(), "Iron");
    }

    #[test]
    fn test_changes_since_snapshot() {
        let before = MaterialAmount::with_targets("Nickel", Some(5), Some(10), Some(50));
        let mut after = before.clone();
        after.set_amount(3);
        after.set_maximum(Some(40));

        assert_eq!(
            after.changes_since(&before),
            vec![MaterialField::Amount, MaterialField::Maximum]
        );
        assert!(before.changes_since(&before).is_empty());
    }
}
