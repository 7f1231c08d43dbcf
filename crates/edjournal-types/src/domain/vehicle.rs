use serde::{Deserialize, Serialize};

/// A ship owned (or about to be owned) by the commander
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Session-stable local id assigned by the game
    pub local_id: i64,
    /// Display model, e.g. "Cobra Mk III"
    pub model: String,
    /// Journal model code, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ed_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Model template a vehicle is synthesized from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleTemplate {
    pub ed_model: &'static str,
    pub model: &'static str,
    pub manufacturer: &'static str,
}

const fn template(
    ed_model: &'static str,
    model: &'static str,
    manufacturer: &'static str,
) -> VehicleTemplate {
    VehicleTemplate {
        ed_model,
        model,
        manufacturer,
    }
}

const TEMPLATES: &[VehicleTemplate] = &[
    template("Adder", "Adder", "Zorgon Peterson"),
    template("Anaconda", "Anaconda", "Faulcon DeLacy"),
    template("Asp", "Asp Explorer", "Lakon Spaceways"),
    template("Asp_Scout", "Asp Scout", "Lakon Spaceways"),
    template("BelugaLiner", "Beluga Liner", "Saud Kruger"),
    template("CobraMkIII", "Cobra Mk III", "Faulcon DeLacy"),
    template("CobraMkIV", "Cobra Mk IV", "Faulcon DeLacy"),
    template("Cutter", "Imperial Cutter", "Gutamaya"),
    template("DiamondBack", "Diamondback Scout", "Lakon Spaceways"),
    template("DiamondBackXL", "Diamondback Explorer", "Lakon Spaceways"),
    template("Dolphin", "Dolphin", "Saud Kruger"),
    template("Eagle", "Eagle", "Core Dynamics"),
    template("Empire_Courier", "Imperial Courier", "Gutamaya"),
    template("Empire_Eagle", "Imperial Eagle", "Gutamaya"),
    template("Empire_Trader", "Imperial Clipper", "Gutamaya"),
    template("Federation_Corvette", "Federal Corvette", "Core Dynamics"),
    template("Federation_Dropship", "Federal Dropship", "Core Dynamics"),
    template("Federation_Dropship_MkII", "Federal Assault Ship", "Core Dynamics"),
    template("Federation_Gunship", "Federal Gunship", "Core Dynamics"),
    template("FerDeLance", "Fer-de-Lance", "Zorgon Peterson"),
    template("Hauler", "Hauler", "Zorgon Peterson"),
    template("Independant_Trader", "Keelback", "Lakon Spaceways"),
    template("Orca", "Orca", "Saud Kruger"),
    template("Python", "Python", "Faulcon DeLacy"),
    template("SideWinder", "Sidewinder", "Faulcon DeLacy"),
    template("Type6", "Type-6 Transporter", "Lakon Spaceways"),
    template("Type7", "Type-7 Transporter", "Lakon Spaceways"),
    template("Type9", "Type-9 Heavy", "Lakon Spaceways"),
    template("TypeX", "Alliance Chieftain", "Lakon Spaceways"),
    template("Viper", "Viper Mk III", "Faulcon DeLacy"),
    template("Viper_MkIV", "Viper Mk IV", "Faulcon DeLacy"),
    template("Vulture", "Vulture", "Core Dynamics"),
];

impl VehicleTemplate {
    pub fn all() -> &'static [VehicleTemplate] {
        TEMPLATES
    }

    /// Case-insensitive lookup by journal model code
    pub fn from_ed_model(ed_model: &str) -> Option<&'static VehicleTemplate> {
        let ed_model = ed_model.trim();
        TEMPLATES
            .iter()
            .find(|t| t.ed_model.eq_ignore_ascii_case(ed_model))
    }
}

impl Vehicle {
    /// Basic vehicle built from a model template.
    ///
    /// Unknown models keep the journal code as their display model; a missing
    /// model yields "Unknown".
    pub fn from_template(local_id: i64, ed_model: Option<&str>) -> Self {
        match ed_model.map(|m| (m, VehicleTemplate::from_ed_model(m))) {
            Some((_, Some(template))) => Vehicle {
                local_id,
                model: template.model.to_string(),
                ed_model: Some(template.ed_model.to_string()),
                manufacturer: Some(template.manufacturer.to_string()),
                name: None,
            },
            Some((code, None)) => Vehicle {
                local_id,
                model: code.to_string(),
                ed_model: Some(code.to_string()),
                manufacturer: None,
                name: None,
            },
            None => Vehicle {
                local_id,
                model: "Unknown".to_string(),
                ed_model: None,
                manufacturer: None,
                name: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_lookup_is_case_insensitive() {
        let template = VehicleTemplate::from_ed_model("cobramkiii").unwrap();
        assert_eq!(template.model, "Cobra Mk III");
    }

    #[test]
    fn test_vehicle_from_known_template() {
        let vehicle = Vehicle::from_template(7, Some("Anaconda"));
        assert_eq!(vehicle.local_id, 7);
        assert_eq!(vehicle.model, "Anaconda");
        assert_eq!(vehicle.manufacturer.as_deref(), Some("Faulcon DeLacy"));
    }

    #[test]
    fn test_vehicle_from_unknown_template() {
        let vehicle = Vehicle::from_template(3, Some("Mandalay"));
        assert_eq!(vehicle.model, "Mandalay");
        assert!(vehicle.manufacturer.is_none());

        let vehicle = Vehicle::from_template(0, None);
        assert_eq!(vehicle.model, "Unknown");
    }
}
