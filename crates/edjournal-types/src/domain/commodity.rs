use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commodity {
    /// Journal code, e.g. `"hydrogenfuel"`
    pub ed_name: String,
    pub name: String,
    pub category: String,
}

// (code, name, category)
const COMMODITIES: &[(&str, &str, &str)] = &[
    ("explosives", "Explosives", "Chemicals"),
    ("hydrogenfuel", "Hydrogen Fuel", "Chemicals"),
    ("mineraloil", "Mineral Oil", "Chemicals"),
    ("pesticides", "Pesticides", "Chemicals"),
    ("clothing", "Clothing", "Consumer Items"),
    ("consumertechnology", "Consumer Technology", "Consumer Items"),
    ("domesticappliances", "Domestic Appliances", "Consumer Items"),
    ("beer", "Beer", "Legal Drugs"),
    ("liquor", "Liquor", "Legal Drugs"),
    ("tobacco", "Tobacco", "Legal Drugs"),
    ("wine", "Wine", "Legal Drugs"),
    ("animalmeat", "Animal Meat", "Foods"),
    ("coffee", "Coffee", "Foods"),
    ("fish", "Fish", "Foods"),
    ("foodcartridges", "Food Cartridges", "Foods"),
    ("fruitandvegetables", "Fruit and Vegetables", "Foods"),
    ("grain", "Grain", "Foods"),
    ("tea", "Tea", "Foods"),
    ("polymers", "Polymers", "Industrial Materials"),
    ("semiconductors", "Semiconductors", "Industrial Materials"),
    ("superconductors", "Superconductors", "Industrial Materials"),
    ("battleweapons", "Battle Weapons", "Weapons"),
    ("nonlethalweapons", "Non-Lethal Weapons", "Weapons"),
    ("personalweapons", "Personal Weapons", "Weapons"),
    ("reactivearmour", "Reactive Armour", "Weapons"),
    ("aluminium", "Aluminium", "Metals"),
    ("beryllium", "Beryllium", "Metals"),
    ("cobalt", "Cobalt", "Metals"),
    ("copper", "Copper", "Metals"),
    ("gold", "Gold", "Metals"),
    ("palladium", "Palladium", "Metals"),
    ("platinum", "Platinum", "Metals"),
    ("silver", "Silver", "Metals"),
    ("titanium", "Titanium", "Metals"),
    ("uranium", "Uranium", "Metals"),
    ("bauxite", "Bauxite", "Minerals"),
    ("bertrandite", "Bertrandite", "Minerals"),
    ("coltan", "Coltan", "Minerals"),
    ("gallite", "Gallite", "Minerals"),
    ("indite", "Indite", "Minerals"),
    ("lepidolite", "Lepidolite", "Minerals"),
    ("painite", "Painite", "Minerals"),
    ("rutile", "Rutile", "Minerals"),
    ("drones", "Limpet", "Non-Marketable"),
    ("scrap", "Scrap", "Waste"),
    ("biowaste", "Biowaste", "Waste"),
    ("toxicwaste", "Toxic Waste", "Waste"),
    ("slaves", "Slaves", "Slavery"),
    ("imperialslaves", "Imperial Slaves", "Slavery"),
    ("usscargoblackbox", "Black Box", "Salvage"),
    ("wreckagecomponents", "Wreckage Components", "Salvage"),
    ("damagedescapepod", "Damaged Escape Pod", "Salvage"),
    ("occupiedcryopod", "Occupied Escape Pod", "Salvage"),
];

impl Commodity {
    /// Built-in commodity table. Matches on journal code or display name.
    pub fn from_ed_name(code: &str) -> Option<Self> {
        let code = crate::domain::strip_code(code, &[]);
        let code = code.strip_suffix("_name").unwrap_or(code);
        COMMODITIES
            .iter()
            .find(|(ed_name, name, _)| {
                crate::domain::codes_match(ed_name, code) || crate::domain::codes_match(name, code)
            })
            .map(|(ed_name, name, category)| Commodity {
                ed_name: ed_name.to_string(),
                name: name.to_string(),
                category: category.to_string(),
            })
    }
}
