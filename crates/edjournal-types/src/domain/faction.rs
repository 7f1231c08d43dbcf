definitions! {
    /// Major political power a system or faction is aligned with
    pub enum Superpower, prefixes = ["faction_"] {
        Federation => ("Federation", "Federation"),
        Empire => ("Empire", "Empire"),
        Alliance => ("Alliance", "Alliance"),
        Independent => ("Independent", "Independent"),
        PilotsFederation => ("PilotsFederation", "Pilots Federation"),
    }
}

definitions! {
    /// Background simulation state of a minor faction
    pub enum FactionState, prefixes = ["factionstate_"] {
        None => ("None", "None"),
        Boom => ("Boom", "Boom"),
        Bust => ("Bust", "Bust"),
        CivilUnrest => ("CivilUnrest", "Civil Unrest"),
        CivilWar => ("CivilWar", "Civil War"),
        CivilLiberty => ("CivilLiberty", "Civil Liberty"),
        Election => ("Election", "Election"),
        Expansion => ("Expansion", "Expansion"),
        Famine => ("Famine", "Famine"),
        Investment => ("Investment", "Investment"),
        Lockdown => ("Lockdown", "Lockdown"),
        Outbreak => ("Outbreak", "Outbreak"),
        Retreat => ("Retreat", "Retreat"),
        War => ("War", "War"),
    }
}

definitions! {
    pub enum Economy, prefixes = ["economy_"] {
        Agriculture => ("Agri", "Agriculture"),
        Colony => ("Colony", "Colony"),
        Extraction => ("Extraction", "Extraction"),
        HighTech => ("HighTech", "High Tech"),
        Industrial => ("Industrial", "Industrial"),
        Military => ("Military", "Military"),
        Refinery => ("Refinery", "Refinery"),
        Services => ("Service", "Services"),
        Terraforming => ("Terraforming", "Terraforming"),
        Tourism => ("Tourism", "Tourism"),
        None => ("None", "None"),
    }
}

definitions! {
    pub enum Government, prefixes = ["government_"] {
        Anarchy => ("Anarchy", "Anarchy"),
        Communism => ("Communism", "Communism"),
        Confederacy => ("Confederacy", "Confederacy"),
        Cooperative => ("Cooperative", "Cooperative"),
        Corporate => ("Corporate", "Corporate"),
        Democracy => ("Democracy", "Democracy"),
        Dictatorship => ("Dictatorship", "Dictatorship"),
        Engineer => ("Engineer", "Engineer"),
        Feudal => ("Feudal", "Feudal"),
        Imperial => ("Imperial", "Imperial"),
        Patronage => ("Patronage", "Patronage"),
        PrisonColony => ("PrisonColony", "Prison Colony"),
        Theocracy => ("Theocracy", "Theocracy"),
        None => ("None", "None"),
    }
}

definitions! {
    pub enum SecurityLevel, prefixes = ["SYSTEM_SECURITY_", "GALAXY_MAP_INFO_state_"] {
        Anarchy => ("anarchy", "Anarchy"),
        Lawless => ("lawless", "Lawless"),
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
    }
}

definitions! {
    /// Session type the commander logged into
    pub enum GameMode, prefixes = [] {
        Open => ("Open", "Open"),
        Solo => ("Solo", "Solo"),
        Group => ("Group", "Private group"),
    }
}

definitions! {
    /// Planetary ring composition
    pub enum Composition, prefixes = ["eRingClass_"] {
        Icy => ("Icy", "Icy"),
        Rocky => ("Rocky", "Rocky"),
        Metallic => ("Metalic", "Metallic"),
        MetalRich => ("MetalRich", "Metal Rich"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superpower_from_decorated_code() {
        assert_eq!(
            Superpower::from_ed_name("$faction_Empire;"),
            Some(Superpower::Empire)
        );
        assert_eq!(
            Superpower::from_ed_name("Federation"),
            Some(Superpower::Federation)
        );
        assert_eq!(Superpower::from_ed_name("Sirius Corporation"), None);
    }

    #[test]
    fn test_economy_and_government_codes() {
        assert_eq!(Economy::from_ed_name("$economy_Agri;"), Some(Economy::Agriculture));
        assert_eq!(Economy::from_ed_name("$economy_Service;").map(|e| e.name()), Some("Services"));
        assert_eq!(
            Government::from_ed_name("$government_PrisonColony;"),
            Some(Government::PrisonColony)
        );
    }

    #[test]
    fn test_security_level_prefixes() {
        assert_eq!(
            SecurityLevel::from_ed_name("$SYSTEM_SECURITY_high;"),
            Some(SecurityLevel::High)
        );
        assert_eq!(
            SecurityLevel::from_ed_name("$GALAXY_MAP_INFO_state_anarchy;"),
            Some(SecurityLevel::Anarchy)
        );
    }

    #[test]
    fn test_ring_composition() {
        assert_eq!(
            Composition::from_ed_name("eRingClass_Metalic"),
            Some(Composition::Metallic)
        );
        assert_eq!(Composition::MetalRich.to_string(), "Metal Rich");
    }

    #[test]
    fn test_empty_code_has_no_match() {
        assert_eq!(GameMode::from_ed_name(""), None);
        assert_eq!(FactionState::from_ed_name("Blockade"), None);
    }
}
