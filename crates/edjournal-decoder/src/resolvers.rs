use edjournal_types::{
    Commodity, Composition, Economy, FactionState, GameMode, Government, Material, SecurityLevel,
    Superpower,
};

/// Lookup from a journal code to a domain value
pub trait Resolve<T>: Send + Sync {
    fn resolve(&self, code: &str) -> Option<T>;
}

impl<T, F> Resolve<T> for F
where
    F: Fn(&str) -> Option<T> + Send + Sync,
{
    fn resolve(&self, code: &str) -> Option<T> {
        self(code)
    }
}

/// One resolver per enumeration family the decoders consult.
///
/// `builtin()` wires the tables shipped in edjournal-types; any family can be
/// replaced by assigning its field.
pub struct Resolvers {
    pub superpower: Box<dyn Resolve<Superpower>>,
    pub faction_state: Box<dyn Resolve<FactionState>>,
    pub economy: Box<dyn Resolve<Economy>>,
    pub government: Box<dyn Resolve<Government>>,
    pub security: Box<dyn Resolve<SecurityLevel>>,
    pub game_mode: Box<dyn Resolve<GameMode>>,
    pub composition: Box<dyn Resolve<Composition>>,
    pub commodity: Box<dyn Resolve<Commodity>>,
    pub material: Box<dyn Resolve<Material>>,
}

impl Resolvers {
    pub fn builtin() -> Self {
        Self {
            superpower: Box::new(Superpower::from_ed_name),
            faction_state: Box::new(FactionState::from_ed_name),
            economy: Box::new(Economy::from_ed_name),
            government: Box::new(Government::from_ed_name),
            security: Box::new(SecurityLevel::from_ed_name),
            game_mode: Box::new(GameMode::from_ed_name),
            composition: Box::new(Composition::from_ed_name),
            commodity: Box::new(Commodity::from_ed_name),
            material: Box::new(Material::from_ed_name),
        }
    }

    /// Faction name as shown to the user; superpowers use their display name
    pub fn faction_name(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw?;
        match self.superpower.resolve(raw) {
            Some(superpower) => Some(superpower.name().to_string()),
            None => Some(raw.to_string()),
        }
    }
}

impl Default for Resolvers {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for Resolvers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolvers").finish_non_exhaustive()
    }
}
