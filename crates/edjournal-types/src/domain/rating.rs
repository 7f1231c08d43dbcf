use serde::{Deserialize, Serialize};

/// Progression ladder a rank belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingLadder {
    Combat,
    Trade,
    Exploration,
    Cqc,
    Empire,
    Federation,
}

const COMBAT: &[&str] = &[
    "Harmless",
    "Mostly Harmless",
    "Novice",
    "Competent",
    "Expert",
    "Master",
    "Dangerous",
    "Deadly",
    "Elite",
];

const TRADE: &[&str] = &[
    "Penniless",
    "Mostly Penniless",
    "Peddler",
    "Dealer",
    "Merchant",
    "Broker",
    "Entrepreneur",
    "Tycoon",
    "Elite",
];

const EXPLORATION: &[&str] = &[
    "Aimless",
    "Mostly Aimless",
    "Scout",
    "Surveyor",
    "Trailblazer",
    "Pathfinder",
    "Ranger",
    "Pioneer",
    "Elite",
];

const CQC: &[&str] = &[
    "Helpless",
    "Mostly Helpless",
    "Amateur",
    "Semi Professional",
    "Professional",
    "Champion",
    "Hero",
    "Legend",
    "Elite",
];

const EMPIRE: &[&str] = &[
    "None", "Outsider", "Serf", "Master", "Squire", "Knight", "Lord", "Baron", "Viscount", "Count",
    "Earl", "Marquis", "Duke", "Prince", "King",
];

const FEDERATION: &[&str] = &[
    "None",
    "Recruit",
    "Cadet",
    "Midshipman",
    "Petty Officer",
    "Chief Petty Officer",
    "Warrant Officer",
    "Ensign",
    "Lieutenant",
    "Lieutenant Commander",
    "Post Commander",
    "Post Captain",
    "Rear Admiral",
    "Vice Admiral",
    "Admiral",
];

impl RatingLadder {
    fn names(&self) -> &'static [&'static str] {
        match self {
            RatingLadder::Combat => COMBAT,
            RatingLadder::Trade => TRADE,
            RatingLadder::Exploration => EXPLORATION,
            RatingLadder::Cqc => CQC,
            RatingLadder::Empire => EMPIRE,
            RatingLadder::Federation => FEDERATION,
        }
    }

    /// Highest rank level on this ladder
    pub fn max_rank(&self) -> u8 {
        (self.names().len() - 1) as u8
    }
}

/// A rank on one of the commander's ladders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RatingRepr", try_from = "RatingRepr")]
pub struct Rating {
    ladder: RatingLadder,
    rank: u8,
}

impl Rating {
    pub fn from_rank(ladder: RatingLadder, rank: i64) -> Option<Self> {
        let rank = u8::try_from(rank).ok()?;
        (rank <= ladder.max_rank()).then_some(Rating { ladder, rank })
    }

    /// Look a rank up by its name, e.g. `"Mostly_Harmless"` or `"Deadly"`
    pub fn from_ed_name(ladder: RatingLadder, name: &str) -> Option<Self> {
        let name = crate::domain::strip_code(name, &[]);
        ladder
            .names()
            .iter()
            .position(|candidate| crate::domain::codes_match(candidate, name))
            .map(|rank| Rating {
                ladder,
                rank: rank as u8,
            })
    }

    pub fn ladder(&self) -> RatingLadder {
        self.ladder
    }

    /// Rank level as reported by the journal
    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn name(&self) -> &'static str {
        self.ladder.names()[self.rank as usize]
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Serialize, Deserialize)]
struct RatingRepr {
    ladder: RatingLadder,
    rank: u8,
    #[serde(default)]
    name: Option<String>,
}

impl From<Rating> for RatingRepr {
    fn from(rating: Rating) -> Self {
        RatingRepr {
            ladder: rating.ladder,
            rank: rating.rank,
            name: Some(rating.name().to_string()),
        }
    }
}

impl TryFrom<RatingRepr> for Rating {
    type Error = String;

    fn try_from(repr: RatingRepr) -> Result<Self, Self::Error> {
        Rating::from_rank(repr.ladder, repr.rank as i64).ok_or_else(|| {
            format!(
                "rank {} is out of range for the {:?} ladder",
                repr.rank, repr.ladder
            )
        })
    }
}
