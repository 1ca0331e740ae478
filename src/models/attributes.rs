//! Player skill attributes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The 34 card attributes on the 1–99 scale.
///
/// Values are not validated here: callers may store anything, and every field
/// defaults to 0 when absent from a file or scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerAttributes {
    // Attacking
    pub crossing: u32,
    pub finishing: u32,
    pub heading_accuracy: u32,
    pub short_passing: u32,
    pub volleys: u32,

    // Skill
    pub dribbling: u32,
    pub curve: u32,
    pub fk_accuracy: u32,
    pub long_passing: u32,
    pub ball_control: u32,

    // Movement
    pub acceleration: u32,
    pub sprint_speed: u32,
    pub agility: u32,
    pub reactions: u32,
    pub balance: u32,

    // Power
    pub shot_power: u32,
    pub jumping: u32,
    pub stamina: u32,
    pub strength: u32,
    pub long_shots: u32,

    // Mentality
    pub aggression: u32,
    pub interceptions: u32,
    pub positioning: u32,
    pub vision: u32,
    pub penalties: u32,
    pub composure: u32,

    // Defending
    pub defensive_awareness: u32,
    pub standing_tackle: u32,
    pub sliding_tackle: u32,

    // Goalkeeping
    pub gk_diving: u32,
    pub gk_handling: u32,
    pub gk_kicking: u32,
    pub gk_positioning: u32,
    pub gk_reflexes: u32,
}

impl PlayerAttributes {
    /// Every attribute set to the same value.
    pub fn uniform(value: u32) -> Self {
        let mut attributes = Self::default();
        for key in AttributeKey::ALL {
            attributes.set(key, value);
        }
        attributes
    }

    pub fn get(&self, key: AttributeKey) -> u32 {
        match key {
            AttributeKey::Crossing => self.crossing,
            AttributeKey::Finishing => self.finishing,
            AttributeKey::HeadingAccuracy => self.heading_accuracy,
            AttributeKey::ShortPassing => self.short_passing,
            AttributeKey::Volleys => self.volleys,
            AttributeKey::Dribbling => self.dribbling,
            AttributeKey::Curve => self.curve,
            AttributeKey::FkAccuracy => self.fk_accuracy,
            AttributeKey::LongPassing => self.long_passing,
            AttributeKey::BallControl => self.ball_control,
            AttributeKey::Acceleration => self.acceleration,
            AttributeKey::SprintSpeed => self.sprint_speed,
            AttributeKey::Agility => self.agility,
            AttributeKey::Reactions => self.reactions,
            AttributeKey::Balance => self.balance,
            AttributeKey::ShotPower => self.shot_power,
            AttributeKey::Jumping => self.jumping,
            AttributeKey::Stamina => self.stamina,
            AttributeKey::Strength => self.strength,
            AttributeKey::LongShots => self.long_shots,
            AttributeKey::Aggression => self.aggression,
            AttributeKey::Interceptions => self.interceptions,
            AttributeKey::Positioning => self.positioning,
            AttributeKey::Vision => self.vision,
            AttributeKey::Penalties => self.penalties,
            AttributeKey::Composure => self.composure,
            AttributeKey::DefensiveAwareness => self.defensive_awareness,
            AttributeKey::StandingTackle => self.standing_tackle,
            AttributeKey::SlidingTackle => self.sliding_tackle,
            AttributeKey::GkDiving => self.gk_diving,
            AttributeKey::GkHandling => self.gk_handling,
            AttributeKey::GkKicking => self.gk_kicking,
            AttributeKey::GkPositioning => self.gk_positioning,
            AttributeKey::GkReflexes => self.gk_reflexes,
        }
    }

    pub fn set(&mut self, key: AttributeKey, value: u32) {
        let slot = match key {
            AttributeKey::Crossing => &mut self.crossing,
            AttributeKey::Finishing => &mut self.finishing,
            AttributeKey::HeadingAccuracy => &mut self.heading_accuracy,
            AttributeKey::ShortPassing => &mut self.short_passing,
            AttributeKey::Volleys => &mut self.volleys,
            AttributeKey::Dribbling => &mut self.dribbling,
            AttributeKey::Curve => &mut self.curve,
            AttributeKey::FkAccuracy => &mut self.fk_accuracy,
            AttributeKey::LongPassing => &mut self.long_passing,
            AttributeKey::BallControl => &mut self.ball_control,
            AttributeKey::Acceleration => &mut self.acceleration,
            AttributeKey::SprintSpeed => &mut self.sprint_speed,
            AttributeKey::Agility => &mut self.agility,
            AttributeKey::Reactions => &mut self.reactions,
            AttributeKey::Balance => &mut self.balance,
            AttributeKey::ShotPower => &mut self.shot_power,
            AttributeKey::Jumping => &mut self.jumping,
            AttributeKey::Stamina => &mut self.stamina,
            AttributeKey::Strength => &mut self.strength,
            AttributeKey::LongShots => &mut self.long_shots,
            AttributeKey::Aggression => &mut self.aggression,
            AttributeKey::Interceptions => &mut self.interceptions,
            AttributeKey::Positioning => &mut self.positioning,
            AttributeKey::Vision => &mut self.vision,
            AttributeKey::Penalties => &mut self.penalties,
            AttributeKey::Composure => &mut self.composure,
            AttributeKey::DefensiveAwareness => &mut self.defensive_awareness,
            AttributeKey::StandingTackle => &mut self.standing_tackle,
            AttributeKey::SlidingTackle => &mut self.sliding_tackle,
            AttributeKey::GkDiving => &mut self.gk_diving,
            AttributeKey::GkHandling => &mut self.gk_handling,
            AttributeKey::GkKicking => &mut self.gk_kicking,
            AttributeKey::GkPositioning => &mut self.gk_positioning,
            AttributeKey::GkReflexes => &mut self.gk_reflexes,
        };
        *slot = value;
    }
}

/// Addresses a single attribute of [`PlayerAttributes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKey {
    Crossing,
    Finishing,
    HeadingAccuracy,
    ShortPassing,
    Volleys,
    Dribbling,
    Curve,
    FkAccuracy,
    LongPassing,
    BallControl,
    Acceleration,
    SprintSpeed,
    Agility,
    Reactions,
    Balance,
    ShotPower,
    Jumping,
    Stamina,
    Strength,
    LongShots,
    Aggression,
    Interceptions,
    Positioning,
    Vision,
    Penalties,
    Composure,
    DefensiveAwareness,
    StandingTackle,
    SlidingTackle,
    GkDiving,
    GkHandling,
    GkKicking,
    GkPositioning,
    GkReflexes,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 34] = [
        AttributeKey::Crossing,
        AttributeKey::Finishing,
        AttributeKey::HeadingAccuracy,
        AttributeKey::ShortPassing,
        AttributeKey::Volleys,
        AttributeKey::Dribbling,
        AttributeKey::Curve,
        AttributeKey::FkAccuracy,
        AttributeKey::LongPassing,
        AttributeKey::BallControl,
        AttributeKey::Acceleration,
        AttributeKey::SprintSpeed,
        AttributeKey::Agility,
        AttributeKey::Reactions,
        AttributeKey::Balance,
        AttributeKey::ShotPower,
        AttributeKey::Jumping,
        AttributeKey::Stamina,
        AttributeKey::Strength,
        AttributeKey::LongShots,
        AttributeKey::Aggression,
        AttributeKey::Interceptions,
        AttributeKey::Positioning,
        AttributeKey::Vision,
        AttributeKey::Penalties,
        AttributeKey::Composure,
        AttributeKey::DefensiveAwareness,
        AttributeKey::StandingTackle,
        AttributeKey::SlidingTackle,
        AttributeKey::GkDiving,
        AttributeKey::GkHandling,
        AttributeKey::GkKicking,
        AttributeKey::GkPositioning,
        AttributeKey::GkReflexes,
    ];

    /// The camelCase key used in profile files and scanner responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Crossing => "crossing",
            AttributeKey::Finishing => "finishing",
            AttributeKey::HeadingAccuracy => "headingAccuracy",
            AttributeKey::ShortPassing => "shortPassing",
            AttributeKey::Volleys => "volleys",
            AttributeKey::Dribbling => "dribbling",
            AttributeKey::Curve => "curve",
            AttributeKey::FkAccuracy => "fkAccuracy",
            AttributeKey::LongPassing => "longPassing",
            AttributeKey::BallControl => "ballControl",
            AttributeKey::Acceleration => "acceleration",
            AttributeKey::SprintSpeed => "sprintSpeed",
            AttributeKey::Agility => "agility",
            AttributeKey::Reactions => "reactions",
            AttributeKey::Balance => "balance",
            AttributeKey::ShotPower => "shotPower",
            AttributeKey::Jumping => "jumping",
            AttributeKey::Stamina => "stamina",
            AttributeKey::Strength => "strength",
            AttributeKey::LongShots => "longShots",
            AttributeKey::Aggression => "aggression",
            AttributeKey::Interceptions => "interceptions",
            AttributeKey::Positioning => "positioning",
            AttributeKey::Vision => "vision",
            AttributeKey::Penalties => "penalties",
            AttributeKey::Composure => "composure",
            AttributeKey::DefensiveAwareness => "defensiveAwareness",
            AttributeKey::StandingTackle => "standingTackle",
            AttributeKey::SlidingTackle => "slidingTackle",
            AttributeKey::GkDiving => "gkDiving",
            AttributeKey::GkHandling => "gkHandling",
            AttributeKey::GkKicking => "gkKicking",
            AttributeKey::GkPositioning => "gkPositioning",
            AttributeKey::GkReflexes => "gkReflexes",
        }
    }

    /// Goalkeeper-only skills (diving, handling, kicking, positioning, reflexes).
    pub fn is_goalkeeping(&self) -> bool {
        matches!(
            self,
            AttributeKey::GkDiving
                | AttributeKey::GkHandling
                | AttributeKey::GkKicking
                | AttributeKey::GkPositioning
                | AttributeKey::GkReflexes
        )
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown attribute: {}", s))
    }
}
