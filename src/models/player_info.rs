//! Biographical and card metadata for a player.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::PositionCode;

/// Tier of a play-style badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayStyleTier {
    #[default]
    Regular,
    Plus,
}

/// A named special trait on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStyle {
    pub name: String,

    #[serde(rename = "type", default)]
    pub tier: PlayStyleTier,
}

impl PlayStyle {
    pub fn new(name: impl Into<String>, tier: PlayStyleTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }

    pub fn is_plus(&self) -> bool {
        self.tier == PlayStyleTier::Plus
    }
}

/// Mastery of a tactical role: none, `+` or `++`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    #[default]
    Base,
    Plus,
    PlusPlus,
}

impl MasteryLevel {
    /// Elite bonus granted for holding a role at this level.
    pub fn bonus(&self) -> f64 {
        match self {
            MasteryLevel::PlusPlus => 3.0,
            MasteryLevel::Plus => 1.5,
            MasteryLevel::Base => 0.5,
        }
    }
}

impl std::fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MasteryLevel::Base => write!(f, "base"),
            MasteryLevel::Plus => write!(f, "+"),
            MasteryLevel::PlusPlus => write!(f, "++"),
        }
    }
}

/// A tactical role the player holds on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRole {
    pub name: String,

    #[serde(default)]
    pub level: MasteryLevel,

    /// Position the role is tied to, if the card shows one. Blank or unknown
    /// codes in a file load as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<PositionCode>,
}

/// Card metadata. Height, weight, age and potential stay free text as typed
/// or scanned; the analyzers parse them leniently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerInfo {
    pub name: String,

    /// ISO 3166 alpha-2 code (e.g. "PT")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Usually digits, e.g. "17"
    pub age: String,

    /// e.g. "180 cm" or "1,80"
    pub height: String,

    /// e.g. "75 kg"
    pub weight: String,

    pub preferred_foot: String,

    /// 1–5 stars
    pub skill_moves: u8,

    /// 1–5 stars
    pub weak_foot: u8,

    /// e.g. "82-86"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_range: Option<String>,

    pub play_styles: Vec<PlayStyle>,

    pub roles: Vec<PlayerRole>,

    /// Positions printed on the card. Unknown codes in a file are skipped.
    #[serde(deserialize_with = "lenient_positions")]
    pub positions: Vec<PositionCode>,

    /// Current overall rating
    pub overall: u32,

    /// Form delta shown next to the overall, e.g. +1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_boost: Option<i32>,
}

impl PlayerInfo {
    /// First declared role tied to `position`.
    pub fn role_for(&self, position: PositionCode) -> Option<&PlayerRole> {
        self.roles.iter().find(|r| r.position == Some(position))
    }

    pub fn plus_play_styles(&self) -> usize {
        self.play_styles.iter().filter(|s| s.is_plus()).count()
    }

    pub fn is_declared_goalkeeper(&self) -> bool {
        self.positions.contains(&PositionCode::GK)
    }
}

fn lenient_position<'de, D>(deserializer: D) -> Result<Option<PositionCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    if code.trim().is_empty() {
        return Ok(None);
    }
    match code.parse() {
        Ok(position) => Ok(Some(position)),
        Err(e) => {
            debug!("{}, dropping role position", e);
            Ok(None)
        }
    }
}

fn lenient_positions<'de, D>(deserializer: D) -> Result<Vec<PositionCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let codes = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(codes
        .iter()
        .filter_map(|code| match code.parse() {
            Ok(position) => Some(position),
            Err(e) => {
                debug!("{}, skipping", e);
                None
            }
        })
        .collect())
}
