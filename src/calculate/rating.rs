//! Single-position rating: weighted base plus elite bonus.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{PositionWeights, WeightTable};
use crate::models::{PlayerAttributes, PlayerInfo, PositionCode, RatingBreakdown};
use crate::round_half_up;

/// Weights at or above this make an attribute a key attribute.
pub const KEY_ATTRIBUTE_WEIGHT: f64 = 0.10;
/// Key attributes at or above this earn the elite bonus.
pub const ELITE_ATTRIBUTE_VALUE: u32 = 90;
/// Cap on the skill-move, weak-foot and play-style subtotal.
pub const LEGACY_BONUS_CAP: f64 = 2.0;
pub const MAX_RATING: u32 = 99;

/// Unrounded components of the elite bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EliteBonus {
    pub role_mastery: f64,
    pub elite_attributes: f64,
    /// Already clamped to [`LEGACY_BONUS_CAP`]
    pub legacy: f64,
}

impl EliteBonus {
    pub fn total(&self) -> f64 {
        self.role_mastery + self.elite_attributes + self.legacy
    }
}

/// Rate a player at one position using the standard weight table.
pub fn position_rating(
    attributes: &PlayerAttributes,
    position: PositionCode,
    info: Option<&PlayerInfo>,
) -> RatingBreakdown {
    position_rating_with(&WeightTable::standard(), attributes, position, info)
}

/// Rate a player from a free-text position code. Unknown codes rate zero.
pub fn position_rating_for_code(
    attributes: &PlayerAttributes,
    code: &str,
    info: Option<&PlayerInfo>,
) -> RatingBreakdown {
    match code.parse::<PositionCode>() {
        Ok(position) => position_rating(attributes, position, info),
        Err(e) => {
            debug!("{}, rating as zero", e);
            RatingBreakdown::default()
        }
    }
}

/// Rate a player at one position against a given weight table.
///
/// Positions missing from the table rate zero.
pub fn position_rating_with(
    table: &WeightTable,
    attributes: &PlayerAttributes,
    position: PositionCode,
    info: Option<&PlayerInfo>,
) -> RatingBreakdown {
    let Some(entry) = table.get(position) else {
        debug!(position = %position, "No weights for position, rating as zero");
        return RatingBreakdown::default();
    };

    let base = round_half_up(weighted_average(attributes, entry)) as u32;
    let bonus = info
        .map(|info| round_half_up(elite_bonus(attributes, entry, info).total()) as u32)
        .unwrap_or(0);

    RatingBreakdown {
        total: (base + bonus).min(MAX_RATING),
        base,
        bonus,
    }
}

/// Σ(value × weight) / Σ(weight), or 0 when the weights sum to zero.
pub fn weighted_average(attributes: &PlayerAttributes, entry: &PositionWeights) -> f64 {
    let (raw, weight_sum) = entry
        .weights
        .iter()
        .fold((0.0, 0.0), |(raw, sum), (key, weight)| {
            (raw + attributes.get(*key) as f64 * weight, sum + weight)
        });

    if weight_sum > 0.0 {
        raw / weight_sum
    } else {
        0.0
    }
}

pub fn elite_bonus(
    attributes: &PlayerAttributes,
    entry: &PositionWeights,
    info: &PlayerInfo,
) -> EliteBonus {
    let role_mastery = info
        .role_for(entry.position)
        .map(|role| role.level.bonus())
        .unwrap_or(0.0);

    let elite_attributes = entry
        .weights
        .iter()
        .filter(|(key, weight)| {
            *weight >= KEY_ATTRIBUTE_WEIGHT && attributes.get(*key) >= ELITE_ATTRIBUTE_VALUE
        })
        .count() as f64;

    let legacy = (star_bonus(entry.importance.skill_moves, info.skill_moves)
        + star_bonus(entry.importance.weak_foot, info.weak_foot)
        + info.plus_play_styles() as f64 * 0.5)
        .min(LEGACY_BONUS_CAP);

    EliteBonus {
        role_mastery,
        elite_attributes,
        legacy,
    }
}

/// Bonus for 4★/5★ skill moves or weak foot, scaled by how much the position
/// values them. Importance below 2 never scores.
fn star_bonus(importance: u8, stars: u8) -> f64 {
    if importance < 2 {
        return 0.0;
    }
    let critical = importance == 3;
    match stars {
        5 if critical => 1.0,
        5 => 0.5,
        4 if critical => 0.5,
        4 => 0.2,
        _ => 0.0,
    }
}
