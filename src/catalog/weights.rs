//! Per-position attribute weights and skill-move / weak-foot importance.
//!
//! Weights sum to roughly 1.0 per position; the calculator normalizes by the
//! actual sum so small drift in the table does not matter.

use crate::models::{AttributeKey, PositionCode};

use crate::models::AttributeKey::*;

/// How much skill-move and weak-foot stars matter for a position (0–3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusImportance {
    pub skill_moves: u8,
    pub weak_foot: u8,
}

/// Weight entry for one position.
#[derive(Debug, Clone, Copy)]
pub struct PositionWeights {
    pub position: PositionCode,
    pub weights: &'static [(AttributeKey, f64)],
    pub importance: BonusImportance,
}

const fn entry(
    position: PositionCode,
    weights: &'static [(AttributeKey, f64)],
    skill_moves: u8,
    weak_foot: u8,
) -> PositionWeights {
    PositionWeights {
        position,
        weights,
        importance: BonusImportance {
            skill_moves,
            weak_foot,
        },
    }
}

const STRIKER: &[(AttributeKey, f64)] = &[
    (Finishing, 0.20),
    (Positioning, 0.12),
    (HeadingAccuracy, 0.10),
    (ShotPower, 0.10),
    (Reactions, 0.10),
    (Dribbling, 0.08),
    (BallControl, 0.08),
    (Volleys, 0.05),
    (ShortPassing, 0.05),
    (Acceleration, 0.05),
    (SprintSpeed, 0.05),
    (Strength, 0.05),
];

const WINGER: &[(AttributeKey, f64)] = &[
    (Crossing, 0.16),
    (Dribbling, 0.16),
    (BallControl, 0.13),
    (ShortPassing, 0.10),
    (Positioning, 0.09),
    (Acceleration, 0.06),
    (SprintSpeed, 0.06),
    (Reactions, 0.07),
    (Finishing, 0.10),
    (Vision, 0.06),
    (Stamina, 0.05),
    (Agility, 0.04),
];

const WIDE_MIDFIELDER: &[(AttributeKey, f64)] = &[
    (Crossing, 0.14),
    (ShortPassing, 0.12),
    (Dribbling, 0.12),
    (BallControl, 0.12),
    (Positioning, 0.08),
    (Vision, 0.07),
    (Reactions, 0.07),
    (Stamina, 0.08),
    (Acceleration, 0.07),
    (SprintSpeed, 0.07),
    (LongPassing, 0.05),
    (Finishing, 0.05),
];

const ATTACKING_MIDFIELDER: &[(AttributeKey, f64)] = &[
    (ShortPassing, 0.16),
    (BallControl, 0.15),
    (Vision, 0.14),
    (Dribbling, 0.13),
    (Positioning, 0.12),
    (Reactions, 0.08),
    (Finishing, 0.07),
    (LongShots, 0.05),
    (Acceleration, 0.04),
    (SprintSpeed, 0.04),
    (Agility, 0.03),
];

const CENTRAL_MIDFIELDER: &[(AttributeKey, f64)] = &[
    (ShortPassing, 0.17),
    (BallControl, 0.14),
    (Vision, 0.13),
    (LongPassing, 0.13),
    (Reactions, 0.08),
    (Dribbling, 0.07),
    (Stamina, 0.06),
    (DefensiveAwareness, 0.05),
    (Interceptions, 0.05),
    (StandingTackle, 0.05),
    (Positioning, 0.06),
    (ShotPower, 0.02),
    (LongShots, 0.02),
];

const DEFENSIVE_MIDFIELDER: &[(AttributeKey, f64)] = &[
    (DefensiveAwareness, 0.14),
    (StandingTackle, 0.12),
    (Interceptions, 0.12),
    (ShortPassing, 0.10),
    (Stamina, 0.09),
    (Reactions, 0.07),
    (BallControl, 0.09),
    (LongPassing, 0.08),
    (Strength, 0.07),
    (Aggression, 0.05),
    (SlidingTackle, 0.04),
    (HeadingAccuracy, 0.02),
];

const CENTRE_BACK: &[(AttributeKey, f64)] = &[
    (DefensiveAwareness, 0.17),
    (StandingTackle, 0.17),
    (SlidingTackle, 0.13),
    (HeadingAccuracy, 0.10),
    (Strength, 0.10),
    (Aggression, 0.07),
    (Interceptions, 0.13),
    (Reactions, 0.05),
    (ShortPassing, 0.05),
    (BallControl, 0.04),
    (SprintSpeed, 0.02),
    (Jumping, 0.03),
];

const FULL_BACK: &[(AttributeKey, f64)] = &[
    (SlidingTackle, 0.11),
    (StandingTackle, 0.11),
    (DefensiveAwareness, 0.11),
    (Interceptions, 0.12),
    (Crossing, 0.09),
    (Stamina, 0.08),
    (Reactions, 0.08),
    (ShortPassing, 0.07),
    (BallControl, 0.07),
    (SprintSpeed, 0.07),
    (Acceleration, 0.05),
    (Dribbling, 0.04),
];

const GOALKEEPER: &[(AttributeKey, f64)] = &[
    (GkDiving, 0.21),
    (GkHandling, 0.21),
    (GkReflexes, 0.21),
    (GkPositioning, 0.21),
    (Reactions, 0.11),
    (GkKicking, 0.05),
];

/// The standard table, one entry per position in catalog order.
pub static POSITION_WEIGHTS: [PositionWeights; 12] = [
    entry(PositionCode::ST, STRIKER, 2, 3),
    entry(PositionCode::RW, WINGER, 3, 2),
    entry(PositionCode::LW, WINGER, 3, 2),
    entry(PositionCode::RM, WIDE_MIDFIELDER, 2, 2),
    entry(PositionCode::LM, WIDE_MIDFIELDER, 2, 2),
    entry(PositionCode::CAM, ATTACKING_MIDFIELDER, 3, 3),
    entry(PositionCode::CM, CENTRAL_MIDFIELDER, 2, 3),
    entry(PositionCode::CDM, DEFENSIVE_MIDFIELDER, 1, 2),
    entry(PositionCode::CB, CENTRE_BACK, 0, 1),
    entry(PositionCode::LB, FULL_BACK, 1, 2),
    entry(PositionCode::RB, FULL_BACK, 1, 2),
    entry(PositionCode::GK, GOALKEEPER, 0, 1),
];

/// Lookup over a set of position weight entries.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable {
    entries: &'static [PositionWeights],
}

impl WeightTable {
    pub fn new(entries: &'static [PositionWeights]) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(&POSITION_WEIGHTS)
    }

    pub fn get(&self, position: PositionCode) -> Option<&'static PositionWeights> {
        self.entries.iter().find(|e| e.position == position)
    }

    /// Positions present in the table, in table order.
    pub fn positions(&self) -> impl Iterator<Item = PositionCode> + '_ {
        self.entries.iter().map(|e| e.position)
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_has_one_entry() {
        let table = WeightTable::standard();
        for pos in PositionCode::ALL {
            let count = POSITION_WEIGHTS.iter().filter(|e| e.position == pos).count();
            assert_eq!(count, 1, "{}", pos);
            assert!(table.get(pos).is_some());
        }
    }

    #[test]
    fn test_weights_sum_close_to_one() {
        for entry in &POSITION_WEIGHTS {
            let sum: f64 = entry.weights.iter().map(|(_, w)| w).sum();
            assert!((sum - 1.0).abs() < 0.1, "{} sums to {}", entry.position, sum);
        }
    }

    #[test]
    fn test_no_duplicate_attributes_per_position() {
        for entry in &POSITION_WEIGHTS {
            let mut keys: Vec<_> = entry.weights.iter().map(|(k, _)| *k).collect();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), entry.weights.len(), "{}", entry.position);
        }
    }

    #[test]
    fn test_table_order_matches_catalog() {
        let order: Vec<_> = WeightTable::standard().positions().collect();
        assert_eq!(order, PositionCode::ALL.to_vec());
    }

    #[test]
    fn test_importance() {
        let table = WeightTable::standard();
        assert_eq!(
            table.get(PositionCode::CAM).unwrap().importance,
            BonusImportance {
                skill_moves: 3,
                weak_foot: 3
            }
        );
        assert_eq!(table.get(PositionCode::CB).unwrap().importance.skill_moves, 0);
    }
}
