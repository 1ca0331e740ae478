//! Card face stats: weighted composites of the detailed attributes.

use serde::Serialize;

use crate::models::AttributeKey::*;
use crate::models::{AttributeKey, PlayerAttributes};

/// One of the six headline numbers printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceStat {
    Pace,
    Shooting,
    Passing,
    Dribbling,
    Defending,
    Physical,
    Diving,
    Handling,
    Kicking,
    Reflexes,
    Speed,
    Positioning,
}

const SPEED: &[(AttributeKey, f64)] = &[(Acceleration, 0.45), (SprintSpeed, 0.55)];

impl FaceStat {
    pub const OUTFIELD: [FaceStat; 6] = [
        FaceStat::Pace,
        FaceStat::Shooting,
        FaceStat::Passing,
        FaceStat::Dribbling,
        FaceStat::Defending,
        FaceStat::Physical,
    ];

    pub const GOALKEEPER: [FaceStat; 6] = [
        FaceStat::Diving,
        FaceStat::Handling,
        FaceStat::Kicking,
        FaceStat::Reflexes,
        FaceStat::Speed,
        FaceStat::Positioning,
    ];

    pub fn for_goalkeeper(is_goalkeeper: bool) -> &'static [FaceStat; 6] {
        if is_goalkeeper {
            &Self::GOALKEEPER
        } else {
            &Self::OUTFIELD
        }
    }

    /// Contributing attributes and their weights.
    pub fn components(&self) -> &'static [(AttributeKey, f64)] {
        match self {
            FaceStat::Pace | FaceStat::Speed => SPEED,
            FaceStat::Shooting => &[
                (Finishing, 0.45),
                (LongShots, 0.20),
                (ShotPower, 0.20),
                (Volleys, 0.05),
                (Penalties, 0.05),
                (Positioning, 0.05),
            ],
            FaceStat::Passing => &[
                (ShortPassing, 0.35),
                (Vision, 0.20),
                (Crossing, 0.20),
                (LongPassing, 0.15),
                (Curve, 0.05),
                (FkAccuracy, 0.05),
            ],
            FaceStat::Dribbling => &[
                (Dribbling, 0.50),
                (BallControl, 0.35),
                (Agility, 0.10),
                (Balance, 0.05),
            ],
            FaceStat::Defending => &[
                (DefensiveAwareness, 0.30),
                (StandingTackle, 0.30),
                (Interceptions, 0.20),
                (HeadingAccuracy, 0.10),
                (SlidingTackle, 0.10),
            ],
            FaceStat::Physical => &[
                (Strength, 0.50),
                (Stamina, 0.25),
                (Aggression, 0.20),
                (Jumping, 0.05),
            ],
            FaceStat::Diving => &[(GkDiving, 1.0)],
            FaceStat::Handling => &[(GkHandling, 1.0)],
            FaceStat::Kicking => &[(GkKicking, 1.0)],
            FaceStat::Reflexes => &[(GkReflexes, 1.0)],
            FaceStat::Positioning => &[(GkPositioning, 1.0)],
        }
    }

    /// Weighted value, rounded and capped to 0–99.
    pub fn value(&self, attributes: &PlayerAttributes) -> u32 {
        let raw: f64 = self
            .components()
            .iter()
            .map(|(key, weight)| attributes.get(*key) as f64 * weight)
            .sum();
        (raw + 0.5).floor().clamp(0.0, 99.0) as u32
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            FaceStat::Pace => "PAC",
            FaceStat::Shooting => "SHO",
            FaceStat::Passing => "PAS",
            FaceStat::Dribbling => "DRI",
            FaceStat::Defending => "DEF",
            FaceStat::Physical => "PHY",
            FaceStat::Diving => "DIV",
            FaceStat::Handling => "HAN",
            FaceStat::Kicking => "KIC",
            FaceStat::Reflexes => "REF",
            FaceStat::Speed => "SPD",
            FaceStat::Positioning => "POS",
        }
    }
}

impl std::fmt::Display for FaceStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        for stat in FaceStat::OUTFIELD.iter().chain(FaceStat::GOALKEEPER.iter()) {
            let sum: f64 = stat.components().iter().map(|(_, w)| w).sum();
            assert!((sum - 1.0).abs() < 1e-9, "{} sums to {}", stat, sum);
        }
    }

    #[test]
    fn test_uniform_attributes_give_uniform_stats() {
        let attributes = PlayerAttributes::uniform(75);
        for stat in FaceStat::OUTFIELD {
            assert_eq!(stat.value(&attributes), 75, "{}", stat);
        }
    }

    #[test]
    fn test_pace_weighting() {
        let mut attributes = PlayerAttributes::default();
        attributes.acceleration = 80;
        attributes.sprint_speed = 100;
        assert_eq!(FaceStat::Pace.value(&attributes), 91);
    }

    #[test]
    fn test_value_capped() {
        let mut attributes = PlayerAttributes::default();
        attributes.gk_diving = 140;
        assert_eq!(FaceStat::Diving.value(&attributes), 99);
    }

    #[test]
    fn test_goalkeeper_set() {
        assert_eq!(FaceStat::for_goalkeeper(true)[0], FaceStat::Diving);
        assert_eq!(FaceStat::for_goalkeeper(false)[0], FaceStat::Pace);
    }
}
