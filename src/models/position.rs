//! Playing positions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A playing position on the card.
///
/// The declaration order is the catalog order used to break rating ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PositionCode {
    ST,
    RW,
    LW,
    RM,
    LM,
    CAM,
    CM,
    CDM,
    CB,
    LB,
    RB,
    GK,
}

impl PositionCode {
    /// Every position, in catalog order.
    pub const ALL: [PositionCode; 12] = [
        PositionCode::ST,
        PositionCode::RW,
        PositionCode::LW,
        PositionCode::RM,
        PositionCode::LM,
        PositionCode::CAM,
        PositionCode::CM,
        PositionCode::CDM,
        PositionCode::CB,
        PositionCode::LB,
        PositionCode::RB,
        PositionCode::GK,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionCode::ST => "ST",
            PositionCode::RW => "RW",
            PositionCode::LW => "LW",
            PositionCode::CAM => "CAM",
            PositionCode::CM => "CM",
            PositionCode::RM => "RM",
            PositionCode::LM => "LM",
            PositionCode::CDM => "CDM",
            PositionCode::CB => "CB",
            PositionCode::LB => "LB",
            PositionCode::RB => "RB",
            PositionCode::GK => "GK",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PositionCode::GK)
    }

    /// Right-sided positions. Training grids are stored left-sided and
    /// mirrored for these.
    pub fn is_right_sided(&self) -> bool {
        matches!(self, PositionCode::RB | PositionCode::RM | PositionCode::RW)
    }

    /// Pitch line used for the height-for-position check.
    pub fn line(&self) -> PitchLine {
        match self {
            PositionCode::CB | PositionCode::LB | PositionCode::RB | PositionCode::CDM => {
                PitchLine::Defense
            }
            PositionCode::CM | PositionCode::CAM | PositionCode::RM | PositionCode::LM => {
                PitchLine::Midfield
            }
            PositionCode::ST | PositionCode::RW | PositionCode::LW => PitchLine::Attack,
            PositionCode::GK => PitchLine::Goalkeeper,
        }
    }
}

impl std::fmt::Display for PositionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a position code cannot be recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown position code: {0}")]
pub struct UnknownPosition(pub String);

impl FromStr for PositionCode {
    type Err = UnknownPosition;

    /// Accepts English codes, Portuguese card abbreviations and the obsolete
    /// wing-back / forward codes older cards still print.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let position = match code.as_str() {
            "ST" | "PL" | "AC" | "CF" => PositionCode::ST,
            "RW" | "ED" | "AD" => PositionCode::RW,
            "LW" | "EE" | "AE" => PositionCode::LW,
            "CAM" | "MCO" => PositionCode::CAM,
            "CM" | "MC" => PositionCode::CM,
            "RM" | "MD" => PositionCode::RM,
            "LM" | "ME" => PositionCode::LM,
            "CDM" | "MDC" => PositionCode::CDM,
            "CB" | "DC" => PositionCode::CB,
            "LB" | "DE" | "LEO" | "LWB" => PositionCode::LB,
            "RB" | "DD" | "LDO" | "RWB" => PositionCode::RB,
            "GK" | "GR" => PositionCode::GK,
            _ => return Err(UnknownPosition(s.to_string())),
        };
        Ok(position)
    }
}

impl TryFrom<String> for PositionCode {
    type Error = UnknownPosition;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PositionCode> for String {
    fn from(value: PositionCode) -> Self {
        value.as_str().to_string()
    }
}

/// Line of the pitch a position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchLine {
    Defense,
    Midfield,
    Attack,
    Goalkeeper,
}

impl PitchLine {
    /// Ideal height band in centimetres, inclusive on both ends.
    pub fn ideal_height_cm(&self) -> (f64, f64) {
        match self {
            PitchLine::Defense => (180.0, 190.0),
            PitchLine::Midfield => (175.0, 185.0),
            PitchLine::Attack => (170.0, 180.0),
            PitchLine::Goalkeeper => (186.0, 196.0),
        }
    }
}

impl std::fmt::Display for PitchLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PitchLine::Defense => write!(f, "Defense"),
            PitchLine::Midfield => write!(f, "Midfield"),
            PitchLine::Attack => write!(f, "Attack"),
            PitchLine::Goalkeeper => write!(f, "Goalkeeper"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_positions_unique() {
        let mut seen = std::collections::HashSet::new();
        for pos in PositionCode::ALL {
            assert!(seen.insert(pos));
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_parse_english_codes() {
        for pos in PositionCode::ALL {
            assert_eq!(pos.as_str().parse::<PositionCode>().unwrap(), pos);
        }
        assert_eq!(" cam ".parse::<PositionCode>().unwrap(), PositionCode::CAM);
    }

    #[test]
    fn test_parse_card_aliases() {
        assert_eq!("GR".parse::<PositionCode>().unwrap(), PositionCode::GK);
        assert_eq!("PL".parse::<PositionCode>().unwrap(), PositionCode::ST);
        assert_eq!("MDC".parse::<PositionCode>().unwrap(), PositionCode::CDM);
        assert_eq!("LEO".parse::<PositionCode>().unwrap(), PositionCode::LB);
        assert_eq!("LDO".parse::<PositionCode>().unwrap(), PositionCode::RB);
        assert_eq!("AE".parse::<PositionCode>().unwrap(), PositionCode::LW);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "XYZ".parse::<PositionCode>().unwrap_err();
        assert_eq!(err, UnknownPosition("XYZ".to_string()));
    }

    #[test]
    fn test_pitch_lines() {
        assert_eq!(PositionCode::CDM.line(), PitchLine::Defense);
        assert_eq!(PositionCode::LM.line(), PitchLine::Midfield);
        assert_eq!(PositionCode::LW.line(), PitchLine::Attack);
        assert_eq!(PositionCode::GK.line(), PitchLine::Goalkeeper);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PositionCode::CDM).unwrap();
        assert_eq!(json, "\"CDM\"");

        let parsed: PositionCode = serde_json::from_str("\"DC\"").unwrap();
        assert_eq!(parsed, PositionCode::CB);

        assert!(serde_json::from_str::<PositionCode>("\"??\"").is_err());
    }
}
