//! Engine outputs: ratings, body and potential analyses, development plans.
//!
//! All of these are recomputed wholesale on every run and carry no identity.

use serde::Serialize;

use super::{GridCells, PitchLine, PositionCode, RoleDefinition};

/// Rating for one position, split into its rounded components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingBreakdown {
    /// `min(99, base + bonus)`
    pub total: u32,
    /// Rounded weighted average
    pub base: u32,
    /// Rounded elite bonus
    pub bonus: u32,
}

/// One row of the all-positions ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResult {
    pub position: PositionCode,
    pub rating: u32,
    pub base_rating: u32,
    pub bonus: u32,
    /// Set on every position tied at the maximum rating
    pub is_best: bool,
}

/// Colour band for displaying a rating or attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingBand {
    Elite,
    Good,
    Average,
    Weak,
}

impl RatingBand {
    pub fn from_value(value: u32) -> Self {
        if value >= 80 {
            RatingBand::Elite
        } else if value >= 70 {
            RatingBand::Good
        } else if value >= 50 {
            RatingBand::Average
        } else {
            RatingBand::Weak
        }
    }
}

/// Body-mass category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Normal => write!(f, "Normal"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}

/// How the player's height suits the line of their best position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "line", rename_all = "snake_case")]
pub enum HeightFit {
    Ideal(PitchLine),
    TooLow(PitchLine),
    TooHigh(PitchLine),
    /// No position to judge against
    Adequate,
}

impl std::fmt::Display for HeightFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeightFit::Ideal(line) => {
                let (low, high) = line.ideal_height_cm();
                write!(f, "ideal ({:.0}-{:.0} cm)", low, high)
            }
            HeightFit::TooLow(line) => write!(f, "too low for {}", line),
            HeightFit::TooHigh(line) => write!(f, "too high for {}", line),
            HeightFit::Adequate => write!(f, "adequate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiAnalysis {
    /// Rounded to two decimals
    pub value: f64,
    pub category: BmiCategory,
    pub height_cm: f64,
    pub height_analysis: HeightFit,
}

/// Growth verdict for a youth player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PotentialLabel {
    VeryFar,
    GreatProspect,
    GreatPotential,
    Normal,
}

impl PotentialLabel {
    pub fn from_average(average: f64) -> Self {
        if average >= 91.0 {
            PotentialLabel::VeryFar
        } else if average >= 86.0 {
            PotentialLabel::GreatProspect
        } else if average >= 80.0 {
            PotentialLabel::GreatPotential
        } else {
            PotentialLabel::Normal
        }
    }
}

impl std::fmt::Display for PotentialLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PotentialLabel::VeryFar => write!(f, "can go very far"),
            PotentialLabel::GreatProspect => write!(f, "a great prospect"),
            PotentialLabel::GreatPotential => write!(f, "shows great potential"),
            PotentialLabel::Normal => write!(f, "normal potential"),
        }
    }
}

/// Display tone of an academy recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Danger,
    Positive,
    Neutral,
}

/// What the academy should do with a youth player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Release,
    AcademyProspect,
    RetainInAcademy,
}

impl Recommendation {
    /// Potential averages below this are released.
    pub const RELEASE_THRESHOLD: f64 = 70.0;
    pub const PROSPECT_THRESHOLD: f64 = 85.0;

    pub fn from_average(average: f64) -> Self {
        if average < Self::RELEASE_THRESHOLD {
            Recommendation::Release
        } else if average >= Self::PROSPECT_THRESHOLD {
            Recommendation::AcademyProspect
        } else {
            Recommendation::RetainInAcademy
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Recommendation::Release => Tone::Danger,
            Recommendation::AcademyProspect => Tone::Positive,
            Recommendation::RetainInAcademy => Tone::Neutral,
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Release => write!(f, "release (low potential)"),
            Recommendation::AcademyProspect => write!(f, "academy prospect (retain)"),
            Recommendation::RetainInAcademy => write!(f, "retain in academy"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialAnalysis {
    pub average: f64,
    pub label: PotentialLabel,
    pub recommendation: Recommendation,
    pub tone: Tone,
}

/// Training plan for one recommended position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentPlan {
    pub position: PositionCode,
    pub role: RoleDefinition,
    /// Role attributes as display names, in the role's order
    pub attribute_names: Vec<String>,
}

impl DevelopmentPlan {
    /// The role's training grid, oriented for this position's side.
    pub fn training_grid(&self) -> GridCells {
        if self.position.is_right_sided() {
            self.role.grid.mirrored()
        } else {
            self.role.grid.cells()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_band() {
        assert_eq!(RatingBand::from_value(80), RatingBand::Elite);
        assert_eq!(RatingBand::from_value(79), RatingBand::Good);
        assert_eq!(RatingBand::from_value(70), RatingBand::Good);
        assert_eq!(RatingBand::from_value(50), RatingBand::Average);
        assert_eq!(RatingBand::from_value(49), RatingBand::Weak);
    }

    #[test]
    fn test_bmi_category_bands() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_height_fit_display() {
        assert_eq!(
            HeightFit::TooLow(PitchLine::Defense).to_string(),
            "too low for Defense"
        );
        assert_eq!(
            HeightFit::TooHigh(PitchLine::Attack).to_string(),
            "too high for Attack"
        );
        assert_eq!(
            HeightFit::Ideal(PitchLine::Goalkeeper).to_string(),
            "ideal (186-196 cm)"
        );
        assert_eq!(HeightFit::Adequate.to_string(), "adequate");
    }

    #[test]
    fn test_potential_label_bands() {
        assert_eq!(PotentialLabel::from_average(91.0), PotentialLabel::VeryFar);
        assert_eq!(PotentialLabel::from_average(86.0), PotentialLabel::GreatProspect);
        assert_eq!(PotentialLabel::from_average(80.0), PotentialLabel::GreatPotential);
        assert_eq!(PotentialLabel::from_average(79.5), PotentialLabel::Normal);
    }

    #[test]
    fn test_recommendation_and_tone() {
        assert_eq!(Recommendation::from_average(69.5), Recommendation::Release);
        assert_eq!(Recommendation::from_average(70.0), Recommendation::RetainInAcademy);
        assert_eq!(Recommendation::from_average(85.0), Recommendation::AcademyProspect);

        assert_eq!(Recommendation::Release.tone(), Tone::Danger);
        assert_eq!(Recommendation::AcademyProspect.tone(), Tone::Positive);
        assert_eq!(Recommendation::RetainInAcademy.tone(), Tone::Neutral);
    }

    #[test]
    fn test_position_result_serialization() {
        let result = PositionResult {
            position: PositionCode::ST,
            rating: 85,
            base_rating: 83,
            bonus: 2,
            is_best: true,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"baseRating\":83"));
        assert!(json.contains("\"isBest\":true"));
    }
}
