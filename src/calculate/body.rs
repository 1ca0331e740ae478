//! Body-composition analysis from free-text height and weight.

use tracing::debug;

use crate::models::{BmiAnalysis, BmiCategory, HeightFit, PositionCode};
use crate::parse_first_number;

/// Heights above this are read as centimetres, at or below as metres.
const METRE_CUTOFF: f64 = 3.0;

/// BMI and height fit for the player's best position.
///
/// Returns `None` when either value is missing or unreadable, or the height
/// is zero.
pub fn analyze_bmi(height: &str, weight: &str, best: Option<PositionCode>) -> Option<BmiAnalysis> {
    let Some(height_value) = parse_first_number(height) else {
        debug!(height, "Unreadable height, skipping BMI");
        return None;
    };
    let Some(weight_kg) = parse_first_number(weight) else {
        debug!(weight, "Unreadable weight, skipping BMI");
        return None;
    };

    let (height_m, height_cm) = if height_value > METRE_CUTOFF {
        (height_value / 100.0, height_value)
    } else {
        (height_value, height_value * 100.0)
    };

    if height_m == 0.0 {
        return None;
    }

    let value = round_to_hundredths(weight_kg / (height_m * height_m));

    Some(BmiAnalysis {
        value,
        category: BmiCategory::from_bmi(value),
        height_cm,
        height_analysis: height_fit(height_cm, best),
    })
}

/// Judge a height in centimetres against the ideal band of a position's line.
pub fn height_fit(height_cm: f64, best: Option<PositionCode>) -> HeightFit {
    let Some(position) = best else {
        return HeightFit::Adequate;
    };

    let line = position.line();
    let (low, high) = line.ideal_height_cm();
    if height_cm < low {
        HeightFit::TooLow(line)
    } else if height_cm > high {
        HeightFit::TooHigh(line)
    } else {
        HeightFit::Ideal(line)
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PitchLine;

    #[test]
    fn test_bmi_centimetres() {
        let analysis = analyze_bmi("180", "75", None).unwrap();
        assert_eq!(analysis.value, 23.15);
        assert_eq!(analysis.category, BmiCategory::Normal);
        assert_eq!(analysis.height_cm, 180.0);
        assert_eq!(analysis.height_analysis, HeightFit::Adequate);
    }

    #[test]
    fn test_bmi_metres_match_centimetres() {
        let cm = analyze_bmi("180", "75", None).unwrap();
        let m = analyze_bmi("1.80", "75", None).unwrap();
        assert_eq!(cm.value, m.value);
        assert_eq!(cm.category, m.category);

        let comma = analyze_bmi("1,80 m", "75 kg", None).unwrap();
        assert_eq!(comma.value, cm.value);
    }

    #[test]
    fn test_height_too_low_for_defense() {
        let analysis = analyze_bmi("175", "70", Some(PositionCode::CB)).unwrap();
        assert_eq!(analysis.height_analysis, HeightFit::TooLow(PitchLine::Defense));
        assert_eq!(analysis.height_analysis.to_string(), "too low for Defense");
    }

    #[test]
    fn test_height_bands_inclusive() {
        assert_eq!(
            height_fit(180.0, Some(PositionCode::ST)),
            HeightFit::Ideal(PitchLine::Attack)
        );
        assert_eq!(
            height_fit(180.5, Some(PositionCode::ST)),
            HeightFit::TooHigh(PitchLine::Attack)
        );
        assert_eq!(
            height_fit(186.0, Some(PositionCode::GK)),
            HeightFit::Ideal(PitchLine::Goalkeeper)
        );
        assert_eq!(
            height_fit(185.0, Some(PositionCode::CAM)),
            HeightFit::Ideal(PitchLine::Midfield)
        );
    }

    #[test]
    fn test_obese_and_underweight() {
        assert_eq!(
            analyze_bmi("170", "90", None).unwrap().category,
            BmiCategory::Obese
        );
        assert_eq!(
            analyze_bmi("190", "60", None).unwrap().category,
            BmiCategory::Underweight
        );
    }

    #[test]
    fn test_missing_or_unreadable_values() {
        assert!(analyze_bmi("", "75", None).is_none());
        assert!(analyze_bmi("180", "", None).is_none());
        assert!(analyze_bmi("tall", "75", None).is_none());
        assert!(analyze_bmi("0", "75", None).is_none());
    }

    #[test]
    fn test_idempotent() {
        let a = analyze_bmi("1,87", "82", Some(PositionCode::LB));
        let b = analyze_bmi("1,87", "82", Some(PositionCode::LB));
        assert_eq!(a, b);
    }
}
