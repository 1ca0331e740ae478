//! Youth potential verdicts.

use tracing::debug;

use crate::models::{PotentialAnalysis, PotentialLabel, Recommendation};
use crate::{parse_first_integer, parse_numbers};

/// Players older than this get no potential verdict.
pub const MAX_YOUTH_AGE: u32 = 18;

/// Grade a potential range such as "82-86" for a youth player.
///
/// Returns `None` when the range has fewer than two numbers or the player is
/// over [`MAX_YOUTH_AGE`]. An age with no digits counts as 0. The current
/// overall does not affect the verdict.
///
/// Parsing is deliberately lenient: any separator works ("82/86", "82 a 86")
/// and stray letters are ignored, so "8a-86" reads as 8 and 86.
pub fn analyze_potential(
    range: &str,
    age: &str,
    _current_overall: u32,
) -> Option<PotentialAnalysis> {
    let numbers = parse_numbers(range);
    if numbers.len() < 2 {
        debug!(range, "Potential range needs two numbers");
        return None;
    }

    let age = parse_first_integer(age).unwrap_or(0);
    if age > MAX_YOUTH_AGE {
        return None;
    }

    let average = (numbers[0] + numbers[1]) / 2.0;
    let recommendation = Recommendation::from_average(average);

    Some(PotentialAnalysis {
        average,
        label: PotentialLabel::from_average(average),
        recommendation,
        tone: recommendation.tone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tone;

    #[test]
    fn test_retain_in_academy() {
        let analysis = analyze_potential("82-86", "17", 75).unwrap();
        assert_eq!(analysis.average, 84.0);
        assert_eq!(analysis.label, PotentialLabel::GreatPotential);
        assert_eq!(analysis.label.to_string(), "shows great potential");
        assert_eq!(analysis.recommendation, Recommendation::RetainInAcademy);
        assert_eq!(analysis.tone, Tone::Neutral);
    }

    #[test]
    fn test_lenient_separators() {
        assert_eq!(analyze_potential("82/86", "17", 0).unwrap().average, 84.0);
        assert_eq!(analyze_potential("82 a 86", "17", 0).unwrap().average, 84.0);
        assert_eq!(analyze_potential("8a-86", "17", 0).unwrap().average, 47.0);
    }

    #[test]
    fn test_too_old() {
        assert!(analyze_potential("82-86", "20", 75).is_none());
        assert!(analyze_potential("82-86", "18", 75).is_some());
    }

    #[test]
    fn test_missing_age_passes() {
        assert!(analyze_potential("82-86", "", 75).is_some());
        assert!(analyze_potential("82-86", "unknown", 75).is_some());
    }

    #[test]
    fn test_needs_two_numbers() {
        assert!(analyze_potential("", "16", 60).is_none());
        assert!(analyze_potential("85", "16", 60).is_none());
        assert!(analyze_potential("high", "16", 60).is_none());
    }

    #[test]
    fn test_separators() {
        let spaced = analyze_potential("88 92", "16", 70).unwrap();
        assert_eq!(spaced.average, 90.0);
        assert_eq!(spaced.label, PotentialLabel::GreatProspect);
        assert_eq!(spaced.recommendation, Recommendation::AcademyProspect);
        assert_eq!(spaced.tone, Tone::Positive);

        let dashed = analyze_potential("90 - 94", "16", 70).unwrap();
        assert_eq!(dashed.label, PotentialLabel::VeryFar);
    }

    #[test]
    fn test_release() {
        let analysis = analyze_potential("64-70", "17", 58).unwrap();
        assert_eq!(analysis.average, 67.0);
        assert_eq!(analysis.label, PotentialLabel::Normal);
        assert_eq!(analysis.recommendation, Recommendation::Release);
        assert_eq!(analysis.tone, Tone::Danger);
    }

    #[test]
    fn test_current_overall_unused() {
        assert_eq!(
            analyze_potential("80-84", "16", 50),
            analyze_potential("80-84", "16", 79)
        );
    }
}
