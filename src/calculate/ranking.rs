//! Rank every position by rating.

use crate::catalog::WeightTable;
use crate::models::{PlayerAttributes, PlayerInfo, PositionCode, PositionResult};

use super::rating::position_rating_with;

/// Rate every position, best first.
///
/// Ties keep catalog order, and every position sharing the top rating is
/// flagged best.
pub fn rank_positions(attributes: &PlayerAttributes, info: Option<&PlayerInfo>) -> Vec<PositionResult> {
    let table = WeightTable::standard();

    let mut results: Vec<PositionResult> = PositionCode::ALL
        .iter()
        .map(|&position| {
            let rating = position_rating_with(&table, attributes, position, info);
            PositionResult {
                position,
                rating: rating.total,
                base_rating: rating.base,
                bonus: rating.bonus,
                is_best: false,
            }
        })
        .collect();

    let max_rating = results.iter().map(|r| r.rating).max().unwrap_or(0);
    for result in &mut results {
        result.is_best = result.rating == max_rating;
    }

    // sort_by is stable
    results.sort_by(|a, b| b.rating.cmp(&a.rating));
    results
}

/// First position flagged best, if any.
pub fn best_position(ranked: &[PositionResult]) -> Option<PositionCode> {
    ranked.iter().find(|r| r.is_best).map(|r| r.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn striker_attributes() -> PlayerAttributes {
        let mut attributes = PlayerAttributes::uniform(50);
        attributes.finishing = 92;
        attributes.positioning = 90;
        attributes.shot_power = 88;
        attributes.heading_accuracy = 80;
        attributes.reactions = 85;
        attributes
    }

    #[test]
    fn test_one_result_per_position() {
        let ranked = rank_positions(&striker_attributes(), None);
        assert_eq!(ranked.len(), PositionCode::ALL.len());
        for pos in PositionCode::ALL {
            assert_eq!(ranked.iter().filter(|r| r.position == pos).count(), 1);
        }
    }

    #[test]
    fn test_sorted_descending_with_best_flags() {
        let ranked = rank_positions(&striker_attributes(), None);

        for pair in ranked.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }

        let max = ranked[0].rating;
        for r in &ranked {
            assert_eq!(r.is_best, r.rating == max, "{}", r.position);
        }
        assert_eq!(ranked[0].position, PositionCode::ST);
        assert!(ranked[0].is_best);
    }

    #[test]
    fn test_all_tied_keeps_catalog_order() {
        let ranked = rank_positions(&PlayerAttributes::uniform(70), None);

        let order: Vec<_> = ranked.iter().map(|r| r.position.as_str()).collect();
        assert_eq!(
            order,
            vec!["ST", "RW", "LW", "RM", "LM", "CAM", "CM", "CDM", "CB", "LB", "RB", "GK"]
        );
        assert!(ranked.iter().all(|r| r.is_best));
        assert_eq!(best_position(&ranked), Some(PositionCode::ST));
    }

    #[test]
    fn test_all_zero_attributes() {
        let ranked = rank_positions(&PlayerAttributes::default(), None);
        assert!(ranked.iter().all(|r| r.rating == 0 && r.is_best));
    }

    #[test]
    fn test_symmetric_wingers_tied() {
        let mut attributes = PlayerAttributes::uniform(55);
        attributes.crossing = 90;
        attributes.dribbling = 92;
        attributes.ball_control = 88;

        let ranked = rank_positions(&attributes, None);
        let rw = ranked.iter().find(|r| r.position == PositionCode::RW).unwrap();
        let lw = ranked.iter().find(|r| r.position == PositionCode::LW).unwrap();
        assert_eq!(rw.base_rating, lw.base_rating);

        // RW precedes LW on ties
        let rw_index = ranked.iter().position(|r| r.position == PositionCode::RW);
        let lw_index = ranked.iter().position(|r| r.position == PositionCode::LW);
        assert!(rw_index < lw_index);
    }

    #[test]
    fn test_best_position_empty() {
        assert_eq!(best_position(&[]), None);
    }
}
