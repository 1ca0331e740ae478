//! Everything the engine knows about one player, computed in one pass.

use serde::Serialize;

use crate::catalog::{FaceStat, Locale, RoleCatalog};
use crate::models::{
    BmiAnalysis, DevelopmentPlan, PlayerAttributes, PlayerInfo, PositionCode, PositionResult,
    PotentialAnalysis, RatingBand,
};

use super::{analyze_bmi, analyze_potential, best_position, build_plans, rank_positions};

/// A face stat with its value and colour band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceStatValue {
    pub stat: FaceStat,
    pub value: u32,
    pub band: RatingBand,
}

/// Full scouting report for a player card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutReport {
    pub name: String,
    pub ranking: Vec<PositionResult>,
    /// First position flagged best in the ranking
    pub best_position: Option<PositionCode>,
    pub best_rating: u32,
    pub rating_band: RatingBand,
    pub is_goalkeeper: bool,
    pub face_stats: Vec<FaceStatValue>,
    pub bmi: Option<BmiAnalysis>,
    pub potential: Option<PotentialAnalysis>,
    pub development: Vec<DevelopmentPlan>,
    pub locale: Locale,
}

impl ScoutReport {
    pub fn build(attributes: &PlayerAttributes, info: &PlayerInfo, locale: Locale) -> Self {
        Self::build_with(&RoleCatalog::standard(), attributes, info, locale)
    }

    pub fn build_with(
        catalog: &RoleCatalog,
        attributes: &PlayerAttributes,
        info: &PlayerInfo,
        locale: Locale,
    ) -> Self {
        let ranking = rank_positions(attributes, Some(info));
        let best = best_position(&ranking);
        let best_rating = ranking.first().map(|r| r.rating).unwrap_or(0);

        let is_goalkeeper = info.is_declared_goalkeeper() || best == Some(PositionCode::GK);
        let face_stats = FaceStat::for_goalkeeper(is_goalkeeper)
            .iter()
            .map(|&stat| {
                let value = stat.value(attributes);
                FaceStatValue {
                    stat,
                    value,
                    band: RatingBand::from_value(value),
                }
            })
            .collect();

        let potential_range = info.potential_range.as_deref().unwrap_or("");

        Self {
            name: info.name.clone(),
            best_position: best,
            best_rating,
            rating_band: RatingBand::from_value(best_rating),
            is_goalkeeper,
            face_stats,
            bmi: analyze_bmi(&info.height, &info.weight, best),
            potential: analyze_potential(potential_range, &info.age, info.overall),
            development: build_plans(catalog, &ranking, locale),
            ranking,
            locale,
        }
    }

    /// Ranking row for the best position.
    pub fn best(&self) -> Option<&PositionResult> {
        self.ranking.iter().find(|r| r.is_best)
    }
}
