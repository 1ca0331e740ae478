//! Role-based development plans for the top positions.

use tracing::debug;

use crate::catalog::{Locale, RoleCatalog};
use crate::models::{DevelopmentPlan, PositionCode, PositionResult};

/// Plans built for an outfield player.
pub const OUTFIELD_PLAN_LIMIT: usize = 5;
/// Plans built when the top position is goalkeeper.
pub const GOALKEEPER_PLAN_LIMIT: usize = 1;

/// Development plans for a ranking, with English attribute names.
pub fn development_plan(ranked: &[PositionResult]) -> Vec<DevelopmentPlan> {
    build_plans(&RoleCatalog::standard(), ranked, Locale::default())
}

/// Development plans against a given role catalog and label locale.
///
/// Takes the first five ranked positions, or only the first when it is a
/// goalkeeper. Positions whose group has no roles are skipped.
pub fn build_plans(
    catalog: &RoleCatalog,
    ranked: &[PositionResult],
    locale: Locale,
) -> Vec<DevelopmentPlan> {
    let Some(top) = ranked.first() else {
        return Vec::new();
    };

    let limit = if top.position == PositionCode::GK {
        GOALKEEPER_PLAN_LIMIT
    } else {
        OUTFIELD_PLAN_LIMIT
    };

    ranked
        .iter()
        .take(limit)
        .filter_map(|result| {
            let Some(role) = catalog.default_role(result.position) else {
                debug!(position = %result.position, "No roles for position group");
                return None;
            };

            Some(DevelopmentPlan {
                position: result.position,
                role: *role,
                attribute_names: role
                    .attributes
                    .iter()
                    .map(|key| locale.attribute_label(*key).to_string())
                    .collect(),
            })
        })
        .collect()
}
