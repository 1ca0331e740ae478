//! Tactical role catalog, grouped by position group.
//!
//! Role lists keep declaration order: the first role is the fallback when a
//! group has no recommended role. Grids are drawn for the left side.

use serde::Serialize;

use crate::models::AttributeKey::*;
use crate::models::{AttributeKey, FocusCategory, PositionCode, RoleDefinition, TrainingGrid};

use crate::models::FocusCategory::{MentalTraining as MT, PlayStylePlus as PP};

/// Positions that share one role list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleGroup {
    CentreBack,
    FullBack,
    DefensiveMidfield,
    CentralMidfield,
    AttackingMidfield,
    SideMidfield,
    Wing,
    Striker,
    Goalkeeper,
}

impl RoleGroup {
    pub fn for_position(position: PositionCode) -> Self {
        match position {
            PositionCode::CB => RoleGroup::CentreBack,
            PositionCode::LB | PositionCode::RB => RoleGroup::FullBack,
            PositionCode::CDM => RoleGroup::DefensiveMidfield,
            PositionCode::CM => RoleGroup::CentralMidfield,
            PositionCode::CAM => RoleGroup::AttackingMidfield,
            PositionCode::LM | PositionCode::RM => RoleGroup::SideMidfield,
            PositionCode::LW | PositionCode::RW => RoleGroup::Wing,
            PositionCode::ST => RoleGroup::Striker,
            PositionCode::GK => RoleGroup::Goalkeeper,
        }
    }
}

impl std::fmt::Display for RoleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleGroup::CentreBack => write!(f, "Centre-backs"),
            RoleGroup::FullBack => write!(f, "Full-backs"),
            RoleGroup::DefensiveMidfield => write!(f, "Defensive midfield"),
            RoleGroup::CentralMidfield => write!(f, "Central midfield"),
            RoleGroup::AttackingMidfield => write!(f, "Attacking midfield"),
            RoleGroup::SideMidfield => write!(f, "Wide midfield"),
            RoleGroup::Wing => write!(f, "Wingers"),
            RoleGroup::Striker => write!(f, "Strikers"),
            RoleGroup::Goalkeeper => write!(f, "Goalkeepers"),
        }
    }
}

const fn role(
    name: &'static str,
    focus_label: &'static str,
    attributes: &'static [AttributeKey],
    focus: FocusCategory,
    high: &'static [u8],
    medium: &'static [u8],
) -> RoleDefinition {
    RoleDefinition {
        name,
        focus_label: Some(focus_label),
        description: None,
        attributes,
        focus,
        recommended: false,
        grid: TrainingGrid { high, medium },
    }
}

const fn recommended(mut definition: RoleDefinition) -> RoleDefinition {
    definition.recommended = true;
    definition
}

const fn described(mut definition: RoleDefinition, description: &'static str) -> RoleDefinition {
    definition.description = Some(description);
    definition
}

static CENTRE_BACK_ROLES: [RoleDefinition; 4] = [
    recommended(described(
        role(
            "Defender",
            "Balanced",
            &[DefensiveAwareness, StandingTackle, Strength, HeadingAccuracy],
            PP,
            &[22],
            &[16, 17, 18, 21, 23],
        ),
        "Holds the defensive line.",
    )),
    role(
        "Defender",
        "Defend",
        &[DefensiveAwareness, StandingTackle, Strength],
        PP,
        &[22],
        &[21, 23],
    ),
    role(
        "Ball-Playing Defender",
        "Build-Up",
        &[LongPassing, ShortPassing, Vision, DefensiveAwareness],
        MT,
        &[17, 22],
        &[12, 16, 18, 21, 23],
    ),
    role(
        "Stopper",
        "Balanced",
        &[Aggression, Strength, StandingTackle, Acceleration],
        PP,
        &[22],
        &[16, 17, 18, 21, 23],
    ),
];

static FULL_BACK_ROLES: [RoleDefinition; 7] = [
    recommended(role(
        "Full-Back",
        "Balanced",
        &[SprintSpeed, Acceleration, Crossing, Stamina],
        MT,
        &[15, 20, 21],
        &[10, 16],
    )),
    role(
        "Full-Back",
        "Defend",
        &[DefensiveAwareness, StandingTackle, Interceptions, Stamina],
        PP,
        &[20, 21],
        &[15, 16, 22],
    ),
    role(
        "Inverted Full-Back",
        "Balanced",
        &[ShortPassing, BallControl, Vision, Stamina],
        PP,
        &[11],
        &[10, 12, 15, 16, 17, 20],
    ),
    role(
        "Inverted Full-Back",
        "Defend",
        &[DefensiveAwareness, Interceptions, ShortPassing, Strength],
        PP,
        &[16, 20],
        &[11, 12, 15, 17, 21],
    ),
    role(
        "Attacking Wing-Back",
        "Attack",
        &[SprintSpeed, Acceleration, Crossing, Dribbling],
        PP,
        &[0],
        &[5, 10, 15, 20],
    ),
    role(
        "Attacking Wing-Back",
        "Balanced",
        &[SprintSpeed, Crossing, Stamina, Positioning],
        PP,
        &[5],
        &[0, 10, 15, 20],
    ),
    role(
        "Wing-Back",
        "Balanced",
        &[Acceleration, Crossing, ShortPassing, DefensiveAwareness],
        MT,
        &[10, 15],
        &[5, 20],
    ),
];

static DEFENSIVE_MIDFIELD_ROLES: [RoleDefinition; 5] = [
    recommended(role(
        "Holding",
        "Roaming",
        &[DefensiveAwareness, Interceptions, Stamina, Strength],
        PP,
        &[16, 17, 18],
        &[11, 12, 13, 15, 19],
    )),
    role(
        "Holding",
        "Defend",
        &[DefensiveAwareness, StandingTackle, Strength],
        PP,
        &[17],
        &[12, 16, 18, 22],
    ),
    role(
        "Deep-Lying Playmaker",
        "Roaming",
        &[LongPassing, Vision, BallControl, Composure],
        MT,
        &[],
        &[6, 7, 8, 11, 12, 13, 16, 17, 18],
    ),
    role(
        "Deep-Lying Playmaker",
        "Defend",
        &[LongPassing, DefensiveAwareness, Interceptions],
        MT,
        &[22],
        &[16, 17, 18, 21, 23],
    ),
    role(
        "Centre-Half",
        "Defend",
        &[DefensiveAwareness, HeadingAccuracy, Jumping, Strength],
        PP,
        &[17, 22],
        &[16, 18, 21, 23],
    ),
];

static CENTRAL_MIDFIELD_ROLES: [RoleDefinition; 7] = [
    role(
        "Playmaker",
        "Roaming",
        &[Vision, LongPassing, ShortPassing, BallControl],
        MT,
        &[17],
        &[10, 11, 12, 13, 14, 15, 16, 18, 19],
    ),
    role(
        "Playmaker",
        "Attack",
        &[Vision, ShortPassing, LongShots, Positioning],
        MT,
        &[12],
        &[6, 7, 8, 11, 13],
    ),
    role(
        "Half-Winger",
        "Balanced",
        &[Acceleration, Dribbling, Crossing, ShortPassing],
        MT,
        &[],
        &[10, 14, 15, 16, 17, 18, 19, 20, 24],
    ),
    role(
        "Half-Winger",
        "Attack",
        &[Acceleration, Finishing, Positioning, Vision],
        MT,
        &[],
        &[0, 4, 5, 9, 10, 11, 12, 13, 14],
    ),
    recommended(role(
        "Box-to-Box",
        "Balanced",
        &[Stamina, Interceptions, Positioning, ShortPassing],
        PP,
        &[7, 12, 17],
        &[2, 11, 13, 22],
    )),
    role(
        "Holding",
        "Defend",
        &[DefensiveAwareness, StandingTackle, Interceptions, Stamina],
        PP,
        &[17],
        &[16, 18, 21, 22, 23],
    ),
    role(
        "Deep-Lying Playmaker",
        "Defend",
        &[DefensiveAwareness, LongPassing, Vision, Strength],
        MT,
        &[17],
        &[16, 18, 22],
    ),
];

static ATTACKING_MIDFIELD_ROLES: [RoleDefinition; 5] = [
    role(
        "Playmaker",
        "Roaming",
        &[Vision, ShortPassing, Dribbling, BallControl],
        MT,
        &[12],
        &[6, 7, 8, 11, 13, 16, 17, 18],
    ),
    role(
        "Playmaker",
        "Balanced",
        &[Vision, ShortPassing, Positioning],
        MT,
        &[7],
        &[2, 6, 8, 12],
    ),
    role(
        "Half-Winger",
        "Balanced",
        &[Acceleration, Dribbling, LongShots],
        MT,
        &[],
        &[5, 9, 10, 11, 12, 13, 14, 15, 19],
    ),
    role(
        "Half-Winger",
        "Attack",
        &[Finishing, Acceleration, Positioning],
        MT,
        &[],
        &[0, 4, 5, 6, 7, 8, 9],
    ),
    recommended(role(
        "Shadow Striker",
        "Attack",
        &[Finishing, Positioning, Acceleration, Volleys],
        MT,
        &[2, 7],
        &[1, 3],
    )),
];

static SIDE_MIDFIELD_ROLES: [RoleDefinition; 7] = [
    recommended(role(
        "Winger",
        "Attack",
        &[SprintSpeed, Acceleration, Dribbling, Crossing],
        MT,
        &[0, 5],
        &[10],
    )),
    role(
        "Winger",
        "Balanced",
        &[SprintSpeed, Crossing, Stamina],
        MT,
        &[5, 10],
        &[0, 15],
    ),
    role(
        "Wide Midfielder",
        "Defend",
        &[Stamina, Interceptions, DefensiveAwareness, Crossing],
        MT,
        &[15, 20],
        &[16, 21],
    ),
    role(
        "Wide Midfielder",
        "Balanced",
        &[Crossing, ShortPassing, Stamina],
        MT,
        &[10],
        &[5, 11, 15],
    ),
    role(
        "Inside Forward",
        "Attack",
        &[Finishing, Positioning, Dribbling, ShotPower],
        PP,
        &[1],
        &[0, 2, 5, 6, 7, 10],
    ),
    role(
        "Inside Forward",
        "Balanced",
        &[Finishing, BallControl, Vision, ShortPassing],
        PP,
        &[6, 10],
        &[1, 2, 5, 7],
    ),
    role(
        "Wide Playmaker",
        "Attack",
        &[Crossing, Vision, Curve, LongPassing],
        MT,
        &[],
        &[5, 6, 10, 11],
    ),
];

static WING_ROLES: [RoleDefinition; 6] = [
    role(
        "Inside Forward",
        "Roaming",
        &[Dribbling, Agility, Vision, ShortPassing],
        PP,
        &[6],
        &[0, 1, 2, 5, 7],
    ),
    role(
        "Inside Forward",
        "Balanced",
        &[Finishing, Positioning, Dribbling],
        PP,
        &[6],
        &[1, 2, 5, 7, 10, 11],
    ),
    role(
        "Inside Forward",
        "Attack",
        &[Finishing, ShotPower, Acceleration],
        PP,
        &[1],
        &[2, 5, 6, 7],
    ),
    recommended(role(
        "Winger",
        "Attack",
        &[SprintSpeed, Acceleration, Dribbling],
        MT,
        &[0, 5],
        &[1, 10],
    )),
    role(
        "Winger",
        "Balanced",
        &[SprintSpeed, Crossing, Stamina],
        MT,
        &[5],
        &[0, 10, 15],
    ),
    role(
        "Wide Playmaker",
        "Attack",
        &[Crossing, Vision, LongPassing, Curve],
        MT,
        &[0],
        &[1, 5, 6, 10],
    ),
];

static STRIKER_ROLES: [RoleDefinition; 7] = [
    role(
        "Target Forward",
        "Wide",
        &[Strength, HeadingAccuracy, BallControl, ShortPassing],
        PP,
        &[],
        &[0, 1, 2, 3, 4],
    ),
    role(
        "Target Forward",
        "Balanced",
        &[Strength, HeadingAccuracy, Finishing],
        PP,
        &[2],
        &[7],
    ),
    role(
        "Target Forward",
        "Attack",
        &[Finishing, HeadingAccuracy, Strength, Positioning],
        PP,
        &[2],
        &[1, 3],
    ),
    recommended(role(
        "Advanced Forward",
        "Complete",
        &[SprintSpeed, Finishing, Dribbling, Stamina],
        MT,
        &[2],
        &[0, 1, 3, 4, 7],
    )),
    role(
        "Advanced Forward",
        "Attack",
        &[SprintSpeed, Finishing, Positioning],
        MT,
        &[2],
        &[1, 3, 7],
    ),
    role(
        "Poacher",
        "Attack",
        &[Finishing, Positioning, Reactions, Composure],
        PP,
        &[2],
        &[1, 3],
    ),
    role(
        "False 9",
        "Build-Up",
        &[Vision, ShortPassing, Dribbling, Acceleration],
        MT,
        &[7],
        &[2, 6, 8],
    ),
];

static GOALKEEPER_ROLES: [RoleDefinition; 3] = [
    recommended(role(
        "Goalkeeper",
        "Balanced",
        &[GkDiving, GkHandling, GkReflexes, GkPositioning],
        PP,
        &[22],
        &[17, 21, 23],
    )),
    role(
        "Goalkeeper",
        "Defend",
        &[GkDiving, GkReflexes],
        PP,
        &[22],
        &[21, 23],
    ),
    role(
        "Sweeper Keeper",
        "Balanced",
        &[GkDiving, GkKicking, GkReflexes, Vision],
        PP,
        &[22],
        &[16, 17, 18, 21, 23],
    ),
];

/// Role lists keyed by group, in declaration order.
pub static ROLE_GROUPS: [(RoleGroup, &[RoleDefinition]); 9] = [
    (RoleGroup::CentreBack, &CENTRE_BACK_ROLES),
    (RoleGroup::FullBack, &FULL_BACK_ROLES),
    (RoleGroup::DefensiveMidfield, &DEFENSIVE_MIDFIELD_ROLES),
    (RoleGroup::CentralMidfield, &CENTRAL_MIDFIELD_ROLES),
    (RoleGroup::AttackingMidfield, &ATTACKING_MIDFIELD_ROLES),
    (RoleGroup::SideMidfield, &SIDE_MIDFIELD_ROLES),
    (RoleGroup::Wing, &WING_ROLES),
    (RoleGroup::Striker, &STRIKER_ROLES),
    (RoleGroup::Goalkeeper, &GOALKEEPER_ROLES),
];

/// Lookup over a set of role groups.
#[derive(Debug, Clone, Copy)]
pub struct RoleCatalog {
    groups: &'static [(RoleGroup, &'static [RoleDefinition])],
}

impl RoleCatalog {
    pub fn new(groups: &'static [(RoleGroup, &'static [RoleDefinition])]) -> Self {
        Self { groups }
    }

    pub fn standard() -> Self {
        Self::new(&ROLE_GROUPS)
    }

    pub fn roles(&self, group: RoleGroup) -> Option<&'static [RoleDefinition]> {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, roles)| *roles)
    }

    pub fn roles_for(&self, position: PositionCode) -> Option<&'static [RoleDefinition]> {
        self.roles(RoleGroup::for_position(position))
    }

    /// The recommended role, else the first one declared.
    pub fn default_role(&self, position: PositionCode) -> Option<&'static RoleDefinition> {
        let roles = self.roles_for(position)?;
        roles.iter().find(|r| r.recommended).or_else(|| roles.first())
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_has_a_group() {
        let catalog = RoleCatalog::standard();
        for pos in PositionCode::ALL {
            let roles = catalog.roles_for(pos).unwrap();
            assert!(!roles.is_empty(), "{}", pos);
        }
    }

    #[test]
    fn test_at_most_one_recommended_per_group() {
        for (group, roles) in ROLE_GROUPS.iter() {
            let count = roles.iter().filter(|r| r.recommended).count();
            assert!(count <= 1, "{} has {} recommended roles", group, count);
        }
    }

    #[test]
    fn test_grid_cells_in_range() {
        for (_, roles) in ROLE_GROUPS.iter() {
            for role in roles.iter() {
                for cell in role.grid.high.iter().chain(role.grid.medium) {
                    assert!(*cell < 25, "{} has cell {}", role.name, cell);
                }
            }
        }
    }

    #[test]
    fn test_default_role_prefers_recommended() {
        let catalog = RoleCatalog::standard();

        let cm = catalog.default_role(PositionCode::CM).unwrap();
        assert_eq!(cm.name, "Box-to-Box");

        let st = catalog.default_role(PositionCode::ST).unwrap();
        assert_eq!(st.name, "Advanced Forward");
        assert_eq!(st.focus_label, Some("Complete"));
    }

    #[test]
    fn test_default_role_falls_back_to_first() {
        static NO_RECOMMENDED: [RoleDefinition; 2] = [
            role("First", "Balanced", &[Vision], MT, &[], &[]),
            role("Second", "Attack", &[Finishing], PP, &[], &[]),
        ];
        static GROUPS: [(RoleGroup, &[RoleDefinition]); 1] =
            [(RoleGroup::Striker, &NO_RECOMMENDED)];

        let catalog = RoleCatalog::new(&GROUPS);
        assert_eq!(catalog.default_role(PositionCode::ST).unwrap().name, "First");
        assert!(catalog.default_role(PositionCode::GK).is_none());
    }

    #[test]
    fn test_shared_groups() {
        assert_eq!(RoleGroup::for_position(PositionCode::LB), RoleGroup::FullBack);
        assert_eq!(RoleGroup::for_position(PositionCode::RB), RoleGroup::FullBack);
        assert_eq!(RoleGroup::for_position(PositionCode::RW), RoleGroup::Wing);
        assert_eq!(RoleGroup::for_position(PositionCode::RM), RoleGroup::SideMidfield);
    }
}
