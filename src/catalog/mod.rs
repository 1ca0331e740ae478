//! Static reference data: position weights, roles, face stats and labels.

pub mod face_stats;
pub mod labels;
pub mod roles;
pub mod weights;

pub use face_stats::FaceStat;
pub use labels::Locale;
pub use roles::{RoleCatalog, RoleGroup};
pub use weights::{BonusImportance, PositionWeights, WeightTable};
