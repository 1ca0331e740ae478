//! Player analysis engine.
//!
//! Pure functions over attributes and card metadata:
//! - Per-position ratings with elite bonus
//! - Ranking across all twelve positions
//! - BMI and height fit
//! - Youth potential verdicts
//! - Role-based development plans
//!
//! Nothing here fails: unreadable input yields `None`, unknown positions rate
//! zero and positions without roles are skipped.

pub mod body;
pub mod development;
pub mod potential;
pub mod ranking;
pub mod rating;
pub mod report;

pub use body::{analyze_bmi, height_fit};
pub use development::{build_plans, development_plan};
pub use potential::analyze_potential;
pub use ranking::{best_position, rank_positions};
pub use rating::{position_rating, position_rating_for_code, position_rating_with, EliteBonus};
pub use report::{FaceStatValue, ScoutReport};
