//! Core data models for player cards and analysis results.

mod analysis;
mod attributes;
mod confidence;
mod player_info;
mod position;
mod role;

pub use analysis::*;
pub use attributes::*;
pub use confidence::*;
pub use player_info::*;
pub use position::*;
pub use role::*;
