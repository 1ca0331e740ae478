//! Tactical role definitions and training grids.

use serde::Serialize;

use super::AttributeKey;

/// Which in-game progression axis a role trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FocusCategory {
    /// Mental training
    #[serde(rename = "MT")]
    MentalTraining,
    /// PlayStyle+ progression
    #[serde(rename = "PP")]
    PlayStylePlus,
}

impl std::fmt::Display for FocusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FocusCategory::MentalTraining => write!(f, "MT"),
            FocusCategory::PlayStylePlus => write!(f, "PP"),
        }
    }
}

/// Intensity of a single training-grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    High,
    Medium,
    None,
}

/// A 5×5 training-zone map, cells indexed 0–24 row-major from the attacking
/// end. Stored for left-sided and central positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingGrid {
    pub high: &'static [u8],
    pub medium: &'static [u8],
}

impl TrainingGrid {
    pub const SIZE: u8 = 5;

    pub fn cells(&self) -> GridCells {
        GridCells {
            high: self.high.to_vec(),
            medium: self.medium.to_vec(),
        }
    }

    /// Cells flipped left-to-right, for right-sided positions.
    pub fn mirrored(&self) -> GridCells {
        GridCells {
            high: self.high.iter().map(|&c| mirror_cell(c)).collect(),
            medium: self.medium.iter().map(|&c| mirror_cell(c)).collect(),
        }
    }
}

fn mirror_cell(cell: u8) -> u8 {
    let row = cell / TrainingGrid::SIZE;
    let col = cell % TrainingGrid::SIZE;
    row * TrainingGrid::SIZE + (TrainingGrid::SIZE - 1 - col)
}

/// Owned grid cells, after any mirroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCells {
    pub high: Vec<u8>,
    pub medium: Vec<u8>,
}

impl GridCells {
    pub fn intensity(&self, cell: u8) -> Intensity {
        if self.high.contains(&cell) {
            Intensity::High
        } else if self.medium.contains(&cell) {
            Intensity::Medium
        } else {
            Intensity::None
        }
    }

    /// Rows of intensities, top row first.
    pub fn rows(&self) -> Vec<[Intensity; 5]> {
        (0..TrainingGrid::SIZE)
            .map(|row| {
                let mut cells = [Intensity::None; 5];
                for (col, slot) in cells.iter_mut().enumerate() {
                    *slot = self.intensity(row * TrainingGrid::SIZE + col as u8);
                }
                cells
            })
            .collect()
    }
}

/// A catalog role for one position group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleDefinition {
    pub name: &'static str,

    /// Sub-variant shown next to the name, e.g. "Balanced" or "Attack"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_label: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,

    /// Attributes to train, in priority order
    pub attributes: &'static [AttributeKey],

    pub focus: FocusCategory,

    pub recommended: bool,

    pub grid: TrainingGrid,
}
