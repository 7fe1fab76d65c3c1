//! Named starting configurations. Adding a preset means adding a table row,
//! not touching the engine.

use crate::model::error::SimError;
use crate::model::grid::Grid;

pub struct Preset {
    pub name: &'static str,
    pub height: u16,
    pub width: u16,
    /// Initially-live `(row, col)` coordinates. Border cells are never listed.
    pub cells: &'static [(u16, u16)],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "empty",
        height: 50,
        width: 50,
        cells: &[],
    },
    Preset {
        name: "glider",
        height: 50,
        width: 50,
        cells: &[(25, 25), (26, 26), (27, 26), (27, 25), (27, 24)],
    },
    Preset {
        name: "blinker",
        height: 25,
        width: 25,
        cells: &[(12, 11), (12, 12), (12, 13)],
    },
    Preset {
        name: "block",
        height: 25,
        width: 25,
        cells: &[(11, 11), (11, 12), (12, 11), (12, 12)],
    },
];

/// Builds the grid for a named preset. Names match case-insensitively;
/// anything not in the catalog fails with `UnknownPreset`.
pub fn create(name: &str) -> Result<Grid, SimError> {
    let preset = PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SimError::UnknownPreset(name.to_string()))?;

    let mut grid = Grid::new(preset.height, preset.width);
    for &(row, col) in preset.cells {
        grid.set(row, col, true);
    }
    Ok(grid)
}

pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}
