use crate::error::StructuralError;
use crate::grid::Grid;
use crate::tile::TileKind;

/// The confirmed landmarks of a structurally valid maze, as tile indices
/// into the [`Grid`] they were validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeLayout {
    pub start: usize,
    pub end: usize,
    pub teleporters: Option<(usize, usize)>,
}

impl MazeLayout {
    /// The other half of the teleporter pair, if `idx` is one of them.
    pub fn partner_of(&self, idx: usize) -> Option<usize> {
        match self.teleporters {
            Some((a, b)) if a == idx => Some(b),
            Some((a, b)) if b == idx => Some(a),
            _ => None,
        }
    }
}

/// Checks that the grid has exactly one start, exactly one end and either
/// zero or two teleporters. Must succeed before the grid is searched.
pub fn validate(grid: &Grid) -> Result<MazeLayout, StructuralError> {
    let mut start = None;
    let mut end = None;
    let mut teleporters = Vec::new();

    for (idx, tile) in grid.tiles().iter().enumerate() {
        match tile.kind() {
            TileKind::Start => {
                if start.replace(idx).is_some() {
                    return Err(StructuralError::DuplicateStart(tile.position()));
                }
            }
            TileKind::End => {
                if end.replace(idx).is_some() {
                    return Err(StructuralError::DuplicateEnd(tile.position()));
                }
            }
            TileKind::Teleporter => teleporters.push(idx),
            TileKind::Wall | TileKind::Open => {}
        }
    }

    let start = start.ok_or(StructuralError::MissingStart)?;
    let end = end.ok_or(StructuralError::MissingEnd)?;
    let teleporters = match teleporters.as_slice() {
        [] => None,
        [a, b] => Some((*a, *b)),
        other => return Err(StructuralError::InvalidTeleporterCount(other.len())),
    };

    Ok(MazeLayout {
        start,
        end,
        teleporters,
    })
}
