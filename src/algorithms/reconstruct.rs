use crate::error::{MazeError, Result};
use crate::grid::Grid;

/// Walks predecessor links from `end` back to the start.
///
/// Returns the tiles in End→Start order. Fails with
/// [`MazeError::NoPredecessorChain`] unless the last run over `grid` reached
/// `end`.
pub fn reconstruct(grid: &Grid, end: usize) -> Result<Vec<usize>> {
    let mut path = vec![end];
    let mut current = end;

    while !grid.tile(current).is_start() {
        current = grid
            .predecessor(current)
            .ok_or(MazeError::NoPredecessorChain)?;
        path.push(current);
        // Links only point at tiles dequeued earlier, so a longer chain is corrupt.
        if path.len() > grid.len() {
            return Err(MazeError::NoPredecessorChain);
        }
    }

    Ok(path)
}
