use crate::algorithms::common::PathfindingAlgorithm;
use crate::error::Result;
use crate::grid::Grid;
use crate::validator::MazeLayout;
use pathfinding::prelude::bfs;

/// True shortest path computed with the `pathfinding` crate's BFS.
///
/// Unlike the search engine, the teleporter edge is always available (in
/// both directions, cost one step), so the result is the real optimum the
/// engine's paths can be measured against.
#[derive(Default)]
pub struct ReferenceBfs;

impl ReferenceBfs {
    pub fn new() -> Self {
        ReferenceBfs
    }

    /// Length in steps of the shortest path, if any.
    pub fn optimal_length(grid: &Grid, layout: &MazeLayout) -> Option<usize> {
        Self::shortest_path(grid, layout).map(|path| path.len().saturating_sub(1))
    }

    pub fn shortest_path(grid: &Grid, layout: &MazeLayout) -> Option<Vec<usize>> {
        bfs(
            &layout.start,
            |&idx| {
                let mut successors: Vec<usize> = grid
                    .neighbors(idx)
                    .filter(|&n| {
                        let tile = grid.tile(n);
                        tile.kind().is_passable() || tile.is_end()
                    })
                    .collect();
                successors.extend(layout.partner_of(idx));
                successors
            },
            |&idx| idx == layout.end,
        )
    }
}

impl PathfindingAlgorithm for ReferenceBfs {
    fn name(&self) -> String {
        "reference bfs".to_string()
    }

    fn find_path(&mut self, grid: &mut Grid, layout: &MazeLayout) -> Result<Option<Vec<usize>>> {
        Ok(Self::shortest_path(grid, layout))
    }
}
