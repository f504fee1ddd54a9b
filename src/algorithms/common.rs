use crate::error::Result;
use crate::grid::Grid;
use crate::validator::MazeLayout;

pub trait PathfindingAlgorithm {
    /// Label used in comparison tables.
    fn name(&self) -> String;

    /// Start-to-end tile indices, or `None` when the end is unreachable.
    fn find_path(&mut self, grid: &mut Grid, layout: &MazeLayout) -> Result<Option<Vec<usize>>>;
}
