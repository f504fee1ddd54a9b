use crate::algorithms::common::PathfindingAlgorithm;
use crate::algorithms::reference::ReferenceBfs;
use crate::algorithms::search::{SearchEngine, SearchOutcome};
use crate::config::{Config, SearchConfig};
use crate::error::Result;
use crate::generator::MazeGenerator;
use crate::grid::Grid;
use crate::heuristic::HeuristicMode;
use crate::input::read_maze_rows;
use crate::statistics::SearchStatistics;
use crate::validator::{validate, MazeLayout};
use log::info;
use std::fs::File;
use std::io::{self, BufReader};

/// One solved run: the outcome plus its statistics.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub statistics: SearchStatistics,
    pub may_be_suboptimal: bool,
}

/// A validated maze and the runs made over it.
pub struct MazeSession {
    grid: Grid,
    layout: MazeLayout,
    optimal_path_length: Option<usize>,
}

impl MazeSession {
    /// Parses and validates `rows`. Structural problems are fatal here, before
    /// any search runs.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let grid = Grid::parse(rows)?;
        let layout = validate(&grid)?;
        let optimal_path_length = ReferenceBfs::optimal_length(&grid, &layout);
        info!(
            "loaded {}x{} maze, optimal path length {:?}",
            grid.width(),
            grid.height(),
            optimal_path_length
        );
        Ok(MazeSession {
            grid,
            layout,
            optimal_path_length,
        })
    }

    /// Loads the maze named by the CLI configuration: a random one, a file,
    /// or stdin.
    pub fn from_config(config: &Config) -> Result<Self> {
        let rows = if config.random {
            let width = config.width.unwrap_or(config.height * 2);
            MazeGenerator::new(width, config.height, config.num_walls, config.teleporters)
                .generate(config.seed)
        } else if let Some(path) = &config.maze {
            read_maze_rows(BufReader::new(File::open(path)?), config.width)?
        } else {
            read_maze_rows(io::stdin().lock(), config.width)?
        };
        Self::from_rows(&rows)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    pub fn optimal_path_length(&self) -> Option<usize> {
        self.optimal_path_length
    }

    pub fn solve(&mut self, search: SearchConfig) -> Result<SearchReport> {
        let mut engine = SearchEngine::new(search);
        let outcome = engine.run(&mut self.grid, &self.layout)?;
        let label = engine.name();
        let statistics = SearchStatistics::new(&label, &outcome, self.optimal_path_length);
        Ok(SearchReport {
            outcome,
            statistics,
            may_be_suboptimal: search.may_miss_teleporter_shortcut(&self.layout),
        })
    }

    /// Solves once per heuristic mode, all with the same distance option.
    pub fn compare_modes(&mut self, use_start_distance: bool) -> Result<Vec<SearchReport>> {
        HeuristicMode::ALL
            .into_iter()
            .map(|mode| self.solve(SearchConfig::new(mode, use_start_distance)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MazeError, StructuralError};

    #[test]
    fn test_structural_errors_surface_before_search() {
        let err = MazeSession::from_rows(&["o.@*"]).err().unwrap();
        assert!(matches!(
            err,
            MazeError::Structural(StructuralError::InvalidTeleporterCount(1))
        ));
    }

    #[test]
    fn test_solve_reports_statistics() {
        let mut session = MazeSession::from_rows(&["o..", ".#.", "..*"]).unwrap();
        assert_eq!(session.optimal_path_length(), Some(4));
        let report = session.solve(SearchConfig::bfs()).unwrap();
        assert_eq!(report.statistics.path_length, Some(4));
        assert_eq!(report.statistics.tiles_searched, report.outcome.tiles_searched());
        assert!(!report.may_be_suboptimal);
    }

    #[test]
    fn test_compare_modes_covers_every_heuristic() {
        let mut session = MazeSession::from_rows(&["@.o.....*.@"]).unwrap();
        let reports = session.compare_modes(false).unwrap();
        assert_eq!(reports.len(), HeuristicMode::ALL.len());
        assert_eq!(reports[0].statistics.label, "none");
        assert!(!reports[0].statistics.is_suboptimal());
        for report in &reports[1..] {
            assert!(report.may_be_suboptimal);
            assert!(report.statistics.is_suboptimal());
        }
    }

    #[test]
    fn test_random_maze_from_config() {
        use clap::Parser;
        let config = Config::parse_from([
            "maze_pathfinding",
            "--random",
            "--width",
            "12",
            "--height",
            "6",
            "--num-walls",
            "10",
            "--seed",
            "42",
        ]);
        let session = MazeSession::from_config(&config).unwrap();
        assert_eq!(session.grid().width(), 12);
        assert_eq!(session.grid().height(), 6);
    }
}
