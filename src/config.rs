use crate::heuristic::HeuristicMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Maze file to solve; reads stdin when omitted
    #[arg(long)]
    pub maze: Option<PathBuf>,

    /// Expected row width (defaults to the first valid row), or the width of a random maze
    #[arg(long)]
    pub width: Option<usize>,

    /// Height of a random maze
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    #[arg(long, value_enum, default_value_t = HeuristicMode::None)]
    pub heuristic: HeuristicMode,

    /// Add the distance from the start to every frontier key (A*)
    #[arg(long, default_value_t = false)]
    pub use_start_distance: bool,

    /// Generate a random maze instead of reading one
    #[arg(long, default_value_t = false)]
    pub random: bool,

    #[arg(long, default_value_t = 60)]
    pub num_walls: usize,

    /// Place a teleporter pair in a random maze
    #[arg(long, default_value_t = false)]
    pub teleporters: bool,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Replay the visitation trace after solving
    #[arg(long, default_value_t = false)]
    pub animate: bool,

    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    /// Solve with every heuristic mode and print a comparison
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            heuristic_mode: self.heuristic,
            use_start_distance: self.use_start_distance,
        }
    }
}

/// Per-run search options handed to the engine at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub heuristic_mode: HeuristicMode,
    pub use_start_distance: bool,
}

impl SearchConfig {
    pub fn new(heuristic_mode: HeuristicMode, use_start_distance: bool) -> Self {
        SearchConfig {
            heuristic_mode,
            use_start_distance,
        }
    }

    /// Uninformed breadth-first search.
    pub fn bfs() -> Self {
        SearchConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["maze_pathfinding"]);
        assert_eq!(config.heuristic, HeuristicMode::None);
        assert!(!config.use_start_distance);
        assert_eq!(config.search_config(), SearchConfig::bfs());
        assert!(config.maze.is_none());
    }

    #[test]
    fn test_heuristic_and_distance_flags() {
        let config = Config::parse_from([
            "maze_pathfinding",
            "--heuristic",
            "manhattan",
            "--use-start-distance",
        ]);
        assert_eq!(
            config.search_config(),
            SearchConfig::new(HeuristicMode::Manhattan, true)
        );
    }

    #[test]
    fn test_rejects_unknown_heuristic() {
        let result = Config::try_parse_from(["maze_pathfinding", "--heuristic", "chebyshev"]);
        assert!(result.is_err());
    }
}
