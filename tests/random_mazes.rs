//! Properties checked over seeded random mazes.

use maze_pathfinding::algorithms::reconstruct::reconstruct;
use maze_pathfinding::algorithms::reference::ReferenceBfs;
use maze_pathfinding::algorithms::search::SearchEngine;
use maze_pathfinding::config::SearchConfig;
use maze_pathfinding::generator::MazeGenerator;
use maze_pathfinding::grid::Grid;
use maze_pathfinding::heuristic::HeuristicMode;
use maze_pathfinding::validator::validate;

const SEEDS: u64 = 60;

#[test]
fn test_bfs_is_optimal_without_teleporters() {
    let generator = MazeGenerator::new(14, 9, 40, false);
    for seed in 0..SEEDS {
        let rows = generator.generate(Some(seed));
        let mut grid = Grid::parse(&rows).unwrap();
        let layout = validate(&grid).unwrap();

        let optimal = ReferenceBfs::optimal_length(&grid, &layout);
        let outcome = SearchEngine::new(SearchConfig::bfs())
            .run(&mut grid, &layout)
            .unwrap();
        assert_eq!(outcome.path_length(), optimal, "seed {seed}");

        if outcome.is_found() {
            let chain = reconstruct(&grid, layout.end).unwrap();
            assert!(grid.tile(*chain.last().unwrap()).is_start());
            assert_eq!(
                chain.len() as u32,
                grid.distance(layout.end).unwrap() + 1,
                "seed {seed}"
            );
        }
    }
}

#[test]
fn test_dijkstra_ordering_is_optimal_without_teleporters() {
    // Distance-only keys behave like uniform-cost search.
    let generator = MazeGenerator::new(14, 9, 40, false);
    let config = SearchConfig::new(HeuristicMode::None, true);
    for seed in 0..SEEDS {
        let rows = generator.generate(Some(seed));
        let mut grid = Grid::parse(&rows).unwrap();
        let layout = validate(&grid).unwrap();
        let optimal = ReferenceBfs::optimal_length(&grid, &layout);
        let outcome = SearchEngine::new(config).run(&mut grid, &layout).unwrap();
        assert_eq!(outcome.path_length(), optimal, "seed {seed}");
    }
}

#[test]
fn test_every_mode_agrees_on_reachability() {
    let generator = MazeGenerator::new(12, 8, 35, true);
    for seed in 0..SEEDS {
        let rows = generator.generate(Some(seed));
        let mut grid = Grid::parse(&rows).unwrap();
        let layout = validate(&grid).unwrap();
        let optimal = ReferenceBfs::optimal_length(&grid, &layout);

        for mode in HeuristicMode::ALL {
            for use_start_distance in [false, true] {
                let config = SearchConfig::new(mode, use_start_distance);
                let outcome = SearchEngine::new(config).run(&mut grid, &layout).unwrap();
                assert_eq!(outcome.is_found(), optimal.is_some(), "seed {seed} {mode}");
                if let (Some(length), Some(optimal)) = (outcome.path_length(), optimal) {
                    assert!(length >= optimal, "seed {seed} {mode}");
                }
            }
        }
    }
}

#[test]
fn test_trace_has_no_duplicates() {
    let generator = MazeGenerator::new(16, 10, 50, true);
    for seed in 0..SEEDS {
        let rows = generator.generate(Some(seed));
        let mut grid = Grid::parse(&rows).unwrap();
        let layout = validate(&grid).unwrap();
        let outcome = SearchEngine::new(SearchConfig::new(HeuristicMode::Euclidean, true))
            .run(&mut grid, &layout)
            .unwrap();

        let mut trace = outcome.trace().to_vec();
        assert_eq!(trace.first(), Some(&layout.start));
        trace.sort_unstable();
        trace.dedup();
        assert_eq!(trace.len(), outcome.tiles_searched(), "seed {seed}");
    }
}
