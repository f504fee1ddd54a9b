use crate::algorithms::common::PathfindingAlgorithm;
use crate::algorithms::frontier::Frontier;
use crate::algorithms::reconstruct::reconstruct;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::grid::{Direction, Grid};
use crate::tile::Position;
use crate::validator::MazeLayout;
use log::{debug, trace, warn};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Ready,
    Running,
    Found,
    Exhausted,
}

/// Result of one search run. Both variants carry the visitation trace: the
/// tiles in the order they were dequeued, for replay by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// `path` runs from the start tile to the end tile.
    Found { path: Vec<usize>, trace: Vec<usize> },
    Exhausted { trace: Vec<usize> },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn path(&self) -> Option<&[usize]> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    pub fn trace(&self) -> &[usize] {
        match self {
            SearchOutcome::Found { trace, .. } | SearchOutcome::Exhausted { trace } => trace,
        }
    }

    /// Number of tiles dequeued during the run. Diagnostic only.
    pub fn tiles_searched(&self) -> usize {
        self.trace().len()
    }

    /// Steps from start to end, counting a teleporter jump as one step.
    pub fn path_length(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

impl SearchConfig {
    /// Frontier key for a tile at `position`, `distance` steps from the start.
    pub fn priority_key(&self, position: Position, end: Position, distance: u32) -> u32 {
        let estimate = self.heuristic_mode.estimate(position, end);
        if self.use_start_distance {
            estimate + distance
        } else {
            estimate
        }
    }

    /// An informed search over a maze with teleporters can reach the end by a
    /// longer direct route before it ever expands the teleporter shortcut.
    pub fn may_miss_teleporter_shortcut(&self, layout: &MazeLayout) -> bool {
        layout.teleporters.is_some() && self.heuristic_mode.is_informed()
    }
}

/// Frontier-ordered search over a validated [`Grid`].
///
/// One engine covers both breadth-first search (`HeuristicMode::None`, where
/// every key ties and the frontier degrades to FIFO) and the informed modes.
/// Each call to [`run`](Self::run) starts a fresh generation on the grid, so
/// repeated runs never see each other's scratch state.
pub struct SearchEngine {
    config: SearchConfig,
    state: SearchState,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        SearchEngine {
            config,
            state: SearchState::Ready,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// State reached by the most recent run.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Runs the search from `layout.start` until the end tile is discovered
    /// or the frontier drains.
    ///
    /// `layout` must come from [`validate`](crate::validator::validate) on
    /// this same grid.
    pub fn run(&mut self, grid: &mut Grid, layout: &MazeLayout) -> Result<SearchOutcome> {
        grid.begin_run();
        self.state = SearchState::Running;

        let config = self.config;
        if config.may_miss_teleporter_shortcut(layout) {
            warn!(
                "maze has teleporters and heuristic '{}' is selected; the shortest path may not be found",
                config.heuristic_mode
            );
        }

        let start_pos = grid.tile(layout.start).position();
        let end_pos = grid.tile(layout.end).position();
        debug!(
            "search from {} to {} (heuristic {}, start distance {})",
            start_pos, end_pos, config.heuristic_mode, config.use_start_distance
        );

        let mut frontier =
            Frontier::new(move |pos, distance| config.priority_key(pos, end_pos, distance));
        let mut seen: FxHashSet<usize> = FxHashSet::default();
        let mut trace = Vec::new();
        // Taken on the first jump so the pair cannot bounce back and forth.
        let mut teleporters = layout.teleporters;

        seen.insert(layout.start);
        let key = frontier.push(layout.start, start_pos, 0);
        grid.mark(layout.start, None, 0, key);

        let mut found = false;
        'search: while let Some(curr) = frontier.pop() {
            trace.push(curr);
            let curr_distance = grid.distance(curr).unwrap_or(0);
            trace!(
                "dequeued {} at distance {}",
                grid.tile(curr).position(),
                curr_distance
            );

            for direction in Direction::ALL {
                if !grid.has_neighbor(curr, direction) {
                    continue;
                }
                let next = grid.neighbor(curr, direction)?;
                if grid.tile(next).is_end() {
                    let distance = curr_distance + 1;
                    let key = config.priority_key(end_pos, end_pos, distance);
                    grid.mark(next, Some(curr), distance, key);
                    found = true;
                    break 'search;
                }
                admit(grid, &mut frontier, &mut seen, curr, next, curr_distance + 1);
            }

            if grid.tile(curr).is_teleporter() && teleporters.take().is_some() {
                if let Some(partner) = layout.partner_of(curr) {
                    trace!("teleporting to {}", grid.tile(partner).position());
                    admit(grid, &mut frontier, &mut seen, curr, partner, curr_distance);
                }
            }
        }

        let outcome = if found {
            self.state = SearchState::Found;
            let mut path = reconstruct(grid, layout.end)?;
            path.reverse();
            SearchOutcome::Found { path, trace }
        } else {
            self.state = SearchState::Exhausted;
            SearchOutcome::Exhausted { trace }
        };

        debug!(
            "search {:?} after {} tiles searched",
            self.state,
            outcome.tiles_searched()
        );
        Ok(outcome)
    }
}

/// Queues `next` if it is passable and has not been admitted this run.
fn admit<K>(
    grid: &mut Grid,
    frontier: &mut Frontier<K>,
    seen: &mut FxHashSet<usize>,
    curr: usize,
    next: usize,
    distance: u32,
) where
    K: Fn(Position, u32) -> u32,
{
    if !grid.tile(next).kind().is_passable() || !seen.insert(next) {
        return;
    }
    let key = frontier.push(next, grid.tile(next).position(), distance);
    grid.mark(next, Some(curr), distance, key);
}

impl PathfindingAlgorithm for SearchEngine {
    fn name(&self) -> String {
        if self.config.use_start_distance {
            format!("{} + start distance", self.config.heuristic_mode)
        } else {
            self.config.heuristic_mode.to_string()
        }
    }

    fn find_path(&mut self, grid: &mut Grid, layout: &MazeLayout) -> Result<Option<Vec<usize>>> {
        let outcome = self.run(grid, layout)?;
        Ok(outcome.path().map(<[usize]>::to_vec))
    }
}
