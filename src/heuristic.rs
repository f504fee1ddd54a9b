use crate::tile::Position;
use clap::ValueEnum;
use std::fmt;

/// Cap applied by [`HeuristicMode::Proximity`].
pub const PROXIMITY_RANGE: u32 = 8;

/// Estimate of the remaining distance to the end, selectable per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum HeuristicMode {
    /// Always 0: the search degrades to plain breadth-first exploration.
    #[default]
    None,
    /// floor(sqrt(dx² + dy²)).
    Euclidean,
    /// dx + dy.
    Manhattan,
    /// Manhattan distance capped at 8, like a short-range sensor.
    Proximity,
}

impl HeuristicMode {
    pub const ALL: [HeuristicMode; 4] = [
        HeuristicMode::None,
        HeuristicMode::Euclidean,
        HeuristicMode::Manhattan,
        HeuristicMode::Proximity,
    ];

    pub fn is_informed(&self) -> bool {
        *self != HeuristicMode::None
    }

    pub fn estimate(&self, from: Position, end: Position) -> u32 {
        let (dx, dy) = from.abs_diff(end);
        match self {
            HeuristicMode::None => 0,
            HeuristicMode::Euclidean => {
                let (dx, dy) = (dx as u64, dy as u64);
                ((dx * dx + dy * dy) as f64).sqrt().floor() as u32
            }
            HeuristicMode::Manhattan => (dx + dy) as u32,
            HeuristicMode::Proximity => ((dx + dy) as u32).min(PROXIMITY_RANGE),
        }
    }
}

impl fmt::Display for HeuristicMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeuristicMode::None => "none",
            HeuristicMode::Euclidean => "euclidean",
            HeuristicMode::Manhattan => "manhattan",
            HeuristicMode::Proximity => "proximity",
        };
        f.write_str(name)
    }
}
