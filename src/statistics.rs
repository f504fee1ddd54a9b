use crate::algorithms::search::SearchOutcome;
use std::fmt;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub label: String,
    pub tiles_searched: usize,
    pub path_length: Option<usize>,
    pub optimal_path_length: Option<usize>,
    pub route_efficiency: f64,
}

impl SearchStatistics {
    pub fn new(label: &str, outcome: &SearchOutcome, optimal_path_length: Option<usize>) -> Self {
        let mut stats = SearchStatistics {
            label: label.to_string(),
            tiles_searched: outcome.tiles_searched(),
            path_length: outcome.path_length(),
            optimal_path_length,
            route_efficiency: 0.0,
        };
        stats.calculate_efficiency();
        stats
    }

    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match (self.path_length, self.optimal_path_length) {
            (Some(moves), Some(optimal)) if moves > 0 && optimal > 0 => {
                moves as f64 / optimal as f64
            }
            _ => 0.0,
        };
    }

    /// Whether the run found a path longer than the optimum.
    pub fn is_suboptimal(&self) -> bool {
        matches!(
            (self.path_length, self.optimal_path_length),
            (Some(moves), Some(optimal)) if moves > optimal
        )
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heuristic: {}", self.label)?;
        match self.path_length {
            // The path includes the start, so its step count is the number of
            // tiles walked including the end.
            Some(steps) => writeln!(f, "The solution was {} tiles long! (includes end)", steps)?,
            None => writeln!(f, "No path exists")?,
        }
        writeln!(f, "There were {} tiles searched", self.tiles_searched)?;
        if let Some(optimal) = self.optimal_path_length {
            writeln!(f, "Optimal Path Length: {}", optimal)?;
        }

        if self.route_efficiency > 0.0 {
            writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
            if self.is_suboptimal() {
                writeln!(f, "Note: shortest path was not found with this heuristic")?;
            }
        }

        Ok(())
    }
}

/// Side-by-side table of several runs over the same maze.
pub fn comparison_table(results: &[SearchStatistics]) -> String {
    let mut table = format!(
        "{:<28} {:>8} {:>8} {:>8}\n",
        "Heuristic", "Searched", "Length", "Optimal"
    );
    for stats in results {
        let length = stats
            .path_length
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        let optimal = stats
            .optimal_path_length
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        table.push_str(&format!(
            "{:<28} {:>8} {:>8} {:>8}\n",
            stats.label, stats.tiles_searched, length, optimal
        ));
    }
    table
}
