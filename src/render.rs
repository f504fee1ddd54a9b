use crate::grid::Grid;
use rustc_hash::FxHashSet;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Solution view: start, end and teleporters keep their symbols, tiles on
/// `path` become `p`, everything else `_`.
pub fn render_solution(grid: &Grid, path: &[usize]) -> String {
    let on_path: FxHashSet<usize> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() + grid.height());
    for (idx, tile) in grid.tiles().iter().enumerate() {
        let c = if tile.is_start() || tile.is_end() || tile.is_teleporter() {
            tile.kind().as_char()
        } else if on_path.contains(&idx) {
            'p'
        } else {
            '_'
        };
        out.push(c);
        if (idx + 1) % grid.width() == 0 {
            out.push('\n');
        }
    }
    out
}

/// The grid after the first `step` entries of `trace` were visited. Visited
/// tiles are drawn as `x`; the start keeps its symbol.
pub fn render_trace_frame(grid: &Grid, trace: &[usize], step: usize) -> String {
    let visited: FxHashSet<usize> = trace.iter().take(step).copied().collect();
    let mut out = String::with_capacity(grid.len() + grid.height());
    for (idx, tile) in grid.tiles().iter().enumerate() {
        if visited.contains(&idx) && !tile.is_start() {
            out.push('x');
        } else {
            out.push(tile.kind().as_char());
        }
        if (idx + 1) % grid.width() == 0 {
            out.push('\n');
        }
    }
    out
}

/// Replays the visitation trace one tile per frame, `delay` apart.
pub fn replay_trace<W: Write>(
    out: &mut W,
    grid: &Grid,
    trace: &[usize],
    delay: Duration,
) -> io::Result<()> {
    // The start is never painted over, so its frame is skipped.
    for step in 2..=trace.len() {
        write!(out, "\x1B[2J\x1B[1;1H")?;
        writeln!(out, "Step {}/{}", step - 1, trace.len() - 1)?;
        write!(out, "{}", render_trace_frame(grid, trace, step))?;
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}
