//! Line-oriented maze ingestion.
//!
//! Malformed lines are skipped with a warning instead of failing the whole
//! read, so maze files may carry comments or stray text.

use crate::error::Result;
use crate::tile::TileKind;
use log::warn;
use std::io::BufRead;

fn is_maze_row(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| TileKind::from_char(c).is_some())
}

/// Reads maze rows from `reader`.
///
/// Rows must be exactly `width` characters long when a width is given;
/// otherwise the first well-formed row fixes the width. Blank lines are
/// ignored silently.
pub fn read_maze_rows<R: BufRead>(reader: R, width: Option<usize>) -> Result<Vec<String>> {
    let mut width = width;
    let mut rows = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let well_formed = is_maze_row(line);
        if well_formed && width.is_none() {
            width = Some(line.chars().count());
        }
        match width {
            Some(expected) if well_formed && line.chars().count() == expected => {
                rows.push(line.to_string());
            }
            _ => warn!(
                "skipping line {}: valid rows have {} characters and only consist of # (wall), . (open), o (start), * (end), @ (teleporter)",
                number + 1,
                width.map_or_else(|| "a fixed number of".to_string(), |w| w.to_string())
            ),
        }
    }

    Ok(rows)
}
