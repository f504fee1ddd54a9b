use crate::error::{MazeError, Result, StructuralError};
use crate::tile::{Position, Tile, TileKind};
use std::fmt;

/// The four cardinal directions, in the order the search expands them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Row-major arena of tiles. Tiles are addressed by index; predecessor links
/// are indices into this arena and never outlive it.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    generation: u32,
}

impl Grid {
    /// Builds a grid from rectangular character rows.
    ///
    /// A second start or end is rejected here, as soon as it is read. Missing
    /// start/end and the teleporter count are checked by
    /// [`validate`](crate::validator::validate).
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .unwrap_or(0);
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut start: Option<Position> = None;
        let mut end: Option<Position> = None;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, ch) in row.chars().enumerate() {
                let kind = TileKind::from_char(ch).ok_or(MazeError::InvalidCharacter {
                    row: y,
                    column: x,
                    ch,
                })?;
                let pos = Position::new(x, y);
                match kind {
                    TileKind::Start if start.is_some() => {
                        return Err(StructuralError::DuplicateStart(pos).into())
                    }
                    TileKind::Start => start = Some(pos),
                    TileKind::End if end.is_some() => {
                        return Err(StructuralError::DuplicateEnd(pos).into())
                    }
                    TileKind::End => end = Some(pos),
                    _ => {}
                }
                tiles.push(Tile::new(kind, pos));
            }
        }

        Ok(Grid {
            width,
            height: rows.len(),
            tiles,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, idx: usize) -> &Tile {
        &self.tiles[idx]
    }

    pub fn index_of(&self, pos: Position) -> Option<usize> {
        (pos.x < self.width && pos.y < self.height).then(|| pos.y * self.width + pos.x)
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.index_of(pos).map(|idx| &self.tiles[idx])
    }

    pub fn has_neighbor(&self, idx: usize, direction: Direction) -> bool {
        self.step(idx, direction).is_some()
    }

    /// Adjacent tile index in `direction`. Callers are expected to check
    /// [`has_neighbor`](Self::has_neighbor) first.
    pub fn neighbor(&self, idx: usize, direction: Direction) -> Result<usize> {
        self.step(idx, direction).ok_or(MazeError::OutOfBounds {
            from: self.tiles[idx].position(),
            direction,
        })
    }

    /// In-bounds neighbours of `idx` in expansion order (left, up, right, down).
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(idx, d))
    }

    fn step(&self, idx: usize, direction: Direction) -> Option<usize> {
        let pos = self.tiles.get(idx)?.position();
        let (dx, dy) = direction.offset();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        self.index_of(Position::new(x, y))
    }

    /// Starts a new search run. Scratch state from earlier runs becomes stale
    /// without touching every tile; on counter wrap-around the tiles are
    /// cleared for real.
    pub fn begin_run(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.reset();
            self.generation = 1;
        }
        self.generation
    }

    /// Clears all per-run scratch state.
    pub fn reset(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.clear_scratch();
        }
        self.generation = 0;
    }

    fn is_current(&self, idx: usize) -> bool {
        self.generation != 0 && self.tiles[idx].generation == self.generation
    }

    /// Distance from the start recorded in the current run, if the tile was reached.
    pub fn distance(&self, idx: usize) -> Option<u32> {
        self.is_current(idx).then(|| self.tiles[idx].distance)
    }

    pub fn priority(&self, idx: usize) -> Option<u32> {
        self.is_current(idx).then(|| self.tiles[idx].priority)
    }

    pub fn predecessor(&self, idx: usize) -> Option<usize> {
        if self.is_current(idx) {
            self.tiles[idx].predecessor
        } else {
            None
        }
    }

    pub(crate) fn mark(
        &mut self,
        idx: usize,
        predecessor: Option<usize>,
        distance: u32,
        priority: u32,
    ) {
        let generation = self.generation;
        let tile = &mut self.tiles[idx];
        tile.generation = generation;
        tile.predecessor = predecessor;
        tile.distance = distance;
        tile.priority = priority;
    }

    /// Tiles grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions_and_kinds() {
        let grid = Grid::parse(&["o.#", "@.*"]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.tile_at(Position::new(2, 0)).unwrap().kind(), TileKind::Wall);
        assert_eq!(
            grid.tile_at(Position::new(0, 1)).unwrap().kind(),
            TileKind::Teleporter
        );
        assert!(grid.tile_at(Position::new(3, 0)).is_none());
        assert_eq!(grid.to_string(), "o.#\n@.*\n");
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = Grid::parse(&["o..", ".*"]).unwrap_err();
        assert!(matches!(
            err,
            MazeError::RaggedRow { row: 1, expected: 3, found: 2 }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_characters() {
        let err = Grid::parse(&["o.x*"]).unwrap_err();
        assert!(matches!(
            err,
            MazeError::InvalidCharacter { row: 0, column: 2, ch: 'x' }
        ));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let rows: [&str; 0] = [];
        assert!(matches!(Grid::parse(&rows), Err(MazeError::Empty)));
        assert!(matches!(Grid::parse(&[""]), Err(MazeError::Empty)));
    }

    #[test]
    fn test_duplicate_start_detected_while_parsing() {
        let err = Grid::parse(&["o.o", "..*"]).unwrap_err();
        assert!(matches!(
            err,
            MazeError::Structural(StructuralError::DuplicateStart(p)) if p == Position::new(2, 0)
        ));
    }

    #[test]
    fn test_duplicate_end_detected_while_parsing() {
        let err = Grid::parse(&["o.*", "*.."]).unwrap_err();
        assert!(matches!(
            err,
            MazeError::Structural(StructuralError::DuplicateEnd(_))
        ));
    }

    #[test]
    fn test_neighbor_bounds() {
        let grid = Grid::parse(&["o..", "...", "..*"]).unwrap();
        let corner = grid.index_of(Position::new(0, 0)).unwrap();
        assert!(!grid.has_neighbor(corner, Direction::Left));
        assert!(!grid.has_neighbor(corner, Direction::Up));
        assert!(matches!(
            grid.neighbor(corner, Direction::Up),
            Err(MazeError::OutOfBounds { direction: Direction::Up, .. })
        ));

        let right = grid.neighbor(corner, Direction::Right).unwrap();
        assert_eq!(grid.tile(right).position(), Position::new(1, 0));
        let down = grid.neighbor(corner, Direction::Down).unwrap();
        assert_eq!(grid.tile(down).position(), Position::new(0, 1));
    }

    #[test]
    fn test_neighbors_in_expansion_order() {
        let grid = Grid::parse(&["o..", "...", "..*"]).unwrap();
        let centre = grid.index_of(Position::new(1, 1)).unwrap();
        let positions: Vec<Position> = grid
            .neighbors(centre)
            .map(|i| grid.tile(i).position())
            .collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_new_run_invalidates_scratch() {
        let mut grid = Grid::parse(&["o.*"]).unwrap();
        grid.begin_run();
        grid.mark(1, Some(0), 1, 5);
        assert_eq!(grid.distance(1), Some(1));
        assert_eq!(grid.priority(1), Some(5));
        assert_eq!(grid.predecessor(1), Some(0));

        grid.begin_run();
        assert_eq!(grid.distance(1), None);
        assert_eq!(grid.predecessor(1), None);
    }

    #[test]
    fn test_reset_clears_scratch() {
        let mut grid = Grid::parse(&["o.*"]).unwrap();
        grid.begin_run();
        grid.mark(2, Some(1), 2, 0);
        grid.reset();
        assert_eq!(grid.predecessor(2), None);
        assert_eq!(grid.tile(2).predecessor, None);
    }
}
