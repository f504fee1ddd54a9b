use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// Absolute per-axis differences to another position.
    pub fn abs_diff(&self, other: Position) -> (usize, usize) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Open,
    Start,
    End,
    Teleporter,
}

impl TileKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(TileKind::Wall),
            '.' => Some(TileKind::Open),
            'o' => Some(TileKind::Start),
            '*' => Some(TileKind::End),
            '@' => Some(TileKind::Teleporter),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Open => '.',
            TileKind::Start => 'o',
            TileKind::End => '*',
            TileKind::Teleporter => '@',
        }
    }

    /// Tiles a search may step onto and expand. A teleporter can be walked
    /// over without taking the jump.
    pub fn is_passable(&self) -> bool {
        matches!(self, TileKind::Open | TileKind::Teleporter)
    }
}

/// One maze cell: a fixed kind plus scratch state owned by the current
/// search run.
///
/// Scratch fields are only meaningful while `generation` matches the grid's
/// current run generation; anything older reads as unvisited.
#[derive(Debug, Clone)]
pub struct Tile {
    position: Position,
    kind: TileKind,
    pub(crate) generation: u32,
    pub(crate) distance: u32,
    pub(crate) priority: u32,
    pub(crate) predecessor: Option<usize>,
}

impl Tile {
    pub fn new(kind: TileKind, position: Position) -> Self {
        Tile {
            position,
            kind,
            generation: 0,
            distance: 0,
            priority: 0,
            predecessor: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn is_start(&self) -> bool {
        self.kind == TileKind::Start
    }

    pub fn is_end(&self) -> bool {
        self.kind == TileKind::End
    }

    pub fn is_teleporter(&self) -> bool {
        self.kind == TileKind::Teleporter
    }

    pub(crate) fn clear_scratch(&mut self) {
        self.generation = 0;
        self.distance = 0;
        self.priority = 0;
        self.predecessor = None;
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.as_char())
    }
}
