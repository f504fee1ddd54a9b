use crate::tile::{Position, TileKind};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Parameters for a random maze.
#[derive(Debug, Clone, Copy)]
pub struct MazeGenerator {
    pub width: usize,
    pub height: usize,
    pub num_walls: usize,
    pub teleporters: bool,
}

impl MazeGenerator {
    pub fn new(width: usize, height: usize, num_walls: usize, teleporters: bool) -> Self {
        MazeGenerator {
            width: width.max(2),
            height: height.max(1),
            num_walls,
            teleporters,
        }
    }

    /// Generates maze rows with one start in the left half, one end in the
    /// right half, up to `num_walls` walls and, if requested and there is
    /// room, a teleporter pair. The same seed always yields the same maze.
    pub fn generate(&self, seed: Option<u64>) -> Vec<String> {
        let mut rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };

        let mut cells = vec![vec![TileKind::Open; self.width]; self.height];

        let start = Position {
            x: rng.gen_range(0..self.width / 2),
            y: rng.gen_range(0..self.height),
        };
        let end = Position {
            x: rng.gen_range(self.width / 2..self.width),
            y: rng.gen_range(0..self.height),
        };
        cells[start.y][start.x] = TileKind::Start;
        cells[end.y][end.x] = TileKind::End;

        let mut free: Vec<Position> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Position { x, y }))
            .filter(|&pos| pos != start && pos != end)
            .collect();
        free.shuffle(&mut rng);

        if self.teleporters && free.len() >= 2 {
            for pos in free.drain(..2) {
                cells[pos.y][pos.x] = TileKind::Teleporter;
            }
        }

        for pos in free.into_iter().take(self.num_walls) {
            cells[pos.y][pos.x] = TileKind::Wall;
        }

        debug!(
            "generated {}x{} maze - start: {}, end: {}",
            self.width, self.height, start, end
        );

        cells
            .iter()
            .map(|row| row.iter().map(TileKind::as_char).collect())
            .collect()
    }
}
