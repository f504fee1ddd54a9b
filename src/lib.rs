//! Grid maze solving with breadth-first and heuristic-guided search.
//!
//! Mazes are rectangular character grids: `#` wall, `.` open, `o` start,
//! `*` end and `@` for an optional pair of linked teleporters. A
//! [`SearchEngine`](algorithms::search::SearchEngine) run produces the
//! path (if any) plus the order tiles were visited in, for replay.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod heuristic;
pub mod input;
pub mod render;
pub mod session;
pub mod statistics;
pub mod tile;
pub mod validator;
