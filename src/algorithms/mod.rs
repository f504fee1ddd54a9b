pub mod common;
pub mod frontier;
pub mod reconstruct;
pub mod reference;
pub mod search;
