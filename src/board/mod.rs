//! Boards: validated grids, adjacency and random generation.

pub mod generator;
pub mod grid;

pub use generator::{generate_board, generate_board_seeded, BoardGenerator};
pub use grid::{flatten, unflatten, Grid, Neighbors, Position};
