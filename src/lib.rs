// lib.rs - Conway's Game of Life on a bounded, double-buffered grid

pub mod config;
pub mod engine;
pub mod grid;
pub mod headless;
pub mod patterns;

pub use config::{ConfigError, LifeConfig, SeedKind};
pub use engine::{advance_generation, apply_rule, count_live_neighbors};
pub use grid::{COLS, CellState, GridState, ROWS};
pub use patterns::{Pattern, SeedError, SeedStrategy, PATTERNS};
