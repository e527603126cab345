// config.rs - Startup configuration, from flags or LIFE_* environment variables

use std::time::Duration;

use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

use crate::grid::{COLS, ROWS};
use crate::patterns::{self, SeedStrategy};

/// Largest accepted side length.
pub const MAX_DIMENSION: usize = 1000;

/// Accepted update intervals; the window's speed slider spans the same range.
pub const MIN_INTERVAL_MS: u64 = 10;
pub const MAX_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("grid side {0} exceeds the maximum of {max}", max = MAX_DIMENSION)]
    TooLarge(usize),
    #[error("update interval {0}ms must be between {min}ms and {max}ms", min = MIN_INTERVAL_MS, max = MAX_INTERVAL_MS)]
    IntervalOutOfRange(u64),
    #[error("proportion {0} must be between 0.0 and 1.0")]
    InvalidProportion(f64),
    #[error("--seed pattern requires --pattern")]
    MissingPattern,
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SeedKind {
    /// Vertical blinker in the top-left corner.
    Test,
    /// Uniform random fill at --proportion.
    #[default]
    Random,
    /// --gliders gliders at random positions.
    Glider,
    /// A named pattern from the catalogue, centred.
    Pattern,
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "conway_life", version, about = "Conway's Game of Life on a bounded grid")]
pub struct LifeConfig {
    /// Number of grid rows.
    #[arg(long, env = "LIFE_ROWS", default_value_t = ROWS)]
    pub rows: usize,

    /// Number of grid columns.
    #[arg(long, env = "LIFE_COLS", default_value_t = COLS)]
    pub cols: usize,

    /// Milliseconds between generations.
    #[arg(long, env = "LIFE_INTERVAL_MS", default_value_t = 500)]
    pub interval_ms: u64,

    /// How to populate the first generation.
    #[arg(long, env = "LIFE_SEED", value_enum, default_value_t = SeedKind::Random)]
    pub seed: SeedKind,

    /// Fraction of cells alive for the random seed.
    #[arg(long, env = "LIFE_PROPORTION", default_value_t = 0.4)]
    pub proportion: f64,

    /// Number of gliders for the glider seed.
    #[arg(long, env = "LIFE_GLIDERS", default_value_t = 10)]
    pub gliders: usize,

    /// Pattern name for the pattern seed (case-insensitive).
    #[arg(long, env = "LIFE_PATTERN")]
    pub pattern: Option<String>,

    /// Fixed RNG seed for reproducible runs.
    #[arg(long, env = "LIFE_RNG_SEED")]
    pub rng_seed: Option<u64>,

    /// Print generations to stdout instead of opening a window.
    #[arg(long, env = "LIFE_HEADLESS")]
    pub headless: bool,

    /// Stop a headless run after this many generations.
    #[arg(long, env = "LIFE_GENERATIONS")]
    pub generations: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            interval_ms: 500,
            seed: SeedKind::Random,
            proportion: 0.4,
            gliders: 10,
            pattern: None,
            rng_seed: None,
            headless: false,
            generations: None,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid { rows: self.rows, cols: self.cols });
        }
        if let Some(side) = [self.rows, self.cols].into_iter().find(|&s| s > MAX_DIMENSION) {
            return Err(ConfigError::TooLarge(side));
        }
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.interval_ms) {
            return Err(ConfigError::IntervalOutOfRange(self.interval_ms));
        }
        if !(0.0..=1.0).contains(&self.proportion) {
            return Err(ConfigError::InvalidProportion(self.proportion));
        }
        self.seed_strategy().map(|_| ())
    }

    pub fn seed_strategy(&self) -> Result<SeedStrategy, ConfigError> {
        Ok(match self.seed {
            SeedKind::Test    => SeedStrategy::Test,
            SeedKind::Random  => SeedStrategy::Random { proportion: self.proportion },
            SeedKind::Glider  => SeedStrategy::Gliders { count: self.gliders },
            SeedKind::Pattern => {
                let name = self.pattern.as_deref().ok_or(ConfigError::MissingPattern)?;
                let pattern = patterns::find_pattern(name)
                    .ok_or_else(|| ConfigError::UnknownPattern(name.to_string()))?;
                SeedStrategy::Named(pattern)
            }
        })
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_os_rng(),
        }
    }
}
