// main.rs - Conway's Game of Life: windowed or headless driver over the core engine

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use rand::rngs::StdRng;
use tracing::{info, warn};

use conway_life::{GridState, LifeConfig, SeedStrategy, advance_generation, headless, patterns};

mod ui;

fn main() -> Result<()> {
    init_tracing();

    let config = LifeConfig::parse();
    config.validate().context("invalid configuration")?;
    let strategy = config.seed_strategy()?;
    let mut rng = config.rng();

    let mut grid = GridState::new(config.rows, config.cols);
    strategy.apply(&mut grid, &mut rng).context("failed to seed initial generation")?;

    info!(
        rows = config.rows,
        cols = config.cols,
        interval_ms = config.interval_ms,
        seed = ?config.seed,
        live = grid.live_count(),
        headless = config.headless,
        "starting simulation",
    );

    if config.headless {
        run_headless(grid, &config)
    } else {
        run_window(GameOfLife::new(grid, strategy, rng, config.interval()))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn run_headless(mut grid: GridState, config: &LifeConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let mut stdout = io::stdout().lock();
    let advanced = runtime
        .block_on(headless::run(&mut grid, config.interval(), config.generations, &mut stdout))
        .context("headless run failed")?;
    info!(generations = advanced, live = grid.live_count(), "headless run finished");
    Ok(())
}

fn run_window(app: GameOfLife) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("window closed with error: {err}"))
}

/// Window state: the grid plus the controls that drive it.
pub struct GameOfLife {
    pub grid: GridState,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u64,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    strategy: SeedStrategy,
    rng: StdRng,
}

impl GameOfLife {
    fn new(grid: GridState, strategy: SeedStrategy, rng: StdRng, update_interval: Duration) -> Self {
        Self {
            grid,
            is_running: false,
            last_update: Instant::now(),
            update_interval,
            generation: 0,
            live_color: Color32::RED,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            strategy,
            rng,
        }
    }

    pub fn update_generation(&mut self) {
        advance_generation(&mut self.grid);
        self.generation += 1;
    }

    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Re-runs the startup seeding strategy on a cleared grid.
    pub fn reseed(&mut self) {
        self.clear_grid();
        if let Err(err) = self.strategy.apply(&mut self.grid, &mut self.rng) {
            warn!(%err, "reseed failed");
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            match patterns::apply_pattern(&mut self.grid, pattern) {
                Ok(()) => self.generation = 0,
                Err(err) => warn!(%err, "pattern not applied"),
            }
        }
    }

    /// Edits are only taken between generations, while paused.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if !self.is_running && row < self.grid.rows() && col < self.grid.cols() {
            self.grid.toggle_current(row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway_life::CellState;
    use rand::SeedableRng;

    fn paused_app() -> GameOfLife {
        GameOfLife::new(
            GridState::new(5, 5),
            SeedStrategy::Test,
            StdRng::seed_from_u64(0),
            Duration::from_millis(100),
        )
    }

    #[test]
    fn toggle_cell_edits_while_paused() {
        let mut app = paused_app();
        app.toggle_cell(2, 3);
        assert_eq!(app.grid.get_current(2, 3), CellState::Alive);
        app.toggle_cell(2, 3);
        assert_eq!(app.grid.get_current(2, 3), CellState::Dead);
    }

    #[test]
    fn toggle_cell_is_ignored_while_running() {
        let mut app = paused_app();
        app.is_running = true;
        app.toggle_cell(2, 3);
        assert_eq!(app.grid.live_count(), 0);
    }

    #[test]
    fn toggle_cell_ignores_clicks_past_the_edge() {
        let mut app = paused_app();
        app.toggle_cell(5, 0);
        app.toggle_cell(0, 5);
        assert_eq!(app.grid.live_count(), 0);
    }

    #[test]
    fn reseed_restarts_from_generation_zero() {
        let mut app = paused_app();
        app.reseed();
        app.update_generation();
        assert_eq!(app.generation, 1);

        app.reseed();
        assert_eq!(app.generation, 0);
        assert_eq!(app.grid.live_count(), 3);
    }
}
