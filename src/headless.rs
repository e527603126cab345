// headless.rs - Terminal driver: print a generation, advance, repeat

use std::io::{self, Write};
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::info;

use crate::engine;
use crate::grid::GridState;

/// Draws then advances once per `interval` until `generations` steps have run or Ctrl-C arrives.
///
/// Returns the number of generations advanced. A zero `interval` is rejected
/// with [`io::ErrorKind::InvalidInput`] before anything is written.
pub async fn run<W: Write>(
    grid: &mut GridState,
    interval: Duration,
    generations: Option<u64>,
    out: &mut W,
) -> io::Result<u64> {
    if interval.is_zero() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "headless interval must be non-zero"));
    }

    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut generation = 0u64;
    while generations.is_none_or(|limit| generation < limit) {
        tokio::select! {
            _ = ticker.tick() => {
                write!(out, "{grid}")?;
                out.flush()?;
                engine::advance_generation(grid);
                generation += 1;
            }
            result = &mut ctrl_c => {
                result?;
                info!(generation, "interrupted");
                break;
            }
        }
    }

    Ok(generation)
}
