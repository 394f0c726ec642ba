mod app;
mod config;
mod engine;
mod grid;
mod render;
mod stats;

use std::io;
use std::time::Duration;

use crate::app::App;
use crate::config::SimConfig;

/// Grid height in cells.
const ROWS: u32 = 20;
/// Grid width in cells.
const COLUMNS: u32 = 100;
/// Initial random fill density, percent of cells.
const ALIVE_PERCENT: u8 = 10;
/// Pause between generations.
const STEP_INTERVAL: Duration = Duration::from_millis(500);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("lifestream - Conway's Game of Life as a text stream");
    log::info!("Grid: {COLUMNS}x{ROWS} cells, toroidal");
    log::info!("Initial density: {ALIVE_PERCENT}%, interval: {STEP_INTERVAL:?}");

    let mut config = SimConfig::new(ROWS, COLUMNS, ALIVE_PERCENT)?;
    config.step_interval = STEP_INTERVAL;

    let mut app = App::new(config)?;
    let stdout = io::stdout();
    app.run(&mut stdout.lock())
}
