use std::io::Write;
use std::thread;

use anyhow::Context;

use crate::config::SimConfig;
use crate::engine;
use crate::grid::Grid;
use crate::render;
use crate::stats::Stats;

/// Simulation runner: owns the grid and drives the
/// initialize -> (render -> step)* cycle against an output sink.
pub struct App {
    config: SimConfig,
    grid: Grid,
    stats: Stats,
    /// Number of completed `step` calls since startup.
    generation: u64,
}

impl App {
    /// Build the grid for the given configuration and randomize it once.
    ///
    /// Allocation failure propagates out; nothing is partially initialized.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        let mut grid = Grid::create(config.rows, config.columns)
            .context("failed to allocate grid buffers")?;

        // Seeded once per process; each run observes a different grid.
        let mut rng = rand::thread_rng();
        engine::randomize(&mut grid, config.alive_percent, &mut rng);

        let stats = Stats::new(config.cell_count());
        Ok(Self {
            config,
            grid,
            stats,
            generation: 0,
        })
    }

    /// Run the simulation loop, writing one frame per generation to `out`.
    ///
    /// Pacing is owned here, not by the engine: each iteration renders the
    /// current generation, advances one step, then sleeps the configured
    /// interval. Stops after `max_generations` when set; otherwise runs until
    /// the process is killed. Write errors (e.g. a closed pipe) propagate.
    pub fn run<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        log::info!(
            "Simulation running: {} cells, initial population {}",
            self.grid.cell_count(),
            self.grid.population(),
        );

        loop {
            render::write_frame(out, &self.grid).context("failed to write frame")?;
            out.flush().context("failed to flush output")?;

            self.stats.record(self.generation, self.grid.population());
            if self.config.log_every > 0 && self.generation % self.config.log_every == 0 {
                log::info!(
                    "Gen {} | population {} | density {:.1}% | {:.1} gen/s",
                    self.generation,
                    self.stats.latest_population(),
                    self.stats.latest_density() * 100.0,
                    self.stats.gen_rate(),
                );
            }

            engine::step(&mut self.grid);
            self.generation += 1;

            if let Some(limit) = self.config.max_generations {
                if self.generation >= limit {
                    break;
                }
            }

            if !self.config.step_interval.is_zero() {
                thread::sleep(self.config.step_interval);
            }
        }

        log::info!("Simulation stopped after {} generations", self.generation);
        Ok(())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}
