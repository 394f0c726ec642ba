use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of population samples retained in the history ring.
const MAX_HISTORY: usize = 512;

/// Minimum interval in seconds between generation-rate refreshes.
const RATE_REFRESH_SECS: f64 = 0.25;

/// Snapshot of simulation statistics at a given generation.
#[derive(Debug, Clone)]
pub struct StatsSample {
    pub generation: u64,
    pub population: u64,
    pub density: f64,
    pub timestamp: Instant,
}

/// Statistics store sampled by the simulation runner.
///
/// Owned and updated by the single simulation thread; the ring is
/// preallocated to its bound so recording never grows memory.
#[derive(Debug)]
pub struct Stats {
    /// Ring buffer of population samples over time.
    history: VecDeque<StatsSample>,
    /// Most recent generation rate (generations per second).
    gen_rate: f64,
    /// Last generation seen (for computing rate).
    last_gen: u64,
    last_rate_time: Instant,
    /// Total cell count of the grid.
    total_cells: u64,
}

impl Stats {
    pub fn new(total_cells: u64) -> Self {
        Self {
            history: VecDeque::with_capacity(MAX_HISTORY),
            gen_rate: 0.0,
            last_gen: 0,
            last_rate_time: Instant::now(),
            total_cells,
        }
    }

    /// Record a new population sample.
    pub fn record(&mut self, generation: u64, population: u64) {
        let density = if self.total_cells > 0 {
            population as f64 / self.total_cells as f64
        } else {
            0.0
        };

        let now = Instant::now();
        let dt = now.duration_since(self.last_rate_time).as_secs_f64();
        if dt > RATE_REFRESH_SECS {
            let dg = generation.saturating_sub(self.last_gen) as f64;
            self.gen_rate = dg / dt;
            self.last_gen = generation;
            self.last_rate_time = now;
        }

        if self.history.len() >= MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(StatsSample {
            generation,
            population,
            density,
            timestamp: now,
        });
    }

    /// Clear history (e.g. after a grid reset).
    pub fn clear(&mut self) {
        self.history.clear();
        self.gen_rate = 0.0;
        self.last_gen = 0;
        self.last_rate_time = Instant::now();
    }

    /// Most recent generation rate, in generations per second.
    pub fn gen_rate(&self) -> f64 {
        self.gen_rate
    }

    /// Latest recorded population.
    pub fn latest_population(&self) -> u64 {
        self.history.back().map(|s| s.population).unwrap_or(0)
    }

    /// Latest recorded density (live fraction of all cells).
    pub fn latest_density(&self) -> f64 {
        self.history.back().map(|s| s.density).unwrap_or(0.0)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
