use std::fmt;
use std::time::Duration;

/// Default pause between generations, the cadence of the output stream.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(500);

/// Default cadence for progress log lines, in generations.
pub const DEFAULT_LOG_EVERY: u64 = 50;

/// Error produced when a configuration is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or both grid dimensions are zero.
    EmptyGrid { rows: u32, columns: u32 },
    /// The initial alive percentage is above 100.
    ProbabilityOutOfRange(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, columns } => {
                write!(f, "grid dimensions must be positive, got {}x{}", rows, columns)
            }
            Self::ProbabilityOutOfRange(p) => {
                write!(f, "alive percentage must be in [0, 100], got {}", p)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated simulation parameters, fixed for the life of the process.
///
/// A `SimConfig` that exists is valid by construction: `new` rejects empty
/// grids and out-of-range percentages before anything is initialized.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Grid height in cells.
    pub rows: u32,
    /// Grid width in cells.
    pub columns: u32,
    /// Initial random fill density, percent of cells in [0, 100].
    pub alive_percent: u8,
    /// Pause between generations. Zero means free-running.
    pub step_interval: Duration,
    /// Stop after this many generations; `None` runs until killed.
    pub max_generations: Option<u64>,
    /// Emit a progress log line every N generations; 0 disables them.
    pub log_every: u64,
}

impl SimConfig {
    pub fn new(rows: u32, columns: u32, alive_percent: u8) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::EmptyGrid { rows, columns });
        }
        if alive_percent > 100 {
            return Err(ConfigError::ProbabilityOutOfRange(alive_percent));
        }
        Ok(Self {
            rows,
            columns,
            alive_percent,
            step_interval: DEFAULT_STEP_INTERVAL,
            max_generations: None,
            log_every: DEFAULT_LOG_EVERY,
        })
    }

    /// Total number of cells in the configured grid.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SimConfig::new(20, 100, 10).unwrap();
        assert_eq!(config.cell_count(), 2000);
        assert_eq!(config.step_interval, DEFAULT_STEP_INTERVAL);
        assert_eq!(config.max_generations, None);
        assert_eq!(config.log_every, DEFAULT_LOG_EVERY);
    }

    #[test]
    fn test_config_rejects_zero_dimensions() {
        assert_eq!(
            SimConfig::new(0, 100, 10).unwrap_err(),
            ConfigError::EmptyGrid { rows: 0, columns: 100 }
        );
        assert!(SimConfig::new(20, 0, 10).is_err());
        assert!(SimConfig::new(0, 0, 10).is_err());
    }

    #[test]
    fn test_config_rejects_out_of_range_percent() {
        assert_eq!(
            SimConfig::new(20, 100, 101).unwrap_err(),
            ConfigError::ProbabilityOutOfRange(101)
        );
    }

    #[test]
    fn test_config_accepts_boundary_percents() {
        assert!(SimConfig::new(20, 100, 0).is_ok());
        assert!(SimConfig::new(20, 100, 100).is_ok());
        assert!(SimConfig::new(1, 1, 50).is_ok());
    }

    #[test]
    fn test_config_error_display() {
        let err = SimConfig::new(0, 0, 10).unwrap_err();
        assert!(err.to_string().contains("0x0"));
        let err = SimConfig::new(5, 5, 255).unwrap_err();
        assert!(err.to_string().contains("255"));
    }
}
