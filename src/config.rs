//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS, MIN_ENABLE_PULSE_NS};

/// Display geometry
///
/// Columns are recorded but do not affect addressing: the row map assumes
/// 40-column partitions whatever width is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Characters per row
    pub columns: u8,
    /// Number of rows
    pub rows: u8,
}

impl Geometry {
    /// Create new geometry with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidGeometry` if:
    /// - columns == 0 or columns > MAX_COLUMNS
    /// - rows == 0 or rows > MAX_ROWS
    pub fn new(columns: u8, rows: u8) -> Result<Self, BuilderError> {
        if columns == 0 || columns > MAX_COLUMNS || rows == 0 || rows > MAX_ROWS {
            return Err(BuilderError::InvalidGeometry { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Whether the controllers must be put in two-line mode
    pub fn is_multi_line(&self) -> bool {
        self.rows > 1
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            columns: MAX_COLUMNS,
            rows: MAX_ROWS,
        }
    }
}

/// Display configuration
///
/// Timing values are minimums for the HD44780; slower buses may shorten the
/// settle waits, but never the clear/home wait. Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Wait after the first expander write in `begin`, in milliseconds
    pub power_on_delay_ms: u32,
    /// Waits after each of the three reset nibbles, in microseconds
    pub reset_delays_us: [u32; 3],
    /// Enable strobe hold time, in nanoseconds
    pub enable_pulse_ns: u32,
    /// Wait after each nibble, in microseconds
    pub settle_us: u32,
    /// Wait after clear and home, in microseconds
    pub clear_home_us: u32,
    /// Backlight level before the first `set_backlight`
    pub backlight: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            power_on_delay_ms: 50,
            reset_delays_us: [4_500, 200, 200],
            enable_pulse_ns: 1_000,
            settle_us: 37,
            clear_home_us: 1_600,
            backlight: 0,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use lcd4004::Builder;
///
/// let config = match Builder::new().backlight(255).settle_us(50).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the power-on wait in milliseconds
    pub fn power_on_delay_ms(mut self, value: u32) -> Self {
        self.config.power_on_delay_ms = value;
        self
    }

    /// Set the waits after the three reset nibbles
    pub fn reset_delays_us(mut self, values: [u32; 3]) -> Self {
        self.config.reset_delays_us = values;
        self
    }

    /// Set the enable strobe hold time
    pub fn enable_pulse_ns(mut self, value: u32) -> Self {
        self.config.enable_pulse_ns = value;
        self
    }

    /// Set the per-nibble settle time
    pub fn settle_us(mut self, value: u32) -> Self {
        self.config.settle_us = value;
        self
    }

    /// Set the wait after clear and home
    pub fn clear_home_us(mut self, value: u32) -> Self {
        self.config.clear_home_us = value;
        self
    }

    /// Set the initial backlight level
    pub fn backlight(mut self, level: u8) -> Self {
        self.config.backlight = level;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::EnablePulseTooShort` if the enable pulse is
    /// below [`MIN_ENABLE_PULSE_NS`]
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.config.enable_pulse_ns < MIN_ENABLE_PULSE_NS {
            return Err(BuilderError::EnablePulseTooShort {
                ns: self.config.enable_pulse_ns,
            });
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_accepts_common_sizes() {
        assert!(Geometry::new(40, 4).is_ok());
        assert!(Geometry::new(20, 4).is_ok());
        assert!(Geometry::new(16, 1).is_ok());
    }

    #[test]
    fn test_geometry_rejects_out_of_range() {
        assert_eq!(
            Geometry::new(0, 2),
            Err(BuilderError::InvalidGeometry { columns: 0, rows: 2 })
        );
        assert!(Geometry::new(41, 2).is_err());
        assert!(Geometry::new(40, 0).is_err());
        assert!(Geometry::new(40, 5).is_err());
    }

    #[test]
    fn test_multi_line() {
        assert!(!Geometry::new(40, 1).unwrap().is_multi_line());
        assert!(Geometry::new(40, 2).unwrap().is_multi_line());
    }

    #[test]
    fn test_builder_defaults_match_config_default() {
        assert_eq!(Builder::new().build().unwrap(), Config::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new()
            .power_on_delay_ms(100)
            .reset_delays_us([5_000, 150, 150])
            .enable_pulse_ns(450)
            .settle_us(50)
            .clear_home_us(2_000)
            .backlight(1)
            .build()
            .unwrap();
        assert_eq!(config.power_on_delay_ms, 100);
        assert_eq!(config.reset_delays_us, [5_000, 150, 150]);
        assert_eq!(config.enable_pulse_ns, 450);
        assert_eq!(config.settle_us, 50);
        assert_eq!(config.clear_home_us, 2_000);
        assert_eq!(config.backlight, 1);
    }

    #[test]
    fn test_builder_rejects_short_enable_pulse() {
        let result = Builder::new().enable_pulse_ns(449).build();
        assert_eq!(result, Err(BuilderError::EnablePulseTooShort { ns: 449 }));
    }
}
