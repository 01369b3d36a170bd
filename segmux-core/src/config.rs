//! Display configuration
//!
//! Fixed at build time by the firmware entry point. All timing is
//! expressed in refresh periods of the periodic timer.

use segmux_protocol::MAX_DIGITS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digits on the stock board
pub const DEFAULT_DIGITS: u8 = 4;

/// Refresh timer period
pub const DEFAULT_REFRESH_PERIOD_US: u32 = 600;

/// Refresh periods without input before a frame is abandoned
pub const DEFAULT_TIMEOUT_TICKS: u8 = 3;

/// Width of the digit-select reset pulse
pub const RESET_PULSE_US: u32 = 1;

/// Segments start to visibly flicker after this long without refresh
pub const PERSISTENCE_BUDGET_US: u32 = 10_000;

/// Timer periods in one full glyph cycle (15 glyphs plus the blank slot)
pub const SLOTS_PER_CYCLE: u32 = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Digit count outside 1..=8
    InvalidDigitCount(u8),
    /// Refresh period of zero
    ZeroRefreshPeriod,
    /// Watchdog of zero ticks would abort every frame immediately
    ZeroTimeout,
    /// A full glyph cycle would exceed the persistence budget
    RefreshTooSlow { cycle_us: u32 },
}

/// Multiplexer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of physical digits (and digits per input frame)
    pub digits: u8,
    /// Periodic timer period in microseconds
    pub refresh_period_us: u32,
    /// Input watchdog, in refresh periods
    pub timeout_ticks: u8,
    /// Issue one extra clock pulse after each byte, for registers whose
    /// storage latch is wired to the shift clock
    pub latch_pulse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Stock configuration: 4 digits, 600 µs refresh, 3-tick watchdog
    pub const fn new() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            refresh_period_us: DEFAULT_REFRESH_PERIOD_US,
            timeout_ticks: DEFAULT_TIMEOUT_TICKS,
            latch_pulse: false,
        }
    }

    /// Same configuration with a different digit count
    pub const fn with_digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Check the configuration can drive the hardware
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digits == 0 || self.digits as usize > MAX_DIGITS {
            return Err(ConfigError::InvalidDigitCount(self.digits));
        }

        if self.refresh_period_us == 0 {
            return Err(ConfigError::ZeroRefreshPeriod);
        }

        if self.timeout_ticks == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let cycle_us = self.refresh_period_us.saturating_mul(SLOTS_PER_CYCLE);
        if cycle_us > PERSISTENCE_BUDGET_US {
            return Err(ConfigError::RefreshTooSlow { cycle_us });
        }

        Ok(())
    }

    /// Input watchdog duration in microseconds
    pub fn timeout_us(&self) -> u32 {
        self.refresh_period_us
            .saturating_mul(self.timeout_ticks as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.digits, 4);
        assert_eq!(config.timeout_us(), 1_800);
    }

    #[test]
    fn test_digit_count_bounds() {
        assert_eq!(
            Config::new().with_digits(0).validate(),
            Err(ConfigError::InvalidDigitCount(0))
        );
        assert_eq!(
            Config::new().with_digits(9).validate(),
            Err(ConfigError::InvalidDigitCount(9))
        );
        assert_eq!(Config::new().with_digits(8).validate(), Ok(()));
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = Config::new();
        config.refresh_period_us = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRefreshPeriod));

        let mut config = Config::new();
        config.timeout_ticks = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_slow_refresh_rejected() {
        let mut config = Config::new();
        config.refresh_period_us = 700; // 16 × 700 µs = 11.2 ms
        assert_eq!(
            config.validate(),
            Err(ConfigError::RefreshTooSlow { cycle_us: 11_200 })
        );
    }
}
