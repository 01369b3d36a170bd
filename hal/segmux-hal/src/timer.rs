//! Periodic timer abstraction
//!
//! The display core is paced by one periodic compare-match interrupt.
//! The interrupt handler itself lives in the core; this trait only
//! configures the hardware that raises it.

/// Timer that raises an interrupt at a fixed period
pub trait PeriodicTimer {
    /// Error type for configuration failures
    type Error;

    /// Start raising a tick interrupt every `period_us` microseconds
    ///
    /// Returns an error if the period cannot be represented with the
    /// available prescalers.
    fn start_periodic(&mut self, period_us: u32) -> Result<(), Self::Error>;
}
