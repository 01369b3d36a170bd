//! Blocking delay for short pulses

/// Microsecond busy-wait
///
/// Only used for pulses of a few microseconds; the main loop must never
/// wait longer than that.
pub trait DelayUs {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}
