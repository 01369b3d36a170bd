//! Adapters for `embedded-hal` 1.0 implementations
//!
//! Chip HALs in the ecosystem already implement `embedded-hal`; wrapping
//! their pins here makes them usable by the display core. Pin errors are
//! dropped: the core has no channel to report them and the lines it drives
//! are plain push-pull GPIOs.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital as eh;

use crate::delay::DelayUs;
use crate::gpio::{InputPin, ModePin, OutputPin, PinMode};

/// Output line backed by an `embedded-hal` output pin
///
/// The driven level is tracked locally so reading it back never touches
/// the hardware.
pub struct Output<P> {
    pin: P,
    high: bool,
}

impl<P: eh::OutputPin> Output<P> {
    /// Wrap a pin and drive it to `initial_high`
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut output = Self {
            pin,
            high: initial_high,
        };
        output.set_state(initial_high);
        output
    }

    /// Give the underlying pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: eh::OutputPin> OutputPin for Output<P> {
    fn set_high(&mut self) {
        self.pin.set_high().ok();
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().ok();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

// embedded-hal pins carry their direction in the type
impl<P> ModePin for Output<P> {
    fn set_mode(&mut self, _mode: PinMode) {}
}

/// Input line backed by an `embedded-hal` input pin
pub struct Input<P> {
    pin: P,
}

impl<P: eh::InputPin> Input<P> {
    /// Wrap a pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the underlying pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: eh::InputPin> InputPin for Input<P> {
    /// A failed read counts as low
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}

/// Delay backed by an `embedded-hal` delay provider
pub struct Delay<D>(pub D);

impl<D: DelayNs> DelayUs for Delay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }
}
