//! GPIO pin abstractions
//!
//! Provides traits for digital input and output lines that can be
//! implemented by chip-specific HALs or by a simulator.

/// Direction of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Line is sampled, not driven
    Input,
    /// Line is driven push-pull
    Output,
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Reading takes `&mut self` because some chips latch or clear state on
/// access.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Pin whose direction can be changed at runtime
pub trait ModePin {
    /// Switch the pin direction
    fn set_mode(&mut self, mode: PinMode);
}
