//! Step-wise shift register sender
//!
//! Shifting a byte out in one go keeps the data line busy for the whole
//! transfer, and the same line also carries the input stream. Instead the
//! transfer is cut into 16 steps, one clock phase each, and the main loop
//! performs one step per iteration. Shift registers need roughly 100 ns
//! between clock edges; one loop iteration is far longer than that.

use segmux_hal::OutputPin;

/// Result of one sender step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SenderStatus {
    /// First clock-low phase was just issued
    Beginning,
    /// Somewhere in between
    Middle,
    /// Rising clock for the eighth bit was just issued
    Last,
    /// Nothing left to send
    Finished,
}

/// Where the sender is within the byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Next step drives the clock low and presents `bit` on the data line
    ClockLow { bit: u8 },
    /// Next step raises the clock, shifting `bit` in
    ClockHigh { bit: u8 },
    Done,
}

/// Sends one byte, most significant bit first, one clock phase per step
#[derive(Debug, Clone)]
pub struct ShiftRegisterSender {
    value: u8,
    phase: Phase,
}

impl Default for ShiftRegisterSender {
    fn default() -> Self {
        Self::finished()
    }
}

impl ShiftRegisterSender {
    /// Start sending `value`
    pub const fn new(value: u8) -> Self {
        Self {
            value,
            phase: Phase::ClockLow { bit: 0 },
        }
    }

    /// A sender with nothing to send
    pub const fn finished() -> Self {
        Self {
            value: 0,
            phase: Phase::Done,
        }
    }

    /// Check whether every bit has been clocked in
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Perform one clock phase
    ///
    /// Once finished, further calls touch no pins and keep returning
    /// [`SenderStatus::Finished`].
    pub fn step<D: OutputPin, C: OutputPin>(&mut self, data: &mut D, clock: &mut C) -> SenderStatus {
        match self.phase {
            Phase::ClockLow { bit } => {
                clock.set_low();
                data.set_state(self.value & (0x80 >> bit) != 0);
                self.phase = Phase::ClockHigh { bit };

                if bit == 0 {
                    SenderStatus::Beginning
                } else {
                    SenderStatus::Middle
                }
            }
            Phase::ClockHigh { bit } => {
                clock.set_high();

                if bit == 7 {
                    self.phase = Phase::Done;
                    SenderStatus::Last
                } else {
                    self.phase = Phase::ClockLow { bit: bit + 1 };
                    SenderStatus::Middle
                }
            }
            Phase::Done => SenderStatus::Finished,
        }
    }
}
