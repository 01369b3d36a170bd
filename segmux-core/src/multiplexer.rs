//! Display multiplexer
//!
//! Cycles through the glyphs, one per refresh tick. For each glyph the
//! count line goes high, the digit-select byte for that glyph is shifted
//! out step by step, and the count line drops once the byte is in. The
//! blank slot between glyph 14 and glyph 0 is used for a short pulse that
//! resets the digit-select counter.

use segmux_hal::{DelayUs, OutputPin};

use crate::config::{Config, RESET_PULSE_US};
use crate::display::DisplayValue;
use crate::glyph::{glyph_match_mask, BLANK_GLYPH};
use crate::sender::{SenderStatus, ShiftRegisterSender};

/// Lines of the register chain
pub struct OutputLines<S, K, C, D> {
    /// Serial data, shared with the input stream
    pub ser: S,
    /// Shift clock
    pub srclk: K,
    /// Count/latch line, also pulsed for the digit-select reset
    pub cnt: C,
    /// Pulse timing
    pub delay: D,
}

/// Glyph cursor plus the transfer in progress
#[derive(Debug, Clone)]
pub struct DisplayMultiplexer {
    glyph: u8,
    sender: ShiftRegisterSender,
    digits: u8,
    latch_pulse: bool,
}

impl DisplayMultiplexer {
    /// Create a multiplexer at glyph 0 with nothing in flight
    pub fn new(config: &Config) -> Self {
        Self {
            glyph: 0,
            sender: ShiftRegisterSender::finished(),
            digits: config.digits,
            latch_pulse: config.latch_pulse,
        }
    }

    /// Glyph being shown (0-14)
    pub fn current_glyph(&self) -> u8 {
        self.glyph
    }

    /// Check whether a digit-select byte is still being shifted
    pub fn is_busy(&self) -> bool {
        !self.sender.is_finished()
    }

    /// Advance the current transfer by one clock phase
    ///
    /// Returns [`SenderStatus::Finished`] when there is nothing in flight;
    /// only then may the next glyph be started.
    pub fn step<S, K, C, D>(&mut self, lines: &mut OutputLines<S, K, C, D>) -> SenderStatus
    where
        S: OutputPin,
        K: OutputPin,
        C: OutputPin,
        D: DelayUs,
    {
        let status = self.sender.step(&mut lines.ser, &mut lines.srclk);

        match status {
            SenderStatus::Last if self.latch_pulse => {
                // Storage latch shares the shift clock and lags one edge
                lines.srclk.set_low();
                lines.delay.delay_us(RESET_PULSE_US);
                lines.srclk.set_high();
            }
            SenderStatus::Finished => lines.cnt.set_low(),
            _ => {}
        }

        status
    }

    /// Move to the next glyph and start shifting its digit-select byte
    pub fn send_next_glyph<S, K, C, D>(
        &mut self,
        lines: &mut OutputLines<S, K, C, D>,
        display: &DisplayValue,
    ) where
        C: OutputPin,
        D: DelayUs,
    {
        self.glyph += 1;
        if self.glyph == BLANK_GLYPH {
            lines.cnt.set_high();
            lines.delay.delay_us(RESET_PULSE_US);
            lines.cnt.set_low();
            self.glyph = 0;
        }

        lines.cnt.set_high();
        self.sender = ShiftRegisterSender::new(glyph_match_mask(display.raw(), self.glyph, self.digits));
    }
}
