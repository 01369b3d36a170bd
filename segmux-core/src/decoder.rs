//! Serial input decoder
//!
//! Reassembles 5-bit digit fields from the bits the edge interrupt queued
//! and writes them into the display value. The decoder runs only while the
//! display is suspended, so it can write the value directly.
//!
//! A watchdog counted in refresh periods guards against a sender that
//! stops mid-frame. It is re-armed by every received bit.

use segmux_protocol::{DigitField, DOT_FLAG, FIELD_BITS, VALUE_MASK};

use crate::config::Config;
use crate::display::DisplayValue;

/// Decoder states
///
/// The announce edge is handled by the interrupt; the decoder leaves
/// `Idle` the first time the main loop sees input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderState {
    /// Display mode, nothing being received
    Idle,
    /// Collecting bits into digit fields
    Accumulating,
}

/// Problems with the input stream
///
/// Neither is reported back to the sender; there is no channel to do so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputFault {
    /// The stream stalled for the whole watchdog period
    FramingTimeout,
    /// A field's value bits held 10-15; the field was dropped
    InvalidDigitValue(u8),
}

/// Outcome of feeding one bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeEvent {
    /// Field not complete yet
    Pending,
    /// A digit was placed on the display
    Digit(DigitField),
    /// A field was dropped
    Rejected(InputFault),
    /// The last digit of the frame was placed; the decoder is idle again
    FrameComplete,
}

/// Input framing state machine
#[derive(Debug, Clone)]
pub struct InputDecoder {
    state: DecoderState,
    /// Bits of the field being received, LSB first
    accumulator: u8,
    position: u8,
    digit_count: u8,
    /// Refresh periods left before the frame is abandoned
    timeout: u8,
    digits: u8,
    timeout_ticks: u8,
}

impl InputDecoder {
    /// Create an idle decoder for `config`
    pub fn new(config: &Config) -> Self {
        Self {
            state: DecoderState::Idle,
            accumulator: 0,
            position: 0,
            digit_count: 0,
            timeout: 0,
            digits: config.digits,
            timeout_ticks: config.timeout_ticks,
        }
    }

    /// Current state
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Digits placed so far in the current (or last) frame
    pub fn digit_count(&self) -> u8 {
        self.digit_count
    }

    /// Refresh periods left on the watchdog
    pub fn timeout_remaining(&self) -> u8 {
        self.timeout
    }

    /// Start a frame: clear the display value and arm the watchdog
    pub fn begin(&mut self, display: &mut DisplayValue) {
        self.state = DecoderState::Accumulating;
        self.accumulator = 0;
        self.position = 0;
        self.digit_count = 0;
        self.timeout = self.timeout_ticks;
        display.clear();
    }

    /// Feed one received bit
    pub fn push_bit(&mut self, bit: bool, display: &mut DisplayValue) -> DecodeEvent {
        if self.state == DecoderState::Idle {
            return DecodeEvent::Pending;
        }

        if bit {
            self.accumulator |= 1 << self.position;
        }
        self.position += 1;
        self.timeout = self.timeout_ticks;

        if self.position < FIELD_BITS {
            return DecodeEvent::Pending;
        }

        let raw = self.accumulator;
        self.accumulator = 0;
        self.position = 0;

        let field = match DigitField::decode(raw) {
            Ok(field) => field,
            Err(_) => {
                // The dot still lands on the position the digit would have taken
                if raw & DOT_FLAG != 0 {
                    display.mark_dot(self.digit_count);
                }
                return DecodeEvent::Rejected(InputFault::InvalidDigitValue(raw & VALUE_MASK));
            }
        };

        display.place(self.digit_count, field);
        self.digit_count += 1;

        if self.digit_count >= self.digits {
            self.finish();
            DecodeEvent::FrameComplete
        } else {
            DecodeEvent::Digit(field)
        }
    }

    /// Account for one refresh period without completing the frame
    ///
    /// When the watchdog runs out the frame is abandoned and the leftmost
    /// decimal point is lit as an error indicator. Digits received so far
    /// stay on the display.
    pub fn tick(&mut self, display: &mut DisplayValue) -> Option<InputFault> {
        if self.state == DecoderState::Idle {
            return None;
        }

        self.timeout = self.timeout.saturating_sub(1);
        if self.timeout > 0 {
            return None;
        }

        self.finish();
        display.flag_error();
        Some(InputFault::FramingTimeout)
    }

    fn finish(&mut self) {
        self.state = DecoderState::Idle;
        self.timeout = 0;
        self.accumulator = 0;
        self.position = 0;
    }
}
