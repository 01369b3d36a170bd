//! Value currently shown on the display
//!
//! Digits are stored as one decimal integer, one place per physical
//! position, with position 0 in the ones place. Position 0 is the leftmost
//! digit on the board, so the integer reads backwards compared to the
//! display: showing "1234" stores 4321. [`DisplayValue::reading`] gives the
//! left-to-right number.

use segmux_protocol::DigitField;

/// Dot mask raised when an input frame times out (leftmost decimal point)
pub const ERROR_DOT_MASK: u8 = 0b0000_0001;

/// Digits and decimal points to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValue {
    value: u32,
    dots: u8,
}

impl DisplayValue {
    /// Blank value (all zeros, no dots)
    pub const fn new() -> Self {
        Self { value: 0, dots: 0 }
    }

    /// Decimal accumulator, position 0 in the ones place
    pub fn raw(&self) -> u32 {
        self.value
    }

    /// Decimal-point mask, bit `n` for position `n`
    pub fn dots(&self) -> u8 {
        self.dots
    }

    /// Digit at `position`
    pub fn digit(&self, position: u8) -> u8 {
        match 10u32.checked_pow(position as u32) {
            Some(place) => ((self.value / place) % 10) as u8,
            None => 0,
        }
    }

    /// Check the decimal point at `position`
    pub fn has_dot(&self, position: u8) -> bool {
        position < 8 && self.dots & (1 << position) != 0
    }

    /// The number as read on a display of `digits` positions
    pub fn reading(&self, digits: u8) -> u32 {
        (0..digits).fold(0, |acc, position| acc * 10 + self.digit(position) as u32)
    }

    /// Reset to zero with no dots
    pub fn clear(&mut self) {
        self.value = 0;
        self.dots = 0;
    }

    /// Add a received digit at `position`
    ///
    /// The position must still hold zero, which it does while a frame is
    /// being filled from a cleared value.
    pub fn place(&mut self, position: u8, field: DigitField) {
        if field.dot() {
            self.mark_dot(position);
        }
        self.value += field.digit() as u32 * pow10(position);
    }

    /// Light the decimal point at `position` without touching the digits
    ///
    /// Positions past the dot mask are ignored.
    pub fn mark_dot(&mut self, position: u8) {
        if position < 8 {
            self.dots |= 1 << position;
        }
    }

    /// Replace the dots with the error indicator
    pub fn flag_error(&mut self) {
        self.dots = ERROR_DOT_MASK;
    }
}

fn pow10(exponent: u8) -> u32 {
    10u32.pow(exponent as u32)
}
