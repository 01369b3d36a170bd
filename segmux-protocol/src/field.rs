//! 5-bit digit field
//!
//! The only place that knows how a digit and its decimal point are packed
//! on the wire.

/// Bits per digit field on the wire
pub const FIELD_BITS: u8 = 5;

/// Decimal-point flag (bit 4)
pub const DOT_FLAG: u8 = 0b1_0000;

/// Binary-coded value (bits 0-3)
pub const VALUE_MASK: u8 = 0b0_1111;

/// Errors that can occur when building or decoding a digit field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// Value bits hold something other than 0-9
    InvalidDigit(u8),
}

/// One decimal digit with its decimal-point flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitField {
    digit: u8,
    dot: bool,
}

impl DigitField {
    /// Create a field, rejecting digits above 9
    pub const fn new(digit: u8, dot: bool) -> Result<Self, FieldError> {
        if digit > 9 {
            return Err(FieldError::InvalidDigit(digit));
        }
        Ok(Self { digit, dot })
    }

    /// Decode a received 5-bit field
    ///
    /// Bits above bit 4 are ignored.
    pub fn decode(raw: u8) -> Result<Self, FieldError> {
        Self::new(raw & VALUE_MASK, raw & DOT_FLAG != 0)
    }

    /// Pack into the 5-bit wire representation
    pub fn encode(self) -> u8 {
        if self.dot {
            self.digit | DOT_FLAG
        } else {
            self.digit
        }
    }

    /// Decimal value, 0-9
    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// Whether the decimal point after this digit is lit
    pub fn dot(&self) -> bool {
        self.dot
    }

    /// Wire bits in transmission order (LSB first)
    pub fn bits(self) -> impl Iterator<Item = bool> {
        let raw = self.encode();
        (0..FIELD_BITS).map(move |i| raw & (1 << i) != 0)
    }
}
