//! Frames: one complete value for the display
//!
//! A frame is an ordered list of digit fields, leftmost digit first. The
//! receiver does not know the frame length from the wire; it stops after its
//! own configured digit count, so senders should send exactly that many.

use heapless::Vec;

use crate::field::DigitField;

/// Maximum digits in a frame (one digit-select byte)
pub const MAX_DIGITS: usize = 8;

/// Errors that can occur while building a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// No digits given
    Empty,
    /// More than [`MAX_DIGITS`] digits
    TooManyDigits,
    /// Text contained something other than digits and dots
    InvalidCharacter(char),
    /// A dot with no digit before it, or two dots on one digit
    MisplacedDot,
}

/// One clock edge on the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// First edge of a frame, carries no data
    Announce,
    /// Data line level to present for this edge
    Data(bool),
}

/// A complete display value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    fields: Vec<DigitField, MAX_DIGITS>,
}

impl Frame {
    /// Create a frame from fields, leftmost digit first
    pub fn new(fields: &[DigitField]) -> Result<Self, FrameError> {
        if fields.is_empty() {
            return Err(FrameError::Empty);
        }

        let mut vec = Vec::new();
        vec.extend_from_slice(fields)
            .map_err(|_| FrameError::TooManyDigits)?;

        Ok(Self { fields: vec })
    }

    /// Parse display text such as `"12.34"`
    ///
    /// A dot lights the decimal point of the digit before it.
    pub fn parse(text: &str) -> Result<Self, FrameError> {
        let mut fields: Vec<DigitField, MAX_DIGITS> = Vec::new();

        for ch in text.chars() {
            match ch {
                '0'..='9' => {
                    let field = DigitField::new(ch as u8 - b'0', false)
                        .map_err(|_| FrameError::InvalidCharacter(ch))?;
                    fields.push(field).map_err(|_| FrameError::TooManyDigits)?;
                }
                '.' => {
                    let last = fields.last_mut().ok_or(FrameError::MisplacedDot)?;
                    if last.dot() {
                        return Err(FrameError::MisplacedDot);
                    }
                    *last = DigitField::new(last.digit(), true)
                        .map_err(|_| FrameError::InvalidCharacter(ch))?;
                }
                _ => return Err(FrameError::InvalidCharacter(ch)),
            }
        }

        if fields.is_empty() {
            return Err(FrameError::Empty);
        }

        Ok(Self { fields })
    }

    /// Digit fields, leftmost first
    pub fn fields(&self) -> &[DigitField] {
        &self.fields
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Frames always hold at least one digit
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Clock edges a sender must produce, in order
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            fields: &self.fields,
            announced: false,
            field: 0,
            bit: 0,
        }
    }
}

/// Iterator over the edges of a frame
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    fields: &'a [DigitField],
    announced: bool,
    field: usize,
    bit: u8,
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        if !self.announced {
            self.announced = true;
            return Some(Edge::Announce);
        }

        let raw = self.fields.get(self.field)?.encode();
        let level = raw & (1 << self.bit) != 0;

        self.bit += 1;
        if self.bit == crate::field::FIELD_BITS {
            self.bit = 0;
            self.field += 1;
        }

        Some(Edge::Data(level))
    }
}
