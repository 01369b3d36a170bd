//! Segmux Serial Input Protocol
//!
//! Values reach the display over a single data line sampled on the rising
//! edge of a clock line. There is no start byte, length or checksum:
//!
//! ```text
//!  edge:  0        1..5          6..10               5N-4..5N
//!        ┌────────┬─────────────┬─────────────┬─────┬─────────────┐
//!        │announce│ digit 0     │ digit 1     │ ... │ digit N-1   │
//!        │no data │ b0 b1 b2 b3 dot                               │
//!        └────────┴─────────────┴─────────────┴─────┴─────────────┘
//! ```
//!
//! Each digit is a 5-bit field sent least significant bit first: four bits
//! of binary-coded value (0-9) followed by the decimal-point flag. A frame
//! ends after the receiver's configured digit count, or when the receiver
//! gives up waiting.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod field;
pub mod frame;

pub use field::{DigitField, FieldError, DOT_FLAG, FIELD_BITS, VALUE_MASK};
pub use frame::{Edge, Frame, FrameError, MAX_DIGITS};
