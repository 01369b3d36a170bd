//! Board-agnostic core of the multiplexed display firmware
//!
//! This crate contains everything between the pins and the entry point:
//!
//! - Bit queue shared between the edge interrupt and the main loop
//! - Step-wise shift register sender
//! - Glyph matching (which digits light for a segment pattern)
//! - Display multiplexer driving the register chain
//! - Serial input decoder with its watchdog
//! - Interrupt handler entry points and the per-iteration engine
//!
//! Nothing here blocks. Each call to [`engine::Engine::tick`] advances one
//! state machine by one micro-step, so the main loop stays responsive to
//! the input stream while the display keeps refreshing.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod decoder;
pub mod display;
pub mod engine;
pub mod glyph;
pub mod multiplexer;
pub mod queue;
pub mod sender;
pub mod shared;

#[cfg(test)]
mod mock;

pub use config::{Config, ConfigError};
pub use decoder::{DecodeEvent, DecoderState, InputDecoder, InputFault};
pub use display::DisplayValue;
pub use engine::{Engine, Mode};
pub use glyph::{glyph_match_mask, glyph_matches};
pub use multiplexer::{DisplayMultiplexer, OutputLines};
pub use queue::BitQueue;
pub use sender::{SenderStatus, ShiftRegisterSender};
pub use shared::Shared;
