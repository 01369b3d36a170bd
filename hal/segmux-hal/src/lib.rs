//! Segmux Hardware Abstraction Layer
//!
//! This crate defines the few hardware primitives the display core needs:
//! named digital lines that can be driven, read and switched between
//! input and output, a periodic timer raising a tick interrupt, and a
//! short blocking delay for sub-microsecond pulses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware entry point / simulator       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmux-core (state machines)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segmux-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  any embedded-hal 1.0 implementation    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::ModePin`] - Digital I/O
//! - [`timer::PeriodicTimer`] - Refresh tick source
//! - [`delay::DelayUs`] - Pulse widths

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod embedded;
pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use delay::DelayUs;
pub use gpio::{InputPin, ModePin, OutputPin, PinMode};
pub use timer::PeriodicTimer;
