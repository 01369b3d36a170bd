//! Main-loop engine
//!
//! Owns everything the main loop mutates and advances it by one
//! micro-step per [`Engine::tick`]. Interrupt-written state lives in
//! [`Shared`] and is passed in on every call.
//!
//! While a frame is being received, draining the bit queue comes first and
//! refresh ticks only feed the watchdog: the display may go dark for a few
//! milliseconds, but a lost input bit cannot be recovered.

use segmux_hal::{DelayUs, ModePin, OutputPin, PeriodicTimer, PinMode};

use crate::config::{Config, ConfigError};
use crate::decoder::{DecodeEvent, DecoderState, InputDecoder};
use crate::display::DisplayValue;
use crate::multiplexer::{DisplayMultiplexer, OutputLines};
use crate::sender::SenderStatus;
use crate::shared::Shared;

/// What the engine is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Refreshing the display
    Display,
    /// Announce edge seen, frame not started by the main loop yet
    Armed,
    /// Decoding a frame; display refresh suspended
    Receiving,
}

/// Display and input state machines with their output lines
pub struct Engine<S, K, C, D> {
    lines: OutputLines<S, K, C, D>,
    config: Config,
    display: DisplayValue,
    multiplexer: DisplayMultiplexer,
    decoder: InputDecoder,
}

impl<S, K, C, D> Engine<S, K, C, D>
where
    S: OutputPin + ModePin,
    K: OutputPin + ModePin,
    C: OutputPin + ModePin,
    D: DelayUs,
{
    /// Create an engine, rejecting configurations the hardware cannot run
    pub fn new(lines: OutputLines<S, K, C, D>, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            lines,
            config,
            display: DisplayValue::new(),
            multiplexer: DisplayMultiplexer::new(&config),
            decoder: InputDecoder::new(&config),
        })
    }

    /// Configure the lines and start the refresh timer
    ///
    /// Call once, before enabling the edge interrupt.
    pub fn setup<T: PeriodicTimer>(&mut self, shared: &Shared, timer: &mut T) -> Result<(), T::Error> {
        self.lines.ser.set_mode(PinMode::Output);
        self.lines.srclk.set_mode(PinMode::Output);
        self.lines.cnt.set_mode(PinMode::Output);

        shared.reset();
        timer.start_periodic(self.config.refresh_period_us)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "segmux: {} digits, refresh every {} us",
            self.config.digits,
            self.config.refresh_period_us
        );

        Ok(())
    }

    /// Run one main-loop iteration
    pub fn tick(&mut self, shared: &Shared) -> Mode {
        if shared.input_mode() {
            self.receive(shared)
        } else {
            self.refresh(shared);
            Mode::Display
        }
    }

    /// Mode as of the last interrupt
    pub fn mode(&self, shared: &Shared) -> Mode {
        match (shared.input_mode(), self.decoder.state()) {
            (false, _) => Mode::Display,
            (true, DecoderState::Idle) => Mode::Armed,
            (true, DecoderState::Accumulating) => Mode::Receiving,
        }
    }

    /// Value on (or being written to) the display
    pub fn display(&self) -> &DisplayValue {
        &self.display
    }

    /// Input decoder state
    pub fn decoder(&self) -> &InputDecoder {
        &self.decoder
    }

    /// Glyph cursor and transfer state
    pub fn multiplexer(&self) -> &DisplayMultiplexer {
        &self.multiplexer
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give the output lines back
    pub fn release(self) -> OutputLines<S, K, C, D> {
        self.lines
    }

    fn refresh(&mut self, shared: &Shared) {
        if self.multiplexer.step(&mut self.lines) != SenderStatus::Finished {
            return;
        }

        if shared.take_refresh() {
            self.multiplexer
                .send_next_glyph(&mut self.lines, &self.display);
        }
    }

    fn receive(&mut self, shared: &Shared) -> Mode {
        if self.decoder.state() == DecoderState::Idle {
            self.decoder.begin(&mut self.display);

            #[cfg(feature = "defmt")]
            defmt::debug!("input frame started");
        }

        while let Some(bit) = shared.queue().read() {
            match self.decoder.push_bit(bit, &mut self.display) {
                DecodeEvent::FrameComplete => {
                    shared.end_input();

                    #[cfg(feature = "defmt")]
                    defmt::info!("input frame complete: {}", self.display.reading(self.config.digits));

                    // Skip the watchdog below; it must not run on an idle decoder
                    return Mode::Display;
                }
                DecodeEvent::Rejected(_fault) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("input field dropped: {}", _fault);
                }
                DecodeEvent::Pending | DecodeEvent::Digit(_) => {}
            }
        }

        if shared.take_refresh() {
            if let Some(_fault) = self.decoder.tick(&mut self.display) {
                shared.end_input();

                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "input frame abandoned after {} digits: {}",
                    self.decoder.digit_count(),
                    _fault
                );

                return Mode::Display;
            }
        }

        Mode::Receiving
    }
}
