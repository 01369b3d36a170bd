//! Simulated board for host tests
//!
//! Output lines share one [`Trace`] that models the register chain: a
//! rising shift clock shifts the data level in, and a falling count line
//! ends the glyph cycle and records the byte that was shifted.

use core::cell::RefCell;

use heapless::Vec;
use segmux_hal::{DelayUs, InputPin, ModePin, OutputPin, PeriodicTimer, PinMode};

/// Output line of the register chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Ser,
    Srclk,
    Cnt,
}

/// Everything the simulated register chain saw
pub struct Trace {
    pub ser: bool,
    pub srclk: bool,
    pub cnt: bool,
    /// Bits shifted in since the last completed cycle
    pub shift: u8,
    pub clocked_bits: u32,
    /// Digit-select bytes of completed glyph cycles
    pub bytes: Vec<u8, 256>,
    /// Count-line pulses with no byte shifted (blank slot)
    pub reset_pulses: u32,
    pub cnt_rises: u32,
    pub outputs_configured: u8,
    pub writes: u32,
    pub delay_us: u32,
}

impl Trace {
    pub fn new() -> Self {
        Self {
            ser: false,
            srclk: false,
            cnt: false,
            shift: 0,
            clocked_bits: 0,
            bytes: Vec::new(),
            reset_pulses: 0,
            cnt_rises: 0,
            outputs_configured: 0,
            writes: 0,
            delay_us: 0,
        }
    }

    fn drive(&mut self, line: Line, level: bool) {
        self.writes += 1;
        match line {
            Line::Ser => self.ser = level,
            Line::Srclk => {
                if !self.srclk && level {
                    self.shift = (self.shift << 1) | self.ser as u8;
                    self.clocked_bits += 1;
                }
                self.srclk = level;
            }
            Line::Cnt => {
                if !self.cnt && level {
                    self.cnt_rises += 1;
                }
                if self.cnt && !level {
                    if self.clocked_bits == 0 {
                        self.reset_pulses += 1;
                    } else {
                        let _ = self.bytes.push(self.shift);
                        self.clocked_bits = 0;
                    }
                }
                self.cnt = level;
            }
        }
    }

    fn level(&self, line: Line) -> bool {
        match line {
            Line::Ser => self.ser,
            Line::Srclk => self.srclk,
            Line::Cnt => self.cnt,
        }
    }
}

/// Output pin wired into a [`Trace`]
pub struct MockLine<'a> {
    trace: &'a RefCell<Trace>,
    line: Line,
}

impl<'a> MockLine<'a> {
    pub fn new(trace: &'a RefCell<Trace>, line: Line) -> Self {
        Self { trace, line }
    }
}

impl OutputPin for MockLine<'_> {
    fn set_high(&mut self) {
        self.trace.borrow_mut().drive(self.line, true);
    }

    fn set_low(&mut self) {
        self.trace.borrow_mut().drive(self.line, false);
    }

    fn is_set_high(&self) -> bool {
        self.trace.borrow().level(self.line)
    }
}

impl ModePin for MockLine<'_> {
    fn set_mode(&mut self, mode: PinMode) {
        if mode == PinMode::Output {
            self.trace.borrow_mut().outputs_configured += 1;
        }
    }
}

/// Delay that only records how long it was asked to wait
pub struct MockDelay<'a> {
    trace: &'a RefCell<Trace>,
}

impl<'a> MockDelay<'a> {
    pub fn new(trace: &'a RefCell<Trace>) -> Self {
        Self { trace }
    }
}

impl DelayUs for MockDelay<'_> {
    fn delay_us(&mut self, us: u32) {
        self.trace.borrow_mut().delay_us += us;
    }
}

/// Input data line with a settable level
pub struct MockInput {
    pub high: bool,
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> bool {
        self.high
    }
}

/// Timer that records the period it was started with
pub struct MockTimer {
    pub period_us: Option<u32>,
    pub fail: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PeriodOutOfRange;

impl PeriodicTimer for MockTimer {
    type Error = PeriodOutOfRange;

    fn start_periodic(&mut self, period_us: u32) -> Result<(), PeriodOutOfRange> {
        if self.fail {
            return Err(PeriodOutOfRange);
        }
        self.period_us = Some(period_us);
        Ok(())
    }
}
