//! State shared with interrupt handlers
//!
//! Two interrupts feed the main loop:
//!
//! - the input clock edge, which announces a frame and then delivers one
//!   data bit per edge
//! - the refresh timer compare match, which requests the next glyph
//!
//! Both handlers only store a flag or push one bit. Anything slower would
//! eat into the timing of the bit-banged register transfer.
//!
//! Each field has a single writer per direction: `refresh_needed` is set by
//! the timer and cleared by the main loop, `input_mode` is set by the edge
//! interrupt and cleared by the main loop, and the queue indices belong to
//! one side each. Only loads and stores are used, so this works on cores
//! without compare-and-swap.

use portable_atomic::{AtomicBool, Ordering};
use segmux_hal::InputPin;

use crate::queue::BitQueue;

/// Flags and bit queue written from interrupt context
///
/// `const`-constructible so firmware can keep it in a `static`.
pub struct Shared {
    queue: BitQueue,
    refresh_needed: AtomicBool,
    input_mode: AtomicBool,
}

impl Default for Shared {
    fn default() -> Self {
        Self::new()
    }
}

impl Shared {
    /// Create shared state with no pending work
    pub const fn new() -> Self {
        Self {
            queue: BitQueue::new(),
            refresh_needed: AtomicBool::new(false),
            input_mode: AtomicBool::new(false),
        }
    }

    /// Input clock edge handler
    ///
    /// The first edge only switches to input mode. Every later edge
    /// samples the data line into the queue.
    pub fn on_edge<P: InputPin>(&self, data: &mut P) {
        if !self.input_mode.load(Ordering::Acquire) {
            self.input_mode.store(true, Ordering::Release);
        } else {
            self.queue.write(data.is_high());
        }
    }

    /// Refresh timer compare-match handler
    pub fn on_timer(&self) {
        self.refresh_needed.store(true, Ordering::Release);
    }

    /// Check whether a frame is being received
    pub fn input_mode(&self) -> bool {
        self.input_mode.load(Ordering::Acquire)
    }

    /// Check for a pending refresh tick without consuming it
    pub fn refresh_pending(&self) -> bool {
        self.refresh_needed.load(Ordering::Acquire)
    }

    /// Bits received from the edge interrupt
    pub fn queue(&self) -> &BitQueue {
        &self.queue
    }

    /// Consume a pending refresh tick
    ///
    /// A tick landing between the load and the store is merged with the
    /// one being consumed.
    pub(crate) fn take_refresh(&self) -> bool {
        if !self.refresh_needed.load(Ordering::Acquire) {
            return false;
        }
        self.refresh_needed.store(false, Ordering::Release);
        true
    }

    /// Leave input mode, dropping any bits that were not decoded
    ///
    /// The flag is cleared first: an edge landing between the two stores
    /// then announces a new frame instead of leaving a stale data bit.
    pub(crate) fn end_input(&self) {
        self.input_mode.store(false, Ordering::Release);
        self.queue.discard();
    }

    /// Startup state: display mode, empty queue, first refresh due now
    pub(crate) fn reset(&self) {
        self.queue.reset();
        self.input_mode.store(false, Ordering::Release);
        self.refresh_needed.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockInput;

    #[test]
    fn test_first_edge_only_announces() {
        let shared = Shared::new();
        let mut data = MockInput { high: true };

        shared.on_edge(&mut data);
        assert!(shared.input_mode());
        assert!(shared.queue().is_empty());
    }

    #[test]
    fn test_later_edges_sample_data_line() {
        let shared = Shared::new();
        let mut data = MockInput { high: false };

        shared.on_edge(&mut data);
        shared.on_edge(&mut data);
        data.high = true;
        shared.on_edge(&mut data);

        assert_eq!(shared.queue().read(), Some(false));
        assert_eq!(shared.queue().read(), Some(true));
        assert_eq!(shared.queue().read(), None);
    }

    #[test]
    fn test_timer_sets_refresh_flag_once() {
        let shared = Shared::new();
        assert!(!shared.take_refresh());

        shared.on_timer();
        shared.on_timer();
        assert!(shared.refresh_pending());
        assert!(shared.take_refresh());
        assert!(!shared.take_refresh());
    }

    #[test]
    fn test_end_input_returns_to_announce() {
        let shared = Shared::new();
        let mut data = MockInput { high: true };

        shared.on_edge(&mut data);
        shared.on_edge(&mut data);
        shared.end_input();

        assert!(!shared.input_mode());
        assert!(shared.queue().is_empty());

        // The next edge announces a new frame rather than carrying data
        shared.on_edge(&mut data);
        assert!(shared.input_mode());
        assert!(shared.queue().is_empty());
    }

    #[test]
    fn test_reset_requests_first_refresh() {
        let shared = Shared::new();
        shared.reset();
        assert!(shared.refresh_pending());
        assert!(!shared.input_mode());
    }

    #[test]
    fn test_edge_during_end_input_announces() {
        let shared = Shared::new();
        let mut data = MockInput { high: true };

        shared.on_edge(&mut data);
        shared.on_edge(&mut data);

        // end_input() split at the point where the edge interrupt fires
        shared.input_mode.store(false, Ordering::Release);
        shared.on_edge(&mut data);
        shared.queue.discard();

        assert!(shared.input_mode());
        assert!(shared.queue().is_empty());

        // The following edge is the first data bit of the new frame
        data.high = false;
        shared.on_edge(&mut data);
        assert_eq!(shared.queue().read(), Some(false));
        assert_eq!(shared.queue().read(), None);
    }
}
