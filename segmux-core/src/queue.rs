//! Single-producer/single-consumer bit queue
//!
//! The edge interrupt is the only writer and the main loop the only
//! reader. Each side owns one index and is the only one to store to it,
//! so neither side needs a critical section.
//!
//! The queue never refuses a write. A producer that gets 16 bits ahead of
//! the consumer laps it and the unread bits are lost; the main loop drains
//! the queue before anything else while input is active to stay clear of
//! that.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

/// Number of slots in the ring
pub const QUEUE_CAPACITY: usize = 16;

/// Fixed-capacity ring of single bits
pub struct BitQueue {
    slots: [AtomicBool; QUEUE_CAPACITY],
    write_index: AtomicU8,
    read_index: AtomicU8,
}

impl Default for BitQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl BitQueue {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            slots: [const { AtomicBool::new(false) }; QUEUE_CAPACITY],
            write_index: AtomicU8::new(0),
            read_index: AtomicU8::new(0),
        }
    }

    /// Clear both indices
    ///
    /// Touches the producer's index, so only call this while the edge
    /// interrupt cannot fire (at startup).
    pub fn reset(&self) {
        self.write_index.store(0, Ordering::Release);
        self.read_index.store(0, Ordering::Release);
    }

    /// Append a bit (producer side)
    pub fn write(&self, bit: bool) {
        let index = self.write_index.load(Ordering::Relaxed);
        self.slots[index as usize].store(bit, Ordering::Relaxed);
        self.write_index.store(next(index), Ordering::Release);
    }

    /// Take the oldest unread bit (consumer side)
    pub fn read(&self) -> Option<bool> {
        let index = self.read_index.load(Ordering::Relaxed);
        if index == self.write_index.load(Ordering::Acquire) {
            return None;
        }

        let bit = self.slots[index as usize].load(Ordering::Relaxed);
        self.read_index.store(next(index), Ordering::Release);
        Some(bit)
    }

    /// Drop every unread bit (consumer side)
    pub fn discard(&self) {
        let write = self.write_index.load(Ordering::Acquire);
        self.read_index.store(write, Ordering::Release);
    }

    /// Check whether there is nothing to read
    pub fn is_empty(&self) -> bool {
        self.read_index.load(Ordering::Relaxed) == self.write_index.load(Ordering::Acquire)
    }
}

fn next(index: u8) -> u8 {
    (index + 1) % QUEUE_CAPACITY as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(i: usize) -> bool {
        (0b1101_0110_1011_0011_u32 >> (i % 16)) & 1 != 0
    }

    #[test]
    fn test_empty_queue_reads_nothing() {
        let queue = BitQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.read(), None);
    }

    #[test]
    fn test_fifo_order_up_to_fifteen_bits() {
        let queue = BitQueue::new();
        for i in 0..15 {
            queue.write(pattern(i));
        }
        for i in 0..15 {
            assert_eq!(queue.read(), Some(pattern(i)), "bit {}", i);
        }
        assert_eq!(queue.read(), None);
    }

    #[test]
    fn test_interleaved_use_wraps_indices() {
        let queue = BitQueue::new();
        for i in 0..100 {
            queue.write(pattern(i));
            queue.write(!pattern(i));
            assert_eq!(queue.read(), Some(pattern(i)));
            assert_eq!(queue.read(), Some(!pattern(i)));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_sixteen_unread_bits_look_empty() {
        let queue = BitQueue::new();
        for _ in 0..16 {
            queue.write(true);
        }
        // The writer lapped the reader: indices are equal again
        assert!(queue.is_empty());
        assert_eq!(queue.read(), None);
    }

    #[test]
    fn test_seventeenth_bit_overwrites_first() {
        let queue = BitQueue::new();
        queue.write(false);
        for _ in 1..16 {
            queue.write(false);
        }
        queue.write(true);

        // Slot 0 now holds the 17th bit and is the only unread one
        assert_eq!(queue.read(), Some(true));
        assert_eq!(queue.read(), None);
    }

    #[test]
    fn test_discard_drops_unread_bits() {
        let queue = BitQueue::new();
        queue.write(true);
        queue.write(false);
        queue.discard();
        assert!(queue.is_empty());

        queue.write(true);
        assert_eq!(queue.read(), Some(true));
    }

    #[test]
    fn test_reset_clears_indices() {
        let queue = BitQueue::new();
        for _ in 0..5 {
            queue.write(true);
        }
        queue.reset();
        assert!(queue.is_empty());
    }
}
