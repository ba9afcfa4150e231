//! CAN-like telemetry frames and the bounded bus queue.
//!
//! A [`Frame`] is the unit flowing through the telemetry channel in both
//! directions. [`BusQueue`] is a fixed-capacity FIFO with drop-oldest
//! backpressure: when a frame arrives at a full queue, the oldest frame
//! is evicted to make room. Capacity is a const generic; the baseline
//! bus uses [`BUS_QUEUE_CAP`] slots.

use heapless::Deque;

/// Baseline queue depth for each bus direction.
pub const BUS_QUEUE_CAP: usize = 16;

/// Well-known frame identifiers published by the control loop.
pub mod id {
    /// Coolant temperature (degrees Celsius in `value`).
    pub const TEMPERATURE: u32 = 0x100;
    /// Pump duty cycle (percent in `value`).
    pub const PUMP_DUTY: u32 = 0x101;
    /// Fan duty cycle (percent in `value`).
    pub const FAN_DUTY: u32 = 0x102;
}

/// A single immutable telemetry message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub id: u32,
    pub value: f32,
}

impl Frame {
    pub const fn new(id: u32, value: f32) -> Self {
        Self { id, value }
    }
}

/// Bounded FIFO of frames with drop-oldest overflow policy.
#[derive(Debug, Default)]
pub struct BusQueue<const N: usize> {
    frames: Deque<Frame, N>,
}

impl<const N: usize> BusQueue<N> {
    pub const fn new() -> Self {
        Self {
            frames: Deque::new(),
        }
    }

    /// Enqueue a frame. When the queue is full the oldest frame is
    /// discarded first; returns `true` if that eviction happened.
    pub fn push(&mut self, frame: Frame) -> bool {
        let evicted = if self.frames.is_full() {
            self.frames.pop_front();
            true
        } else {
            false
        };
        // Cannot fail: a slot was just guaranteed above.
        let _ = self.frames.push_back(frame);
        evicted
    }

    /// Dequeue the oldest frame, or `None` when empty. Never blocks.
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop_front()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
