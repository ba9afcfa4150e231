//! Simulated vehicle bus — bounded in/out frame queues.
//!
//! Implements [`TelemetryPort`] over two [`BusQueue`]s. Outbound frames
//! are logged as TX and retained for inspection; inbound frames are
//! injected by tests (or a future bus peer) through [`inject`] and
//! drained by the control loop. Both directions drop the oldest frame
//! on overflow, so neither side can ever block the tick.
//!
//! [`inject`]: SimBus::inject

use log::{debug, info};

use crate::app::ports::TelemetryPort;
use crate::bus::{BUS_QUEUE_CAP, BusQueue, Frame};

/// Simulated bounded bus channel.
#[derive(Default)]
pub struct SimBus {
    inbound: BusQueue<BUS_QUEUE_CAP>,
    outbound: BusQueue<BUS_QUEUE_CAP>,
}

impl SimBus {
    pub const fn new() -> Self {
        Self {
            inbound: BusQueue::new(),
            outbound: BusQueue::new(),
        }
    }

    /// Queue an inbound frame as if a bus peer had sent it.
    pub fn inject(&mut self, frame: Frame) {
        if self.inbound.push(frame) {
            debug!("bus rx queue full, oldest frame dropped");
        }
    }

    /// Pop the oldest retained outbound frame (inspection/testing).
    pub fn pop_outbound(&mut self) -> Option<Frame> {
        self.outbound.pop()
    }

    pub fn outbound_len(&self) -> usize {
        self.outbound.len()
    }
}

impl TelemetryPort for SimBus {
    fn send(&mut self, frame: Frame) {
        info!("bus tx: id=0x{:X} value={:.2}", frame.id, frame.value);
        if self.outbound.push(frame) {
            debug!("bus tx queue full, oldest frame dropped");
        }
    }

    fn try_receive(&mut self) -> Option<Frame> {
        self.inbound.pop()
    }
}
