//! Outbound application events.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits these through
//! the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them — log to the console, record
//! for assertions in tests, and so on.

use crate::bus::Frame;
use crate::fsm::Mode;

/// Structured events emitted by the control core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The control loop has started (carries the initial mode).
    Started(Mode),

    /// The state machine transitioned between modes.
    ModeChanged { from: Mode, to: Mode },

    /// An inbound bus frame was drained from the telemetry channel.
    BusReceived(Frame),

    /// End-of-tick summary.
    TickSummary(TickReport),
}

/// A point-in-time summary of one control tick.
#[derive(Debug, Clone, Copy)]
pub struct TickReport {
    pub mode: Mode,
    pub ignition: bool,
    pub temperature_c: f32,
    /// Duty the loop commanded this tick (applied to pump and fan alike).
    pub commanded_duty: u8,
    /// Pump duty as read back at the start of the tick.
    pub pump_duty: u8,
    /// Fan duty as read back at the start of the tick.
    pub fan_duty: u8,
}
