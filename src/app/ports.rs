//! Port traits — the boundary between the control core and the outside.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (the simulated rig, the bus, event sinks) implement
//! these traits. The [`ControlLoop`](super::service::ControlLoop)
//! consumes them via generics, so the core never touches the simulation
//! directly.
//!
//! Range discipline: out-of-range values are clamped on the adapter side
//! of this boundary. The core treats every reading as ground truth and
//! never re-validates.

use crate::bus::Frame;

// ───────────────────────────────────────────────────────────────
// Sensor port (rig → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the control loop calls this to sense the vehicle.
pub trait SensorPort {
    /// Current ignition switch state.
    fn read_ignition(&mut self) -> bool;

    /// Current coolant temperature in degrees Celsius.
    fn read_temperature(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (domain → rig)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the control loop commands pump and fan through this.
///
/// Implementations clamp duty values above 100; the core does not.
pub trait ActuatorPort {
    fn set_pump_duty(&mut self, duty: u8);
    fn set_fan_duty(&mut self, duty: u8);

    /// Last applied pump duty (0-100). Used for telemetry only.
    fn pump_duty(&self) -> u8;
    /// Last applied fan duty (0-100). Used for telemetry only.
    fn fan_duty(&self) -> u8;
}

// ───────────────────────────────────────────────────────────────
// Telemetry port (domain ↔ vehicle bus)
// ───────────────────────────────────────────────────────────────

/// Bounded, non-blocking bus channel.
pub trait TelemetryPort {
    /// Best-effort publish of an outbound frame. Must never block; a
    /// full channel drops its oldest frame.
    fn send(&mut self, frame: Frame);

    /// Pop the next inbound frame, `None` when empty. FIFO order.
    fn try_receive(&mut self) -> Option<Frame>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The control loop emits structured
/// [`AppEvent`](super::events::AppEvent)s through this port. Adapters
/// decide where they go (serial log, recorded history in tests, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
