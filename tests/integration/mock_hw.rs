//! Mock hardware adapter for integration tests.
//!
//! [`ScriptedRig`] replays a fixed sequence of (ignition, temperature)
//! readings and records every actuator write, so tests can assert on the
//! full command history. [`RecordingSink`] captures emitted events.

use std::collections::VecDeque;

use coolsim::app::events::AppEvent;
use coolsim::app::ports::{ActuatorPort, EventSink, SensorPort};
use coolsim::fsm::Mode;

// ── ScriptedRig ───────────────────────────────────────────────

pub struct ScriptedRig {
    script: VecDeque<(bool, f32)>,
    current: (bool, f32),
    pump: u8,
    fan: u8,
    /// Every pump duty write, in order.
    pub pump_writes: Vec<u8>,
    /// Every fan duty write, in order.
    pub fan_writes: Vec<u8>,
}

#[allow(dead_code)]
impl ScriptedRig {
    /// Replay `readings`; once exhausted, the last reading repeats.
    pub fn new(readings: &[(bool, f32)]) -> Self {
        let script: VecDeque<_> = readings.iter().copied().collect();
        let current = *readings.first().expect("script must not be empty");
        Self {
            script,
            current,
            pump: 0,
            fan: 0,
            pump_writes: Vec::new(),
            fan_writes: Vec::new(),
        }
    }

    pub fn last_pump(&self) -> Option<u8> {
        self.pump_writes.last().copied()
    }
}

impl SensorPort for ScriptedRig {
    fn read_ignition(&mut self) -> bool {
        // The loop reads ignition first each tick: advance the script here.
        if let Some(next) = self.script.pop_front() {
            self.current = next;
        }
        self.current.0
    }

    fn read_temperature(&mut self) -> f32 {
        self.current.1
    }
}

impl ActuatorPort for ScriptedRig {
    fn set_pump_duty(&mut self, duty: u8) {
        self.pump = duty.min(100);
        self.pump_writes.push(self.pump);
    }

    fn set_fan_duty(&mut self, duty: u8) {
        self.fan = duty.min(100);
        self.fan_writes.push(self.fan);
    }

    fn pump_duty(&self) -> u8 {
        self.pump
    }

    fn fan_duty(&self) -> u8 {
        self.fan
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Modes reported by tick summaries, in order.
    pub fn mode_trace(&self) -> Vec<Mode> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::TickSummary(t) => Some(t.mode),
                _ => None,
            })
            .collect()
    }

    /// Ids of drained inbound frames, in order.
    pub fn received_ids(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::BusReceived(f) => Some(f.id),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
