//! Simulated vehicle rig — ignition switch, coolant drift, duty storage.
//!
//! Implements both [`SensorPort`] and [`ActuatorPort`] so one device
//! serves the loop's read and write sides. The simulation model: the
//! ignition switch toggles every N reads, and the coolant heats while
//! the ignition is on and cools while it is off, so every mode of the
//! state machine gets exercised over a run.
//!
//! Range clamps live here, on the adapter side of the port boundary:
//! temperature stays inside [20, 100] °C and duty writes above 100 are
//! capped. The core never re-validates.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::config::SystemConfig;

const TEMP_MIN_C: f32 = 20.0;
const TEMP_MAX_C: f32 = 100.0;

/// Simulated sensor/actuator device.
pub struct SimRig {
    ignition: bool,
    temperature_c: f32,
    pump_duty: u8,
    fan_duty: u8,

    toggle_ticks: u32,
    heat_rate_c: f32,
    cool_rate_c: f32,
    read_count: u32,
}

impl SimRig {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            ignition: false,
            temperature_c: config.initial_temperature_c.clamp(TEMP_MIN_C, TEMP_MAX_C),
            pump_duty: 0,
            fan_duty: 0,
            toggle_ticks: config.ignition_toggle_ticks.max(1),
            heat_rate_c: config.heat_rate_c,
            cool_rate_c: config.cool_rate_c,
            read_count: 0,
        }
    }

    /// Override the coolant temperature, clamped to the simulated range.
    pub fn set_temperature(&mut self, temp_c: f32) {
        self.temperature_c = temp_c.clamp(TEMP_MIN_C, TEMP_MAX_C);
    }

    pub fn temperature(&self) -> f32 {
        self.temperature_c
    }

    pub fn ignition(&self) -> bool {
        self.ignition
    }
}

impl SensorPort for SimRig {
    fn read_ignition(&mut self) -> bool {
        self.read_count = self.read_count.wrapping_add(1);
        if self.read_count % self.toggle_ticks == 0 {
            self.ignition = !self.ignition;
        }
        self.ignition
    }

    fn read_temperature(&mut self) -> f32 {
        if self.ignition {
            self.temperature_c += self.heat_rate_c;
        } else {
            self.temperature_c -= self.cool_rate_c;
        }
        self.temperature_c = self.temperature_c.clamp(TEMP_MIN_C, TEMP_MAX_C);
        self.temperature_c
    }
}

impl ActuatorPort for SimRig {
    fn set_pump_duty(&mut self, duty: u8) {
        self.pump_duty = duty.min(100);
    }

    fn set_fan_duty(&mut self, duty: u8) {
        self.fan_duty = duty.min(100);
    }

    fn pump_duty(&self) -> u8 {
        self.pump_duty
    }

    fn fan_duty(&self) -> u8 {
        self.fan_duty
    }
}
