//! System configuration parameters
//!
//! All tunable parameters for the cooling controller and the simulated
//! rig. Values can be overridden from a JSON file passed to the Runner.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- PID ---
    /// Proportional gain
    pub kp: f32,
    /// Integral gain
    pub ki: f32,
    /// Derivative gain
    pub kd: f32,
    /// Target coolant temperature (Celsius) while actively cooling
    pub setpoint_c: f32,

    // --- Mode thresholds ---
    /// Temperature (Celsius) at which active cooling engages
    pub cooling_threshold_c: f32,
    /// Temperature (Celsius) at which the overheat mode engages
    pub overheat_threshold_c: f32,

    // --- Dispatch ---
    /// Duty cycle (0-100%) commanded while in Standby
    pub standby_duty_percent: u8,

    // --- Timing ---
    /// Control loop period (seconds); also the PID integration step
    pub loop_period_secs: f32,

    // --- Simulation rig ---
    /// Initial coolant temperature (Celsius)
    pub initial_temperature_c: f32,
    /// Ignition switch toggles every N sensor reads
    pub ignition_toggle_ticks: u32,
    /// Temperature rise per read with ignition on (Celsius)
    pub heat_rate_c: f32,
    /// Temperature fall per read with ignition off (Celsius)
    pub cool_rate_c: f32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // PID
            kp: 2.1,
            ki: 0.01,
            kd: 0.005,
            setpoint_c: 70.0,

            // Thresholds
            cooling_threshold_c: 70.0,
            overheat_threshold_c: 90.0,

            // Dispatch
            standby_duty_percent: 15,

            // Timing
            loop_period_secs: 1.0,

            // Simulation
            initial_temperature_c: 20.0,
            ignition_toggle_ticks: 5,
            heat_rate_c: 0.5,
            cool_rate_c: 0.2,
        }
    }
}

impl SystemConfig {
    /// Validate the configuration. Any failure here is fatal: the
    /// controller refuses to start rather than run with a bad gain or a
    /// zero integration step.
    pub fn validate(&self) -> Result<()> {
        for (gain, name) in [
            (self.kp, "kp must be finite and non-negative"),
            (self.ki, "ki must be finite and non-negative"),
            (self.kd, "kd must be finite and non-negative"),
        ] {
            if !gain.is_finite() || gain < 0.0 {
                return Err(Error::Config(name));
            }
        }
        if !self.setpoint_c.is_finite() {
            return Err(Error::Config("setpoint must be finite"));
        }
        if !self.loop_period_secs.is_finite() || self.loop_period_secs <= 0.0 {
            return Err(Error::Config("loop period must be positive"));
        }
        if !self.cooling_threshold_c.is_finite() || !self.overheat_threshold_c.is_finite() {
            return Err(Error::Config("mode thresholds must be finite"));
        }
        if self.cooling_threshold_c >= self.overheat_threshold_c {
            return Err(Error::Config(
                "cooling threshold must be below overheat threshold",
            ));
        }
        if self.standby_duty_percent > 100 {
            return Err(Error::Config("standby duty must be 0-100"));
        }
        if self.ignition_toggle_ticks == 0 {
            return Err(Error::Config("ignition toggle period must be non-zero"));
        }
        Ok(())
    }
}
