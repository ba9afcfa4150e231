//! PID controller for the active-cooling duty cycle.
//!
//! Error-integrating controller driving pump/fan duty toward the coolant
//! setpoint. The integration step `dt` is fixed at construction (it is
//! the control loop period), which keeps the derivative term's division
//! well-defined by construction rather than by per-call checks.

use crate::error::{Error, Result};

/// PID controller with retained error state.
pub struct PidController {
    kp: f32,
    ki: f32,
    kd: f32,
    setpoint: f32,
    dt: f32,
    integral: f32,
    prev_error: f32,
    output_min: f32,
    output_max: f32,
}

impl PidController {
    /// Construct a controller. Fails fast on a non-finite/negative gain
    /// or a non-positive `dt` — those are configuration faults, not
    /// runtime conditions.
    pub fn new(kp: f32, ki: f32, kd: f32, setpoint: f32, dt: f32) -> Result<Self> {
        for gain in [kp, ki, kd] {
            if !gain.is_finite() || gain < 0.0 {
                return Err(Error::Config("PID gains must be finite and non-negative"));
            }
        }
        if !setpoint.is_finite() {
            return Err(Error::Config("PID setpoint must be finite"));
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(Error::Config("PID dt must be positive"));
        }
        Ok(Self {
            kp,
            ki,
            kd,
            setpoint,
            dt,
            integral: 0.0,
            prev_error: 0.0,
            output_min: 0.0,
            output_max: 100.0,
        })
    }

    /// Update setpoint
    pub fn set_target(&mut self, setpoint: f32) {
        self.setpoint = setpoint;
    }

    /// Compute the duty-cycle output for the current measurement,
    /// mutating the retained error and integral.
    pub fn compute(&mut self, measurement: f32) -> f32 {
        let error = self.setpoint - measurement;

        // Proportional
        let p = self.kp * error;

        // Integral
        self.integral += error * self.dt;
        let i = self.ki * self.integral;

        // Derivative
        let derivative = (error - self.prev_error) / self.dt;
        let d = self.kd * derivative;

        self.prev_error = error;

        // Clamp output to the duty-cycle range.
        (p + i + d).clamp(self.output_min, self.output_max)
    }

    /// Reset retained error state. Called by the control loop when the
    /// system leaves active cooling, so one cooling episode's windup does
    /// not bias the next.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
    }
}
