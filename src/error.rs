//! Unified error type for the controller.
//!
//! A single crate-wide enum keeps the control loop's error handling
//! uniform. The only fatal category is configuration: an invalid gain or
//! a non-positive loop period is reported at construction and the system
//! refuses to start. Out-of-range sensor/actuator values are clamped at
//! the port boundary (not errors), and an empty telemetry queue is a
//! normal drain-loop terminator.

use core::fmt;

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid — fatal, reported at init.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
