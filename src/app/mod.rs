//! Application core — pure domain logic, zero I/O.
//!
//! The control loop, its event vocabulary, and the port traits that
//! separate it from the simulated hardware and bus. Everything here is
//! testable with mock adapters.

pub mod events;
pub mod ports;
pub mod service;
