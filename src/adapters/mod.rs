//! Simulation adapters behind the port boundary.
//!
//! These stand in for the vehicle: a simulated rig (ignition, coolant
//! temperature drift, duty-cycle storage), a bounded bus channel, and a
//! log-based event sink. The control core only ever sees the port traits
//! in [`crate::app::ports`].

pub mod log_sink;
pub mod sim_bus;
pub mod sim_rig;
