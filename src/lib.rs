//! CoolSim library.
//!
//! Closed-loop thermal controller for a simulated vehicle cooling
//! subsystem. The domain core (`fsm`, `control`, `app`) is pure logic
//! behind port traits; the simulation adapters and the Runner binary
//! live on the outside of that boundary.

#![deny(unused_must_use)]

pub mod app;
pub mod bus;
pub mod config;
pub mod control;
pub mod fsm;

mod error;
pub use error::{Error, Result};

pub mod adapters;
