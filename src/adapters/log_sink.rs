//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (the Runner wires that to `env_logger`). A future
//! bus-publishing adapter would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(mode) => {
                info!("START | initial_mode={mode:?}");
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE  | {from:?} -> {to:?}");
            }
            AppEvent::BusReceived(frame) => {
                info!("BUS RX| id=0x{:X} value={:.2}", frame.id, frame.value);
            }
            AppEvent::TickSummary(t) => {
                info!(
                    "TICK  | mode={:?} | ignition={} | T={:.2}\u{00b0}C | \
                     duty={}% (pump={}% fan={}%)",
                    t.mode,
                    if t.ignition { "ON" } else { "OFF" },
                    t.temperature_c,
                    t.commanded_duty,
                    t.pump_duty,
                    t.fan_duty,
                );
            }
        }
    }
}
