//! Control loop — the per-tick orchestrator.
//!
//! [`ControlLoop`] owns the state machine and the PID controller and
//! exposes a single [`tick`](ControlLoop::tick) entry point. All I/O
//! flows through port traits injected at the call site, making the whole
//! loop testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      ControlLoop        │
//! ActuatorPort ◀──│  StateMachine · PID     │◀──▶ TelemetryPort
//!                 └────────────────────────┘
//! ```

use log::info;

use crate::bus::{Frame, id};
use crate::config::SystemConfig;
use crate::control::pid::PidController;
use crate::error::Result;
use crate::fsm::{Mode, StateMachine};

use super::events::{AppEvent, TickReport};
use super::ports::{ActuatorPort, EventSink, SensorPort, TelemetryPort};

/// Orchestrates one control cycle per invocation. The external Runner
/// owns the cadence; nothing here sleeps, blocks, or fails mid-tick.
pub struct ControlLoop {
    fsm: StateMachine,
    pid: PidController,
    standby_duty: u8,
    tick_count: u64,
}

impl ControlLoop {
    /// Construct from configuration. The only failure mode is a fatal
    /// configuration fault, in which case the system never starts.
    pub fn new(config: &SystemConfig) -> Result<Self> {
        config.validate()?;
        let pid = PidController::new(
            config.kp,
            config.ki,
            config.kd,
            config.setpoint_c,
            config.loop_period_secs,
        )?;
        Ok(Self {
            fsm: StateMachine::new(config),
            pid,
            standby_duty: config.standby_duty_percent,
            tick_count: 0,
        })
    }

    /// Announce startup through the event sink.
    pub fn start(&self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.fsm.mode()));
        info!("control loop started in {:?}", self.fsm.mode());
    }

    /// Run one full control cycle: sense → transition → actuate → report.
    ///
    /// The `hw` parameter satisfies both [`SensorPort`] and
    /// [`ActuatorPort`] — one simulated device serves both directions.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        bus: &mut impl TelemetryPort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Sense. Duty read-back feeds telemetry only, never mode logic.
        let ignition = hw.read_ignition();
        let temperature = hw.read_temperature();
        let pump_before = hw.pump_duty();
        let fan_before = hw.fan_duty();

        // 2. Mode selection.
        let prev_mode = self.fsm.mode();
        let step = self.fsm.update(ignition, temperature);
        if step.changed {
            if prev_mode == Mode::Cooling {
                // Discard this episode's windup before the next one.
                self.pid.reset();
            }
            sink.emit(&AppEvent::ModeChanged {
                from: prev_mode,
                to: step.mode,
            });
        }

        // 3. Dispatch one scalar duty for both pump and fan. Off and
        // Overheat use the mode baselines; Standby uses the configured
        // dispatch value (which wins over the baseline table's 10);
        // Cooling defers to the PID.
        let duty = match step.mode {
            Mode::Off | Mode::Overheat => f32::from(step.targets.pump_duty),
            Mode::Standby => f32::from(self.standby_duty),
            Mode::Cooling => self.pid.compute(temperature),
        };
        let duty = duty.round() as u8;
        hw.set_pump_duty(duty);
        hw.set_fan_duty(duty);

        // 4. Publish telemetry. Best-effort: a full bus drops its oldest.
        bus.send(Frame::new(id::TEMPERATURE, temperature));
        bus.send(Frame::new(id::PUMP_DUTY, f32::from(pump_before)));
        bus.send(Frame::new(id::FAN_DUTY, f32::from(fan_before)));

        // 5. Drain inbound frames. Stops immediately at empty.
        while let Some(frame) = bus.try_receive() {
            sink.emit(&AppEvent::BusReceived(frame));
        }

        // 6. Tick summary.
        sink.emit(&AppEvent::TickSummary(TickReport {
            mode: step.mode,
            ignition,
            temperature_c: temperature,
            commanded_duty: duty,
            pump_duty: pump_before,
            fan_duty: fan_before,
        }));
    }

    /// Currently active mode.
    pub fn mode(&self) -> Mode {
        self.fsm.mode()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
