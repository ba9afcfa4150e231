//! Mode-selection state machine.
//!
//! Four exhaustive operating modes driven solely by the previous mode,
//! the ignition switch, and the coolant temperature:
//!
//! ```text
//!  OFF ──[ignition on]──▶ STANDBY ──[T ≥ 70]──▶ COOLING ──[T ≥ 90]──▶ OVERHEAT
//!   ▲                       │  ▲                   │  ▲                  │ │
//!   └────[ignition off]─────┘  └────[T < 70]───────┘  └───[70 ≤ T < 90]──┘ │
//!                              └───────────────[T < 70]───────────────────┘
//! ```
//!
//! Thresholds compare with `>=`/`<` so a boundary reading always selects
//! the higher-intensity mode. Ignition is only consulted from `Off` and
//! `Standby`; while cooling or overheated, only temperature can exit the
//! mode (fail-safe: the engine being switched off never cuts cooling of a
//! hot block). Each mode carries a baseline actuator target pair returned
//! as a value — the control loop, not the state machine, decides what is
//! finally written to the actuators.

use log::info;

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Mode and per-mode baseline targets
// ---------------------------------------------------------------------------

/// Operating modes of the cooling system. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Off,
    Standby,
    Cooling,
    Overheat,
}

/// Baseline pump/fan duty cycles (0-100%) for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTargets {
    pub pump_duty: u8,
    pub fan_duty: u8,
}

impl Mode {
    /// Baseline actuator targets for this mode.
    ///
    /// For `Cooling` this is only a starting point — the control loop
    /// overrides it with the PID output. For `Standby` the control loop's
    /// dispatch value wins as well.
    pub const fn targets(self) -> ModeTargets {
        match self {
            Self::Off => ModeTargets {
                pump_duty: 0,
                fan_duty: 0,
            },
            Self::Standby => ModeTargets {
                pump_duty: 10,
                fan_duty: 10,
            },
            Self::Cooling => ModeTargets {
                pump_duty: 60,
                fan_duty: 60,
            },
            Self::Overheat => ModeTargets {
                pump_duty: 100,
                fan_duty: 100,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Result of one state machine update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Mode after the update.
    pub mode: Mode,
    /// Whether the update changed the mode.
    pub changed: bool,
    /// Baseline targets for the (possibly new) mode.
    pub targets: ModeTargets,
}

/// Owns the current [`Mode`]; mutated exclusively through [`update`].
///
/// [`update`]: StateMachine::update
pub struct StateMachine {
    mode: Mode,
    cooling_threshold_c: f32,
    overheat_threshold_c: f32,
}

impl StateMachine {
    /// Construct in `Off` with thresholds taken from configuration.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            mode: Mode::Off,
            cooling_threshold_c: config.cooling_threshold_c,
            overheat_threshold_c: config.overheat_threshold_c,
        }
    }

    /// The currently active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Advance the machine by one tick.
    ///
    /// Logs the transition when the mode actually changed.
    pub fn update(&mut self, ignition: bool, temperature: f32) -> Step {
        let prev = self.mode;
        self.mode = self.next_mode(ignition, temperature);
        let changed = self.mode != prev;
        if changed {
            info!(
                "mode transition: {:?} -> {:?} (ignition={}, T={:.1}C)",
                prev, self.mode, ignition, temperature
            );
        }
        Step {
            mode: self.mode,
            changed,
            targets: self.mode.targets(),
        }
    }

    /// The transition table, written as an exhaustive match so a new mode
    /// variant cannot silently fall through to a default.
    fn next_mode(&self, ignition: bool, temperature: f32) -> Mode {
        let cooling = self.cooling_threshold_c;
        let overheat = self.overheat_threshold_c;

        match self.mode {
            Mode::Off => {
                if ignition {
                    Mode::Standby
                } else {
                    Mode::Off
                }
            }
            Mode::Standby => {
                if !ignition {
                    Mode::Off
                } else if temperature >= overheat {
                    Mode::Overheat
                } else if temperature >= cooling {
                    Mode::Cooling
                } else {
                    Mode::Standby
                }
            }
            Mode::Cooling => {
                if temperature < cooling {
                    Mode::Standby
                } else if temperature >= overheat {
                    Mode::Overheat
                } else {
                    Mode::Cooling
                }
            }
            Mode::Overheat => {
                if temperature < cooling {
                    Mode::Standby
                } else if temperature < overheat {
                    Mode::Cooling
                } else {
                    Mode::Overheat
                }
            }
        }
    }
}
