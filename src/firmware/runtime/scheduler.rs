use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::super::config::{
    SCAN_DWELL_DEFAULT_STEP, SCAN_DWELL_MAX_MS, SCAN_DWELL_MIN_MS, SCAN_DWELL_STEPS,
    SCAN_DWELL_STEP_MS,
};
use super::super::types::UiCommand;

/// Per-channel dwell for a slider step: 120ms to 1920ms in 100ms increments.
pub fn dwell_ms_for_step(step: u8) -> u16 {
    SCAN_DWELL_MIN_MS + u16::from(step.min(SCAN_DWELL_STEPS)) * SCAN_DWELL_STEP_MS
}

/// Radio bound on the per-channel dwell, regardless of where the value came
/// from.
pub fn clamp_dwell_ms(dwell_ms: u16) -> u16 {
    dwell_ms.clamp(SCAN_DWELL_MIN_MS, SCAN_DWELL_MAX_MS)
}

/// Rescales a persisted slider byte from earlier firmware revisions into the
/// current 0..=18 step range. The first revision stored 0..=100, the second
/// 0..=19; both map linearly. Bytes above 100 are treated as full scale.
pub fn normalize_speed_byte(raw: u8) -> u8 {
    if raw <= SCAN_DWELL_STEPS {
        raw
    } else if raw <= 19 {
        (u16::from(raw) * 18 / 19) as u8
    } else {
        (u16::from(raw.min(100)) * 18 / 100) as u8
    }
}

/// Deferred side effects of one settings interaction, applied by the scan
/// task outside the state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerEffects {
    /// Persistence was switched off; the retained network table must be
    /// cleared now, not on the next merge.
    pub clear_table: bool,
    /// The dwell step changed and should be written to flash.
    pub persist_step: Option<u8>,
}

#[derive(Debug)]
pub struct SchedulerHsm {
    dwell_step: u8,
    persistence_enabled: bool,
    paused: bool,
}

#[state_machine(initial = "State::scanning()")]
impl SchedulerHsm {
    #[state]
    fn scanning(
        &mut self,
        context: &mut SchedulerEffects,
        event: &UiCommand,
    ) -> Outcome<State> {
        match event {
            UiCommand::TogglePause => {
                self.paused = true;
                Transition(State::paused())
            }
            _ => {
                self.apply_shared(context, event);
                Handled
            }
        }
    }

    #[state]
    fn paused(&mut self, context: &mut SchedulerEffects, event: &UiCommand) -> Outcome<State> {
        match event {
            UiCommand::TogglePause => {
                self.paused = false;
                Transition(State::scanning())
            }
            _ => {
                self.apply_shared(context, event);
                Handled
            }
        }
    }
}

impl SchedulerHsm {
    fn apply_shared(&mut self, effects: &mut SchedulerEffects, event: &UiCommand) {
        match event {
            UiCommand::TogglePersistence => {
                self.persistence_enabled = !self.persistence_enabled;
                if !self.persistence_enabled {
                    effects.clear_table = true;
                }
            }
            UiCommand::SetDwellStep(step) => {
                let step = (*step).min(SCAN_DWELL_STEPS);
                if step != self.dwell_step {
                    self.dwell_step = step;
                    effects.persist_step = Some(step);
                }
            }
            UiCommand::TogglePause => {}
        }
    }
}

/// Pause/resume and dwell-selection state for the periodic scan loop.
pub struct ScanScheduler {
    machine: statig::blocking::StateMachine<SchedulerHsm>,
}

impl ScanScheduler {
    pub fn new(initial_step: u8) -> Self {
        Self {
            machine: SchedulerHsm {
                dwell_step: initial_step.min(SCAN_DWELL_STEPS),
                persistence_enabled: false,
                paused: false,
            }
            .state_machine(),
        }
    }

    pub fn handle(&mut self, command: UiCommand) -> SchedulerEffects {
        let mut effects = SchedulerEffects::default();
        self.machine.handle_with_context(&command, &mut effects);
        effects
    }

    pub fn is_paused(&self) -> bool {
        self.machine.inner().paused
    }

    pub fn persistence_enabled(&self) -> bool {
        self.machine.inner().persistence_enabled
    }

    pub fn dwell_step(&self) -> u8 {
        self.machine.inner().dwell_step
    }

    pub fn dwell_ms(&self) -> u16 {
        dwell_ms_for_step(self.dwell_step())
    }
}

impl Default for ScanScheduler {
    fn default() -> Self {
        Self::new(SCAN_DWELL_DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests;
