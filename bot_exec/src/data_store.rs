//! # Data Store

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::info;

// Internal
use eqpt_if::{
    cmd::Phase,
    eqpt::{motor::MotorDems, pad::PadState},
};

use crate::{lcd_ctrl::LcdCtrl, lifecycle, motor_driver::MotorDriver, teleop_ctrl};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u128,

    /// True if this cycle falls on a 1Hz boundary
    pub is_1_hz_cycle: bool,

    // Competition phase
    /// The phase the robot is currently in.
    pub phase: Phase,

    // Operator input
    /// Latest gamepad snapshot.
    ///
    /// The pad is level-based: the snapshot persists between script records
    /// and is read fresh by teleop every cycle. It is not cleared at cycle
    /// start.
    pub pad: PadState,

    // TeleopCtrl
    pub teleop_ctrl: teleop_ctrl::TeleopCtrl,
    pub teleop_ctrl_output: MotorDems,
    pub teleop_ctrl_status_rpt: teleop_ctrl::StatusReport,

    // MotorDriver
    pub motor_driver: MotorDriver,

    // LcdCtrl
    pub lcd_ctrl: LcdCtrl,

    // Monitoring Counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Change the competition phase, running the matching lifecycle hook.
    ///
    /// A change to the phase the robot is already in does nothing.
    pub fn set_phase(&mut self, phase: Phase) {
        if self.phase == phase {
            return;
        }

        info!("Phase change: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;

        match phase {
            Phase::Disabled => lifecycle::disabled(),
            Phase::Autonomous => lifecycle::autonomous(),
            // The opcontrol loop is the exec's own main loop, there is no
            // hook to run on entry.
            Phase::OpControl => (),
        }
    }

    /// Perform actions required at the start of a cycle.
    ///
    /// Clears the outputs of the previous cycle and sets the 1Hz cycle
    /// flag. The pad snapshot is deliberately left alone.
    pub fn cycle_start(&mut self, cycle_frequency_hz: f64) {
        self.is_1_hz_cycle = self.num_cycles % (cycle_frequency_hz as u128) == 0;

        self.teleop_ctrl_output = MotorDems::default();
        self.teleop_ctrl_status_rpt = teleop_ctrl::StatusReport::default();
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        let mut ds = DataStore::default();

        assert_eq!(ds.phase, Phase::Disabled);

        ds.set_phase(Phase::OpControl);
        assert_eq!(ds.phase, Phase::OpControl);

        // Re-entering the current phase is a no-op
        ds.set_phase(Phase::OpControl);
        assert_eq!(ds.phase, Phase::OpControl);

        ds.set_phase(Phase::Disabled);
        assert_eq!(ds.phase, Phase::Disabled);
    }

    #[test]
    fn test_cycle_start_flags() {
        let mut ds = DataStore::default();

        ds.cycle_start(50.0);
        assert!(ds.is_1_hz_cycle);

        ds.num_cycles = 49;
        ds.cycle_start(50.0);
        assert!(!ds.is_1_hz_cycle);

        ds.num_cycles = 50;
        ds.cycle_start(50.0);
        assert!(ds.is_1_hz_cycle);
    }

    #[test]
    fn test_cycle_start_keeps_pad() {
        let mut ds = DataStore::default();

        ds.pad.left_y = 42;
        ds.cycle_start(50.0);

        assert_eq!(ds.pad.left_y, 42);
    }
}
