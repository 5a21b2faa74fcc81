//! Implementations for the TeleopCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;
use std::convert::Infallible;

// Internal
use super::Params;
use eqpt_if::eqpt::{motor::MotorDems, pad::PadState};
use util::{module::State, params, session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Teleoperation control module state
#[derive(Default)]
pub struct TeleopCtrl {
    pub(crate) params: Params,

    pub(crate) report: StatusReport,

    pub(crate) dems: MotorDems,
}

/// Status report for TeleopCtrl processing.
#[derive(Clone, Copy, Default, Serialize, Debug, PartialEq, Eq)]
pub struct StatusReport {
    /// Which intake state the triggers selected this cycle.
    pub intake: IntakeState,

    /// Which lift state the triggers selected this cycle.
    pub lift: LiftState,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The state the intake triggers select.
///
/// Exactly one of these holds on any cycle.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum IntakeState {
    Forward,
    Reverse,
    Idle,
}

/// The state the lift triggers select.
///
/// Exactly one of these holds on any cycle. `Holding` also demands hold
/// brake on both lift motors.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum LiftState {
    Raising,
    Lowering,
    Holding,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for IntakeState {
    fn default() -> Self {
        IntakeState::Idle
    }
}

impl Default for LiftState {
    fn default() -> Self {
        LiftState::Holding
    }
}

impl State for TeleopCtrl {
    type InitData = &'static str;
    type InitError = params::LoadError;

    type InputData = PadState;
    type OutputData = MotorDems;
    type StatusReport = StatusReport;
    // The mapping is total over the snapshot space, processing cannot fail
    type ProcError = Infallible;

    /// Initialise the TeleopCtrl module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(&mut self, init_data: Self::InitData, _session: &Session) -> Result<(), Self::InitError> {
        // Load the parameters
        self.params = match params::load(init_data) {
            Ok(p) => p,
            Err(e) => return Err(e),
        };

        Ok(())
    }

    /// Perform cyclic processing of teleop control.
    ///
    /// The snapshot is mapped afresh every cycle, nothing carries over from
    /// previous ticks.
    fn proc(
        &mut self,
        input_data: &Self::InputData,
    ) -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError> {
        // Clear the status report and demands
        self.report = StatusReport::default();
        self.dems = MotorDems::default();

        self.calc_drive(input_data);
        self.calc_intake(input_data);
        self.calc_lift(input_data);

        trace!(
            "TeleopCtrl output:\n    power: {:?}\n    brake: {:?}",
            self.dems.power,
            self.dems.brake
        );

        Ok((self.dems.clone(), self.report))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use eqpt_if::eqpt::motor::{BrakeMode, MotorId};

    /// A TeleopCtrl with the robot's nominal power levels, no parameter
    /// file needed.
    fn teleop() -> TeleopCtrl {
        TeleopCtrl {
            params: Params {
                intake_forward_power: 127,
                intake_reverse_power: -80,
                lift_raise_power: 127,
                lift_lower_power: -127,
            },
            ..Default::default()
        }
    }

    fn proc(ctrl: &mut TeleopCtrl, pad: PadState) -> (MotorDems, StatusReport) {
        match ctrl.proc(&pad) {
            Ok(or) => or,
            Err(never) => match never {},
        }
    }

    #[test]
    fn test_drive_cross_assignment() {
        let mut ctrl = teleop();

        for &(left_y, right_y) in &[(0, 0), (100, -50), (-127, 127), (127, 127), (-1, 1)] {
            let pad = PadState {
                left_y,
                right_y,
                ..Default::default()
            };

            let (dems, _) = proc(&mut ctrl, pad);

            // Left side takes the right stick, right side the left stick
            assert_eq!(dems.power[&MotorId::DriveFrontLeft], right_y);
            assert_eq!(dems.power[&MotorId::DriveBackLeft], right_y);
            assert_eq!(dems.power[&MotorId::DriveFrontRight], left_y);
            assert_eq!(dems.power[&MotorId::DriveBackRight], left_y);
        }
    }

    #[test]
    fn test_intake_priority() {
        let mut ctrl = teleop();

        for &(r1, r2, power, state) in &[
            (false, false, 0, IntakeState::Idle),
            (true, false, 127, IntakeState::Forward),
            (false, true, -80, IntakeState::Reverse),
            // Forward wins when both triggers are held
            (true, true, 127, IntakeState::Forward),
        ] {
            let pad = PadState {
                r1,
                r2,
                ..Default::default()
            };

            let (dems, rpt) = proc(&mut ctrl, pad);

            assert_eq!(dems.power[&MotorId::IntakeLeft], power);
            assert_eq!(dems.power[&MotorId::IntakeRight], power);
            assert_eq!(rpt.intake, state);
        }
    }

    #[test]
    fn test_lift_priority() {
        let mut ctrl = teleop();

        for &(l1, l2, power, state) in &[
            (false, false, 0, LiftState::Holding),
            (true, false, 127, LiftState::Raising),
            (false, true, -127, LiftState::Lowering),
            // Raise wins when both triggers are held
            (true, true, 127, LiftState::Raising),
        ] {
            let pad = PadState {
                l1,
                l2,
                ..Default::default()
            };

            let (dems, rpt) = proc(&mut ctrl, pad);

            assert_eq!(dems.power[&MotorId::LiftLeft], power);
            assert_eq!(dems.power[&MotorId::LiftRight], power);
            assert_eq!(rpt.lift, state);
        }
    }

    #[test]
    fn test_idle_lift_demands_hold_brake() {
        let mut ctrl = teleop();

        // Idle pad: brake demanded for both lift motors, nothing else
        let (dems, _) = proc(&mut ctrl, PadState::default());

        assert_eq!(dems.brake.get(&MotorId::LiftLeft), Some(&BrakeMode::Hold));
        assert_eq!(dems.brake.get(&MotorId::LiftRight), Some(&BrakeMode::Hold));
        assert_eq!(dems.brake.len(), 2);

        // The demand is re-issued on every idle cycle
        let (dems, _) = proc(&mut ctrl, PadState::default());
        assert_eq!(dems.brake.len(), 2);

        // An active lift gets no brake demand
        let pad = PadState {
            l1: true,
            ..Default::default()
        };
        let (dems, _) = proc(&mut ctrl, pad);
        assert!(dems.brake.is_empty());
    }

    #[test]
    fn test_combined_scenario() {
        let mut ctrl = teleop();

        let pad = PadState {
            left_y: 100,
            right_y: -50,
            r1: true,
            r2: false,
            l1: false,
            l2: true,
        };

        let (dems, rpt) = proc(&mut ctrl, pad);

        assert_eq!(dems.power[&MotorId::DriveFrontLeft], -50);
        assert_eq!(dems.power[&MotorId::DriveBackLeft], -50);
        assert_eq!(dems.power[&MotorId::DriveFrontRight], 100);
        assert_eq!(dems.power[&MotorId::DriveBackRight], 100);

        assert_eq!(dems.power[&MotorId::IntakeLeft], 127);
        assert_eq!(dems.power[&MotorId::IntakeRight], 127);

        assert_eq!(dems.power[&MotorId::LiftLeft], -127);
        assert_eq!(dems.power[&MotorId::LiftRight], -127);
        assert!(dems.brake.is_empty());

        assert_eq!(rpt.intake, IntakeState::Forward);
        assert_eq!(rpt.lift, LiftState::Lowering);
    }
}
