//! Lift mapping calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use super::{LiftState, TeleopCtrl};
use eqpt_if::eqpt::{
    motor::{BrakeMode, MotorId},
    pad::PadState,
};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TeleopCtrl {
    /// Perform the lift trigger mapping.
    ///
    /// Raise wins over lower when both triggers are held. An idle lift is
    /// demanded into hold brake on every cycle so it resists gravity, the
    /// re-assert is idempotent on the bus.
    pub(crate) fn calc_lift(&mut self, pad: &PadState) {
        let (power, state) = if pad.l1 {
            (self.params.lift_raise_power, LiftState::Raising)
        } else if pad.l2 {
            (self.params.lift_lower_power, LiftState::Lowering)
        } else {
            (0, LiftState::Holding)
        };

        self.dems.power.insert(MotorId::LiftLeft, power);
        self.dems.power.insert(MotorId::LiftRight, power);

        if let LiftState::Holding = state {
            self.dems.brake.insert(MotorId::LiftLeft, BrakeMode::Hold);
            self.dems.brake.insert(MotorId::LiftRight, BrakeMode::Hold);
        }

        self.report.lift = state;
    }
}
