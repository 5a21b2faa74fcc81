//! Intake mapping calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use super::{IntakeState, TeleopCtrl};
use eqpt_if::eqpt::{motor::MotorId, pad::PadState};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TeleopCtrl {
    /// Perform the intake trigger mapping.
    ///
    /// Forward wins over reverse when both triggers are held.
    pub(crate) fn calc_intake(&mut self, pad: &PadState) {
        let (power, state) = if pad.r1 {
            (self.params.intake_forward_power, IntakeState::Forward)
        } else if pad.r2 {
            (self.params.intake_reverse_power, IntakeState::Reverse)
        } else {
            (0, IntakeState::Idle)
        };

        self.dems.power.insert(MotorId::IntakeLeft, power);
        self.dems.power.insert(MotorId::IntakeRight, power);

        self.report.intake = state;
    }
}
