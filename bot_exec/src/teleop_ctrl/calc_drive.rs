//! Drivetrain mapping calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use super::TeleopCtrl;
use eqpt_if::eqpt::{motor::MotorId, pad::PadState};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TeleopCtrl {
    /// Perform the tank drive mapping.
    ///
    /// The chassis harness is cross-wired: the left-side drive motors take
    /// the right stick and the right-side motors take the left stick. Keep
    /// it that way unless the harness changes.
    pub(crate) fn calc_drive(&mut self, pad: &PadState) {
        self.dems.power.insert(MotorId::DriveFrontLeft, pad.right_y);
        self.dems.power.insert(MotorId::DriveBackLeft, pad.right_y);

        self.dems.power.insert(MotorId::DriveFrontRight, pad.left_y);
        self.dems.power.insert(MotorId::DriveBackRight, pad.left_y);
    }
}
