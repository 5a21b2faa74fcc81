//! # Motor demands and the motor bank device trait

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// All motor ids, in the fixed order commands are issued in.
pub const ALL_MOTOR_IDS: [MotorId; 8] = [
    MotorId::DriveFrontLeft,
    MotorId::DriveBackLeft,
    MotorId::DriveFrontRight,
    MotorId::DriveBackRight,
    MotorId::IntakeLeft,
    MotorId::IntakeRight,
    MotorId::LiftLeft,
    MotorId::LiftRight,
];

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// IDs of all motors on the robot
#[derive(Serialize, Deserialize, Debug, Hash, Eq, PartialEq, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum MotorId {
    DriveFrontLeft,
    DriveBackLeft,
    DriveFrontRight,
    DriveBackRight,
    IntakeLeft,
    IntakeRight,
    LiftLeft,
    LiftRight,
}

/// Brake behaviour of a motor at zero commanded power.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum BrakeMode {
    /// Freewheel at zero power.
    Coast,

    /// Actively resist external rotation at zero power.
    Hold,
}

/// Errors raised by a motor bank device.
#[derive(Debug, Error)]
pub enum MotorBankError {
    #[error("No motor is connected to port {0}")]
    InvalidPort(u8),

    #[error("The motor bus rejected the command: {0}")]
    BusError(String),
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Demands sent from the control modules to the motor driver
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MotorDems {
    /// The demanded power of each motor, in the -127..127 range.
    pub power: HashMap<MotorId, i8>,

    /// Brake mode settings to assert this cycle.
    ///
    /// Empty on most cycles. Settings are asserted as given whether or not
    /// the motor is already in that mode, the bus tolerates re-asserts.
    pub brake: HashMap<MotorId, BrakeMode>,
}

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Unified interface to the bank of motor ports.
///
/// Commands are fire-and-forget from the control loop's point of view. A
/// device reports failures through the `Result`, and the exec logs them and
/// carries on, fault recovery belongs to the platform.
pub trait MotorBank {
    /// Command a motor's power, -127..127.
    fn set_power(&mut self, port: u8, power: i8) -> Result<(), MotorBankError>;

    /// Set a motor's brake mode.
    fn set_brake_mode(&mut self, port: u8, mode: BrakeMode) -> Result<(), MotorBankError>;
}

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl Default for MotorDems {
    /// All motors present at zero power, no brake settings.
    fn default() -> Self {
        let mut power = HashMap::new();

        for id in ALL_MOTOR_IDS.iter() {
            power.insert(*id, 0);
        }

        Self {
            power,
            brake: HashMap::new(),
        }
    }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_dems_cover_all_motors() {
        let dems = MotorDems::default();

        assert_eq!(dems.power.len(), ALL_MOTOR_IDS.len());
        assert!(dems.power.values().all(|p| *p == 0));
        assert!(dems.brake.is_empty());
    }
}
