//! Parameters structure for MotorDriver

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use eqpt_if::eqpt::motor::{MotorId, ALL_MOTOR_IDS};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Configuration of a single motor.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct MotorConfig {
    /// The port the motor is plugged into.
    pub port: u8,

    /// True if the motor is mounted such that demands must be negated
    /// before being sent to the port.
    pub reversed: bool,
}

/// Parameters for the motor driver.
#[derive(Debug, Default, Deserialize)]
pub struct Params {
    /// Port and polarity for every motor on the robot.
    pub motors: HashMap<MotorId, MotorConfig>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Ways in which the motor map can be invalid.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("No configuration for motor {0:?}")]
    MissingMotor(MotorId),

    #[error("Port {0} is assigned to more than one motor")]
    DuplicatePort(u8),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Params {
    /// Check the motor map covers every motor with no port shared.
    ///
    /// Port numbers themselves are not range checked, an empty port is the
    /// platform's fault to report.
    pub fn are_valid(&self) -> Result<(), ParamsError> {
        for id in ALL_MOTOR_IDS.iter() {
            if !self.motors.contains_key(id) {
                return Err(ParamsError::MissingMotor(*id));
            }
        }

        let mut seen = HashSet::new();

        for cfg in self.motors.values() {
            if !seen.insert(cfg.port) {
                return Err(ParamsError::DuplicatePort(cfg.port));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn full_map() -> Params {
        let mut motors = HashMap::new();

        for (i, id) in ALL_MOTOR_IDS.iter().enumerate() {
            motors.insert(
                *id,
                MotorConfig {
                    port: (i + 1) as u8,
                    reversed: false,
                },
            );
        }

        Params { motors }
    }

    #[test]
    fn test_full_map_valid() {
        assert!(full_map().are_valid().is_ok());
    }

    #[test]
    fn test_missing_motor_rejected() {
        let mut params = full_map();
        params.motors.remove(&MotorId::LiftLeft);

        assert!(matches!(
            params.are_valid(),
            Err(ParamsError::MissingMotor(MotorId::LiftLeft))
        ));
    }

    #[test]
    fn test_duplicate_port_rejected() {
        let mut params = full_map();
        params.motors.get_mut(&MotorId::LiftLeft).unwrap().port = 1;

        assert!(matches!(
            params.are_valid(),
            Err(ParamsError::DuplicatePort(1))
        ));
    }
}
