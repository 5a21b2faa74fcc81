//! Motor bank devices

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;

// Internal
use eqpt_if::eqpt::motor::{BrakeMode, MotorBank, MotorBankError};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Motor bank which traces every command instead of driving hardware.
///
/// The real bus lives on the platform side of the equipment interface, this
/// device stands in for it on the bench and leaves a full command trail in
/// the session log.
#[derive(Default)]
pub struct TraceBank;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl MotorBank for TraceBank {
    fn set_power(&mut self, port: u8, power: i8) -> Result<(), MotorBankError> {
        trace!("port {:2}: power {}", port, power);
        Ok(())
    }

    fn set_brake_mode(&mut self, port: u8, mode: BrakeMode) -> Result<(), MotorBankError> {
        trace!("port {:2}: brake {:?}", port, mode);
        Ok(())
    }
}
