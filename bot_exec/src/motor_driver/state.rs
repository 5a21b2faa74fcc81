//! # Motor driver module state

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;
use thiserror::Error;

// Internal
use super::{Params, ParamsError};
use eqpt_if::eqpt::motor::{MotorBank, MotorBankError, MotorDems, ALL_MOTOR_IDS};
use util::{module::State, params, session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Motor driver module state.
#[derive(Default)]
pub struct MotorDriver {
    params: Params,

    report: StatusReport,

    bank: Option<Box<dyn MotorBank>>,
}

/// Input data to the motor driver.
#[derive(Default)]
pub struct InputData {
    /// When true every configured motor is commanded to zero power and
    /// brake demands are not forwarded (disabled and autonomous phases).
    pub halt: bool,

    /// The demands to actuate.
    pub dems: MotorDems,
}

/// Status report for motor driver processing.
#[derive(Clone, Copy, Default, Serialize, Debug)]
pub struct StatusReport {
    /// Number of power commands issued this cycle.
    pub num_power_cmds: usize,

    /// Number of brake mode commands issued this cycle.
    pub num_brake_cmds: usize,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum InitError {
    #[error("Failed to load parameters: {0}")]
    ParamLoadError(params::LoadError),

    #[error("Loaded parameters are invalid: {0}")]
    ParamsInvalid(ParamsError),
}

#[derive(Debug, Error)]
pub enum ProcError {
    #[error("The motor driver has no bank, was init skipped?")]
    NoBank,

    #[error("The motor bank rejected a command: {0}")]
    BankError(MotorBankError),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for MotorDriver {
    type InitData = (&'static str, Box<dyn MotorBank>);
    type InitError = InitError;

    type InputData = InputData;
    type OutputData = ();
    type StatusReport = StatusReport;
    type ProcError = ProcError;

    /// Initialise the motor driver.
    ///
    /// Expected init data is the path to the parameter file and the bank
    /// device to drive.
    fn init(&mut self, init_data: Self::InitData, _session: &Session) -> Result<(), Self::InitError> {
        let (params_path, bank) = init_data;

        // Load parameters
        self.params = match params::load(params_path) {
            Ok(p) => p,
            Err(e) => return Err(InitError::ParamLoadError(e)),
        };

        // Check parameters are valid
        match self.params.are_valid() {
            Ok(_) => (),
            Err(e) => return Err(InitError::ParamsInvalid(e)),
        }

        self.bank = Some(bank);

        Ok(())
    }

    /// Cyclic processing for the motor driver.
    ///
    /// Takes the demands from the control modules and issues them on the
    /// bank, motor by motor in the fixed id order.
    fn proc(
        &mut self,
        input_data: &Self::InputData,
    ) -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError> {
        self.report = StatusReport::default();

        let bank = match self.bank {
            Some(ref mut b) => b,
            None => return Err(ProcError::NoBank),
        };

        // If halted command all configured motors to zero and skip brake
        // demands
        if input_data.halt {
            for id in ALL_MOTOR_IDS.iter() {
                if let Some(cfg) = self.params.motors.get(id) {
                    match bank.set_power(cfg.port, 0) {
                        Ok(_) => self.report.num_power_cmds += 1,
                        Err(e) => return Err(ProcError::BankError(e)),
                    }
                }
            }

            return Ok(((), self.report));
        }

        for id in ALL_MOTOR_IDS.iter() {
            let power = match input_data.dems.power.get(id) {
                Some(p) => *p,
                None => continue,
            };

            let cfg = match self.params.motors.get(id) {
                Some(c) => c,
                None => continue,
            };

            // Widen before negating, a raw -128 reading must not overflow
            // when the motor is reversed
            let mut signed = power as i16;
            if cfg.reversed {
                signed = -signed;
            }
            let clamped = signed.max(-127).min(127) as i8;

            match bank.set_power(cfg.port, clamped) {
                Ok(_) => self.report.num_power_cmds += 1,
                Err(e) => return Err(ProcError::BankError(e)),
            }
        }

        for id in ALL_MOTOR_IDS.iter() {
            let mode = match input_data.dems.brake.get(id) {
                Some(m) => *m,
                None => continue,
            };

            let cfg = match self.params.motors.get(id) {
                Some(c) => c,
                None => continue,
            };

            match bank.set_brake_mode(cfg.port, mode) {
                Ok(_) => self.report.num_brake_cmds += 1,
                Err(e) => return Err(ProcError::BankError(e)),
            }
        }

        trace!(
            "MotorDriver issued {} power and {} brake commands",
            self.report.num_power_cmds,
            self.report.num_brake_cmds
        );

        Ok(((), self.report))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::super::MotorConfig;
    use super::*;
    use eqpt_if::eqpt::motor::{BrakeMode, MotorId};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// A command as seen by the bank.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BankCmd {
        Power(u8, i8),
        Brake(u8, BrakeMode),
    }

    /// Bank which records every command it is given.
    #[derive(Default, Clone)]
    struct MockBank {
        cmds: Rc<RefCell<Vec<BankCmd>>>,
    }

    impl MotorBank for MockBank {
        fn set_power(&mut self, port: u8, power: i8) -> Result<(), MotorBankError> {
            self.cmds.borrow_mut().push(BankCmd::Power(port, power));
            Ok(())
        }

        fn set_brake_mode(&mut self, port: u8, mode: BrakeMode) -> Result<(), MotorBankError> {
            self.cmds.borrow_mut().push(BankCmd::Brake(port, mode));
            Ok(())
        }
    }

    /// The robot's nominal port map.
    fn robot_params() -> Params {
        let mut motors = HashMap::new();

        for &(id, port, reversed) in &[
            (MotorId::DriveFrontLeft, 17, true),
            (MotorId::DriveBackLeft, 20, true),
            (MotorId::DriveFrontRight, 14, false),
            (MotorId::DriveBackRight, 11, false),
            (MotorId::IntakeLeft, 15, true),
            (MotorId::IntakeRight, 19, false),
            (MotorId::LiftLeft, 18, false),
            (MotorId::LiftRight, 13, true),
        ] {
            motors.insert(id, MotorConfig { port, reversed });
        }

        Params { motors }
    }

    fn driver(bank: &MockBank) -> MotorDriver {
        MotorDriver {
            params: robot_params(),
            report: StatusReport::default(),
            bank: Some(Box::new(bank.clone())),
        }
    }

    #[test]
    fn test_polarity_applied_per_port() {
        let bank = MockBank::default();
        let mut drv = driver(&bank);

        let mut input = InputData::default();
        input.dems.power.insert(MotorId::DriveFrontLeft, 100);
        input.dems.power.insert(MotorId::DriveFrontRight, 100);

        drv.proc(&input).unwrap();

        let cmds = bank.cmds.borrow();

        // Reversed motor gets the negated power, forward motor the raw one
        assert!(cmds.contains(&BankCmd::Power(17, -100)));
        assert!(cmds.contains(&BankCmd::Power(14, 100)));

        // Every configured motor in the default demand map was commanded
        assert_eq!(cmds.len(), 8);
    }

    #[test]
    fn test_reversed_extreme_reading_clamped() {
        let bank = MockBank::default();
        let mut drv = driver(&bank);

        let mut input = InputData::default();
        // A faulty pad can report -128, the negation must not overflow
        input.dems.power.insert(MotorId::DriveFrontLeft, -128);
        input.dems.power.insert(MotorId::DriveFrontRight, -128);

        drv.proc(&input).unwrap();

        let cmds = bank.cmds.borrow();

        assert!(cmds.contains(&BankCmd::Power(17, 127)));
        assert!(cmds.contains(&BankCmd::Power(14, -127)));
    }

    #[test]
    fn test_halt_zeros_all_motors() {
        let bank = MockBank::default();
        let mut drv = driver(&bank);

        let mut input = InputData::default();
        input.halt = true;
        input.dems.power.insert(MotorId::DriveFrontLeft, 100);
        input
            .dems
            .brake
            .insert(MotorId::LiftLeft, BrakeMode::Hold);

        let (_, rpt) = drv.proc(&input).unwrap();

        let cmds = bank.cmds.borrow();

        assert_eq!(rpt.num_power_cmds, 8);
        assert_eq!(rpt.num_brake_cmds, 0);
        assert!(cmds.iter().all(|c| matches!(c, BankCmd::Power(_, 0))));
    }

    #[test]
    fn test_brake_demands_forwarded() {
        let bank = MockBank::default();
        let mut drv = driver(&bank);

        let mut input = InputData::default();
        input.dems.brake.insert(MotorId::LiftLeft, BrakeMode::Hold);
        input.dems.brake.insert(MotorId::LiftRight, BrakeMode::Hold);

        let (_, rpt) = drv.proc(&input).unwrap();

        let cmds = bank.cmds.borrow();

        assert_eq!(rpt.num_brake_cmds, 2);
        assert!(cmds.contains(&BankCmd::Brake(18, BrakeMode::Hold)));
        assert!(cmds.contains(&BankCmd::Brake(13, BrakeMode::Hold)));
    }

    #[test]
    fn test_missing_bank_reported() {
        let mut drv = MotorDriver::default();

        assert!(matches!(
            drv.proc(&InputData::default()),
            Err(ProcError::NoBank)
        ));
    }
}
