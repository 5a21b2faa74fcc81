//! # Lifecycle hooks
//!
//! The competition platform drives a robot program through a fixed set of
//! lifecycle callbacks. `initialize` performs the one-time setup; the other
//! hooks are deliberately empty and exist so that phase changes land
//! somewhere visible in the log.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Result};
use log::info;

// Internal
use crate::data_store::DataStore;
use crate::lcd_ctrl::LogPanel;
use crate::motor_driver::TraceBank;
use eqpt_if::eqpt::motor::MotorBank;
use util::{module::State, session::Session};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// One-time robot setup.
///
/// Initialises the control modules from their parameter files, writes the
/// LCD greeting and arms the centre-button toggle.
pub fn initialize(ds: &mut DataStore, session: &Session) -> Result<()> {
    ds.teleop_ctrl
        .init("teleop_ctrl.toml", session)
        .wrap_err("Failed to initialise TeleopCtrl")?;
    info!("TeleopCtrl init complete");

    ds.motor_driver
        .init(
            ("motor_driver.toml", Box::new(TraceBank::default()) as Box<dyn MotorBank>),
            session,
        )
        .wrap_err("Failed to initialise MotorDriver")?;
    info!("MotorDriver init complete");

    ds.lcd_ctrl
        .init(Box::new(LogPanel::default()))
        .wrap_err("Failed to initialise the LCD")?;
    info!("LcdCtrl init complete, centre-button toggle armed");

    Ok(())
}

/// Pre-match hook, run after `initialize` when attached to a competition.
///
/// No selector UI on this robot, so there is nothing to do.
pub fn competition_initialize() {
    info!("Competition initialisation: nothing to do");
}

/// Disabled-phase hook. The platform holds the motors, nothing to do here.
pub fn disabled() {
    info!("Robot disabled");
}

/// Autonomous-phase hook. This robot carries no autonomous routine, the
/// motors stay idle until operator control starts.
pub fn autonomous() {
    info!("Autonomous period: no routine loaded, motors idle");
}
