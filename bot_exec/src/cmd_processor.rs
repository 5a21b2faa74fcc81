//! # Command processor module
//!
//! The command processor handles drive script commands, routing each one to
//! the module it concerns.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use crate::data_store::DataStore;
use eqpt_if::cmd::BotCmd;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Execute a drive script command.
///
/// Mutates the datastore to send commands to different modules.
pub fn exec(ds: &mut DataStore, cmd: &BotCmd) {
    // Handle different commands
    match cmd {
        BotCmd::Pad(pad) => {
            ds.pad = *pad;
        }
        BotCmd::CentrePress => {
            debug!("Centre button press recieved");
            ds.lcd_ctrl.on_centre_press();
        }
        BotCmd::Phase(phase) => {
            ds.set_phase(*phase);
        }
    }
}
