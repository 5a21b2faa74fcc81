//! Main robot-side executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise all modules (the platform's initialize hook)
//!     - Main loop at 50 Hz:
//!         - Drive script command processing
//!         - Teleop control processing (opcontrol phase only)
//!         - Motor driver execution
//!         - Cycle pacing
//!
//! With no drive script the exec runs the opcontrol loop on an idle pad
//! until interrupted, which is what the platform does when no field
//! controller is attached.
//!
//! # Modules
//!
//! All cyclic modules (e.g. `teleop_ctrl`) shall meet the following
//! requirements:
//!     1. Provide a public struct implementing the `util::module::State`
//!        trait.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{debug, info, warn};
use std::env;
use std::time::Duration;

// Internal
use bot_lib::{cmd_processor, data_store::DataStore, lifecycle, motor_driver};
use eqpt_if::cmd::Phase;
use util::{
    host,
    logger::{logger_init, LevelFilter},
    module::State,
    pacer::{CycleResult, Pacer, WallClock},
    script_interpreter::{PendingCmds, ScriptInterpreter},
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Target period of one cycle.
const CYCLE_PERIOD_S: f64 = 0.02;

/// Number of cycles per second
const CYCLE_FREQUENCY_HZ: f64 = 1.0 / CYCLE_PERIOD_S;

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("bot_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session).wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Talos Robot Control Executable\n");
    info!("Running on: {}", host::get_host_info());
    info!("Session directory: {:?}\n", session.session_root);

    // ---- INITIALISE INPUT SOURCE ----

    // The input source determines where operator input comes from: a drive
    // script replayed against the loop clock, or an idle pad.
    let mut input_source;

    // Collect all arguments
    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    // If we have a single argument use it as the script path
    if args.len() == 2 {
        info!("Loading drive script from \"{}\"", &args[1]);

        // Load the script interpreter
        let si = ScriptInterpreter::new(&args[1]).wrap_err("Failed to load drive script")?;

        // Display some info
        info!(
            "Loaded script lasts {:.02} s and contains {} commands\n",
            si.get_duration(),
            si.get_num_cmds()
        );

        input_source = InputSource::Script(si);
    }
    // If no arguments run on an idle pad
    else if args.len() == 1 {
        info!("No drive script provided, running on an idle pad until interrupted\n");
        input_source = InputSource::Idle;
    } else {
        return Err(eyre!(
            "Expected either zero or one argument, found {}",
            args.len() - 1
        ));
    }

    // ---- INITIALISE DATASTORE ----

    info!("Initialising modules...");

    let mut ds = DataStore::default();

    // ---- INITIALISE MODULES ----

    lifecycle::initialize(&mut ds, &session).wrap_err("Robot initialisation failed")?;
    lifecycle::competition_initialize();

    info!("Module initialisation complete\n");

    // With no field controller the platform goes straight to operator
    // control. Scripts start disabled and drive their own phase changes.
    match input_source {
        InputSource::Idle => ds.set_phase(Phase::OpControl),
        InputSource::Script(_) => (),
    }

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    let mut pacer = Pacer::new(Duration::from_secs_f64(CYCLE_PERIOD_S), WallClock::new());

    loop {
        // Get cycle start time
        pacer.start_cycle();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start(CYCLE_FREQUENCY_HZ);

        // ---- INPUT PROCESSING ----

        match input_source {
            InputSource::Idle => (),

            InputSource::Script(ref mut si) => {
                match si.get_pending_cmds(pacer.elapsed_seconds()) {
                    PendingCmds::None => (),
                    PendingCmds::Some(cmd_vec) => {
                        for cmd in cmd_vec.iter() {
                            cmd_processor::exec(&mut ds, cmd);
                        }
                    }
                    // Exit if end of script reached
                    PendingCmds::EndOfScript => {
                        info!("End of drive script reached, stopping");
                        break;
                    }
                }
            }
        };

        // ---- CONTROL PROCESSING ----

        match ds.phase {
            Phase::OpControl => {
                // TeleopCtrl processing. The mapping is total, the error
                // type has no values to handle.
                let (output, report) = match ds.teleop_ctrl.proc(&ds.pad) {
                    Ok(or) => or,
                    Err(never) => match never {},
                };
                ds.teleop_ctrl_output = output;
                ds.teleop_ctrl_status_rpt = report;

                // Send demands to the motors
                let input = motor_driver::InputData {
                    halt: false,
                    dems: ds.teleop_ctrl_output.clone(),
                };

                match ds.motor_driver.proc(&input) {
                    Ok(_) => (),
                    Err(e) => warn!("Error during MotorDriver processing: {}", e),
                }
            }

            // Operator locked out, motors held at zero
            Phase::Disabled | Phase::Autonomous => {
                let input = motor_driver::InputData {
                    halt: true,
                    dems: Default::default(),
                };

                match ds.motor_driver.proc(&input) {
                    Ok(_) => (),
                    Err(e) => warn!("Error during MotorDriver processing: {}", e),
                }
            }
        }

        // ---- CYCLE MANAGEMENT ----

        if ds.is_1_hz_cycle {
            debug!("Cycle {}: phase {:?}", ds.num_cycles, ds.phase);
        }

        match pacer.end_cycle() {
            CycleResult::Nominal(_) => {
                ds.num_consec_cycle_overruns = 0;
            }
            CycleResult::Overrun(d) => {
                warn!("Cycle overran by {:.06} s", d.as_secs_f64());
                ds.num_consec_cycle_overruns += 1;
            }
        }

        // Increment cycle counter
        ds.num_cycles += 1;
    }

    // ---- SHUTDOWN ----

    info!("End of execution");

    Ok(())
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Various sources of operator input for the exec.
enum InputSource {
    /// No device attached, the pad stays neutral.
    Idle,

    /// Timed commands replayed from a drive script.
    Script(ScriptInterpreter),
}
