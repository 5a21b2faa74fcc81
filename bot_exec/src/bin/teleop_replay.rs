//! # Teleop Replay
//!
//! This binary replays a drive script through the full teleop stack under a
//! simulated clock, as fast as the host allows. It lets mapping or
//! parameter changes be checked without the robot, the pad, or real-time
//! delay. The per-port command trail ends up in the session log via the
//! trace bank.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use log::{info, warn};
use std::env;
use std::time::Duration;

// Internal
use bot_lib::{cmd_processor, data_store::DataStore, lifecycle, motor_driver};
use eqpt_if::cmd::Phase;
use util::{
    host,
    logger::{logger_init, LevelFilter},
    module::State,
    pacer::{CycleResult, Pacer, SimClock},
    script_interpreter::{PendingCmds, ScriptInterpreter},
    session::Session,
};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Target period of one cycle.
const CYCLE_PERIOD_S: f64 = 0.02;

/// Number of cycles per second
const CYCLE_FREQUENCY_HZ: f64 = 1.0 / CYCLE_PERIOD_S;

// ------------------------------------------------------------------------------------------------
// MAIN
// ------------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session =
        Session::new("teleop_replay", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session).wrap_err("Failed to initialise logging")?;

    info!("Teleop Replay\n");
    info!("Running on: {}", host::get_host_info());
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD SCRIPT ----

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        return Err(eyre!("Usage: teleop_replay <drive_script>"));
    }

    let mut si = ScriptInterpreter::new(&args[1]).wrap_err("Failed to load drive script")?;

    info!(
        "Loaded script lasts {:.02} s and contains {} commands\n",
        si.get_duration(),
        si.get_num_cmds()
    );

    // ---- INITIALISE MODULES ----

    let mut ds = DataStore::default();

    lifecycle::initialize(&mut ds, &session).wrap_err("Robot initialisation failed")?;
    lifecycle::competition_initialize();

    // ---- REPLAY LOOP ----

    info!("Begining replay\n");

    let mut pacer = Pacer::new(Duration::from_secs_f64(CYCLE_PERIOD_S), SimClock::new());

    let mut num_overruns: u64 = 0;

    loop {
        pacer.start_cycle();

        ds.cycle_start(CYCLE_FREQUENCY_HZ);

        // ---- INPUT PROCESSING ----

        match si.get_pending_cmds(pacer.elapsed_seconds()) {
            PendingCmds::None => (),
            PendingCmds::Some(cmd_vec) => {
                for cmd in cmd_vec.iter() {
                    cmd_processor::exec(&mut ds, cmd);
                }
            }
            PendingCmds::EndOfScript => {
                info!("End of drive script reached");
                break;
            }
        }

        // ---- CONTROL PROCESSING ----

        match ds.phase {
            Phase::OpControl => {
                let (output, report) = match ds.teleop_ctrl.proc(&ds.pad) {
                    Ok(or) => or,
                    Err(never) => match never {},
                };
                ds.teleop_ctrl_output = output;
                ds.teleop_ctrl_status_rpt = report;

                let input = motor_driver::InputData {
                    halt: false,
                    dems: ds.teleop_ctrl_output.clone(),
                };

                match ds.motor_driver.proc(&input) {
                    Ok(_) => (),
                    Err(e) => warn!("Error during MotorDriver processing: {}", e),
                }
            }

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

        // Under the simulated clock a cycle takes no time at all, but keep
        // the accounting honest anyway
        match pacer.end_cycle() {
            CycleResult::Nominal(_) => (),
            CycleResult::Overrun(_) => num_overruns += 1,
        }

        ds.num_cycles += 1;
    }

    // ---- SUMMARY ----

    info!(
        "Replayed {} cycles ({:.02} s simulated), {} overruns, final phase {:?}",
        ds.num_cycles,
        pacer.elapsed_seconds(),
        num_overruns,
        ds.phase
    );

    Ok(())
}
