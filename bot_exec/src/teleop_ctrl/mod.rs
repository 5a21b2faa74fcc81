//! Teleoperation control module
//!
//! Maps the operator's gamepad snapshot into motor demands: tank drive on
//! the two sticks, the right trigger pair for the intake and the left
//! trigger pair for the lift.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod calc_drive;
mod calc_intake;
mod calc_lift;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use state::*;
