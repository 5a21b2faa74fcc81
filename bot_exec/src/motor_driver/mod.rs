//! # Motor driver module
//!
//! This module interfaces with the robot's motors. It takes the role-level
//! demands produced by the control modules and issues port-level commands
//! on the motor bank, applying each motor's mounting polarity on the way.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod bank;
mod params;
mod state;

// ---------------------------------------------------------------------------
// EXPORTS
// ---------------------------------------------------------------------------

pub use bank::*;
pub use params::*;
pub use state::*;
