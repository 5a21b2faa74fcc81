//! # Equipment interface library
//!
//! This library provides the types shared between the robot exec and the
//! equipment it drives: gamepad snapshots, motor demands, the text panel
//! surface, and the command set carried by drive scripts.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod cmd;
pub mod eqpt;
