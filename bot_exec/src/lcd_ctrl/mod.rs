//! # LCD control module
//!
//! This module owns the robot's text panel: the greeting line written at
//! startup and the centre-button toggle on line 2.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod panel;
mod state;

// ---------------------------------------------------------------------------
// EXPORTS
// ---------------------------------------------------------------------------

pub use panel::*;
pub use state::*;
