//! Parameters structure for TeleopCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for teleoperation control.
///
/// All powers are raw motor powers in the -127..127 range.
#[derive(Debug, Default, Deserialize)]
pub struct Params {
    /// Power commanded to both intake motors while the forward trigger is
    /// held.
    pub intake_forward_power: i8,

    /// Power commanded to both intake motors while the reverse trigger is
    /// held. Reduced relative to forward on this robot.
    pub intake_reverse_power: i8,

    /// Power commanded to both lift motors while the raise trigger is held.
    pub lift_raise_power: i8,

    /// Power commanded to both lift motors while the lower trigger is held.
    pub lift_lower_power: i8,
}
