//! # Gamepad input snapshot

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A snapshot of the operator's gamepad.
///
/// Axis values are the raw signed readings from the pad, nominally in the
/// -127..127 range. No deadzone, scaling or validation is applied at this
/// level, whatever the pad reports is what the control modules see.
///
/// The default snapshot is neutral: sticks centred, no buttons held.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PadState {
    /// Left stick vertical axis.
    pub left_y: i8,

    /// Right stick vertical axis.
    pub right_y: i8,

    /// Upper button on the right trigger cluster.
    pub r1: bool,

    /// Lower button on the right trigger cluster.
    pub r2: bool,

    /// Upper button on the left trigger cluster.
    pub l1: bool,

    /// Lower button on the left trigger cluster.
    pub l2: bool,
}
