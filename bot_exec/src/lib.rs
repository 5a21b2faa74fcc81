//! # Robot library.
//!
//! This library allows other crates and binaries in the workspace to access
//! items defined inside the robot exec crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Command processor - dispatches drive script commands into the datastore
pub mod cmd_processor;

/// Central datastore for the exec
pub mod data_store;

/// LCD control module - greeting line and the centre-button toggle
pub mod lcd_ctrl;

/// Lifecycle hooks - initialize, disabled, competition_initialize, autonomous
pub mod lifecycle;

/// Motor driver module - maps role demands onto ports and drives the motor bank
pub mod motor_driver;

/// Teleop control module - maps gamepad input into motor demands
pub mod teleop_ctrl;
