//! # Drive script command set
//!
//! This module provides the commands a drive script can issue to the exec:
//! gamepad snapshot updates, centre-button presses and competition phase
//! changes. Commands are carried in a JSON envelope identifying the type
//! and an optional payload.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use serde_json::{self, Value};
use thiserror::Error;

// Internal
use crate::eqpt::pad::PadState;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A command to the robot exec, as carried by a drive script.
#[derive(Debug, Clone, PartialEq)]
pub enum BotCmd {
    /// Replace the current gamepad snapshot.
    Pad(PadState),

    /// The centre button under the LCD was pressed.
    CentrePress,

    /// Change the competition phase.
    Phase(Phase),
}

/// Competition phases the robot can be placed into.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Operator locked out, motors held at zero.
    #[serde(rename = "DISABLED")]
    Disabled,

    /// Autonomous period. This robot carries no routine.
    #[serde(rename = "AUTONOMOUS")]
    Autonomous,

    /// Operator control period.
    #[serde(rename = "OPCONTROL")]
    OpControl,
}

/// Possible parsing errors.
#[derive(Debug, Error)]
pub enum CmdParseError {
    #[error("Command contains invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Command has an invalid type ({0})")]
    InvalidType(String),

    #[error("Command of type {0} is expected to have a payload but it doesn't")]
    MissingPayload(&'static str),

    #[error("Command payload could not be read: {0}")]
    InvalidPayload(serde_json::Error),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Phase {
    /// Robots come up disabled, a phase change enables them.
    fn default() -> Self {
        Phase::Disabled
    }
}

impl BotCmd {
    /// Parse a new command from a JSON envelope
    pub fn from_json(json_str: &str) -> Result<Self, CmdParseError> {
        // Parse the JSON string into a value
        let val: Value = match serde_json::from_str(json_str) {
            Ok(v) => v,
            Err(e) => return Err(CmdParseError::InvalidJson(e)),
        };

        // Get the type of the command
        let cmd_type = match val["type"].as_str() {
            Some(s) => s,
            None => {
                return Err(CmdParseError::InvalidType(String::from(
                    "Expected \"type\" to be a string",
                )))
            }
        };

        // Branch on the type, reading the payload where one is required
        match cmd_type {
            "PAD" => {
                if val["payload"].is_null() {
                    return Err(CmdParseError::MissingPayload("PAD"));
                }

                match serde_json::from_value(val["payload"].clone()) {
                    Ok(pad) => Ok(BotCmd::Pad(pad)),
                    Err(e) => Err(CmdParseError::InvalidPayload(e)),
                }
            }
            "CENTRE_PRESS" => Ok(BotCmd::CentrePress),
            "PHASE" => {
                if val["payload"].is_null() {
                    return Err(CmdParseError::MissingPayload("PHASE"));
                }

                match serde_json::from_value(val["payload"].clone()) {
                    Ok(phase) => Ok(BotCmd::Phase(phase)),
                    Err(e) => Err(CmdParseError::InvalidPayload(e)),
                }
            }
            t => Err(CmdParseError::InvalidType(format!(
                "{} is not a recognised command type",
                t
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_pad() {
        let cmd =
            BotCmd::from_json(r#"{"type": "PAD", "payload": {"left_y": 100, "r1": true}}"#)
                .unwrap();

        let expected = PadState {
            left_y: 100,
            r1: true,
            ..Default::default()
        };

        assert_eq!(cmd, BotCmd::Pad(expected));
    }

    #[test]
    fn test_parse_centre_press() {
        let cmd = BotCmd::from_json(r#"{"type": "CENTRE_PRESS"}"#).unwrap();

        assert_eq!(cmd, BotCmd::CentrePress);
    }

    #[test]
    fn test_parse_phase() {
        let cmd = BotCmd::from_json(r#"{"type": "PHASE", "payload": "OPCONTROL"}"#).unwrap();

        assert_eq!(cmd, BotCmd::Phase(Phase::OpControl));
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(matches!(
            BotCmd::from_json(r#"{"type": "WARP_DRIVE"}"#),
            Err(CmdParseError::InvalidType(_))
        ));
    }

    #[test]
    fn test_missing_payload_rejected() {
        assert!(matches!(
            BotCmd::from_json(r#"{"type": "PAD"}"#),
            Err(CmdParseError::MissingPayload("PAD"))
        ));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            BotCmd::from_json("not json at all"),
            Err(CmdParseError::InvalidJson(_))
        ));
    }
}
