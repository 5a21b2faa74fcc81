//! # Drive script interpreter module
//!
//! Drive scripts replay timed operator input into the exec in place of a
//! live pad. Each command line pairs a time (seconds since the main loop
//! started) with a JSON command envelope:
//!
//! ```text
//! 0.5: {"type": "PHASE", "payload": "OPCONTROL"};
//! 1.0: {"type": "PAD", "payload": {"left_y": 100, "right_y": 100}};
//! ```
//!
//! A PAD record replaces the whole snapshot, omitted fields read neutral.
//! Lines which do not match the `time: command;` shape are ignored, which
//! also serves as the comment syntax.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use regex::RegexBuilder;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Internal
use eqpt_if::cmd::{BotCmd, CmdParseError};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A command which is scripted to occur at a specific time.
pub struct Command {
    /// The time the command is supposed to execute at
    exec_time_s: f64,

    /// The command to run
    cmd: BotCmd,
}

/// A drive script interpreter.
///
/// After initialising with the path to the script to run use
/// `get_pending_cmds` with the current loop time to acquire the commands
/// that need executing.
pub struct ScriptInterpreter {
    _script_path: Option<PathBuf>,
    cmds: VecDeque<Command>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Could not find the script at {0}")]
    ScriptNotFound(String),

    #[error("Could not load the script: {0}")]
    ScriptLoadError(std::io::Error),

    #[error("The script is empty (or is so bad it can't be read)")]
    ScriptEmpty,

    #[error(
        "Script contains an invalid timestamp: {0}. \
        Should be a float (like 1.0)"
    )]
    InvalidTimestamp(String),

    #[error("Script contains an invalid command at {0} s: {1}")]
    InvalidCmd(f64, CmdParseError),
}

pub enum PendingCmds {
    None,
    Some(Vec<BotCmd>),
    EndOfScript,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ScriptInterpreter {
    /// Create a new interpreter from the given script path.
    pub fn new<P: AsRef<Path>>(script_path: P) -> Result<Self, ScriptError> {
        // Get the path in a buffer
        let path = PathBuf::from(script_path.as_ref());

        // Check that the script file exists.
        if !path.exists() {
            return Err(ScriptError::ScriptNotFound(
                path.to_string_lossy().into_owned(),
            ));
        }

        // Load the script into a string
        let script = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => return Err(ScriptError::ScriptLoadError(e)),
        };

        let mut si = Self::from_text(&script)?;
        si._script_path = Some(path);

        Ok(si)
    }

    /// Create a new interpreter from script text.
    pub fn from_text(script: &str) -> Result<Self, ScriptError> {
        // Empty queue of commands
        let mut cmd_queue: VecDeque<Command> = VecDeque::new();

        // Go through the script executing __the magic regex__.
        let re = RegexBuilder::new(r"^\s*(\d+(\.\d+)?)\s*:\s*([^;]*);")
            .multi_line(true)
            .build()
            .unwrap();

        for cap in re.captures_iter(script) {
            // Parse the exec time
            let exec_time_s: f64 = match cap.get(1).unwrap().as_str().parse() {
                Ok(t) => t,
                Err(e) => return Err(ScriptError::InvalidTimestamp(format!("{}", e))),
            };

            // Parse the command from the payload. The scripts contain JSON
            // only.
            let cmd = match BotCmd::from_json(cap.get(3).unwrap().as_str()) {
                Ok(c) => c,
                Err(e) => return Err(ScriptError::InvalidCmd(exec_time_s, e)),
            };

            // Build command from the match
            cmd_queue.push_back(Command { exec_time_s, cmd });
        }

        if cmd_queue.is_empty() {
            return Err(ScriptError::ScriptEmpty);
        }

        Ok(ScriptInterpreter {
            _script_path: None,
            cmds: cmd_queue,
        })
    }

    /// Return a vector of pending commands, or `None` if no command needs
    /// executing at `current_time_s`.
    pub fn get_pending_cmds(&mut self, current_time_s: f64) -> PendingCmds {
        // If the queue is empty the script is over and we return the end of
        // script variant
        if self.cmds.len() == 0 {
            return PendingCmds::EndOfScript;
        }

        let mut cmd_vec: Vec<BotCmd> = vec![];

        // Peek items from the queue, if the head's exec time is lower than
        // the current time add it to the vector, and keep adding commands
        // until the exec times are larger than the current time.
        while self.cmds.len() > 0 && self.cmds.front().unwrap().exec_time_s < current_time_s {
            cmd_vec.push(self.cmds.pop_front().unwrap().cmd);
        }

        // If the vector is longer than 0 return Some, otherwise None
        if cmd_vec.len() > 0 {
            PendingCmds::Some(cmd_vec)
        } else {
            PendingCmds::None
        }
    }

    /// Get the number of commands in the script
    pub fn get_num_cmds(&self) -> usize {
        self.cmds.len()
    }

    /// Get the length of the script in seconds
    pub fn get_duration(&self) -> f64 {
        match self.cmds.back() {
            Some(c) => c.exec_time_s,
            None => 0f64,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use eqpt_if::cmd::Phase;

    const SCRIPT: &str = r#"
        A comment line, ignored by the interpreter.
        0.5: {"type": "PHASE", "payload": "OPCONTROL"};
        1.0: {"type": "PAD", "payload": {"left_y": 100}};
        2.0: {"type": "CENTRE_PRESS"};
    "#;

    #[test]
    fn test_parse_script() {
        let si = ScriptInterpreter::from_text(SCRIPT).unwrap();

        assert_eq!(si.get_num_cmds(), 3);
        assert_eq!(si.get_duration(), 2.0);
    }

    #[test]
    fn test_pending_drain() {
        let mut si = ScriptInterpreter::from_text(SCRIPT).unwrap();

        // Nothing is pending before the first timestamp
        assert!(matches!(si.get_pending_cmds(0.1), PendingCmds::None));

        // The phase change and pad record are both pending at 1.5 s
        match si.get_pending_cmds(1.5) {
            PendingCmds::Some(cmds) => {
                assert_eq!(cmds.len(), 2);
                assert_eq!(cmds[0], BotCmd::Phase(Phase::OpControl));
            }
            _ => panic!("Expected pending commands at 1.5 s"),
        }

        // The centre press follows, then the script is done
        match si.get_pending_cmds(10.0) {
            PendingCmds::Some(cmds) => assert_eq!(cmds, vec![BotCmd::CentrePress]),
            _ => panic!("Expected pending commands at 10.0 s"),
        }

        assert!(matches!(si.get_pending_cmds(10.0), PendingCmds::EndOfScript));
    }

    #[test]
    fn test_empty_script_rejected() {
        assert!(matches!(
            ScriptInterpreter::from_text("no commands here"),
            Err(ScriptError::ScriptEmpty)
        ));
    }

    #[test]
    fn test_invalid_command_rejected() {
        let script = r#"1.0: {"type": "WARP_DRIVE"};"#;

        assert!(matches!(
            ScriptInterpreter::from_text(script),
            Err(ScriptError::InvalidCmd(_, _))
        ));
    }
}
