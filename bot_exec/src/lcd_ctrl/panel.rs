//! Text panel devices

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::info;

// Internal
use eqpt_if::eqpt::lcd::{PanelError, TextPanel};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Panel device which renders lines into the session log.
///
/// Stands in for the platform's LCD on the bench.
#[derive(Default)]
pub struct LogPanel;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TextPanel for LogPanel {
    fn set_line(&mut self, line: u8, text: &str) -> Result<(), PanelError> {
        info!("LCD line {}: {}", line, text);
        Ok(())
    }

    fn clear_line(&mut self, line: u8) -> Result<(), PanelError> {
        info!("LCD line {} cleared", line);
        Ok(())
    }
}
