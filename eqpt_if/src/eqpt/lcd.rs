//! # Text panel device trait

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use thiserror::Error;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Errors raised by a text panel device.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("The panel has no line {0}")]
    InvalidLine(u8),
}

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A simple multi-line text panel.
pub trait TextPanel {
    /// Write `text` to the given line, replacing its contents.
    fn set_line(&mut self, line: u8, text: &str) -> Result<(), PanelError>;

    /// Clear the given line.
    fn clear_line(&mut self, line: u8) -> Result<(), PanelError>;
}
