//! Implementations for the LcdCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::warn;

// Internal
use eqpt_if::eqpt::lcd::{PanelError, TextPanel};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Line the greeting is written to.
pub const GREETING_LINE: u8 = 1;

/// Greeting shown once the exec is up.
pub const GREETING_TEXT: &str = "Hello Talos Operator!";

/// Line toggled by the centre button.
pub const TOGGLE_LINE: u8 = 2;

/// Text written by the centre-button toggle.
pub const TOGGLE_TEXT: &str = "I was pressed!";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// LCD control state.
///
/// The toggle flag lives here rather than in a process-wide static, the
/// module owns its panel and everything drawn on it. Presses arrive as
/// discrete commands, edge detection is the input side's concern.
#[derive(Default)]
pub struct LcdCtrl {
    panel: Option<Box<dyn TextPanel>>,

    /// True while the toggle line is showing its text. Initial state is
    /// hidden.
    toggle_shown: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LcdCtrl {
    /// Initialise the LCD, writing the greeting line.
    pub fn init(&mut self, mut panel: Box<dyn TextPanel>) -> Result<(), PanelError> {
        panel.set_line(GREETING_LINE, GREETING_TEXT)?;

        self.panel = Some(panel);
        self.toggle_shown = false;

        Ok(())
    }

    /// Handle a centre-button press.
    ///
    /// Alternates the toggle line between its text and cleared. A press
    /// arriving before init is dropped with a warning, and a panel write
    /// failure is logged rather than propagated, the toggle is cosmetic.
    pub fn on_centre_press(&mut self) {
        let panel = match self.panel {
            Some(ref mut p) => p,
            None => {
                warn!("Centre press before LCD init, ignored");
                return;
            }
        };

        self.toggle_shown = !self.toggle_shown;

        let result = if self.toggle_shown {
            panel.set_line(TOGGLE_LINE, TOGGLE_TEXT)
        } else {
            panel.clear_line(TOGGLE_LINE)
        };

        if let Err(e) = result {
            warn!("Could not update the toggle line: {}", e);
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Panel which records the current contents of each line.
    #[derive(Default, Clone)]
    struct MockPanel {
        lines: Rc<RefCell<HashMap<u8, String>>>,
    }

    impl TextPanel for MockPanel {
        fn set_line(&mut self, line: u8, text: &str) -> Result<(), PanelError> {
            self.lines.borrow_mut().insert(line, String::from(text));
            Ok(())
        }

        fn clear_line(&mut self, line: u8) -> Result<(), PanelError> {
            self.lines.borrow_mut().remove(&line);
            Ok(())
        }
    }

    #[test]
    fn test_init_writes_greeting() {
        let panel = MockPanel::default();
        let mut lcd = LcdCtrl::default();

        lcd.init(Box::new(panel.clone())).unwrap();

        assert_eq!(
            panel.lines.borrow().get(&GREETING_LINE),
            Some(&String::from(GREETING_TEXT))
        );
    }

    #[test]
    fn test_toggle_alternates() {
        let panel = MockPanel::default();
        let mut lcd = LcdCtrl::default();

        lcd.init(Box::new(panel.clone())).unwrap();

        // Press 1: text shown
        lcd.on_centre_press();
        assert_eq!(
            panel.lines.borrow().get(&TOGGLE_LINE),
            Some(&String::from(TOGGLE_TEXT))
        );

        // Press 2: line cleared
        lcd.on_centre_press();
        assert_eq!(panel.lines.borrow().get(&TOGGLE_LINE), None);

        // Press 3: text again
        lcd.on_centre_press();
        assert_eq!(
            panel.lines.borrow().get(&TOGGLE_LINE),
            Some(&String::from(TOGGLE_TEXT))
        );
    }

    #[test]
    fn test_press_before_init_ignored() {
        let mut lcd = LcdCtrl::default();

        // Nothing to assert beyond not panicking, the press is dropped
        lcd.on_centre_press();
    }
}
