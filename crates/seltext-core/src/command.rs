//! User input mapping: selection triggers and key chords.

use std::time::Duration;

/// An interaction that starts selection extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Mouse or pointer button released.
    PointerRelease,
    /// Double click; only extracts when the selection is non-empty.
    DoubleClick,
    /// Explicit "save current selection" command.
    ForceSave,
}

/// How long to wait after a trigger before reading the selection, letting
/// the platform finish updating its own selection state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettleDelays {
    /// Delay after a pointer release (default: 100 ms).
    pub pointer_release: Duration,
    /// Delay after a double click (default: 50 ms).
    pub double_click: Duration,
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self {
            pointer_release: Duration::from_millis(100),
            double_click: Duration::from_millis(50),
        }
    }
}

impl SettleDelays {
    pub fn for_trigger(&self, trigger: Trigger) -> Duration {
        match trigger {
            Trigger::PointerRelease | Trigger::ForceSave => self.pointer_release,
            Trigger::DoubleClick => self.double_click,
        }
    }
}

/// Keyboard command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    ZoomReset,
    /// Extract and deliver the current selection now.
    ForceSave,
    /// Widen the current selection to word boundaries.
    ExpandSelection,
}

impl Command {
    /// Map a key pressed together with Ctrl (or Cmd) to a command.
    ///
    /// Returns `None` without the modifier or for an unbound key.
    pub fn from_key_chord(ctrl_or_meta: bool, key: &str) -> Option<Command> {
        if !ctrl_or_meta {
            return None;
        }
        match key {
            "=" | "+" => Some(Command::ZoomIn),
            "-" => Some(Command::ZoomOut),
            "0" => Some(Command::ZoomReset),
            "s" => Some(Command::ForceSave),
            "w" => Some(Command::ExpandSelection),
            _ => None,
        }
    }
}
