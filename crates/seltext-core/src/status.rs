//! Human-readable status indicator driven by render and delivery outcomes.

use std::fmt;

/// What the status indicator currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "state", rename_all = "lowercase")
)]
pub enum Status {
    /// The document is loading or re-rendering.
    #[default]
    Loading,
    /// Ready for selections.
    Ready,
    /// A delivery of `chars` characters is in flight.
    Saving { chars: usize },
    /// The last delivery of `chars` characters succeeded.
    Saved { chars: usize },
    /// The last delivery failed. The text was not kept.
    Error,
}

/// Visual emphasis of a [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Busy,
    Success,
    Failure,
}

impl Status {
    pub fn tone(&self) -> Tone {
        match self {
            Status::Loading => Tone::Neutral,
            Status::Saving { .. } => Tone::Busy,
            Status::Ready | Status::Saved { .. } => Tone::Success,
            Status::Error => Tone::Failure,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Loading => f.write_str("Loading document..."),
            Status::Ready => f.write_str("Document ready - select text to save it"),
            Status::Saving { chars } => write!(f, "Saving {chars} characters..."),
            Status::Saved { chars } => write!(f, "Saved {chars} characters"),
            Status::Error => f.write_str("Save failed - server not reachable"),
        }
    }
}
