//! Error types for the collaborator layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`BackendError`]
//! that wraps renderer and transport failures and converts them to
//! [`SelError`].

use seltext_core::SelError;
use thiserror::Error;

/// Error type for rendering and transport operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The renderer could not produce a page's text layer.
    #[error("render error on page {}: {message}", .page + 1)]
    Render { page: usize, message: String },

    /// The transport could not complete the request.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("server returned status {0}")]
    Status(u16),

    /// Error reading input data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed text-layer description.
    #[error("invalid layout: {0}")]
    Layout(String),

    /// A core library error.
    #[error(transparent)]
    Core(#[from] SelError),
}

impl From<BackendError> for SelError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Render { page, message } => SelError::Render { page, message },
            BackendError::Transport(msg) => SelError::Delivery(msg),
            BackendError::Status(code) => SelError::Delivery(format!("status {code}")),
            BackendError::Io(e) => SelError::Io(e.to_string()),
            BackendError::Layout(msg) => SelError::Config(msg),
            BackendError::Core(e) => e,
        }
    }
}
