//! seltext-backend: Rendering and delivery collaborators.
//!
//! This crate defines the two seams between the viewer controller and the
//! outside world: [`PageRenderer`], which turns a page into a text layer at a
//! zoom scale, and [`Transport`], which hands extracted text to a consumer.
//! It depends on seltext-core for shared data types.

pub mod error;
pub mod render;
pub mod transport;

pub use error::BackendError;
pub use render::{LayoutFile, MemoryRenderer, PageRenderer};
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::{DEFAULT_BASE_URL, Endpoint, RecordingTransport, Transport};

pub use seltext_core;
