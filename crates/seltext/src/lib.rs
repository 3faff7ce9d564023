//! seltext: Turn selections over a rendered, paginated text layer into clean
//! plain text and deliver it.
//!
//! This is the public API facade crate for seltext. It re-exports types from
//! seltext-core and uses seltext-backend for rendering and delivery.
//!
//! # Architecture
//!
//! - **seltext-core**: Backend-independent data types and algorithms
//! - **seltext-backend**: Renderer and transport seams with in-memory and HTTP implementations
//! - **seltext** (this crate): [`DocumentView`] and the [`Viewer`] controller that ties everything together

mod document;
mod viewer;

pub use document::{DocumentView, Page, ViewNode};
pub use viewer::{CommandOutcome, Delivery, Viewer, ViewerConfig};

pub use seltext_backend::{
    BackendError, DEFAULT_BASE_URL, Endpoint, LayoutFile, MemoryRenderer, PageRenderer,
    RecordingTransport, Transport,
};
#[cfg(feature = "http")]
pub use seltext_backend::HttpTransport;
pub use seltext_core::{
    BBox, Boundary, Command, DeliveryGate, DisplayRole, ElementId, ExpandOptions, ExtractWarning,
    ExtractWarningCode, Extraction, ExtractionFailure, ExtractionTier, GateOptions, NodeId,
    NormalizeOptions, PassId, RenderTracker, SelError, SelectionRange, Settle, SettleDelays,
    Status, TextBearing, TextLayer, TextSpan, Tone, Trigger, UnicodeNorm, ViewState, WordClass,
    Zoom, ZoomOptions, expand_to_word_boundaries, extract, normalize, normalize_with,
};

pub use seltext_backend;
pub use seltext_core;
