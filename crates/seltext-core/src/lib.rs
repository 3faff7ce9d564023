//! seltext-core: Backend-independent types and algorithms.
//!
//! This crate provides the node model ([`TextBearing`], [`TextSpan`]),
//! selection ranges, and the algorithms that turn a selection over a
//! rendered text layer into clean plain text: extraction, normalization,
//! word-boundary expansion, and the delivery gate. It also holds the small
//! state machines (render tracking, zoom, status) a viewer controller needs.
//! Nothing here performs I/O.

pub mod command;
pub mod error;
pub mod extract;
pub mod gate;
pub mod geometry;
pub mod normalize;
pub mod render;
pub mod selection;
pub mod status;
pub mod text;
pub mod unicode_norm;
pub mod words;
pub mod zoom;

pub use command::{Command, SettleDelays, Trigger};
pub use error::{ExtractWarning, ExtractWarningCode, ExtractionFailure, SelError};
pub use extract::{
    Extraction, ExtractionTier, MIN_PRIMARY_CHARS, Run, clamped_runs, extract, extract_with_report,
    join_runs, selected_runs, serialize_lenient, subtree_text,
};
pub use gate::{DeliveryGate, GateOptions};
pub use geometry::BBox;
pub use normalize::{
    NormalizeOptions, VIETNAMESE_LOWER, VIETNAMESE_UPPER, collapse_whitespace, normalize,
    normalize_with, repair_script_boundaries,
};
pub use render::{PassId, RenderTracker, Settle, ViewState};
pub use selection::{Boundary, NodeId, SelectionRange};
pub use status::{Status, Tone};
pub use text::{DisplayRole, ElementId, TextBearing, TextLayer, TextSpan, char_slice};
pub use unicode_norm::UnicodeNorm;
pub use words::{ExpandOptions, WordClass, expand_to_word_boundaries};
pub use zoom::{Zoom, ZoomOptions};
