//! Error and warning types for seltext.
//!
//! Provides [`SelError`] for failures that cross a component boundary,
//! [`ExtractionFailure`] for walk errors that the extractor recovers from
//! locally, and [`ExtractWarning`] for recording those recoveries.

use std::fmt;

use crate::selection::NodeId;

/// Reasons a strict walk over a selection range can fail.
///
/// These never reach the user: the extractor falls back to a more lenient
/// tier and records an [`ExtractWarning`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionFailure {
    /// A range endpoint refers to a node the view does not contain.
    UnknownNode(NodeId),
    /// A range offset lies beyond the end of its node's text.
    OffsetOutOfRange {
        /// The node the offset refers to.
        node: NodeId,
        /// The offending character offset.
        offset: usize,
        /// Number of characters in the node.
        len: usize,
    },
    /// The start boundary lies after the end boundary.
    InvertedRange,
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionFailure::UnknownNode(node) => write!(f, "unknown node {node}"),
            ExtractionFailure::OffsetOutOfRange { node, offset, len } => write!(
                f,
                "offset {offset} out of range for node {node} ({len} chars)"
            ),
            ExtractionFailure::InvertedRange => write!(f, "range start is after range end"),
        }
    }
}

impl std::error::Error for ExtractionFailure {}

/// Error type for seltext operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SelError {
    /// A selection walk failed.
    Extraction(ExtractionFailure),
    /// The rendering collaborator failed to produce a page.
    Render {
        /// Page index (0-based).
        page: usize,
        /// Collaborator-supplied message.
        message: String,
    },
    /// The transport rejected a delivery or could not be reached.
    Delivery(String),
    /// Invalid configuration or input description.
    Config(String),
    /// I/O error reading input data.
    Io(String),
}

impl fmt::Display for SelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelError::Extraction(failure) => write!(f, "extraction failed: {failure}"),
            SelError::Render { page, message } => {
                write!(f, "render failed on page {}: {message}", page + 1)
            }
            SelError::Delivery(msg) => write!(f, "delivery failed: {msg}"),
            SelError::Config(msg) => write!(f, "invalid configuration: {msg}"),
            SelError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for SelError {}

impl From<ExtractionFailure> for SelError {
    fn from(failure: ExtractionFailure) -> Self {
        SelError::Extraction(failure)
    }
}

impl From<std::io::Error> for SelError {
    fn from(err: std::io::Error) -> Self {
        SelError::Io(err.to_string())
    }
}

/// Machine-readable code categorizing an [`ExtractWarning`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum ExtractWarningCode {
    /// The primary walk failed and a fallback tier produced the text.
    ExtractionFallback,
    /// The primary walk produced too little text and the fallback was tried.
    ShortExtraction,
    /// A page failed to render and was replaced by an empty text layer.
    RenderFailed,
    /// Any other warning.
    Other(String),
}

impl ExtractWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractWarningCode::ExtractionFallback => "EXTRACTION_FALLBACK",
            ExtractWarningCode::ShortExtraction => "SHORT_EXTRACTION",
            ExtractWarningCode::RenderFailed => "RENDER_FAILED",
            ExtractWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for ExtractWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue recorded while rendering or extracting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractWarning {
    /// Machine-readable warning code.
    pub code: ExtractWarningCode,
    /// Human-readable description.
    pub description: String,
    /// Page index (0-based) the warning relates to, if any.
    pub page: Option<usize>,
}

impl ExtractWarning {
    /// Create a warning with just a description.
    pub fn new(description: impl Into<String>) -> Self {
        let desc = description.into();
        Self {
            code: ExtractWarningCode::Other(desc.clone()),
            description: desc,
            page: None,
        }
    }

    /// Create a warning with a specific code and description.
    pub fn with_code(code: ExtractWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            page: None,
        }
    }

    /// Attach page context (builder pattern).
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {})", page + 1)?;
        }
        Ok(())
    }
}
