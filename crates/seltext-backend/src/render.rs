//! Page renderer trait and an in-memory implementation.
//!
//! Defines the [`PageRenderer`] trait that abstracts producing a page's text
//! layer at a given zoom scale. This lets the viewer controller run against a
//! real rasterizing renderer or against prepared layers (tests, the CLI).

use std::collections::BTreeSet;
#[cfg(feature = "serde")]
use std::path::Path;

use seltext_core::TextLayer;
use tracing::debug;

use crate::error::BackendError;

/// Trait abstracting page rendering.
///
/// A renderer knows how many pages the loaded document has and can produce
/// the text layer of any page at a given scale. Pages may be requested in any
/// order and concurrently, so implementations must be [`Sync`].
///
/// # Usage
///
/// ```ignore
/// let count = renderer.page_count();
/// let layer = renderer.render_page(0, 1.2)?;
/// ```
pub trait PageRenderer: Sync {
    /// Return the number of pages in the document.
    fn page_count(&self) -> usize;

    /// Render the page at 0-based `index` and return its text layer with
    /// boxes expressed at `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Render`] if the page cannot be rendered.
    fn render_page(&self, index: usize, scale: f64) -> Result<TextLayer, BackendError>;
}

impl<R: PageRenderer + ?Sized> PageRenderer for &R {
    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn render_page(&self, index: usize, scale: f64) -> Result<TextLayer, BackendError> {
        (**self).render_page(index, scale)
    }
}

/// On-disk description of a document's text layers.
///
/// ```json
/// {"pages": [{"spans": [{"text": "Hello", "owner": 0, "role": "block"}]}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutFile {
    /// Text layers in page order, at scale 1.0.
    pub pages: Vec<TextLayer>,
}

/// Renderer serving prepared text layers.
///
/// Layers are stored at scale 1.0 and scaled on every render. Individual
/// pages can be marked as failing to exercise error handling.
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    pages: Vec<TextLayer>,
    failing: BTreeSet<usize>,
}

impl MemoryRenderer {
    /// Create a renderer over the given unscaled layers.
    pub fn from_layers(pages: Vec<TextLayer>) -> Self {
        Self {
            pages,
            failing: BTreeSet::new(),
        }
    }

    /// Parse a [`LayoutFile`] from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Layout`] if the JSON is malformed.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, BackendError> {
        let file: LayoutFile =
            serde_json::from_str(json).map_err(|e| BackendError::Layout(e.to_string()))?;
        Ok(Self::from_layers(file.pages))
    }

    /// Read and parse a [`LayoutFile`] from disk.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Io`] if the file cannot be read, or
    /// [`BackendError::Layout`] if its content is malformed.
    #[cfg(feature = "serde")]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let renderer = Self::from_json(&json)?;
        debug!(path = %path.display(), pages = renderer.pages.len(), "loaded layout");
        Ok(renderer)
    }

    /// Make every render of page `index` fail.
    pub fn fail_page(mut self, index: usize) -> Self {
        self.failing.insert(index);
        self
    }

    /// The unscaled layers.
    pub fn layers(&self) -> &[TextLayer] {
        &self.pages
    }
}

impl PageRenderer for MemoryRenderer {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn render_page(&self, index: usize, scale: f64) -> Result<TextLayer, BackendError> {
        if self.failing.contains(&index) {
            return Err(BackendError::Render {
                page: index,
                message: "page marked as failing".to_string(),
            });
        }
        let layer = self.pages.get(index).ok_or_else(|| BackendError::Render {
            page: index,
            message: format!("document has {} pages", self.pages.len()),
        })?;
        Ok(layer.scaled(scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seltext_core::{BBox, DisplayRole, TextSpan};

    fn renderer() -> MemoryRenderer {
        MemoryRenderer::from_layers(vec![
            TextLayer::new(vec![
                TextSpan::new("Hello", 0, DisplayRole::Block).at(BBox::new(10.0, 20.0, 60.0, 32.0)),
            ]),
            TextLayer::new(vec![TextSpan::new("World", 0, DisplayRole::Block)]),
        ])
    }

    #[test]
    fn renders_scaled_layer() {
        let r = renderer();
        assert_eq!(r.page_count(), 2);
        let layer = r.render_page(0, 2.0).unwrap();
        assert_eq!(layer.spans[0].text, "Hello");
        assert_eq!(layer.spans[0].bbox, BBox::new(20.0, 40.0, 120.0, 64.0));
        // Stored layer is untouched.
        assert_eq!(r.layers()[0].spans[0].bbox.x0, 10.0);
    }

    #[test]
    fn out_of_range_page_is_render_error() {
        let err = renderer().render_page(5, 1.0).unwrap_err();
        assert!(matches!(err, BackendError::Render { page: 5, .. }));
    }

    #[test]
    fn failing_page() {
        let r = renderer().fail_page(1);
        assert!(r.render_page(0, 1.0).is_ok());
        assert!(matches!(
            r.render_page(1, 1.0),
            Err(BackendError::Render { page: 1, .. })
        ));
    }

    #[test]
    fn renderer_by_reference() {
        let r = renderer();
        let by_ref = &r;
        assert_eq!(PageRenderer::page_count(&by_ref), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_layout() {
        let r = MemoryRenderer::from_json(
            r#"{"pages":[{"spans":[{"text":"A","owner":1,"role":"list-item"}]},{"spans":[]}]}"#,
        )
        .unwrap();
        assert_eq!(r.page_count(), 2);
        let layer = r.render_page(0, 1.0).unwrap();
        assert_eq!(layer.spans[0].role, DisplayRole::ListItem);
        assert!(r.render_page(1, 1.0).unwrap().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_rejects_garbage() {
        let err = MemoryRenderer::from_json("{not json").unwrap_err();
        assert!(matches!(err, BackendError::Layout(_)));
    }
}
