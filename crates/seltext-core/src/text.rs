use crate::geometry::BBox;

/// Effective display role of the element that owns a text run.
///
/// This is the only layout information the extractor needs from the
/// rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum DisplayRole {
    /// Block-level element (paragraph, positioned text-layer span).
    Block,
    /// List item.
    ListItem,
    /// Inline element.
    #[default]
    Inline,
}

impl DisplayRole {
    /// Returns `true` if a boundary next to this element reads as a line break.
    pub fn breaks_line(&self) -> bool {
        matches!(self, DisplayRole::Block | DisplayRole::ListItem)
    }

    /// Returns the lowercase name used in text-layer files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayRole::Block => "block",
            DisplayRole::ListItem => "list-item",
            DisplayRole::Inline => "inline",
        }
    }
}

/// Identifier of an owning element within one text layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ElementId(pub u32);

/// A leaf node carrying a run of text and the role of its owning element.
///
/// The extractor is written against this trait only, so it can be driven by
/// any tree representation (a rendered text layer, a test fixture, ...).
pub trait TextBearing {
    /// Identity of the owning element. Two runs with equal owners are never
    /// separated.
    type Owner: PartialEq + Copy;

    /// The node's full text run.
    fn text(&self) -> &str;

    /// The owning element.
    fn owner(&self) -> Self::Owner;

    /// Effective display role of the owning element.
    fn owner_role(&self) -> DisplayRole;
}

/// A positioned span of the invisible text layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSpan {
    /// The text run.
    pub text: String,
    /// Owning element within the layer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub owner: ElementId,
    /// Display role of the owning element.
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: DisplayRole,
    /// Position over the rendered glyphs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bbox: BBox,
}

impl TextSpan {
    /// Create an unpositioned span.
    pub fn new(text: impl Into<String>, owner: u32, role: DisplayRole) -> Self {
        Self {
            text: text.into(),
            owner: ElementId(owner),
            role,
            bbox: BBox::default(),
        }
    }

    /// Set the span's position (builder pattern).
    pub fn at(mut self, bbox: BBox) -> Self {
        self.bbox = bbox;
        self
    }

    /// Number of characters in the run.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl TextBearing for TextSpan {
    type Owner = ElementId;

    fn text(&self) -> &str {
        &self.text
    }

    fn owner(&self) -> ElementId {
        self.owner
    }

    fn owner_role(&self) -> DisplayRole {
        self.role
    }
}

impl<T: TextBearing + ?Sized> TextBearing for &T {
    type Owner = T::Owner;

    fn text(&self) -> &str {
        (**self).text()
    }

    fn owner(&self) -> T::Owner {
        (**self).owner()
    }

    fn owner_role(&self) -> DisplayRole {
        (**self).owner_role()
    }
}

/// The text layer of one page: spans in reading order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextLayer {
    /// Spans in the order established by the renderer.
    pub spans: Vec<TextSpan>,
}

impl TextLayer {
    pub fn new(spans: Vec<TextSpan>) -> Self {
        Self { spans }
    }

    /// Return a copy with every span box multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> TextLayer {
        TextLayer {
            spans: self
                .spans
                .iter()
                .map(|span| TextSpan {
                    bbox: span.bbox.scaled(factor),
                    ..span.clone()
                })
                .collect(),
        }
    }

    /// Total number of characters across all spans.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(TextSpan::char_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Take the characters `[start, end)` of `text`, counting Unicode scalars.
///
/// Returns `None` if either index exceeds the character count or
/// `start > end`.
pub fn char_slice(text: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }
    let byte_at = |idx: usize| -> Option<usize> {
        if idx == 0 {
            return Some(0);
        }
        match text.char_indices().nth(idx) {
            Some((byte, _)) => Some(byte),
            None if text.chars().count() == idx => Some(text.len()),
            None => None,
        }
    };
    let start_byte = byte_at(start)?;
    let end_byte = byte_at(end)?;
    Some(&text[start_byte..end_byte])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_role_breaks_line() {
        assert!(DisplayRole::Block.breaks_line());
        assert!(DisplayRole::ListItem.breaks_line());
        assert!(!DisplayRole::Inline.breaks_line());
    }

    #[test]
    fn display_role_default_is_inline() {
        assert_eq!(DisplayRole::default(), DisplayRole::Inline);
        assert_eq!(DisplayRole::ListItem.as_str(), "list-item");
    }

    #[test]
    fn span_implements_text_bearing() {
        let span = TextSpan::new("héllo", 3, DisplayRole::Block);
        assert_eq!(span.text(), "héllo");
        assert_eq!(span.owner(), ElementId(3));
        assert_eq!(span.owner_role(), DisplayRole::Block);
        assert_eq!(span.char_len(), 5);
    }

    #[test]
    fn reference_forwards_text_bearing() {
        let span = TextSpan::new("x", 1, DisplayRole::Inline);
        let r = &span;
        assert_eq!(TextBearing::text(&r), "x");
        assert_eq!(TextBearing::owner(&r), ElementId(1));
    }

    #[test]
    fn layer_scaled_keeps_text() {
        let layer = TextLayer::new(vec![
            TextSpan::new("a", 0, DisplayRole::Block).at(BBox::new(1.0, 2.0, 3.0, 4.0)),
        ]);
        let scaled = layer.scaled(2.0);
        assert_eq!(scaled.spans[0].text, "a");
        assert_eq!(scaled.spans[0].bbox, BBox::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(layer.spans[0].bbox, BBox::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn layer_char_count() {
        let layer = TextLayer::new(vec![
            TextSpan::new("Đà Nẵng", 0, DisplayRole::Block),
            TextSpan::new("ok", 1, DisplayRole::Block),
        ]);
        assert_eq!(layer.char_count(), 9);
        assert!(!layer.is_empty());
        assert!(TextLayer::default().is_empty());
    }

    #[test]
    fn char_slice_counts_scalars() {
        assert_eq!(char_slice("Việt Nam", 0, 4), Some("Việt"));
        assert_eq!(char_slice("Việt Nam", 5, 8), Some("Nam"));
        assert_eq!(char_slice("abc", 3, 3), Some(""));
        assert_eq!(char_slice("", 0, 0), Some(""));
    }

    #[test]
    fn char_slice_rejects_bad_bounds() {
        assert_eq!(char_slice("abc", 0, 4), None);
        assert_eq!(char_slice("abc", 2, 1), None);
    }
}
