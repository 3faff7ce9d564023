//! The rendered document: pages, their text layers, and node addressing.

use seltext_core::{
    Boundary, DisplayRole, ElementId, ExtractWarning, Extraction, NodeId, NormalizeOptions,
    SelectionRange, TextBearing, TextLayer, TextSpan, extract_with_report, join_runs,
    normalize_with, selected_runs,
};

/// One page of a [`DocumentView`].
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    index: usize,
    layer: TextLayer,
    settled: bool,
}

impl Page {
    fn pending(index: usize) -> Self {
        Self {
            index,
            layer: TextLayer::default(),
            settled: false,
        }
    }

    /// 0-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based page number for display.
    pub fn page_number(&self) -> usize {
        self.index + 1
    }

    /// The page's text layer (empty until the page has settled).
    pub fn layer(&self) -> &TextLayer {
        &self.layer
    }

    /// Whether the page's render has completed in this pass.
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// A text-layer span addressed across the whole document.
///
/// Elements are identified per page, so the owner includes the page index:
/// two spans on different pages never share an owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewNode<'a> {
    /// Page the span sits on.
    pub page: usize,
    /// The span itself.
    pub span: &'a TextSpan,
}

impl TextBearing for ViewNode<'_> {
    type Owner = (usize, ElementId);

    fn text(&self) -> &str {
        &self.span.text
    }

    fn owner(&self) -> (usize, ElementId) {
        (self.page, self.span.owner)
    }

    fn owner_role(&self) -> DisplayRole {
        self.span.role
    }
}

/// All pages of one render pass.
///
/// A view is built for a single scale and thrown away when the scale
/// changes. Node ids number every span of every page in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentView {
    scale: f64,
    pages: Vec<Page>,
    /// Node id of the first span of each page, plus the total node count.
    page_starts: Vec<usize>,
    warnings: Vec<ExtractWarning>,
}

impl DocumentView {
    /// An empty view of `page_count` unsettled pages at `scale`.
    pub fn new(page_count: usize, scale: f64) -> Self {
        Self {
            scale,
            pages: (0..page_count).map(Page::pending).collect(),
            page_starts: vec![0; page_count + 1],
            warnings: Vec::new(),
        }
    }

    /// A fully settled view over the given layers.
    pub fn from_layers(layers: Vec<TextLayer>, scale: f64) -> Self {
        let mut view = Self::new(layers.len(), scale);
        for (index, layer) in layers.into_iter().enumerate() {
            view.set_page(index, layer);
        }
        view
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Access a page by 0-based index.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Install the text layer of page `index` and mark it settled.
    ///
    /// Returns `false` if the page is not part of this view.
    pub fn set_page(&mut self, index: usize, layer: TextLayer) -> bool {
        let Some(page) = self.pages.get_mut(index) else {
            return false;
        };
        page.layer = layer;
        page.settled = true;
        self.reindex();
        true
    }

    fn reindex(&mut self) {
        let mut next = 0;
        for (slot, page) in self.page_starts.iter_mut().zip(&self.pages) {
            *slot = next;
            next += page.layer.spans.len();
        }
        if let Some(total) = self.page_starts.last_mut() {
            *total = next;
        }
    }

    /// Record a problem noticed while building the view.
    pub fn push_warning(&mut self, warning: ExtractWarning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[ExtractWarning] {
        &self.warnings
    }

    /// Total number of spans over all pages.
    pub fn node_count(&self) -> usize {
        self.page_starts.last().copied().unwrap_or(0)
    }

    /// Every span of the document in reading order, indexed by [`NodeId`].
    pub fn nodes(&self) -> Vec<ViewNode<'_>> {
        self.pages
            .iter()
            .flat_map(|page| {
                page.layer.spans.iter().map(move |span| ViewNode {
                    page: page.index,
                    span,
                })
            })
            .collect()
    }

    /// Node id of span `span` (0-based within the page) on page `page`.
    pub fn node_id(&self, page: usize, span: usize) -> Option<NodeId> {
        let p = self.pages.get(page)?;
        if span >= p.layer.spans.len() {
            return None;
        }
        Some(NodeId(self.page_starts[page] + span))
    }

    /// Page index and in-page span index of `node`.
    pub fn locate(&self, node: NodeId) -> Option<(usize, usize)> {
        if node.0 >= self.node_count() {
            return None;
        }
        // Last page whose first node is at or before `node` and which has spans.
        let page = self.page_starts[..self.pages.len()]
            .iter()
            .enumerate()
            .rev()
            .find(|(idx, start)| **start <= node.0 && !self.pages[*idx].layer.is_empty())
            .map(|(idx, _)| idx)?;
        Some((page, node.0 - self.page_starts[page]))
    }

    /// Boundary at character `offset` of span `span` on page `page`.
    ///
    /// The offset is not checked against the span's length; the extractor
    /// deals with out-of-range offsets.
    pub fn boundary(&self, page: usize, span: usize, offset: usize) -> Option<Boundary> {
        self.node_id(page, span)
            .map(|node| Boundary { node, offset })
    }

    /// Extract the raw text of `range`, with the tier used and any recoveries.
    pub fn extract(&self, range: &SelectionRange) -> Extraction {
        extract_with_report(range, &self.nodes())
    }

    /// Raw text of a whole page, spans joined as a selection over them would be.
    pub fn page_text(&self, index: usize) -> String {
        let nodes: Vec<ViewNode<'_>> = match self.pages.get(index) {
            Some(page) => page
                .layer
                .spans
                .iter()
                .map(|span| ViewNode { page: index, span })
                .collect(),
            None => return String::new(),
        };
        let Some(last) = nodes.last() else {
            return String::new();
        };
        let range = SelectionRange::new(
            Boundary::new(0, 0),
            Boundary::new(nodes.len() - 1, last.span.char_len()),
        );
        selected_runs(&range, &nodes)
            .map(|runs| join_runs(&runs))
            .unwrap_or_default()
    }

    /// Normalized text of every non-blank page, each under a
    /// `--- Page N ---` header.
    pub fn full_text(&self, options: &NormalizeOptions) -> String {
        self.pages
            .iter()
            .filter_map(|page| {
                let text = normalize_with(&self.page_text(page.index), options);
                if text.is_empty() {
                    None
                } else {
                    Some(format!("--- Page {} ---\n{text}", page.page_number()))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
