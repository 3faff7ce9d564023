use std::path::Path;

use seltext::{Boundary, DocumentView, ExtractionTier, MemoryRenderer, SelectionRange};

/// Open a layout file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or cannot be parsed as a layout.
pub fn open_layout(file: &Path) -> Result<MemoryRenderer, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    MemoryRenderer::open(file).map_err(|e| {
        eprintln!("Error: failed to open layout: {e}");
        1
    })
}

/// A settled view over every page of a layout at scale 1.0.
pub fn document_view(renderer: &MemoryRenderer) -> DocumentView {
    DocumentView::from_layers(renderer.layers().to_vec(), 1.0)
}

/// Parse a `PAGE:SPAN:OFFSET` position.
///
/// Input page is 1-indexed (user-facing); output page is 0-indexed. Span and
/// offset are 0-indexed on both sides.
pub fn parse_position(input: &str) -> Result<(usize, usize, usize), String> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    let [page, span, offset] = parts.as_slice() else {
        return Err(format!("invalid position '{input}' (expected PAGE:SPAN:OFFSET)"));
    };
    let number = |s: &str| -> Result<usize, String> {
        s.trim()
            .parse()
            .map_err(|_| format!("invalid number '{s}' in position '{input}'"))
    };
    let page = number(*page)?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    Ok((page - 1, number(*span)?, number(*offset)?))
}

fn resolve_boundary(view: &DocumentView, input: &str) -> Result<Boundary, String> {
    let (page, span, offset) = parse_position(input)?;
    if page >= view.page_count() {
        return Err(format!(
            "page {} exceeds document page count ({})",
            page + 1,
            view.page_count()
        ));
    }
    view.boundary(page, span, offset)
        .ok_or_else(|| format!("page {} has no span {span}", page + 1))
}

/// Resolve `--from`/`--to` positions into a range over `view`.
///
/// The two positions may be given in either order.
pub fn resolve_range(view: &DocumentView, from: &str, to: &str) -> Result<SelectionRange, i32> {
    let report = |e: String| {
        eprintln!("Error: {e}");
        1
    };
    let anchor = resolve_boundary(view, from).map_err(report)?;
    let focus = resolve_boundary(view, to).map_err(report)?;
    Ok(SelectionRange::from_anchor_focus(anchor, focus))
}

/// Lowercase name of an extraction tier.
pub fn tier_str(tier: ExtractionTier) -> &'static str {
    match tier {
        ExtractionTier::Primary => "primary",
        ExtractionTier::Subtree => "subtree",
        ExtractionTier::Serialization => "serialization",
    }
}
