//! Selection extraction: turn a selection range over text-bearing nodes into
//! one plain-text string with reading-order separators.
//!
//! Extraction is tried in three tiers:
//!
//! 1. **Primary**: walk the selected runs in document order and insert a
//!    newline or a space wherever the owning element changes.
//! 2. **Subtree**: if the primary result is shorter than
//!    [`MIN_PRIMARY_CHARS`] characters (or the walk failed), rebuild the text
//!    per owning element, following every block element with a newline and
//!    every other element with a space. This walk clamps an end node past the
//!    last node and offsets past a node's text, so it only fails for an
//!    inverted range or a start node outside the view.
//! 3. **Serialization**: if the subtree walk fails as well, concatenate the
//!    selected runs verbatim with every offset clamped into range. This tier
//!    never fails.

use crate::error::{ExtractWarning, ExtractWarningCode, ExtractionFailure};
use crate::selection::{NodeId, SelectionRange};
use crate::text::{DisplayRole, TextBearing, char_slice};

/// Primary results shorter than this many characters trigger the subtree tier.
pub const MIN_PRIMARY_CHARS: usize = 3;

/// Which extraction tier produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtractionTier {
    Primary,
    Subtree,
    Serialization,
}

/// Extraction output together with how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The raw (not yet normalized) text.
    pub text: String,
    /// Tier that produced `text`.
    pub tier: ExtractionTier,
    /// Recoveries that happened along the way.
    pub warnings: Vec<ExtractWarning>,
}

/// A clipped, non-empty piece of one selected node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run<'a, O> {
    pub text: &'a str,
    pub owner: O,
    pub role: DisplayRole,
}

/// Extract the selected text, recovering from walk failures internally.
///
/// A collapsed range yields an empty string.
pub fn extract<N: TextBearing>(range: &SelectionRange, nodes: &[N]) -> String {
    extract_with_report(range, nodes).text
}

/// Like [`extract`], but also reports the tier used and any recoveries.
pub fn extract_with_report<N: TextBearing>(range: &SelectionRange, nodes: &[N]) -> Extraction {
    if range.is_collapsed() {
        return Extraction {
            text: String::new(),
            tier: ExtractionTier::Primary,
            warnings: Vec::new(),
        };
    }

    let mut warnings = Vec::new();

    match selected_runs(range, nodes) {
        Ok(runs) => {
            let text = join_runs(&runs);
            let len = text.chars().count();
            if len >= MIN_PRIMARY_CHARS {
                return Extraction {
                    text,
                    tier: ExtractionTier::Primary,
                    warnings,
                };
            }
            warnings.push(ExtractWarning::with_code(
                ExtractWarningCode::ShortExtraction,
                format!("primary extraction yielded {len} chars"),
            ));
        }
        Err(failure) => warnings.push(ExtractWarning::with_code(
            ExtractWarningCode::ExtractionFallback,
            format!("primary extraction failed: {failure}"),
        )),
    }

    match subtree_text(range, nodes) {
        Ok(text) => Extraction {
            text,
            tier: ExtractionTier::Subtree,
            warnings,
        },
        Err(failure) => {
            warnings.push(ExtractWarning::with_code(
                ExtractWarningCode::ExtractionFallback,
                format!("subtree extraction failed: {failure}"),
            ));
            Extraction {
                text: serialize_lenient(range, nodes),
                tier: ExtractionTier::Serialization,
                warnings,
            }
        }
    }
}

/// Collect the clipped runs of every node the range intersects.
///
/// Runs that clip to nothing are dropped.
///
/// # Errors
///
/// Fails if the range is inverted, an endpoint node is not in `nodes`, or an
/// offset lies beyond its node's text.
pub fn selected_runs<'a, N: TextBearing>(
    range: &SelectionRange,
    nodes: &'a [N],
) -> Result<Vec<Run<'a, N::Owner>>, ExtractionFailure> {
    if range.end < range.start {
        return Err(ExtractionFailure::InvertedRange);
    }
    let start = range.start.node.0;
    let end = range.end.node.0;
    if start >= nodes.len() {
        return Err(ExtractionFailure::UnknownNode(range.start.node));
    }
    if end >= nodes.len() {
        return Err(ExtractionFailure::UnknownNode(range.end.node));
    }

    let mut runs = Vec::with_capacity(end - start + 1);
    let included = nodes
        .iter()
        .enumerate()
        .skip(start)
        .take_while(|(idx, _)| range.spans_node(NodeId(*idx)));
    for (idx, node) in included {
        let text = node.text();
        let len = text.chars().count();
        let from = if idx == start { range.start.offset } else { 0 };
        let to = if idx == end { range.end.offset } else { len };

        for (offset, bound) in [(from, range.start), (to, range.end)] {
            if offset > len {
                return Err(ExtractionFailure::OffsetOutOfRange {
                    node: bound.node,
                    offset,
                    len,
                });
            }
        }

        let clipped = char_slice(text, from, to).ok_or(ExtractionFailure::OffsetOutOfRange {
            node: NodeId(idx),
            offset: from,
            len,
        })?;
        if clipped.is_empty() {
            continue;
        }
        runs.push(Run {
            text: clipped,
            owner: node.owner(),
            role: node.owner_role(),
        });
    }
    Ok(runs)
}

/// Concatenate runs, separating runs of different owning elements.
///
/// A newline goes between runs when either owner breaks lines, a space
/// otherwise; neither is added if the output already ends in one.
pub fn join_runs<O: PartialEq + Copy>(runs: &[Run<'_, O>]) -> String {
    let mut out = String::new();
    let mut previous: Option<(O, DisplayRole)> = None;

    for run in runs {
        if let Some((prev_owner, prev_role)) = previous {
            if prev_owner != run.owner {
                if prev_role.breaks_line() || run.role.breaks_line() {
                    if !out.ends_with(' ') && !out.ends_with('\n') {
                        out.push('\n');
                    }
                } else if !out.ends_with(' ') {
                    out.push(' ');
                }
            }
        }
        out.push_str(run.text);
        previous = Some((run.owner, run.role));
    }
    out
}

/// Like [`selected_runs`], but an end node past the last node selects to the
/// end of the view and offsets are clamped to their node's text.
///
/// # Errors
///
/// Fails if the range is inverted or its start node is not in `nodes`.
pub fn clamped_runs<'a, N: TextBearing>(
    range: &SelectionRange,
    nodes: &'a [N],
) -> Result<Vec<Run<'a, N::Owner>>, ExtractionFailure> {
    if range.end < range.start {
        return Err(ExtractionFailure::InvertedRange);
    }
    let start = range.start.node.0;
    if start >= nodes.len() {
        return Err(ExtractionFailure::UnknownNode(range.start.node));
    }

    let mut runs = Vec::new();
    let included = nodes
        .iter()
        .enumerate()
        .skip(start)
        .take_while(|(idx, _)| range.spans_node(NodeId(*idx)));
    for (idx, node) in included {
        let text = node.text();
        let len = text.chars().count();
        let from = if idx == start {
            range.start.offset.min(len)
        } else {
            0
        };
        let to = if idx == range.end.node.0 {
            range.end.offset.min(len)
        } else {
            len
        };
        match char_slice(text, from, to.max(from)) {
            Some(clipped) if !clipped.is_empty() => runs.push(Run {
                text: clipped,
                owner: node.owner(),
                role: node.owner_role(),
            }),
            _ => {}
        }
    }
    Ok(runs)
}

/// Rebuild the selection per owning element: a block element is followed by
/// a newline, any other element by a space.
///
/// # Errors
///
/// Fails under the same conditions as [`clamped_runs`].
pub fn subtree_text<N: TextBearing>(
    range: &SelectionRange,
    nodes: &[N],
) -> Result<String, ExtractionFailure> {
    let runs = clamped_runs(range, nodes)?;
    let mut out = String::new();

    for (idx, run) in runs.iter().enumerate() {
        out.push_str(run.text);
        let closes_element = runs
            .get(idx + 1)
            .is_none_or(|next| next.owner != run.owner);
        if closes_element {
            out.push(if run.role == DisplayRole::Block {
                '\n'
            } else {
                ' '
            });
        }
    }
    Ok(out)
}

/// Concatenate the selected runs without separators, clamping every index.
///
/// An inverted range or an empty node list yields an empty string.
pub fn serialize_lenient<N: TextBearing>(range: &SelectionRange, nodes: &[N]) -> String {
    if nodes.is_empty() || range.end < range.start {
        return String::new();
    }
    let last = nodes.len() - 1;
    let start = range.start.node.0.min(last);
    let end = range.end.node.0.min(last);

    let mut out = String::new();
    for (idx, node) in nodes.iter().enumerate().take(end + 1).skip(start) {
        let text = node.text();
        let len = text.chars().count();
        let from = if idx == range.start.node.0 {
            range.start.offset.min(len)
        } else {
            0
        };
        let to = if idx == range.end.node.0 {
            range.end.offset.min(len)
        } else {
            len
        };
        if let Some(clipped) = char_slice(text, from, to.max(from)) {
            out.push_str(clipped);
        }
    }
    out
}
