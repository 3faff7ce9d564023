//! Word-boundary expansion of a raw selection.
//!
//! The start boundary moves backward over word characters only, while the end
//! boundary moves forward over word characters *and* whitespace. A selection
//! therefore never grows to include leading punctuation, but it does pick up
//! the rest of a trailing word and the spaces after it.

use crate::selection::{Boundary, SelectionRange};
use crate::text::TextBearing;

/// Which characters count as "word" characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum WordClass {
    /// `[A-Za-z0-9_]`, the classic regex `\w`.
    #[default]
    Ascii,
    /// Any Unicode alphanumeric character or `_`, so accented letters join words.
    Unicode,
}

impl WordClass {
    /// Returns `true` if `c` is a word character in this class.
    pub fn is_word(&self, c: char) -> bool {
        match self {
            WordClass::Ascii => c.is_ascii_alphanumeric() || c == '_',
            WordClass::Unicode => c.is_alphanumeric() || c == '_',
        }
    }

    /// Returns `true` if `c` is a word character or whitespace.
    pub fn is_word_or_space(&self, c: char) -> bool {
        self.is_word(c) || c.is_whitespace()
    }
}

/// Options for [`expand_to_word_boundaries`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandOptions {
    pub word_class: WordClass,
}

/// Widen `range` to word boundaries within its endpoint nodes.
///
/// Each endpoint only moves inside its own node. An endpoint whose node is
/// missing from `nodes`, or whose offset lies past the node's text, is left
/// as it is. The input range is not modified.
pub fn expand_to_word_boundaries<N: TextBearing>(
    range: &SelectionRange,
    nodes: &[N],
    options: &ExpandOptions,
) -> SelectionRange {
    let class = options.word_class;

    let start = match nodes.get(range.start.node.0) {
        Some(node) => {
            let chars: Vec<char> = node.text().chars().collect();
            let mut offset = range.start.offset;
            if offset <= chars.len() {
                while offset > 0 && class.is_word(chars[offset - 1]) {
                    offset -= 1;
                }
            }
            Boundary {
                node: range.start.node,
                offset,
            }
        }
        None => range.start,
    };

    let end = match nodes.get(range.end.node.0) {
        Some(node) => {
            let chars: Vec<char> = node.text().chars().collect();
            let mut offset = range.end.offset;
            while offset < chars.len() && class.is_word_or_space(chars[offset]) {
                offset += 1;
            }
            Boundary {
                node: range.end.node,
                offset,
            }
        }
        None => range.end,
    };

    SelectionRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use crate::text::{DisplayRole, TextSpan};

    fn span(text: &str) -> TextSpan {
        TextSpan::new(text, 0, DisplayRole::Block)
    }

    #[test]
    fn start_stops_at_hyphen_end_takes_trailing_spaces() {
        let nodes = vec![span("  select-ed word  ")];
        // "ed wor"
        let range = SelectionRange::within(0, 9, 15);
        let expanded = expand_to_word_boundaries(&range, &nodes, &ExpandOptions::default());
        assert_eq!(expanded, SelectionRange::within(0, 9, 18));
        assert_eq!(extract(&expanded, &nodes), "ed word  ");
    }

    #[test]
    fn start_moves_back_to_word_start() {
        let nodes = vec![span("  select-ed word  ")];
        // "lect"
        let range = SelectionRange::within(0, 4, 8);
        let expanded = expand_to_word_boundaries(&range, &nodes, &ExpandOptions::default());
        assert_eq!(expanded.start.offset, 2);
        // '-' is neither word nor space, so the end does not move.
        assert_eq!(expanded.end.offset, 8);
    }

    #[test]
    fn end_stops_at_punctuation() {
        let nodes = vec![span("Hello world, again")];
        let range = SelectionRange::within(0, 6, 8);
        let expanded = expand_to_word_boundaries(&range, &nodes, &ExpandOptions::default());
        assert_eq!(expanded, SelectionRange::within(0, 6, 11));
    }

    #[test]
    fn leading_punctuation_is_not_grabbed() {
        let nodes = vec![span("(quoted) text")];
        let range = SelectionRange::within(0, 1, 3);
        let expanded = expand_to_word_boundaries(&range, &nodes, &ExpandOptions::default());
        assert_eq!(expanded.start.offset, 1);
    }

    #[test]
    fn ascii_class_stops_at_diacritics() {
        let nodes = vec![span("trường học")];
        // "ng"
        let range = SelectionRange::within(0, 4, 6);
        let ascii = expand_to_word_boundaries(&range, &nodes, &ExpandOptions::default());
        assert_eq!(ascii.start.offset, 4);

        let unicode = expand_to_word_boundaries(
            &range,
            &nodes,
            &ExpandOptions {
                word_class: WordClass::Unicode,
            },
        );
        assert_eq!(unicode.start.offset, 0);
        assert_eq!(unicode.end.offset, 10);
    }

    #[test]
    fn endpoints_move_within_their_own_nodes() {
        let nodes = vec![span("first word"), span("second word")];
        let range = SelectionRange::new(Boundary::new(0, 8), Boundary::new(1, 3));
        let expanded = expand_to_word_boundaries(&range, &nodes, &ExpandOptions::default());
        assert_eq!(expanded.start, Boundary::new(0, 6));
        assert_eq!(expanded.end, Boundary::new(1, 11));
    }

    #[test]
    fn missing_node_leaves_endpoint_unchanged() {
        let nodes = vec![span("abc def")];
        let range = SelectionRange::new(Boundary::new(0, 5), Boundary::new(3, 1));
        let expanded = expand_to_word_boundaries(&range, &nodes, &ExpandOptions::default());
        assert_eq!(expanded.start, Boundary::new(0, 4));
        assert_eq!(expanded.end, Boundary::new(3, 1));
    }

    #[test]
    fn input_range_is_not_mutated() {
        let nodes = vec![span("word")];
        let range = SelectionRange::within(0, 1, 2);
        let _ = expand_to_word_boundaries(&range, &nodes, &ExpandOptions::default());
        assert_eq!(range, SelectionRange::within(0, 1, 2));
    }
}
