//! Whitespace normalization and script-boundary repair for extracted text.
//!
//! The passes run in a fixed order; later passes rely on the collapsing done
//! by earlier ones:
//!
//! 1. every run of non-newline whitespace becomes one space
//! 2. spaces after a newline are removed
//! 3. spaces before a newline are removed
//! 4. runs of newlines become one newline
//! 5. the whole string is trimmed
//! 6. a space is inserted wherever a lowercase letter is directly followed by
//!    an uppercase letter (ASCII or Vietnamese Latin)
//!
//! Pass 1 also flattens deliberate multi-space formatting such as column
//! alignment. That loss is accepted.

use std::sync::LazyLock;

use regex::Regex;

use crate::unicode_norm::UnicodeNorm;

/// Lowercase Vietnamese letters recognized by script-boundary repair, in
/// addition to `a-z`.
pub const VIETNAMESE_LOWER: &str = "àáạảãâầấậẩẫăằắặẳẵèéẹẻẽêềếệểễìíịỉĩòóọỏõôồốộổỗơờớợởỡùúụủũưừứựửữỳýỵỷỹđ";

/// Uppercase Vietnamese letters recognized by script-boundary repair, in
/// addition to `A-Z`.
pub const VIETNAMESE_UPPER: &str = "ÀÁẠẢÃÂẦẤẬẨẪĂẰẮẶẲẴÈÉẸẺẼÊỀẾỆỂỄÌÍỊỈĨÒÓỌỎÕÔỒỐỘỔỖƠỜỚỢỞỠÙÚỤỦŨƯỪỨỰỬỮỲÝỴỶỸĐ";

static RE_HORIZONTAL_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]+").unwrap());
static RE_SPACE_AFTER_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n +").unwrap());
static RE_SPACE_BEFORE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +\n").unwrap());
static RE_MULTI_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
static RE_CASE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "([a-z{VIETNAMESE_LOWER}])([A-Z{VIETNAMESE_UPPER}])"
    ))
    .unwrap()
});

/// Options for [`normalize_with`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizeOptions {
    /// Unicode normalization applied before the whitespace passes (default: none).
    pub unicode_norm: UnicodeNorm,
    /// Whether to insert spaces at lowercase→uppercase transitions (default: true).
    pub script_boundary_repair: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            unicode_norm: UnicodeNorm::None,
            script_boundary_repair: true,
        }
    }
}

/// Normalize raw extracted text with default options.
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, &NormalizeOptions::default())
}

/// Normalize raw extracted text.
pub fn normalize_with(raw: &str, options: &NormalizeOptions) -> String {
    let text = options.unicode_norm.normalize(raw);
    let text = collapse_whitespace(&text);
    if options.script_boundary_repair {
        repair_script_boundaries(&text)
    } else {
        text
    }
}

/// Passes 1–5: collapse whitespace while keeping single line breaks.
pub fn collapse_whitespace(text: &str) -> String {
    let text = RE_HORIZONTAL_WS.replace_all(text, " ");
    let text = RE_SPACE_AFTER_NEWLINE.replace_all(&text, "\n");
    let text = RE_SPACE_BEFORE_NEWLINE.replace_all(&text, "\n");
    let text = RE_MULTI_NEWLINE.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Pass 6: insert a space between a lowercase and a directly following
/// uppercase letter.
///
/// Matches are non-overlapping and scanned left to right.
pub fn repair_script_boundaries(text: &str) -> String {
    RE_CASE_BOUNDARY.replace_all(text, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_whitespace_runs() {
        assert_eq!(normalize("a \t  b\u{00A0}\u{00A0}c"), "a b c");
    }

    #[test]
    fn multi_space_formatting_is_flattened() {
        // Column alignment is lost on purpose.
        assert_eq!(normalize("Name      Score\nAlice     10"), "Name Score\nAlice 10");
    }

    #[test]
    fn spaces_around_newlines_are_removed() {
        assert_eq!(normalize("end.  \n   Next"), "end.\nNext");
    }

    #[test]
    fn blank_lines_collapse_to_one_newline() {
        assert_eq!(normalize("one\n\n\ntwo\n \n \nthree"), "one\ntwo\nthree");
    }

    #[test]
    fn carriage_returns_become_plain_newlines() {
        assert_eq!(normalize("one\r\ntwo\r\n"), "one\ntwo");
    }

    #[test]
    fn trims_leading_and_trailing_whitespace() {
        assert_eq!(normalize("\n\n  padded text \t\n"), "padded text");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn output_has_no_double_spaces_or_blank_lines() {
        let inputs = [
            "  a  \n\n  b\t\t c \n \n\n d  ",
            "x\u{2003}\u{2003}y\n\n\n\nz",
            "\t\tfooBar  \n  \n  bazQux\t",
        ];
        for input in inputs {
            let out = normalize(input);
            assert!(!out.contains("  "), "double space in {out:?}");
            assert!(!out.contains("\n\n"), "blank line in {out:?}");
        }
    }

    #[test]
    fn inserts_space_at_case_boundary() {
        assert_eq!(normalize("fooBar"), "foo Bar");
        assert_eq!(normalize("aBcD"), "a Bc D");
    }

    #[test]
    fn uppercase_run_is_untouched() {
        assert_eq!(normalize("FOO"), "FOO");
        assert_eq!(normalize("NASA and ESA"), "NASA and ESA");
    }

    #[test]
    fn vietnamese_case_boundary() {
        assert_eq!(normalize("doanh nghiệpĐánh giá"), "doanh nghiệp Đánh giá");
        assert_eq!(normalize("môi trườngXã hội"), "môi trường Xã hội");
    }

    #[test]
    fn decomposed_vietnamese_needs_nfc() {
        // "ệ" as e + dot below + circumflex, directly followed by "T".
        let raw = "Vie\u{0323}\u{0302}T";
        // The default leaves code points alone, so the combining mark hides
        // the boundary.
        assert_eq!(normalize(raw), raw);

        let nfc = NormalizeOptions {
            unicode_norm: UnicodeNorm::Nfc,
            ..NormalizeOptions::default()
        };
        assert_eq!(normalize_with(raw, &nfc), "Vi\u{1EC7} T");
    }

    #[test]
    fn other_scripts_are_not_split() {
        // Greek and Cyrillic letters are outside the recognized classes.
        assert_eq!(normalize("αΒ яБ"), "αΒ яБ");
    }

    #[test]
    fn repair_can_be_disabled() {
        let options = NormalizeOptions {
            script_boundary_repair: false,
            ..NormalizeOptions::default()
        };
        assert_eq!(normalize_with("fooBar  baz", &options), "fooBar baz");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("  helloWorld \n\n  nextLine  ");
        assert_eq!(once, "hello World\nnext Line");
        assert_eq!(normalize(&once), once);
    }
}
