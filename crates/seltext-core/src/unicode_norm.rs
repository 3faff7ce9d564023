//! Unicode normalization applied before whitespace and script-boundary passes.
//!
//! Text layers from different producers may carry Vietnamese and other Latin
//! diacritics either precomposed (`ệ`) or as base letter plus combining marks
//! (`e` + U+0323 + U+0302). The script-boundary pass only recognizes the
//! precomposed letters, so hosts fed decomposed text should pick NFC.

use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;

use crate::error::SelError;

/// Form applied to extracted text before the whitespace passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum UnicodeNorm {
    /// Leave the text layer's code points alone.
    #[default]
    None,
    /// Precompose diacritics (`e` + U+0323 + U+0302 becomes `ệ`).
    Nfc,
    Nfd,
    /// Like NFC, and also folds ligatures and width variants.
    Nfkc,
    Nfkd,
}

impl UnicodeNorm {
    /// Rewrite `text` into this form.
    pub fn normalize(&self, text: &str) -> String {
        match *self {
            Self::None => text.to_owned(),
            Self::Nfc => text.nfc().collect(),
            Self::Nfd => text.nfd().collect(),
            Self::Nfkc => text.nfkc().collect(),
            Self::Nfkd => text.nfkd().collect(),
        }
    }
}

impl FromStr for UnicodeNorm {
    type Err = SelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(UnicodeNorm::None),
            "nfc" => Ok(UnicodeNorm::Nfc),
            "nfd" => Ok(UnicodeNorm::Nfd),
            "nfkc" => Ok(UnicodeNorm::Nfkc),
            "nfkd" => Ok(UnicodeNorm::Nfkd),
            other => Err(SelError::Config(format!(
                "unknown unicode normalization form '{other}'"
            ))),
        }
    }
}
