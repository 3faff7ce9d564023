use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract, normalize and send selected text from rendered text layers.
///
/// FILE is a JSON layout: {"pages": [{"spans": [{"text", "owner", "role", "bbox"}]}]}.
#[derive(Debug, Parser)]
#[command(name = "seltext", about, version)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the text of a selection
    Extract {
        /// Path to the layout file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Selection start as PAGE:SPAN:OFFSET (page 1-based, span and offset 0-based)
        #[arg(long, value_name = "POS")]
        from: String,

        /// Selection end as PAGE:SPAN:OFFSET
        #[arg(long, value_name = "POS")]
        to: String,

        /// Widen the selection to word boundaries first
        #[arg(long)]
        expand: bool,

        /// Treat any alphanumeric character as a word character when expanding
        #[arg(long)]
        unicode_words: bool,

        /// Print the extracted text without normalization
        #[arg(long)]
        raw: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },

    /// Normalize text read from stdin
    Normalize {
        /// Do not insert spaces at lowercase-to-uppercase transitions
        #[arg(long)]
        no_repair: bool,

        /// Unicode normalization form applied first
        #[arg(long, value_enum, default_value_t = UnicodeNormArg::None)]
        unicode_norm: UnicodeNormArg,
    },

    /// Print the normalized text of every page
    FullText {
        /// Path to the layout file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },

    /// Extract a selection and post it to a text server
    Send {
        /// Path to the layout file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Selection start as PAGE:SPAN:OFFSET
        #[arg(long, value_name = "POS", required_unless_present = "full")]
        from: Option<String>,

        /// Selection end as PAGE:SPAN:OFFSET
        #[arg(long, value_name = "POS", required_unless_present = "full")]
        to: Option<String>,

        /// Send the text of the whole document instead of a selection
        #[arg(long, conflicts_with_all = ["from", "to"])]
        full: bool,

        /// Base URL of the text server
        #[arg(long, value_name = "URL", default_value = seltext::DEFAULT_BASE_URL)]
        endpoint: String,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Display page and span counts
    Info {
        /// Path to the layout file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },
}

/// Output format for commands that print text.
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum TextFormat {
    /// Plain text
    Text,
    /// JSON object
    Json,
}

/// Unicode normalization form.
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum UnicodeNormArg {
    /// Leave text as is
    None,
    /// Canonical Decomposition, followed by Canonical Composition
    Nfc,
    /// Canonical Decomposition
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition
    Nfkc,
    /// Compatibility Decomposition
    Nfkd,
}

impl UnicodeNormArg {
    /// Convert to the core library's `UnicodeNorm` enum.
    pub fn to_unicode_norm(&self) -> seltext::UnicodeNorm {
        match self {
            UnicodeNormArg::None => seltext::UnicodeNorm::None,
            UnicodeNormArg::Nfc => seltext::UnicodeNorm::Nfc,
            UnicodeNormArg::Nfd => seltext::UnicodeNorm::Nfd,
            UnicodeNormArg::Nfkc => seltext::UnicodeNorm::Nfkc,
            UnicodeNormArg::Nfkd => seltext::UnicodeNorm::Nfkd,
        }
    }
}
