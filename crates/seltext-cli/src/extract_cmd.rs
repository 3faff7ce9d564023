use std::path::Path;

use seltext::{ExpandOptions, NormalizeOptions, WordClass, expand_to_word_boundaries, normalize_with};

use crate::cli::TextFormat;
use crate::shared::{document_view, open_layout, resolve_range, tier_str};

pub struct ExtractArgs<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub expand: bool,
    pub unicode_words: bool,
    pub raw: bool,
}

pub fn run(file: &Path, args: &ExtractArgs<'_>, format: &TextFormat) -> Result<(), i32> {
    let renderer = open_layout(file)?;
    let view = document_view(&renderer);
    let mut range = resolve_range(&view, args.from, args.to)?;

    if args.expand {
        let options = ExpandOptions {
            word_class: if args.unicode_words {
                WordClass::Unicode
            } else {
                WordClass::Ascii
            },
        };
        range = expand_to_word_boundaries(&range, &view.nodes(), &options);
    }

    let extraction = view.extract(&range);
    for warning in &extraction.warnings {
        tracing::debug!(%warning, "extraction recovered");
    }
    let text = if args.raw {
        extraction.text.clone()
    } else {
        normalize_with(&extraction.text, &NormalizeOptions::default())
    };

    match format {
        TextFormat::Text => println!("{text}"),
        TextFormat::Json => {
            let locate = |node| view.locate(node).map(|(page, span)| (page + 1, span));
            let obj = serde_json::json!({
                "text": text,
                "chars": text.chars().count(),
                "tier": tier_str(extraction.tier),
                "from": locate(range.start.node).map(|(page, span)| {
                    serde_json::json!({"page": page, "span": span, "offset": range.start.offset})
                }),
                "to": locate(range.end.node).map(|(page, span)| {
                    serde_json::json!({"page": page, "span": span, "offset": range.end.offset})
                }),
                "warnings": extraction
                    .warnings
                    .iter()
                    .map(|w| serde_json::json!({"code": w.code.as_str(), "description": w.description}))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string(&obj).unwrap_or_default());
        }
    }
    Ok(())
}
