use std::path::Path;

use crate::cli::TextFormat;
use crate::shared::{document_view, open_layout};

pub fn run(file: &Path, format: &TextFormat) -> Result<(), i32> {
    let renderer = open_layout(file)?;
    let view = document_view(&renderer);

    let mut total_spans: usize = 0;
    let mut total_chars: usize = 0;
    let mut page_infos: Vec<serde_json::Value> = Vec::new();

    for page in view.pages() {
        let spans = page.layer().spans.len();
        let chars = page.layer().char_count();
        total_spans += spans;
        total_chars += chars;

        match format {
            TextFormat::Text => {
                println!("Page {}:", page.page_number());
                println!("  Spans: {spans}");
                println!("  Chars: {chars}");
            }
            TextFormat::Json => page_infos.push(serde_json::json!({
                "page": page.page_number(),
                "spans": spans,
                "chars": chars,
            })),
        }
    }

    match format {
        TextFormat::Text => {
            println!();
            println!("Summary:");
            println!("  Pages: {}", view.page_count());
            println!("  Spans: {total_spans}");
            println!("  Chars: {total_chars}");
        }
        TextFormat::Json => {
            let obj = serde_json::json!({
                "pages": page_infos,
                "summary": {
                    "pages": view.page_count(),
                    "spans": total_spans,
                    "chars": total_chars,
                },
            });
            println!("{}", serde_json::to_string_pretty(&obj).unwrap_or_default());
        }
    }
    Ok(())
}
