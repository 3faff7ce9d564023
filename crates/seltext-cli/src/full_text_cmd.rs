use std::path::Path;

use seltext::NormalizeOptions;

use crate::cli::TextFormat;
use crate::shared::{document_view, open_layout};

pub fn run(file: &Path, format: &TextFormat) -> Result<(), i32> {
    let renderer = open_layout(file)?;
    let view = document_view(&renderer);
    let text = view.full_text(&NormalizeOptions::default());

    match format {
        TextFormat::Text => println!("{text}"),
        TextFormat::Json => {
            let obj = serde_json::json!({
                "pages": view.page_count(),
                "text": text,
            });
            println!("{}", serde_json::to_string(&obj).unwrap_or_default());
        }
    }
    Ok(())
}
