use std::path::Path;
use std::time::Duration;

use seltext::{Delivery, Trigger, Viewer, ViewerConfig};

use crate::shared::{open_layout, resolve_range};

pub struct SendArgs<'a> {
    pub range: Option<(&'a str, &'a str)>,
    pub endpoint: &'a str,
    pub timeout: Option<u64>,
}

pub fn run(file: &Path, args: &SendArgs<'_>) -> Result<(), i32> {
    let renderer = open_layout(file)?;
    let config = ViewerConfig {
        server_url: args.endpoint.to_string(),
        request_timeout: args.timeout.map(Duration::from_secs),
        ..ViewerConfig::default()
    };

    let mut viewer = Viewer::with_http(renderer, config).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    viewer.load();

    let outcome = match args.range {
        Some((from, to)) => {
            let range = resolve_range(viewer.view(), from, to)?;
            viewer.select(range, Trigger::ForceSave)
        }
        None => viewer.export_full_text(),
    };

    match outcome {
        Delivery::Sent { .. } => {
            println!("{}", viewer.status());
            Ok(())
        }
        Delivery::Failed { error, .. } => {
            eprintln!("Error: {error}");
            Err(1)
        }
        Delivery::Empty => {
            eprintln!("Error: nothing to send");
            Err(1)
        }
        Delivery::Suppressed => {
            eprintln!("Error: selection too short to send");
            Err(1)
        }
        Delivery::NotReady => {
            eprintln!("Error: document did not finish rendering");
            Err(1)
        }
    }
}
