mod cli;
mod extract_cmd;
mod full_text_cmd;
mod info_cmd;
mod normalize_cmd;
mod send_cmd;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Extract {
            ref file,
            ref from,
            ref to,
            expand,
            unicode_words,
            raw,
            ref format,
        } => extract_cmd::run(
            file,
            &extract_cmd::ExtractArgs {
                from,
                to,
                expand,
                unicode_words,
                raw,
            },
            format,
        ),
        cli::Commands::Normalize {
            no_repair,
            ref unicode_norm,
        } => normalize_cmd::run(no_repair, unicode_norm.to_unicode_norm()),
        cli::Commands::FullText {
            ref file,
            ref format,
        } => full_text_cmd::run(file, format),
        cli::Commands::Send {
            ref file,
            ref from,
            ref to,
            full: _,
            ref endpoint,
            timeout,
        } => send_cmd::run(
            file,
            &send_cmd::SendArgs {
                range: from.as_deref().zip(to.as_deref()),
                endpoint,
                timeout,
            },
        ),
        cli::Commands::Info {
            ref file,
            ref format,
        } => info_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
