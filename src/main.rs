use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uptec_menu::pipeline;
use uptec_menu::source::{HttpFetcher, PdfTextExtractor};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("uptec_menu=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let now = Local::now();
    let outcome = pipeline::run(&now, &HttpFetcher, &PdfTextExtractor);
    let status = pipeline::exit_status(&outcome);
    match outcome {
        Ok(Some(menu)) => {
            info!(locator = %menu.locator, entries = menu.entries.len(), "menu found");
            print!("{menu}");
        }
        // Already reported as a warning, nothing to print.
        Ok(None) => {}
        Err(err) => {
            let stage = err.stage();
            error!(?stage, "{:#}", anyhow::Error::from(err));
        }
    }
    ExitCode::from(status)
}
