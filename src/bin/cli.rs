//! doc-fetch command line interface
//!
//! One positional URL in, extracted page text on stdout. Any failure exits 1
//! with a diagnostic on stderr; no partial output is written.

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use doc_fetch::{LaunchOptions, fetch_page_text, url::normalize_url};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(
    name = "doc-fetch",
    version,
    about = "Extract readable content from web pages by simulating browser selection"
)]
struct Cli {
    /// URL to fetch content from
    url: String,

    /// Launch the browser with a visible window (useful for debugging)
    #[arg(long)]
    headed: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parse arguments, mapping every parse failure to exit code 1.
///
/// `--help` and `--version` are not failures; they print and exit 0.
fn parse_cli<I, T>(args: I) -> Result<Cli, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Err(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(EXIT_FAILURE)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = LaunchOptions::new().headless(!cli.headed);

    let text = fetch_page_text(&normalize_url(&cli.url), options)?;

    // Verbatim: no framing, no added trailing newline
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}
