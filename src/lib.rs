//! # standings-fetch
//!
//! Fetch a JSON standings table over HTTP and print each team as a
//! Python-style tuple literal.
//!
//! The pipeline is strictly linear:
//! 1. read one URL line from the input ([`input::read_url`])
//! 2. GET it ([`fetch::Fetcher`])
//! 3. decode the body as an array of [`TeamRecord`]s ([`standings::parse_standings`])
//! 4. write one tuple line per record ([`format::write_records`])
//!
//! ## Quick Start
//!
//! ```no_run
//! use standings_fetch::{Config, run};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!
//!     let mut input = std::io::Cursor::new("https://example.com/standings.json\n");
//!     let mut output = Vec::new();
//!     let lines = run(&config, &mut input, &mut output, &mut std::io::stderr()).await?;
//!
//!     println!("{} teams", lines);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// URL validation and HTTP fetching
pub mod fetch;
/// Tuple-literal output
pub mod format;
/// Reading the URL from standard input
pub mod input;
/// Team records and JSON decoding
pub mod standings;

// Re-export commonly used types
pub use config::{Config, FetchConfig};
pub use error::{Error, ParseError, Result, ToExitCode};
pub use fetch::Fetcher;
pub use standings::TeamRecord;

use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Run the whole pipeline once
///
/// Reads one URL line from `input`, fetches and decodes it, and writes one
/// tuple line per team to `output`. When `config.prompt` is set the prompt is
/// written to `prompt` first. Returns the number of lines written.
///
/// Decoding finishes before the first line is written, so on any error
/// `output` receives nothing.
///
/// # Errors
///
/// Returns the first failure of any stage: [`Error::Config`], [`Error::Input`],
/// [`Error::MalformedUrl`], [`Error::Fetch`], [`Error::Parse`] or [`Error::Io`].
pub async fn run<R, W, P>(
    config: &Config,
    input: &mut R,
    output: &mut W,
    prompt: &mut P,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    P: Write,
{
    config.validate()?;
    let fetcher = Fetcher::new(&config.fetch)?;

    if config.prompt {
        input::write_prompt(prompt)?;
    }

    let raw_url = input::read_url(input)?;
    let url = fetch::parse_url(&raw_url)?;
    info!("Fetching standings from {}", url);

    let body = fetcher.fetch(&url).await?;
    let records =
        standings::parse_standings(&body).map_err(|e| Error::parse(url.as_str(), e))?;
    debug!(teams = records.len(), "Decoded standings");

    format::write_records(output, &records)?;
    info!("Wrote {} tuple lines", records.len());

    Ok(records.len())
}
