use clap::Parser;
use standings_fetch::{Config, FetchConfig, ToExitCode, run};
use std::io::{BufWriter, IsTerminal};
use std::process::ExitCode;
use std::time::Duration;
use tracing::Level;

/// Read a URL from standard input, fetch the JSON standings it serves, and
/// print each team as a tuple literal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Total request timeout in seconds (default: the HTTP client's own).
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// User-Agent header to send.
    #[arg(long)]
    user_agent: Option<String>,

    /// Never print the "Enter the Url:" prompt.
    #[arg(long)]
    no_prompt: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn config(&self) -> Config {
        let mut fetch = FetchConfig {
            timeout: self.timeout.map(Duration::from_secs),
            ..Default::default()
        };
        if let Some(user_agent) = &self.user_agent {
            fetch.user_agent = user_agent.clone();
        }

        Config {
            fetch,
            prompt: !self.no_prompt && std::io::stdin().is_terminal(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config();
    let mut input = std::io::stdin().lock();
    let mut output = BufWriter::new(std::io::stdout().lock());

    match run(&config, &mut input, &mut output, &mut std::io::stderr()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), "Run failed");
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
