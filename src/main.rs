use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use downdetector::config::app_config::load_config;
use downdetector::config::model::CheckerConfig;
use downdetector::display::{OutputFormat, render};
use downdetector::pages::Page;
use downdetector::session::CheckSession;
use downdetector::StatusChecker;

#[derive(Parser)]
#[command(name = "downdetector")]
#[command(about = "Is your website down? Check a URL and see whether it is UP, DOWN or unusable")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format (human or json)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    /// Request timeout in milliseconds (overrides config and environment)
    #[arg(short, long, global = true)]
    timeout_ms: Option<u64>,

    /// Leave out the simulated global check
    #[arg(long, global = true)]
    no_regions: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a website is up
    Check {
        /// URL to check; https:// is assumed when no scheme is given
        url: String,
    },
    /// Show an informational page (about, contact, guide, privacy, tos, dmca, article)
    Page {
        page: Page,
        /// Show the full text of expandable pages
        #[arg(short, long)]
        expand: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Page { page, expand }) = &cli.command {
        print!("{}", page.render(*expand));
        return Ok(());
    }

    let mut config = load_config().context("Failed to load configuration")?.checker;
    if let Some(timeout_ms) = cli.timeout_ms {
        anyhow::ensure!(timeout_ms > 0, "--timeout-ms must be greater than 0");
        config.timeout_ms = timeout_ms;
    }
    if cli.no_regions {
        config.regions.clear();
    }

    let checker = StatusChecker::from_config(&config).context("Failed to create HTTP client")?;

    match cli.command {
        Some(Commands::Check { url }) => {
            let result = checker.check(&url).await;
            println!("{}", render(cli.format, &result, &config.regions)?);
            std::process::exit(result.status.exit_code());
        }
        _ => run_session(CheckSession::new(checker), cli.format, &config).await,
    }
}

/// Read URLs from stdin, one per line, and check each in turn.
async fn run_session(
    session: CheckSession,
    format: OutputFormat,
    config: &CheckerConfig,
) -> anyhow::Result<()> {
    eprintln!("Enter a URL to check (e.g. google.com), Ctrl-D to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        eprintln!("Pinging servers...");
        match session.submit(&line).await {
            Ok(result) => println!("{}", render(format, &result, &config.regions)?),
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}
