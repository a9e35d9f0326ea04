use anyhow::Context;
use clap::Parser;
use logsift::config::{Config, ReportFormat};
use logsift::feeds::{self, FeedText, Source};
use logsift::report::{self, ReportOptions};
use logsift::{demo, Session, Severity};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logsift", about = "logsift — classify, cluster and chart a log file")]
struct Cli {
    /// Log file to analyse. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Analyse the bundled sample log instead of a file.
    #[arg(long, conflicts_with = "file")]
    demo: bool,

    /// Keep only entries whose message contains this text (case-insensitive).
    #[arg(long, short)]
    search: Option<String>,

    /// Keep only entries of exactly this severity.
    #[arg(long)]
    severity: Option<Severity>,

    /// Output format: text or json.
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Number of patterns to show (0 shows all).
    #[arg(long)]
    top: Option<usize>,

    /// Omit the hourly timeline.
    #[arg(long)]
    no_timeline: bool,

    /// Include each pattern's member entries (JSON only).
    #[arg(long)]
    with_entries: bool,

    /// Extra config file layered over ~/.config/logsift/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("logsift debug logging enabled");
    }

    let config = match cli.config.as_deref() {
        Some(path) => Config::load(Some(path))
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load(None).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default config");
            Config::defaults()
        }),
    };

    let input = if cli.demo {
        FeedText {
            name: demo::DEMO_NAME.to_string(),
            text: demo::DEMO_LOG.to_string(),
        }
    } else {
        let source = cli.file.map_or(Source::Stdin, Source::File);
        feeds::read_source(&source, &config.input)?
    };

    let mut session = Session::new();
    session.load(input.name, &input.text);
    if let Some(search) = cli.search {
        session.set_search(search);
    }
    session.set_severity(cli.severity);

    let mut options = ReportOptions::from_config(&config.report);
    if let Some(format) = cli.format {
        options.format = format;
    }
    if let Some(top) = cli.top {
        options.top_patterns = top;
    }
    if cli.no_timeline {
        options.show_timeline = false;
    }
    if cli.with_entries {
        options.with_entries = true;
    }

    let rendered = report::render(&session, &options).context("failed to render report")?;
    println!("{}", rendered.trim_end());
    Ok(())
}
