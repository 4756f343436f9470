// readme-scrape: turn a course page into README.md
//
// Scans one page, then saves and/or copies the markdown. Status lines go to
// stderr so the markdown on stdout can be piped.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use readme_scrape::{
    AnySource, Clipboard, PageSource, ScrapeConfig, ScrapeSession, Status, StatusKind,
};

#[derive(Parser)]
#[command(name = "readme-scrape", version, about = "Scrape a course page into a clean README.md")]
struct Cli {
    /// Saved page file, http(s) URL, or `-` for standard input
    source: String,

    /// Write the markdown to README.md in the output directory
    #[arg(short, long)]
    save: bool,

    /// Copy the markdown to the system clipboard
    #[arg(short, long)]
    copy: bool,

    /// Print the markdown even when saving or copying
    #[arg(long)]
    stdout: bool,

    /// Print the extracted HTML fragment instead of converting it
    #[arg(long, conflicts_with_all = ["save", "copy"])]
    fragment: bool,

    /// Directory the README is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Cookie header sent when fetching a URL
    #[arg(long)]
    cookie: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Also apply the legacy cleanup rules
    #[arg(long)]
    legacy_cleanup: bool,

    /// JSON config file; command-line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    async fn load_config(&self) -> Result<ScrapeConfig> {
        let base = match &self.config {
            Some(path) => ScrapeConfig::from_json_file(path).await?,
            None => ScrapeConfig::default(),
        };

        let mut builder = base.to_builder();
        if let Some(dir) = &self.output_dir {
            builder = builder.output_dir(dir.clone());
        }
        if let Some(cookie) = &self.cookie {
            builder = builder.cookie(cookie.clone());
        }
        if self.timeout.is_some() {
            builder = builder.request_timeout_secs(self.timeout);
        }
        if self.legacy_cleanup {
            builder = builder.legacy_cleanup(true);
        }
        Ok(builder.build()?)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_status(out: &mut impl WriteColor, status: &Status) -> io::Result<()> {
    let color = match status.kind {
        StatusKind::Neutral => None,
        StatusKind::Success => Some(Color::Green),
        StatusKind::Error => Some(Color::Red),
    };
    out.set_color(ColorSpec::new().set_fg(color).set_bold(status.is_error()))?;
    writeln!(out, "{status}")?;
    out.reset()
}

/// What to do with the markdown once the page is scanned.
#[derive(Debug, Clone, Copy, Default)]
struct Actions {
    save: bool,
    copy: bool,
    print: bool,
}

impl Actions {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            save: cli.save,
            copy: cli.copy,
            print: cli.stdout || !(cli.save || cli.copy),
        }
    }
}

/// Scan `source`, then save, copy and print as asked.
///
/// Each operation reports its status line exactly once. A failed scan stops
/// the run; a failed save or copy still lets the others run.
async fn run_session<S: PageSource, C: Clipboard>(
    session: &ScrapeSession<C>,
    source: &S,
    actions: Actions,
    status_out: &mut impl WriteColor,
    markdown_out: &mut impl Write,
) -> io::Result<ExitCode> {
    let scanned = session.scan(source).await;
    print_status(status_out, &session.status())?;
    let Ok(markdown) = scanned else {
        return Ok(ExitCode::FAILURE);
    };

    let mut failed = false;
    if actions.save {
        failed |= session.save().await.is_err();
        print_status(status_out, &session.status())?;
    }
    if actions.copy {
        failed |= session.copy().await.is_err();
        print_status(status_out, &session.status())?;
    }
    if actions.print {
        writeln!(markdown_out, "{markdown}")?;
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.load_config().await.context("invalid configuration")?;
    let source = AnySource::from_arg(&cli.source, &config)?;

    if cli.fragment {
        let extraction = source.run_extraction().await?;
        tracing::info!(summary = %extraction.summary, "Extracted page");
        println!("{}", extraction.fragment.to_html());
        return Ok(ExitCode::SUCCESS);
    }

    let session = ScrapeSession::new(config);
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let code = run_session(
        &session,
        &source,
        Actions::from_cli(&cli),
        &mut stderr,
        &mut io::stdout().lock(),
    )
    .await?;
    Ok(code)
}
