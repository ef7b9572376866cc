// Lineup CLI entry point.
//
// 1. Initialize tracing (stderr; stdout carries the report)
// 2. Parse arguments
// 3. Load config, squad, select, render

use anyhow::Context;
use lineup_cli::cli::{self, Args};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        print!("{}", cli::USAGE);
        return Ok(());
    }

    info!("lineup starting up");
    let report = cli::run(&args)?;
    print!("{report}");
    Ok(())
}

/// Initialize tracing to stderr.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lineup=info,lineup_cli=info,lineup_core=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
