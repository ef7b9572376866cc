// Command-line arguments and the load → select → render pipeline.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use lineup_core::sample::sample_players;
use lineup_core::team::Team;
use tracing::{info, warn};

use crate::config::{self, Config, OutputFormat};
use crate::report;
use crate::squad;

pub const USAGE: &str = r#"lineup: pick the best cricket XI from a squad

USAGE:
    lineup [OPTIONS]

OPTIONS:
    --base DIR         Directory containing config/ and defaults/ (default: .)
    --squad FILE       Squad CSV (default: squad.path from config)
    --team NAME        Team name for the report
    --json             Print JSON instead of a table
    --sample           Use the built-in five-player sample squad
    --allow-partial    Select even when the squad is smaller than the team size
    -h, --help         Print this help
"#;

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub base: Option<PathBuf>,
    pub squad: Option<PathBuf>,
    pub team: Option<String>,
    pub json: bool,
    pub sample: bool,
    pub allow_partial: bool,
    pub help: bool,
}

impl Args {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> anyhow::Result<Args>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Args::default();
        let mut iter = args.into_iter().map(Into::into);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "--json" => parsed.json = true,
                "--sample" => parsed.sample = true,
                "--allow-partial" => parsed.allow_partial = true,
                "--base" => {
                    let value = iter.next().context("missing value for --base")?;
                    parsed.base = Some(PathBuf::from(value));
                }
                "--squad" => {
                    let value = iter.next().context("missing value for --squad")?;
                    parsed.squad = Some(PathBuf::from(value));
                }
                "--team" => {
                    let value = iter.next().context("missing value for --team")?;
                    parsed.team = Some(value);
                }
                other => bail!("unknown option `{other}`; run `lineup --help` for usage"),
            }
        }

        Ok(parsed)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Build the team to pick from, per the arguments and config.
fn load_team(args: &Args, config: &Config, base: &Path) -> anyhow::Result<Team> {
    let (players, default_name) = if args.sample {
        (sample_players(), "Sample XI".to_string())
    } else {
        let path = match &args.squad {
            Some(p) => resolve(base, p),
            None => resolve(base, Path::new(&config.squad.path)),
        };
        let players = squad::load_squad(&path)
            .with_context(|| format!("failed to load squad from {}", path.display()))?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Squad")
            .to_string();
        (players, stem)
    };

    let name = args
        .team
        .clone()
        .or_else(|| players.first().and_then(|p| p.team.clone()))
        .unwrap_or(default_name);

    Team::with_players(&name, players).context("failed to build team roster")
}

/// Run the whole pipeline and return the rendered report.
pub fn run(args: &Args) -> anyhow::Result<String> {
    let base = match &args.base {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };

    let config = config::load_config(&base).context("failed to load configuration")?;
    let rules = config.selection.rules();
    info!(
        "Config loaded: format={:?}, team_size={}, max_overseas={:?}",
        config.selection.format, rules.team_size, rules.max_overseas
    );

    let team = load_team(args, &config, &base)?;
    info!("Loaded {} players for {}", team.len(), team.name);

    let require_full = config.squad.require_full_squad && !args.allow_partial;
    if require_full {
        team.ensure_selectable(&rules)
            .context("squad too small (pass --allow-partial to select anyway)")?;
    } else if team.len() < rules.team_size {
        warn!(
            "{} has only {} players; the lineup will be partial",
            team.name,
            team.len()
        );
    }

    let result = team.select(&rules);
    info!(
        "Selected {} players, total score {:.2}",
        result.len(),
        result.total_score
    );
    for shortfall in result.unmet_minimums(&rules) {
        warn!(
            "{} minimum not met: {} of {}",
            shortfall.role, shortfall.selected, shortfall.required
        );
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let rendered = match format {
        OutputFormat::Table => report::render_table(&result, &rules),
        OutputFormat::Json => {
            report::render_json(&result, &rules).context("failed to serialize selection")?
        }
    };
    Ok(rendered)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
