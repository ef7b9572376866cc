// Configuration loading and parsing (config/lineup.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use lineup_core::{Role, RoleBounds, RulesError, SelectionRules, TeamFormat};

pub const CONFIG_FILE: &str = "lineup.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// lineup.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub selection: SelectionConfig,
    pub squad: SquadConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    selection: SelectionConfig,
    squad: SquadConfig,
    #[serde(default)]
    output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub format: TeamFormat,
    pub team_size: usize,
    pub max_overseas: usize,
    pub roles: RolesSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RolesSection {
    pub batsman: RoleBounds,
    pub bowler: RoleBounds,
    pub all_rounder: RoleBounds,
    pub wicket_keeper: RoleBounds,
}

impl RolesSection {
    fn get(&self, role: Role) -> RoleBounds {
        match role {
            Role::Batsman => self.batsman,
            Role::Bowler => self.bowler,
            Role::AllRounder => self.all_rounder,
            Role::WicketKeeper => self.wicket_keeper,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SquadConfig {
    pub path: String,
    #[serde(default = "default_true")]
    pub require_full_squad: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_true() -> bool {
    true
}

impl SelectionConfig {
    /// Build the selector's rule set. League format applies `max_overseas`;
    /// normal format ignores it.
    pub fn rules(&self) -> SelectionRules {
        let max_overseas = match self.format {
            TeamFormat::League => Some(self.max_overseas),
            TeamFormat::Normal => None,
        };
        let mut rules = SelectionRules::for_format(self.format)
            .with_team_size(self.team_size)
            .with_max_overseas(max_overseas);
        for role in Role::ALL {
            rules = rules.with_bounds(role, self.roles.get(role));
        }
        rules
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/lineup.toml` relative to `base_dir`.
///
/// Does not copy defaults; `load_config` does.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        selection: file.selection,
        squad: file.squad,
        output: file.output,
    };

    validate(&config)?;

    Ok(config)
}

/// Copy `defaults/lineup.toml` to `config/lineup.toml` if the latter is
/// missing. Returns the written path, or `None` when a config already exists.
pub fn seed_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.exists() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither config/{CONFIG_FILE} nor defaults/{CONFIG_FILE} found in {}",
                base_dir.display()
            ),
        });
    }

    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", dir.display()),
        })?;
    }
    std::fs::copy(&source, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {}: {e}", source.display()),
    })?;

    info!("Seeded {} from defaults", target.display());
    Ok(Some(target))
}

/// Seed `config/` from `defaults/` if needed, then load from `base_dir`.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    seed_config(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn role_field(role: Role) -> &'static str {
    match role {
        Role::Batsman => "selection.roles.batsman",
        Role::Bowler => "selection.roles.bowler",
        Role::AllRounder => "selection.roles.all_rounder",
        Role::WicketKeeper => "selection.roles.wicket_keeper",
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn rules_field(err: &RulesError) -> &'static str {
    match err {
        RulesError::ZeroTeamSize => "selection.team_size",
        RulesError::InvertedBounds { role, .. } => role_field(*role),
        RulesError::MinimumsExceedTeamSize { .. } => "selection.roles",
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    config
        .selection
        .rules()
        .validate()
        .map_err(|e| ConfigError::ValidationError {
            field: rules_field(&e).into(),
            message: e.to_string(),
        })?;

    if config.squad.path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "squad.path".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
