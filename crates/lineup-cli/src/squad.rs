// Squad CSV loading.
//
// Columns (header names are case-sensitive, camelCase aliases accepted):
// id, name, role, overseas, batting_average, strike_rate, bowling_economy,
// wickets, catches, team. Only name and role are mandatory; `id` may be left
// blank and is then assigned after the highest id in the file.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use lineup_core::validation::PlayerDraft;
use lineup_core::{Overseas, Player, Role};
use serde::Deserialize;
use tracing::warn;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SquadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawSquadRow {
    #[serde(default)]
    id: Option<u32>,
    name: String,
    role: String,
    #[serde(default)]
    overseas: String,
    #[serde(default, alias = "battingAverage")]
    batting_average: Option<f64>,
    #[serde(default, alias = "strikeRate")]
    strike_rate: Option<f64>,
    #[serde(default, alias = "bowlingEconomy")]
    bowling_economy: Option<f64>,
    #[serde(default)]
    wickets: Option<f64>,
    #[serde(default)]
    catches: Option<f64>,
    #[serde(default)]
    team: Option<String>,
}

impl RawSquadRow {
    fn into_draft(self) -> Option<(Option<u32>, PlayerDraft)> {
        let name = self.name.trim().to_string();
        let Some(role) = Role::parse(&self.role) else {
            warn!("skipping player '{}': unknown role '{}'", name, self.role);
            return None;
        };
        let overseas = if self.overseas.trim().is_empty() {
            Overseas::No
        } else {
            match Overseas::parse(&self.overseas) {
                Some(o) => o,
                None => {
                    warn!(
                        "skipping player '{}': unrecognised overseas value '{}'",
                        name, self.overseas
                    );
                    return None;
                }
            }
        };
        Some((
            self.id,
            PlayerDraft {
                name,
                team: self.team,
                role: Some(role),
                overseas,
                batting_average: self.batting_average,
                strike_rate: self.strike_rate,
                bowling_economy: self.bowling_economy,
                wickets: self.wickets,
                catches: self.catches,
            },
        ))
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

fn load_squad_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut drafts = Vec::new();
    for result in reader.deserialize::<RawSquadRow>() {
        match result {
            Ok(raw) => {
                if let Some(entry) = raw.into_draft() {
                    drafts.push(entry);
                }
            }
            Err(e) => {
                warn!("skipping malformed squad row: {}", e);
            }
        }
    }

    let mut next_id = drafts
        .iter()
        .filter_map(|(id, _)| *id)
        .max()
        .map_or(1, |id| id.saturating_add(1));

    let mut seen = HashSet::new();
    let mut players = Vec::with_capacity(drafts.len());
    for (id, draft) in drafts {
        let id = id.unwrap_or_else(|| {
            let assigned = next_id;
            next_id = next_id.saturating_add(1);
            assigned
        });
        if seen.contains(&id) {
            warn!("skipping player '{}': duplicate id {}", draft.name.trim(), id);
            continue;
        }
        let name = draft.name.clone();
        match draft.into_player(id) {
            Ok(player) => {
                seen.insert(id);
                players.push(player);
            }
            Err(e) => warn!("skipping player '{}': {}", name, e),
        }
    }
    Ok(players)
}

/// Load a squad from a CSV file. Invalid rows are skipped with a warning; a
/// file with no valid rows is an error.
pub fn load_squad(path: &Path) -> Result<Vec<Player>, SquadError> {
    let file = std::fs::File::open(path).map_err(|e| SquadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_squad_from_reader(file).map_err(|e| SquadError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    if players.is_empty() {
        return Err(SquadError::Validation(format!(
            "{} produced zero valid players",
            path.display()
        )));
    }

    Ok(players)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
