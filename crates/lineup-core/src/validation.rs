// Player entry validation.
//
// A `PlayerDraft` is what a form or import row provides before it becomes a
// `Player`. Which fields are required depends on the role: bowling numbers are
// mandatory for Bowlers and All-Rounders and discarded for everyone else.

use thiserror::Error;
use tracing::debug;

use crate::player::{Overseas, Player, Role};

/// Minimum trimmed length of a player name.
pub const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name must be at least 2 characters, got {name:?}")]
    NameTooShort { name: String },

    #[error("role is required")]
    MissingRole,

    #[error("`{field}` is required for a {role}")]
    MissingField { field: &'static str, role: Role },

    #[error("`{field}` must be 0 or greater, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

/// Unvalidated player input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerDraft {
    pub name: String,
    pub team: Option<String>,
    pub role: Option<Role>,
    pub overseas: Overseas,
    pub batting_average: Option<f64>,
    pub strike_rate: Option<f64>,
    pub bowling_economy: Option<f64>,
    pub wickets: Option<f64>,
    pub catches: Option<f64>,
}

impl PlayerDraft {
    /// A blank draft for the given role, mirroring an empty entry form.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        PlayerDraft {
            name: name.into(),
            role: Some(role),
            ..Default::default()
        }
    }

    /// Validate and convert into a `Player` with the given id.
    pub fn into_player(self, id: u32) -> Result<Player, ValidationError> {
        let name = self.name.trim().to_string();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort { name });
        }

        let role = self.role.ok_or(ValidationError::MissingRole)?;

        let batting_average = non_negative("battingAverage", self.batting_average)?.unwrap_or(0.0);
        let strike_rate = non_negative("strikeRate", self.strike_rate)?.unwrap_or(0.0);
        let catches = non_negative("catches", self.catches)?.map_or(0, to_count);
        let bowling_economy = non_negative("bowlingEconomy", self.bowling_economy)?;
        let wickets = non_negative("wickets", self.wickets)?;

        let (bowling_economy, wickets) = if role.bowls() {
            let economy = bowling_economy.ok_or(ValidationError::MissingField {
                field: "bowlingEconomy",
                role,
            })?;
            let wickets = wickets.ok_or(ValidationError::MissingField {
                field: "wickets",
                role,
            })?;
            (Some(economy), Some(to_count(wickets)))
        } else {
            if bowling_economy.is_some() || wickets.is_some() {
                debug!("dropping bowling stats for {} ({})", name, role);
            }
            (None, None)
        };

        Ok(Player {
            id,
            name,
            team: self.team.filter(|t| !t.trim().is_empty()),
            role,
            overseas: self.overseas,
            batting_average,
            strike_rate,
            bowling_economy,
            wickets,
            catches,
        })
    }
}

fn non_negative(field: &'static str, value: Option<f64>) -> Result<Option<f64>, ValidationError> {
    match value {
        None => Ok(None),
        Some(v) if !v.is_finite() => Err(ValidationError::NotFinite { field, value: v }),
        Some(v) if v < 0.0 => Err(ValidationError::Negative { field, value: v }),
        Some(v) => Ok(Some(v)),
    }
}

/// Counting stats arrive as reals from forms and CSVs.
fn to_count(value: f64) -> u32 {
    value.round().min(f64::from(u32::MAX)) as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
