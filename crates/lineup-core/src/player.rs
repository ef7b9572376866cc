// Player records: role tags, overseas status, raw statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring;

/// Playing role. Exactly one per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[serde(rename = "All-Rounder", alias = "AllRounder")]
    AllRounder,
    #[serde(rename = "Wicket-Keeper", alias = "WicketKeeper")]
    WicketKeeper,
}

impl Role {
    /// All roles in minimum-fill order.
    pub const ALL: [Role; 4] = [
        Role::Batsman,
        Role::Bowler,
        Role::AllRounder,
        Role::WicketKeeper,
    ];

    /// Parse a role string.
    ///
    /// Accepts the display spellings case-insensitively, with spaces or
    /// underscores in place of the hyphen, plus the short forms "BAT",
    /// "BOWL", "AR" and "WK".
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_uppercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match normalized.as_str() {
            "BATSMAN" | "BATTER" | "BAT" => Some(Role::Batsman),
            "BOWLER" | "BOWL" => Some(Role::Bowler),
            "ALLROUNDER" | "AR" => Some(Role::AllRounder),
            "WICKETKEEPER" | "KEEPER" | "WK" => Some(Role::WicketKeeper),
            _ => None,
        }
    }

    /// Return the display string for this role.
    pub fn display_str(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-Rounder",
            Role::WicketKeeper => "Wicket-Keeper",
        }
    }

    /// Stable index into per-role arrays, matching `Role::ALL`.
    pub fn index(&self) -> usize {
        match self {
            Role::Batsman => 0,
            Role::Bowler => 1,
            Role::AllRounder => 2,
            Role::WicketKeeper => 3,
        }
    }

    /// Whether bowling statistics are meaningful for this role.
    pub fn bowls(&self) -> bool {
        matches!(self, Role::Bowler | Role::AllRounder)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

/// Nationality status relative to the team's home board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Overseas {
    Yes,
    #[default]
    No,
}

impl Overseas {
    /// Parse "Yes"/"No" (case-insensitive), "Y"/"N", or "true"/"false".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "YES" | "Y" | "TRUE" => Some(Overseas::Yes),
            "NO" | "N" | "FALSE" => Some(Overseas::No),
            _ => None,
        }
    }

    pub fn is_overseas(&self) -> bool {
        matches!(self, Overseas::Yes)
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            Overseas::Yes => "Yes",
            Overseas::No => "No",
        }
    }
}

impl fmt::Display for Overseas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

/// A candidate player with raw career statistics.
///
/// Bowling fields are `None` for Batsmen and Wicket-Keepers. The composite
/// score lives on [`ScoredPlayer`], computed by
/// [`scoring::composite_score`](crate::scoring::composite_score).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub role: Role,
    pub overseas: Overseas,
    #[serde(default)]
    pub batting_average: f64,
    #[serde(default)]
    pub strike_rate: f64,
    #[serde(default)]
    pub bowling_economy: Option<f64>,
    #[serde(default)]
    pub wickets: Option<u32>,
    #[serde(default)]
    pub catches: u32,
}

impl Player {
    pub fn is_overseas(&self) -> bool {
        self.overseas.is_overseas()
    }
}

/// A player paired with a freshly computed composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub composite_score: f64,
}

impl ScoredPlayer {
    /// Score a player from its raw stats.
    pub fn new(player: Player) -> Self {
        let composite_score = scoring::composite_score(&player);
        ScoredPlayer {
            player,
            composite_score,
        }
    }

    pub fn id(&self) -> u32 {
        self.player.id
    }

    pub fn role(&self) -> Role {
        self.player.role
    }

    pub fn is_overseas(&self) -> bool {
        self.player.is_overseas()
    }
}

impl From<Player> for ScoredPlayer {
    fn from(player: Player) -> Self {
        ScoredPlayer::new(player)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
