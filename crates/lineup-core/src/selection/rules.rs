// Selection constraints: team size, overseas cap, per-role bounds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::Role;

pub const DEFAULT_TEAM_SIZE: usize = 11;
pub const DEFAULT_MAX_OVERSEAS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("team size must be greater than 0")]
    ZeroTeamSize,

    #[error("{role}: minimum {min} exceeds maximum {max}")]
    InvertedBounds { role: Role, min: usize, max: usize },

    #[error("role minimums add up to {total}, more than the team size of {team_size}")]
    MinimumsExceedTeamSize { total: usize, team_size: usize },
}

/// Competition format. League play caps overseas players; normal play does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamFormat {
    #[default]
    League,
    Normal,
}

/// Inclusive lower and upper bound on how many players of a role are picked.
///
/// `min` is a best-effort target; `max` is never exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBounds {
    pub min: usize,
    pub max: usize,
}

impl RoleBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        RoleBounds { min, max }
    }

    /// Standard bounds for a role.
    pub const fn standard(role: Role) -> Self {
        match role {
            Role::Batsman => RoleBounds::new(3, 6),
            Role::Bowler => RoleBounds::new(3, 6),
            Role::AllRounder => RoleBounds::new(1, 4),
            Role::WicketKeeper => RoleBounds::new(1, 2),
        }
    }
}

/// The full constraint set handed to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRules {
    pub team_size: usize,
    /// `None` disables the overseas cap.
    pub max_overseas: Option<usize>,
    roles: [RoleBounds; 4],
}

impl Default for SelectionRules {
    fn default() -> Self {
        SelectionRules::for_format(TeamFormat::League)
    }
}

impl SelectionRules {
    /// Standard bounds and team size, with the format's overseas policy.
    pub fn for_format(format: TeamFormat) -> Self {
        let max_overseas = match format {
            TeamFormat::League => Some(DEFAULT_MAX_OVERSEAS),
            TeamFormat::Normal => None,
        };
        SelectionRules {
            team_size: DEFAULT_TEAM_SIZE,
            max_overseas,
            roles: Role::ALL.map(RoleBounds::standard),
        }
    }

    pub fn bounds(&self, role: Role) -> RoleBounds {
        self.roles[role.index()]
    }

    pub fn with_bounds(mut self, role: Role, bounds: RoleBounds) -> Self {
        self.roles[role.index()] = bounds;
        self
    }

    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn with_max_overseas(mut self, max_overseas: Option<usize>) -> Self {
        self.max_overseas = max_overseas;
        self
    }

    /// Whether `count` overseas players already selected leaves room for one more.
    pub fn overseas_slot_open(&self, count: usize) -> bool {
        match self.max_overseas {
            Some(cap) => count < cap,
            None => true,
        }
    }

    /// Sum of all role minimums.
    pub fn total_minimum(&self) -> usize {
        self.roles.iter().map(|b| b.min).sum()
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.team_size == 0 {
            return Err(RulesError::ZeroTeamSize);
        }
        for role in Role::ALL {
            let b = self.bounds(role);
            if b.min > b.max {
                return Err(RulesError::InvertedBounds {
                    role,
                    min: b.min,
                    max: b.max,
                });
            }
        }
        let total = self.total_minimum();
        if total > self.team_size {
            return Err(RulesError::MinimumsExceedTeamSize {
                total,
                team_size: self.team_size,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
