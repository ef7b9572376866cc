// In-memory team roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::Player;
use crate::selection::{select_lineup, SelectionResult, SelectionRules};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("team name must not be empty")]
    EmptyName,

    #[error("player id {id} is already on {team}")]
    DuplicatePlayerId { id: u32, team: String },

    #[error("{team} has {have} players; at least {need} are needed to pick a lineup")]
    NotEnoughPlayers {
        team: String,
        have: usize,
        need: usize,
    },
}

/// A named squad of candidate players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub players: Vec<Player>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create an empty team. The id is derived from the creation time.
    pub fn new(name: &str) -> Result<Self, TeamError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TeamError::EmptyName);
        }
        let created_at = Utc::now();
        Ok(Team {
            id: created_at.timestamp_millis().to_string(),
            name: name.to_string(),
            players: Vec::new(),
            created_at,
        })
    }

    /// Build a team around an existing squad, stamping each player's team.
    pub fn with_players(name: &str, players: Vec<Player>) -> Result<Self, TeamError> {
        let mut team = Team::new(name)?;
        for player in players {
            team.add_player(player)?;
        }
        Ok(team)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// One past the highest id on the roster.
    pub fn next_player_id(&self) -> u32 {
        self.players.iter().map(|p| p.id).max().map_or(1, |id| id + 1)
    }

    pub fn add_player(&mut self, mut player: Player) -> Result<(), TeamError> {
        if self.player(player.id).is_some() {
            return Err(TeamError::DuplicatePlayerId {
                id: player.id,
                team: self.name.clone(),
            });
        }
        player.team = Some(self.name.clone());
        self.players.push(player);
        Ok(())
    }

    /// Replace the player with the same id. Returns `false` if none matched.
    pub fn update_player(&mut self, mut player: Player) -> bool {
        let team_name = self.name.clone();
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(slot) => {
                player.team = Some(team_name);
                *slot = player;
                true
            }
            None => false,
        }
    }

    pub fn remove_player(&mut self, id: u32) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    /// Caller-side guard: a full lineup needs at least `team_size` candidates.
    pub fn ensure_selectable(&self, rules: &SelectionRules) -> Result<(), TeamError> {
        if self.players.len() < rules.team_size {
            return Err(TeamError::NotEnoughPlayers {
                team: self.name.clone(),
                have: self.players.len(),
                need: rules.team_size,
            });
        }
        Ok(())
    }

    /// Run the selector over this roster, reporting under the team's name.
    pub fn select(&self, rules: &SelectionRules) -> SelectionResult {
        let mut result = select_lineup(&self.players, rules);
        result.team_name = self.name.clone();
        result
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Role;
    use crate::sample::sample_players;

    #[test]
    fn new_team_rejects_blank_name() {
        assert_eq!(Team::new("   ").unwrap_err(), TeamError::EmptyName);
        let team = Team::new(" Mumbai Indians ").unwrap();
        assert_eq!(team.name, "Mumbai Indians");
        assert!(team.is_empty());
        assert!(!team.id.is_empty());
    }

    #[test]
    fn added_players_are_stamped_with_team_name() {
        let team = Team::with_players("Sample XI", sample_players()).unwrap();
        assert_eq!(team.len(), 5);
        assert!(team
            .players
            .iter()
            .all(|p| p.team.as_deref() == Some("Sample XI")));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut team = Team::with_players("Sample XI", sample_players()).unwrap();
        let dup = sample_players().remove(0);
        assert_eq!(
            team.add_player(dup).unwrap_err(),
            TeamError::DuplicatePlayerId {
                id: 1,
                team: "Sample XI".into()
            }
        );
    }

    #[test]
    fn next_player_id_follows_highest() {
        let mut team = Team::new("Empty").unwrap();
        assert_eq!(team.next_player_id(), 1);
        for p in sample_players() {
            team.add_player(p).unwrap();
        }
        assert_eq!(team.next_player_id(), 6);
    }

    #[test]
    fn update_and_remove_by_id() {
        let mut team = Team::with_players("Sample XI", sample_players()).unwrap();

        let mut kohli = team.player(1).cloned().unwrap();
        kohli.catches = 120;
        kohli.team = None;
        assert!(team.update_player(kohli));
        assert_eq!(team.player(1).unwrap().catches, 120);
        assert_eq!(team.player(1).unwrap().team.as_deref(), Some("Sample XI"));

        let mut ghost = team.player(2).cloned().unwrap();
        ghost.id = 99;
        assert!(!team.update_player(ghost));

        let removed = team.remove_player(3).unwrap();
        assert_eq!(removed.role, Role::WicketKeeper);
        assert!(team.player(3).is_none());
        assert!(team.remove_player(3).is_none());
    }

    #[test]
    fn short_roster_is_not_selectable() {
        let team = Team::with_players("Sample XI", sample_players()).unwrap();
        let rules = SelectionRules::default();
        assert_eq!(
            team.ensure_selectable(&rules).unwrap_err(),
            TeamError::NotEnoughPlayers {
                team: "Sample XI".into(),
                have: 5,
                need: 11
            }
        );
        assert!(team.ensure_selectable(&rules.with_team_size(5)).is_ok());
    }

    #[test]
    fn select_reports_team_name() {
        let team = Team::with_players("Sample XI", sample_players()).unwrap();
        let result = team.select(&SelectionRules::default());
        assert_eq!(result.team_name, "Sample XI");
        assert_eq!(result.len(), 5);
    }
}
