// Lineup selection: two-phase greedy pick under role and overseas constraints.
//
// Phase 1 (minimum fill) walks each role bucket in fixed order
// (Batsman, Bowler, All-Rounder, Wicket-Keeper) and takes the best players
// until the role minimum is met, skipping anyone who would break the overseas
// cap. Phase 2 (fill remaining) merges what is left, sorts by score, and makes
// one forward pass until the team is full, skipping anyone who would break the
// overseas cap or their role maximum. Nothing skipped is revisited and the
// result is never an error: a short pool yields a short lineup.

pub mod rules;

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::player::{Player, Role, ScoredPlayer};
use crate::scoring::round2;

pub use rules::{RoleBounds, RulesError, SelectionRules, TeamFormat};

/// Team name reported when the input carries none.
pub const UNKNOWN_TEAM: &str = "Unknown Team";

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// A role whose minimum could not be met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleShortfall {
    pub role: Role,
    pub required: usize,
    pub selected: usize,
}

/// Output of the selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    /// Selected players in the order they were picked.
    pub selected_players: Vec<ScoredPlayer>,
    pub total_score: f64,
    pub team_name: String,
}

impl SelectionResult {
    pub fn len(&self) -> usize {
        self.selected_players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_players.is_empty()
    }

    /// Whether the lineup reached the full team size.
    pub fn is_complete(&self, rules: &SelectionRules) -> bool {
        self.len() >= rules.team_size
    }

    pub fn overseas_count(&self) -> usize {
        self.selected_players
            .iter()
            .filter(|p| p.is_overseas())
            .count()
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.selected_players
            .iter()
            .filter(|p| p.role() == role)
            .count()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.selected_players.iter().map(|p| p.id()).collect()
    }

    /// Roles whose minimum the best-effort pass did not reach, in fill order.
    pub fn unmet_minimums(&self, rules: &SelectionRules) -> Vec<RoleShortfall> {
        Role::ALL
            .iter()
            .filter_map(|&role| {
                let required = rules.bounds(role).min;
                let selected = self.role_count(role);
                (selected < required).then_some(RoleShortfall {
                    role,
                    required,
                    selected,
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Running tally of what has been picked so far.
struct Lineup<'r> {
    rules: &'r SelectionRules,
    picked: Vec<ScoredPlayer>,
    ids: HashSet<u32>,
    overseas: usize,
    per_role: [usize; 4],
}

impl<'r> Lineup<'r> {
    fn new(rules: &'r SelectionRules) -> Self {
        Lineup {
            rules,
            picked: Vec::with_capacity(rules.team_size),
            ids: HashSet::new(),
            overseas: 0,
            per_role: [0; 4],
        }
    }

    fn is_full(&self) -> bool {
        self.picked.len() >= self.rules.team_size
    }

    fn overseas_blocked(&self, candidate: &ScoredPlayer) -> bool {
        candidate.is_overseas() && !self.rules.overseas_slot_open(self.overseas)
    }

    fn role_full(&self, candidate: &ScoredPlayer) -> bool {
        let role = candidate.role();
        self.per_role[role.index()] >= self.rules.bounds(role).max
    }

    fn already_picked(&self, candidate: &ScoredPlayer) -> bool {
        self.ids.contains(&candidate.id())
    }

    fn push(&mut self, candidate: ScoredPlayer) {
        if candidate.is_overseas() {
            self.overseas += 1;
        }
        self.per_role[candidate.role().index()] += 1;
        self.ids.insert(candidate.id());
        self.picked.push(candidate);
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Stable descending sort by composite score. Ties keep input order.
fn sort_by_score_desc(players: &mut [ScoredPlayer]) {
    players.sort_by(|a, b| {
        b.composite_score
            .partial_cmp(&a.composite_score)
            .unwrap_or(Ordering::Equal)
    });
}

/// Select a lineup under the standard league rules.
pub fn select_default(players: &[Player]) -> SelectionResult {
    select_lineup(players, &SelectionRules::default())
}

/// Select up to `rules.team_size` players maximising composite score greedily.
///
/// Scores are recomputed from raw stats here; the input is never mutated.
pub fn select_lineup(players: &[Player], rules: &SelectionRules) -> SelectionResult {
    let team_name = players
        .first()
        .and_then(|p| p.team.clone())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_TEAM.to_string());

    // 1. Score and bucket by role, best first.
    let mut buckets: [Vec<ScoredPlayer>; 4] = Default::default();
    for player in players {
        buckets[player.role.index()].push(ScoredPlayer::new(player.clone()));
    }
    for bucket in &mut buckets {
        sort_by_score_desc(bucket);
    }

    let mut lineup = Lineup::new(rules);

    // 2. Minimum fill, one role at a time.
    for role in Role::ALL {
        let min = rules.bounds(role).min;
        let bucket = std::mem::take(&mut buckets[role.index()]);
        let mut taken = 0;
        let mut left = Vec::with_capacity(bucket.len());

        for candidate in bucket {
            if taken >= min || lineup.is_full() {
                left.push(candidate);
                continue;
            }
            if lineup.overseas_blocked(&candidate) {
                debug!(
                    "minimum fill: skipping {} ({}): overseas cap reached",
                    candidate.player.name, role
                );
                left.push(candidate);
                continue;
            }
            if lineup.already_picked(&candidate) {
                debug!(
                    "minimum fill: skipping {} ({}): duplicate id {}",
                    candidate.player.name,
                    role,
                    candidate.id()
                );
                left.push(candidate);
                continue;
            }
            lineup.push(candidate);
            taken += 1;
        }

        if taken < min {
            debug!("minimum fill: {} short of minimum ({}/{})", role, taken, min);
        }
        buckets[role.index()] = left;
    }

    // 3. Fill the remaining slots from everyone left, best first.
    let mut remaining: Vec<ScoredPlayer> = buckets.into_iter().flatten().collect();
    sort_by_score_desc(&mut remaining);

    for candidate in remaining {
        if lineup.is_full() {
            break;
        }
        if lineup.overseas_blocked(&candidate) {
            debug!(
                "fill remaining: skipping {}: overseas cap reached",
                candidate.player.name
            );
            continue;
        }
        if lineup.role_full(&candidate) {
            debug!(
                "fill remaining: skipping {}: {} maximum reached",
                candidate.player.name,
                candidate.role()
            );
            continue;
        }
        if lineup.already_picked(&candidate) {
            debug!(
                "fill remaining: skipping {}: duplicate id {}",
                candidate.player.name,
                candidate.id()
            );
            continue;
        }
        lineup.push(candidate);
    }

    // 4. Total from the freshly computed scores.
    let selected_players = lineup.picked;
    let total_score = round2(selected_players.iter().map(|p| p.composite_score).sum());

    debug!(
        "selected {}/{} players from a squad of {} (overseas {}), total {:.2}",
        selected_players.len(),
        rules.team_size,
        players.len(),
        lineup.overseas,
        total_score
    );

    SelectionResult {
        selected_players,
        total_score,
        team_name,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
