// Composite scoring: one comparable number per player, weighted by role.

use crate::player::{Player, Role};

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

const BAT_AVERAGE_WEIGHT: f64 = 0.5;
const BAT_STRIKE_RATE_WEIGHT: f64 = 0.3;
const BAT_CATCHES_WEIGHT: f64 = 0.2;

const BOWL_WICKETS_WEIGHT: f64 = 0.6;
const BOWL_ECONOMY_WEIGHT: f64 = 0.2;
const BOWL_CATCHES_WEIGHT: f64 = 0.2;

const KEEP_AVERAGE_WEIGHT: f64 = 0.4;
const KEEP_STRIKE_RATE_WEIGHT: f64 = 0.2;
const KEEP_CATCHES_WEIGHT: f64 = 0.4;

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Batting value: `0.5*avg + 0.3*sr + 0.2*catches`.
pub fn batting_component(player: &Player) -> f64 {
    player.batting_average * BAT_AVERAGE_WEIGHT
        + player.strike_rate * BAT_STRIKE_RATE_WEIGHT
        + f64::from(player.catches) * BAT_CATCHES_WEIGHT
}

/// Bowling value: `0.6*wickets - 0.2*economy + 0.2*catches`.
///
/// Missing wickets or economy count as 0.
pub fn bowling_component(player: &Player) -> f64 {
    let wickets = f64::from(player.wickets.unwrap_or(0));
    let economy = player.bowling_economy.unwrap_or(0.0);
    wickets * BOWL_WICKETS_WEIGHT - economy * BOWL_ECONOMY_WEIGHT
        + f64::from(player.catches) * BOWL_CATCHES_WEIGHT
}

/// Wicket-keeping value: `0.4*avg + 0.2*sr + 0.4*catches`.
pub fn keeping_component(player: &Player) -> f64 {
    player.batting_average * KEEP_AVERAGE_WEIGHT
        + player.strike_rate * KEEP_STRIKE_RATE_WEIGHT
        + f64::from(player.catches) * KEEP_CATCHES_WEIGHT
}

/// Unrounded role-dependent score.
pub fn raw_score(player: &Player) -> f64 {
    match player.role {
        Role::Batsman => batting_component(player),
        Role::Bowler => bowling_component(player),
        Role::AllRounder => (batting_component(player) + bowling_component(player)) / 2.0,
        Role::WicketKeeper => keeping_component(player),
    }
}

/// Composite score for a player, rounded to 2 decimal places.
///
/// Total over its domain: absent numerics are 0, never an error.
pub fn composite_score(player: &Player) -> f64 {
    round2(raw_score(player))
}

/// Round to 2 decimal places from the exact binary value, so 59.785 (stored
/// as 59.78499...) becomes 59.78. Exact half-cents (odd multiples of 1/8)
/// round away from zero. Negative zero collapses to 0.
pub fn round2(value: f64) -> f64 {
    let magnitude = value.abs();
    let eighths = magnitude * 8.0;
    let rounded = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        (magnitude * 100.0).ceil() / 100.0
    } else {
        format!("{magnitude:.2}").parse().unwrap_or(magnitude)
    };

    if rounded == 0.0 {
        0.0
    } else if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
