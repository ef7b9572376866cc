// Invariants of the selector checked over many generated squads.

use std::collections::HashSet;

use lineup_core::sample::sample_players;
use lineup_core::scoring::{
    batting_component, bowling_component, composite_score, round2,
};
use lineup_core::{
    select_default, select_lineup, Overseas, Player, Role, SelectionRules, TeamFormat,
};

// ===========================================================================
// Test helpers
// ===========================================================================

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Small deterministic generator so squads are reproducible without extra crates.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }

    fn real(&mut self, max: f64) -> f64 {
        (self.below(10_000) as f64 / 10_000.0) * max
    }
}

fn generated_squad(seed: u64, size: usize) -> Vec<Player> {
    let mut rng = Lcg(seed);
    (0..size)
        .map(|i| {
            let role = Role::ALL[rng.below(4) as usize];
            let overseas = if rng.below(3) == 0 {
                Overseas::Yes
            } else {
                Overseas::No
            };
            let bowls = role.bowls();
            Player {
                id: i as u32 + 1,
                name: format!("Player {}", i + 1),
                team: None,
                role,
                overseas,
                batting_average: rng.real(55.0),
                strike_rate: rng.real(180.0),
                bowling_economy: bowls.then(|| 5.0 + rng.real(6.0)),
                wickets: bowls.then(|| rng.below(200) as u32),
                catches: rng.below(150) as u32,
            }
        })
        .collect()
}

fn check_invariants(squad: &[Player], rules: &SelectionRules) {
    let result = select_lineup(squad, rules);

    assert!(result.len() <= rules.team_size);

    let input_ids: HashSet<u32> = squad.iter().map(|p| p.id).collect();
    let mut seen = HashSet::new();
    for p in &result.selected_players {
        assert!(seen.insert(p.id()), "id {} selected twice", p.id());
        assert!(input_ids.contains(&p.id()), "id {} not in squad", p.id());
        assert_eq!(p.composite_score, composite_score(&p.player));
    }

    if let Some(cap) = rules.max_overseas {
        assert!(result.overseas_count() <= cap);
    }
    for role in Role::ALL {
        assert!(result.role_count(role) <= rules.bounds(role).max);
    }

    let sum: f64 = result.selected_players.iter().map(|p| p.composite_score).sum();
    assert!(approx_eq(result.total_score, round2(sum), 1e-9));

    // A squad with at least a full team of every role always fills the team.
    let every_role_deep = Role::ALL.iter().all(|&role| {
        squad.iter().filter(|p| p.role == role && !p.is_overseas()).count() >= rules.team_size
    });
    if every_role_deep {
        assert_eq!(result.len(), rules.team_size);
    }
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn invariants_hold_for_generated_squads() {
    let rules = SelectionRules::default();
    for seed in 0..200u64 {
        let size = (seed % 40) as usize;
        check_invariants(&generated_squad(seed, size), &rules);
    }
}

#[test]
fn invariants_hold_without_overseas_cap() {
    let rules = SelectionRules::for_format(TeamFormat::Normal);
    for seed in 1_000..1_100u64 {
        check_invariants(&generated_squad(seed, 30), &rules);
    }
}

#[test]
fn large_squads_fill_the_team() {
    let rules = SelectionRules::default();
    for seed in 5_000..5_020u64 {
        let squad = generated_squad(seed, 200);
        check_invariants(&squad, &rules);
        assert_eq!(select_lineup(&squad, &rules).len(), 11);
    }
}

#[test]
fn selection_is_deterministic() {
    let squad = generated_squad(42, 35);
    let first = select_default(&squad);
    let second = select_default(&squad);
    assert_eq!(first, second);
}

#[test]
fn scores_are_idempotent_and_all_rounders_average() {
    for player in generated_squad(7, 100) {
        assert_eq!(composite_score(&player), composite_score(&player));
        if player.role == Role::AllRounder {
            let mean = (batting_component(&player) + bowling_component(&player)) / 2.0;
            assert_eq!(composite_score(&player), round2(mean));
        }
    }
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn sample_squad_scenario() {
    let squad = sample_players();
    let result = select_default(&squad);

    assert_eq!(result.len(), 5);
    assert_eq!(result.overseas_count(), 3);
    let expected: f64 = squad.iter().map(composite_score).sum();
    assert!(approx_eq(result.total_score, round2(expected), 1e-9));
    // 78.87 + 89.86 + 85.60 + 71.97 + 86.34
    assert!(approx_eq(result.total_score, 412.64, 1e-9));
}

#[test]
fn empty_squad_scenario() {
    let result = select_default(&[]);
    assert!(result.selected_players.is_empty());
    assert_eq!(result.total_score, 0.0);
}

#[test]
fn six_overseas_batsmen_scenario() {
    let mut squad = Vec::new();
    let mut id = 0;
    let mut push = |role: Role, overseas: Overseas, avg: f64, wickets: Option<u32>| {
        id += 1;
        squad.push(Player {
            id,
            name: format!("Player {id}"),
            team: None,
            role,
            overseas,
            batting_average: avg,
            strike_rate: 100.0,
            bowling_economy: wickets.map(|_| 7.0),
            wickets,
            catches: 10,
        });
    };

    // Six overseas batsmen, comfortably the best in the squad.
    for i in 0..6 {
        push(Role::Batsman, Overseas::Yes, 90.0 - i as f64, None);
    }
    for i in 0..3 {
        push(Role::Batsman, Overseas::No, 20.0 + i as f64, None);
    }
    for i in 0..5 {
        push(Role::Bowler, Overseas::No, 5.0, Some(30 + i));
    }
    for i in 0..3 {
        push(Role::AllRounder, Overseas::No, 20.0, Some(10 + i));
    }
    for i in 0..3 {
        push(Role::WicketKeeper, Overseas::No, 25.0 + i as f64, None);
    }
    assert_eq!(squad.len(), 20);

    let result = select_default(&squad);
    assert_eq!(result.len(), 11);
    assert_eq!(result.overseas_count(), 4);
    let overseas_batsmen = result
        .selected_players
        .iter()
        .filter(|p| p.role() == Role::Batsman && p.is_overseas())
        .count();
    assert_eq!(overseas_batsmen, 4);
    assert!(result.role_count(Role::Batsman) <= 6);
}
