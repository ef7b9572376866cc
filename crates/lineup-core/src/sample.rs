// Built-in demo squad.

use crate::player::{Overseas, Player, Role};

/// Five well-known T20 players, two of them keepers.
pub fn sample_players() -> Vec<Player> {
    vec![
        Player {
            id: 1,
            name: "Virat Kohli".into(),
            team: None,
            role: Role::Batsman,
            overseas: Overseas::No,
            batting_average: 38.2,
            strike_rate: 137.9,
            bowling_economy: None,
            wickets: None,
            catches: 92,
        },
        Player {
            id: 2,
            name: "Jasprit Bumrah".into(),
            team: None,
            role: Role::Bowler,
            overseas: Overseas::No,
            batting_average: 8.2,
            strike_rate: 90.5,
            bowling_economy: Some(6.7),
            wickets: Some(145),
            catches: 21,
        },
        Player {
            id: 3,
            name: "Jos Buttler".into(),
            team: None,
            role: Role::WicketKeeper,
            overseas: Overseas::Yes,
            batting_average: 34.1,
            strike_rate: 149.8,
            bowling_economy: None,
            wickets: None,
            catches: 105,
        },
        Player {
            id: 4,
            name: "Andre Russell".into(),
            team: None,
            role: Role::AllRounder,
            overseas: Overseas::Yes,
            batting_average: 25.3,
            strike_rate: 176.2,
            bowling_economy: Some(8.9),
            wickets: Some(89),
            catches: 67,
        },
        Player {
            id: 5,
            name: "Quinton de Kock".into(),
            team: None,
            role: Role::WicketKeeper,
            overseas: Overseas::Yes,
            batting_average: 31.5,
            strike_rate: 138.7,
            bowling_economy: None,
            wickets: None,
            catches: 115,
        },
    ]
}
