// Plain-text and JSON rendering of a selection.

use lineup_core::{RoleShortfall, SelectionResult, SelectionRules};
use serde::Serialize;

const NAME_WIDTH: usize = 24;

/// JSON envelope: the selection plus the derived counts a reader usually wants.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a SelectionResult,
    overseas_count: usize,
    complete: bool,
    unmet_minimums: Vec<RoleShortfall>,
}

pub fn render_json(result: &SelectionResult, rules: &SelectionRules) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        result,
        overseas_count: result.overseas_count(),
        complete: result.is_complete(rules),
        unmet_minimums: result.unmet_minimums(rules),
    })
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut s: String = name.chars().take(width.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}

pub fn render_table(result: &SelectionResult, rules: &SelectionRules) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}: {} of {} selected\n\n",
        result.team_name,
        result.len(),
        rules.team_size
    ));

    out.push_str(&format!(
        "{:>3}  {:<NAME_WIDTH$}  {:<13}  {:<8}  {:>8}\n",
        "#", "Player", "Role", "Overseas", "Score"
    ));
    out.push_str(&format!("{}\n", "-".repeat(3 + 2 + NAME_WIDTH + 2 + 13 + 2 + 8 + 2 + 8)));

    for (i, p) in result.selected_players.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<NAME_WIDTH$}  {:<13}  {:<8}  {:>8.2}\n",
            i + 1,
            truncate(&p.player.name, NAME_WIDTH),
            p.role().display_str(),
            p.player.overseas.display_str(),
            p.composite_score
        ));
    }

    out.push('\n');
    out.push_str(&format!("Total score: {:.2}\n", result.total_score));
    match rules.max_overseas {
        Some(cap) => out.push_str(&format!(
            "Overseas:    {}/{}\n",
            result.overseas_count(),
            cap
        )),
        None => out.push_str(&format!("Overseas:    {}\n", result.overseas_count())),
    }

    let shortfalls = result.unmet_minimums(rules);
    if !shortfalls.is_empty() {
        out.push_str("\nUnmet role minimums:\n");
        for s in shortfalls {
            out.push_str(&format!(
                "  {}: {} of {}\n",
                s.role.display_str(),
                s.selected,
                s.required
            ));
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::sample::sample_players;
    use lineup_core::{select_default, TeamFormat};

    #[test]
    fn table_lists_every_selected_player() {
        let rules = SelectionRules::default();
        let result = select_default(&sample_players());
        let table = render_table(&result, &rules);

        assert!(table.starts_with("Unknown Team: 5 of 11 selected"));
        for p in &result.selected_players {
            assert!(table.contains(&p.player.name), "missing {}", p.player.name);
        }
        assert!(table.contains("Wicket-Keeper"));
        assert!(table.contains(&format!("Total score: {:.2}", result.total_score)));
        assert!(table.contains("Overseas:    3/4"));
        // One batsman and one bowler against minimums of three each.
        assert!(table.contains("Unmet role minimums:"));
        assert!(table.contains("Batsman: 1 of 3"));
        assert!(table.contains("Bowler: 1 of 3"));
    }

    #[test]
    fn table_without_overseas_cap_shows_plain_count() {
        let rules = SelectionRules::for_format(TeamFormat::Normal);
        let result = lineup_core::select_lineup(&sample_players(), &rules);
        let table = render_table(&result, &rules);
        assert!(table.contains("Overseas:    3\n"));
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate("Short", 10), "Short");
        let t = truncate("An Extremely Long Player Name Indeed", 10);
        assert_eq!(t.chars().count(), 10);
        assert!(t.ends_with('…'));
    }

    #[test]
    fn json_report_carries_counts() {
        let rules = SelectionRules::default();
        let result = select_default(&sample_players());
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&result, &rules).unwrap()).unwrap();

        assert_eq!(json["teamName"], "Unknown Team");
        assert_eq!(json["overseasCount"], 3);
        assert_eq!(json["complete"], false);
        assert_eq!(json["selectedPlayers"].as_array().unwrap().len(), 5);
        assert_eq!(json["unmetMinimums"][0]["role"], "Batsman");
        assert_eq!(json["unmetMinimums"][0]["required"], 3);
        assert_eq!(json["unmetMinimums"][0]["selected"], 1);
    }
}
