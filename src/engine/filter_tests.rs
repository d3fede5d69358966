use crate::engine::{FilterSelection, visible_parlays};
use crate::models::{Parlay, ParlayLeg, RiskLevel, Sport};

fn leg(player: &str) -> ParlayLeg {
    ParlayLeg {
        player: player.to_string(),
        market: "Points".to_string(),
        line: "Over 20.5".to_string(),
        opponent: "vs Someone".to_string(),
        kickoff: "7:00 PM ET".to_string(),
        trend: "steady".to_string(),
        confidence: 60,
        rationale: "fixture".to_string(),
    }
}

fn parlay(id: &str, sport: Sport, risk: RiskLevel, title: &str, players: &[&str]) -> Parlay {
    Parlay {
        id: id.to_string(),
        sport,
        slate: "Friday".to_string(),
        risk_level: risk,
        title: title.to_string(),
        notes: "notes".to_string(),
        total_odds: "+200".to_string(),
        confidence: 55,
        implied_probability: 33.3,
        stake_recommendation: "1u".to_string(),
        book: "Book".to_string(),
        legs: players.iter().map(|p| leg(p)).collect(),
    }
}

fn sheet() -> Vec<Parlay> {
    vec![
        parlay(
            "r1",
            Sport::Nba,
            RiskLevel::Conservative,
            "Alpha Build",
            &["Jane Doe"],
        ),
        parlay(
            "r2",
            Sport::Nfl,
            RiskLevel::Aggressive,
            "Beta Build",
            &["John Roe"],
        ),
        parlay(
            "r3",
            Sport::Nba,
            RiskLevel::Aggressive,
            "Gamma Build",
            &["Jane Smith"],
        ),
    ]
}

fn ids(result: &[&Parlay]) -> Vec<String> {
    result.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn unfiltered_selection_returns_full_sheet_in_order() {
    let parlays = sheet();
    let selection = FilterSelection::default();
    assert!(selection.is_unfiltered());

    let visible = visible_parlays(&parlays, &selection);
    assert_eq!(ids(&visible), vec!["r1", "r2", "r3"]);
}

#[test]
fn sport_filter_keeps_original_relative_order() {
    let parlays = sheet();
    let selection = FilterSelection {
        sport: Some(Sport::Nba),
        ..Default::default()
    };

    assert_eq!(ids(&visible_parlays(&parlays, &selection)), vec!["r1", "r3"]);
}

#[test]
fn sport_and_risk_are_conjunctive() {
    let parlays = sheet();
    let selection = FilterSelection {
        sport: Some(Sport::Nba),
        risk: Some(RiskLevel::Aggressive),
        ..Default::default()
    };

    assert_eq!(ids(&visible_parlays(&parlays, &selection)), vec!["r3"]);
}

#[test]
fn sport_with_no_records_yields_empty_regardless_of_other_criteria() {
    let parlays = vec![
        parlay("r1", Sport::Nba, RiskLevel::Balanced, "Only NBA", &["A"]),
        parlay("r2", Sport::Nba, RiskLevel::Aggressive, "Still NBA", &["B"]),
    ];
    let selection = FilterSelection {
        sport: Some(Sport::Nhl),
        risk: Some(RiskLevel::Aggressive),
        search: "nba".to_string(),
    };

    assert!(visible_parlays(&parlays, &selection).is_empty());
}

#[test]
fn search_is_case_insensitive_both_ways() {
    let parlays = sheet();

    let shouting = FilterSelection {
        search: "JANE".to_string(),
        ..Default::default()
    };
    let whispering = FilterSelection {
        search: "jane".to_string(),
        ..Default::default()
    };

    assert_eq!(
        ids(&visible_parlays(&parlays, &shouting)),
        ids(&visible_parlays(&parlays, &whispering))
    );
    assert_eq!(ids(&visible_parlays(&parlays, &shouting)), vec!["r1", "r3"]);
}

#[test]
fn search_spans_title_notes_and_leg_players() {
    let parlays = sheet();

    let by_title = FilterSelection {
        search: "beta".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&visible_parlays(&parlays, &by_title)), vec!["r2"]);

    let by_player = FilterSelection {
        search: "roe".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&visible_parlays(&parlays, &by_player)), vec!["r2"]);

    let by_notes = FilterSelection {
        search: "notes".to_string(),
        ..Default::default()
    };
    assert_eq!(
        ids(&visible_parlays(&parlays, &by_notes)),
        vec!["r1", "r2", "r3"]
    );
}

#[test]
fn unmatched_search_yields_empty_not_error() {
    let parlays = sheet();
    let selection = FilterSelection {
        search: "zzz".to_string(),
        ..Default::default()
    };

    assert!(visible_parlays(&parlays, &selection).is_empty());
}

#[test]
fn filtering_is_idempotent_and_side_effect_free() {
    let parlays = sheet();
    let selection = FilterSelection {
        sport: Some(Sport::Nba),
        search: "jane".to_string(),
        ..Default::default()
    };

    let first = ids(&visible_parlays(&parlays, &selection));
    let second = ids(&visible_parlays(&parlays, &selection));
    assert_eq!(first, second);

    // Records themselves are untouched
    assert_eq!(parlays.len(), 3);
    assert_eq!(parlays[0].title, "Alpha Build");
}

#[test]
fn result_is_a_subsequence_of_the_input() {
    let parlays = sheet();
    let selection = FilterSelection {
        risk: Some(RiskLevel::Aggressive),
        ..Default::default()
    };

    let visible = ids(&visible_parlays(&parlays, &selection));
    assert_eq!(visible, vec!["r2", "r3"]);

    // Subsequence check against the full id sequence
    let full: Vec<String> = parlays.iter().map(|p| p.id.clone()).collect();
    let mut cursor = full.iter();
    for id in &visible {
        assert!(cursor.any(|full_id| full_id == id), "{id} out of order");
    }
}

#[test]
fn clear_restores_the_unfiltered_state() {
    let mut selection = FilterSelection {
        sport: Some(Sport::Nfl),
        risk: Some(RiskLevel::Conservative),
        search: "henry".to_string(),
    };

    selection.clear();
    assert!(selection.is_unfiltered());

    let parlays = sheet();
    assert_eq!(visible_parlays(&parlays, &selection).len(), parlays.len());
}
