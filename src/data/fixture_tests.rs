use std::collections::HashSet;
use std::sync::mpsc;

use crate::data::{LoadStatus, fetch_sheet, load_sheet};

#[test]
fn embedded_sheet_decodes() {
    let sheet = load_sheet().expect("embedded fixture must decode");
    assert!(!sheet.is_empty());
}

#[test]
fn card_ids_are_unique() {
    let sheet = load_sheet().unwrap();
    let ids: HashSet<&str> = sheet.parlays.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), sheet.len());
}

#[test]
fn every_card_has_legs_and_bounded_confidence() {
    let sheet = load_sheet().unwrap();
    for parlay in &sheet.parlays {
        assert!(!parlay.legs.is_empty(), "{} has no legs", parlay.id);
        assert!(parlay.confidence <= 100, "{} confidence", parlay.id);
        for leg in &parlay.legs {
            assert!(leg.confidence <= 100, "{} leg confidence", parlay.id);
            assert!(!leg.player.is_empty(), "{} empty player", parlay.id);
        }
    }
}

#[test]
fn fetch_reports_one_completed_event_per_card() {
    let (tx, rx) = mpsc::channel();
    let sheet = fetch_sheet(Some(tx)).unwrap();

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events.len(), sheet.len());
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.index, i);
        assert!(matches!(event.status, LoadStatus::Completed(n) if n > 0));
    }
}
