use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The closed set of leagues the sheet covers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    clap::ValueEnum,
)]
pub enum Sport {
    #[serde(rename = "NBA")]
    #[strum(serialize = "NBA")]
    Nba,
    #[serde(rename = "NFL")]
    #[strum(serialize = "NFL")]
    Nfl,
    #[serde(rename = "NHL")]
    #[strum(serialize = "NHL")]
    Nhl,
}

/// Coarse volatility classification of a ticket.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    clap::ValueEnum,
)]
pub enum RiskLevel {
    Conservative,
    Balanced,
    Aggressive,
}

/// One individual prediction within a parlay (a player performance line).
/// Only `player` participates in search; everything else is display copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParlayLeg {
    pub player: String,
    pub market: String,
    pub line: String,
    pub opponent: String,
    pub kickoff: String,
    pub trend: String,
    /// 0-100
    pub confidence: u8,
    pub rationale: String,
}

/// A curated multi-leg ticket. Read-only once decoded from the fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parlay {
    pub id: String,
    pub sport: Sport,
    pub slate: String,
    pub risk_level: RiskLevel,
    pub title: String,
    pub notes: String,
    /// American odds as a display string, e.g. "+475"
    pub total_odds: String,
    /// 0-100
    pub confidence: u8,
    /// Percent, e.g. 24.5
    pub implied_probability: f32,
    pub stake_recommendation: String,
    pub book: String,
    pub legs: Vec<ParlayLeg>,
}

impl Parlay {
    /// Title, notes and all leg player names (in leg order) flattened into one
    /// space-joined string. The search predicate lowercases this on its side.
    pub fn search_haystack(&self) -> String {
        let players = self.legs.iter().map(|leg| leg.player.as_str()).join(" ");
        [self.title.as_str(), self.notes.as_str(), players.as_str()].join(" ")
    }
}

/// The full curated sheet plus the timestamp it was compiled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParlaySheet {
    pub generated_at: DateTime<Utc>,
    pub parlays: Vec<Parlay>,
}

impl ParlaySheet {
    /// Header-style date, e.g. "Friday · November 14, 2025"
    pub fn header_date(&self) -> String {
        self.generated_at.format("%A · %B %-d, %Y").to_string()
    }

    pub fn len(&self) -> usize {
        self.parlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parlays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(player: &str) -> ParlayLeg {
        ParlayLeg {
            player: player.to_string(),
            market: "Points".to_string(),
            line: "Over 20.5".to_string(),
            opponent: "vs Someone".to_string(),
            kickoff: "7:00 PM ET".to_string(),
            trend: String::new(),
            confidence: 50,
            rationale: String::new(),
        }
    }

    #[test]
    fn sport_serializes_as_league_tag() {
        assert_eq!(serde_json::to_string(&Sport::Nba).unwrap(), "\"NBA\"");
        let back: Sport = serde_json::from_str("\"NHL\"").unwrap();
        assert_eq!(back, Sport::Nhl);
        assert_eq!(Sport::Nfl.to_string(), "NFL");
    }

    #[test]
    fn haystack_joins_title_notes_and_players_in_leg_order() {
        let parlay = Parlay {
            id: "p1".to_string(),
            sport: Sport::Nba,
            slate: "Friday".to_string(),
            risk_level: RiskLevel::Balanced,
            title: "Alpha Build".to_string(),
            notes: "some notes".to_string(),
            total_odds: "+100".to_string(),
            confidence: 50,
            implied_probability: 50.0,
            stake_recommendation: "1u".to_string(),
            book: "Book".to_string(),
            legs: vec![leg("Jane Doe"), leg("John Roe")],
        };

        assert_eq!(
            parlay.search_haystack(),
            "Alpha Build some notes Jane Doe John Roe"
        );
    }
}
