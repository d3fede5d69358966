use crate::models::{Parlay, RiskLevel, Sport};

/// The user's current filter/search criteria.
///
/// `None` means the criterion is inactive (match everything). Deliberately an
/// `Option` rather than a sentinel enum value, so a future league literally
/// named "ALL" can never collide with the inactive state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub sport: Option<Sport>,
    pub risk: Option<RiskLevel>,
    pub search: String,
}

impl FilterSelection {
    pub fn is_unfiltered(&self) -> bool {
        self.sport.is_none() && self.risk.is_none() && self.search.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Conjunction of the three predicates: exact sport, exact risk level,
    /// case-insensitive substring over title + notes + leg players.
    pub fn matches(&self, parlay: &Parlay) -> bool {
        let matches_sport = self.sport.is_none_or(|sport| sport == parlay.sport);
        let matches_risk = self.risk.is_none_or(|risk| risk == parlay.risk_level);
        let matches_search = self.search.is_empty()
            || parlay
                .search_haystack()
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        matches_sport && matches_risk && matches_search
    }
}

/// Stable filter over the full sheet: keeps original order, never reorders,
/// never duplicates. An empty result is a normal outcome, not an error.
pub fn visible_parlays<'a>(parlays: &'a [Parlay], selection: &FilterSelection) -> Vec<&'a Parlay> {
    parlays
        .iter()
        .filter(|parlay| selection.matches(parlay))
        .collect()
}
