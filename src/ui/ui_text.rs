use std::sync::LazyLock;

/// All user-facing strings in one place.
pub struct UiText {
    pub header_title: String,
    pub header_blurb: String,

    pub bs_title: String,
    pub bs_subtitle: String,
    pub bs_progress: String,
    pub bs_failed: String,

    pub chip_all_sports: String,
    pub chip_all_risk: String,
    pub search_hint: String,
    pub label_clear: String,

    pub section_featured: String,
    pub count_showing: String,
    pub count_of: String,
    pub count_cards: String,
    pub empty_state: String,
    pub footer: String,

    pub label_total_odds: String,
    pub label_confidence: String,
    pub label_implied: String,
    pub label_stake: String,
    pub label_book: String,
    pub label_slate: String,
    pub label_legs: String,
    pub label_leg: String,
    pub label_matchup: String,
    pub label_trend: String,
    pub label_leg_confidence: String,

    pub help_title: String,
    pub help_rows: &'static [(&'static str, &'static str)],
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    header_title: "Player Prop Parlays Spotlight".to_string(),
    header_blurb: "Curated multi-leg tickets leveraging matchup data, pace projections, and \
                   recent form. These builds balance exposure across marquee NBA, NFL, and NHL \
                   slates while highlighting correlation angles worth pairing."
        .to_string(),

    bs_title: "Parlay Insights".to_string(),
    bs_subtitle: "Decoding the curated sheet...".to_string(),
    bs_progress: "Decoded".to_string(),
    bs_failed: "Sheet unavailable:".to_string(),

    chip_all_sports: "All Sports".to_string(),
    chip_all_risk: "All Risk".to_string(),
    search_hint: "Search players, titles, or notes...".to_string(),
    label_clear: "Clear".to_string(),

    section_featured: "Featured Builds".to_string(),
    count_showing: "Showing".to_string(),
    count_of: "of".to_string(),
    count_cards: "curated cards".to_string(),
    empty_state: "No parlays match the current filters. Pick another sport or risk band, or \
                  clear the search."
        .to_string(),
    footer: "Projections blend pace-adjusted matchup data, rolling player efficiency, and \
             market signals. Always verify final injury reports and shop lines before staking. \
             Wager responsibly (1-800-GAMBLER)."
        .to_string(),

    label_total_odds: "Total Odds".to_string(),
    label_confidence: "Confidence Index".to_string(),
    label_implied: "Implied Prob".to_string(),
    label_stake: "Suggested Stake".to_string(),
    label_book: "Book".to_string(),
    label_slate: "Slate".to_string(),
    label_legs: "Legs".to_string(),
    label_leg: "Leg".to_string(),
    label_matchup: "Matchup".to_string(),
    label_trend: "Trend".to_string(),
    label_leg_confidence: "Confidence".to_string(),

    help_title: "Keyboard Shortcuts".to_string(),
    help_rows: &[
        ("Esc", "Close this window / clear all filters"),
        ("L", "Toggle leg details on cards"),
        ("H or K", "Toggle this help window"),
    ],
});
