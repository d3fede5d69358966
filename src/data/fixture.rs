use std::sync::mpsc::Sender;

use anyhow::{Context, Result, ensure};

use crate::models::ParlaySheet;

#[cfg(debug_assertions)]
use crate::config::DF;

// The curated cards ship inside the binary; there is no backend to fetch from.
const SHEET_JSON: &str = include_str!("../../fixtures/parlays.json");

/// Per-card decode status, surfaced on the bootstrap screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    /// Card decoded; payload is its leg count.
    Completed(usize),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub index: usize,
    pub title: String,
    pub status: LoadStatus,
}

/// Decode the embedded sheet. Never panics; a malformed fixture is reported
/// as an error for the bootstrap screen to display.
pub fn load_sheet() -> Result<ParlaySheet> {
    let sheet: ParlaySheet =
        serde_json::from_str(SHEET_JSON).context("embedded parlay sheet is not valid JSON")?;
    ensure!(!sheet.is_empty(), "embedded parlay sheet has no cards");
    Ok(sheet)
}

/// Decode the sheet and report per-card progress over `progress` (if given).
/// Runs on a background thread on native; inline on wasm.
pub fn fetch_sheet(progress: Option<Sender<ProgressEvent>>) -> Result<ParlaySheet> {
    let sheet = load_sheet()?;

    if let Some(tx) = &progress {
        for (index, parlay) in sheet.parlays.iter().enumerate() {
            let _ = tx.send(ProgressEvent {
                index,
                title: parlay.title.clone(),
                status: LoadStatus::Completed(parlay.legs.len()),
            });
        }
    }

    #[cfg(debug_assertions)]
    if DF.log_fixture_load {
        log::info!(
            "Decoded parlay sheet: {} cards, generated {}",
            sheet.len(),
            sheet.generated_at
        );
    }

    Ok(sheet)
}
