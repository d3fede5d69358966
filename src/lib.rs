#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use config::PERSISTENCE;
pub use engine::{FilterSelection, visible_parlays};
pub use models::{Parlay, ParlayLeg, ParlaySheet, RiskLevel, Sport};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pre-select a sport filter at launch (omit for all sports)
    #[arg(long, value_enum)]
    pub sport: Option<Sport>,

    /// Pre-select a risk filter at launch (omit for all risk levels)
    #[arg(long, value_enum)]
    pub risk: Option<RiskLevel>,

    /// Seed the search box
    #[arg(long, default_value = "")]
    pub search: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
