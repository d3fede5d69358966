mod filter;

#[cfg(test)]
mod filter_tests;

pub use filter::{FilterSelection, visible_parlays};
