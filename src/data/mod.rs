mod fixture;

#[cfg(test)]
mod fixture_tests;

pub use fixture::{LoadStatus, ProgressEvent, fetch_sheet, load_sheet};
