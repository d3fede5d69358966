// std::time::Instant panics on wasm32; web-time works on both targets.
pub use web_time::Instant as AppInstant;
