//! Configuration module for the parlay insights dashboard.

mod debug;
mod persistence;

pub use debug::DF;
pub use persistence::PERSISTENCE;
