mod parlay;

pub use parlay::{Parlay, ParlayLeg, ParlaySheet, RiskLevel, Sport};
