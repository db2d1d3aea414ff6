//! Group-to-unit matching.
//!
//! - [`ScoringWeights`]: proximity/load/battery blend for ranking units
//! - [`match_groups`]: greedy matcher serving highest-priority groups
//!   first

mod matcher;
mod scoring;

pub use matcher::{match_groups, GroupMatch, MatchOutcome};
pub use scoring::ScoringWeights;
