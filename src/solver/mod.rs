//! Distle solving
//!
//! The candidate set, the pair distance cache, the ranking strategies, and the
//! per-game session that drives them.

pub mod candidates;
pub mod metrics;
pub mod pairs;
mod session;
pub mod strategy;

pub use candidates::CandidateSet;
pub use metrics::{GuessMetrics, calculate_metrics};
pub use pairs::{PairDistances, PairKey};
pub use session::{GameSession, Phase, PlayerConfig, Round, SessionError};
pub use strategy::{
    CentralStrategy, PartitionStrategy, RandomStrategy, ScoredGuess, SpreadStrategy, Strategy,
    StrategyType,
};
