//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod distance;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use distance::{DistanceReport, compare_words};
pub use simple::run_simple;
pub use solve::{GameRecord, GuessStep, SolveConfig, play_game, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
