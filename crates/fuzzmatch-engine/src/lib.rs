//! Matching engine: greedy one-to-one assignment of source values to target
//! values, plus statistics and single-query search built on the same scorers.

pub mod engine;
pub mod error;
pub mod observer;
pub mod options;
pub mod search;
pub mod stats;

pub use engine::{MatchEngine, find_matches};
pub use error::{EngineError, Result};
pub use observer::{MatchEvent, MatchObserver, NoopObserver, TracingObserver};
pub use options::{DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD, MatchOptions};
pub use search::{DEFAULT_SEARCH_LIMIT, MIN_SEARCH_SCORE, SearchHit, rank};
pub use stats::matching_stats;
