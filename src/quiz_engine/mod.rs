//! Core quiz engine — pool construction and randomized navigation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: couplets, topics, pools, build requests |
//! | `shuffle`   | Fisher-Yates shuffle and random index permutations |
//! | `pool`      | `build_pools()` — five-step disjoint pool extraction |
//! | `navigator` | `Navigator<T>` — non-repeating circular traversal |
//! | `session`   | `QuizSession` — one pool snapshot + per-topic navigators |

pub mod models;
pub mod navigator;
pub mod pool;
pub mod session;
pub mod shuffle;

// Re-export the public API surface so callers can use
// `quiz_engine::build_pools` without reaching into sub-modules.
pub use models::{Couplet, PoolRequest, QuestionPool, QuizTopic, DEFAULT_MAX_PER_POOL};
pub use navigator::{Navigator, NavigatorError};
pub use pool::{build_pools, build_pools_with_rng};
pub use session::QuizSession;
