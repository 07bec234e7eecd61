//! # kural_quiz_gen
//!
//! Offline question-pool generation and circular randomized navigation for a
//! Thirukkural (Tamil couplet) quiz application.
//!
//! The host application owns rendering, routing, timers, and scoring. This
//! crate owns the two pieces of real logic underneath them:
//!
//! 1. [`build_pools`] partitions a corpus of couplets into five disjoint
//!    topic pools — last-word, first-word, couplet-text, meaning, and
//!    chapter — in a fixed priority order. The word pools claim the most
//!    frequent words (and every couplet sharing them); the later pools are
//!    random samples from whatever the earlier steps left behind.
//! 2. [`Navigator`] walks one topic's targets in random order without
//!    repetition: every target is visited exactly once per cycle, forward
//!    and backward share a single rotation queue, and answered targets are
//!    tracked under opaque keys.
//!
//! [`QuizSession`] ties the two together: one pool snapshot plus one
//! navigator per non-empty topic, rebuilt wholesale on every corpus or
//! age-group change.
//!
//! ## Determinism
//!
//! Every randomized entry point takes either an explicit `Rng` or a
//! `rng_seed: Option<u64>`; a fixed seed reproduces the exact same pools and
//! traversal order, which the test suite leans on throughout. The two
//! word-frequency pools are deterministic regardless of seed.
//!
//! ## Quick start
//!
//! ```rust
//! use kural_quiz_gen::{build_pools, Couplet, Navigator, PoolRequest};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let corpus: Vec<Couplet> = (1..=60)
//!     .map(|n| Couplet {
//!         number: n,
//!         lines: [format!("first line {n}"), format!("second line {n}")],
//!         words: vec![
//!             format!("w{}", n % 31),
//!             "idai".to_string(),
//!             format!("v{}", n % 29),
//!         ],
//!         groups: vec!["primary".to_string()],
//!         chapter: format!("Athigaram {}", n % 7),
//!         meanings: vec![format!("meaning {n}")],
//!     })
//!     .collect();
//!
//! // Partition the corpus into the five disjoint topic pools.
//! let pool = build_pools(&corpus, &PoolRequest { max_per_pool: 10, rng_seed: Some(42) });
//! assert!(pool.last_words.len() <= 10);
//!
//! // Walk one topic without repeats until the cycle closes.
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut nav = Navigator::new(pool.last_words.clone(), &mut rng).unwrap();
//! for _ in 0..nav.len() {
//!     let index = nav.advance_forward(&mut rng);
//!     println!("ask: {}", nav.targets()[index]);
//! }
//! nav.mark_answered(format!("last-word:{}", nav.current()));
//! ```

pub mod client_adapter;
pub mod quiz_engine;

// Convenience re-exports so callers can use `kural_quiz_gen::build_pools`
// directly without reaching into `quiz_engine::`.
pub use client_adapter::{couplets_from_json, pool_summary};
pub use quiz_engine::{
    build_pools, build_pools_with_rng, Couplet, Navigator, NavigatorError,
    PoolRequest, QuestionPool, QuizSession, QuizTopic, DEFAULT_MAX_PER_POOL,
};
