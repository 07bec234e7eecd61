//! Session layer — one pool snapshot plus one navigator per topic.

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    models::{Couplet, PoolRequest, QuestionPool, QuizTopic},
    navigator::Navigator,
    pool::build_pools_with_rng,
};

/// One quiz round: an immutable pool snapshot and the per-topic navigators
/// built from it.
///
/// A corpus or group change always constructs a fresh session. Navigators
/// are never re-pointed at a replaced target list, so a stale index into a
/// superseded pool cannot survive a rebuild.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pool: QuestionPool,
    last_word_nav: Option<Navigator<String>>,
    first_word_nav: Option<Navigator<String>>,
    text_nav: Option<Navigator<Couplet>>,
    meaning_nav: Option<Navigator<Couplet>>,
    chapter_nav: Option<Navigator<String>>,
}

impl QuizSession {
    /// Build the pools for `corpus` and a navigator for every non-empty
    /// topic list.
    pub fn new(corpus: &[Couplet], request: &PoolRequest) -> Self {
        let mut rng: StdRng = match request.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(corpus, request.max_per_pool, &mut rng)
    }

    /// Same as [`QuizSession::new`] for callers that thread their own RNG.
    pub fn with_rng<R: Rng>(corpus: &[Couplet], max_per_pool: usize, rng: &mut R) -> Self {
        let pool = build_pools_with_rng(corpus, max_per_pool, rng);
        Self::from_pool(pool, rng)
    }

    fn from_pool<R: Rng>(pool: QuestionPool, rng: &mut R) -> Self {
        let last_word_nav = navigator_for(&pool.last_words, rng);
        let first_word_nav = navigator_for(&pool.first_words, rng);
        let text_nav = navigator_for(&pool.text_couplets, rng);
        let meaning_nav = navigator_for(&pool.meaning_couplets, rng);
        let chapter_nav = navigator_for(&pool.chapters, rng);
        debug!(
            "session: topics last_word={} first_word={} text={} meaning={} chapter={}",
            pool.last_words.len(),
            pool.first_words.len(),
            pool.text_couplets.len(),
            pool.meaning_couplets.len(),
            pool.chapters.len()
        );
        QuizSession {
            pool,
            last_word_nav,
            first_word_nav,
            text_nav,
            meaning_nav,
            chapter_nav,
        }
    }

    /// The pool snapshot this session was built from.
    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    /// Number of questions available for `topic`.
    pub fn topic_len(&self, topic: QuizTopic) -> usize {
        self.pool.topic_len(topic)
    }

    /// True when `topic` has questions and therefore a live navigator.
    /// The UI hides topics for which this is false.
    pub fn has_topic(&self, topic: QuizTopic) -> bool {
        match topic {
            QuizTopic::LastWord    => self.last_word_nav.is_some(),
            QuizTopic::FirstWord   => self.first_word_nav.is_some(),
            QuizTopic::CoupletText => self.text_nav.is_some(),
            QuizTopic::Meaning     => self.meaning_nav.is_some(),
            QuizTopic::Chapter     => self.chapter_nav.is_some(),
        }
    }

    pub fn last_word_nav(&mut self) -> Option<&mut Navigator<String>> {
        self.last_word_nav.as_mut()
    }

    pub fn first_word_nav(&mut self) -> Option<&mut Navigator<String>> {
        self.first_word_nav.as_mut()
    }

    pub fn text_nav(&mut self) -> Option<&mut Navigator<Couplet>> {
        self.text_nav.as_mut()
    }

    pub fn meaning_nav(&mut self) -> Option<&mut Navigator<Couplet>> {
        self.meaning_nav.as_mut()
    }

    pub fn chapter_nav(&mut self) -> Option<&mut Navigator<String>> {
        self.chapter_nav.as_mut()
    }

    /// Forget every navigator's answered keys (round or timer restart).
    /// Rotation order and current positions are untouched.
    pub fn reset_answers(&mut self) {
        if let Some(nav) = self.last_word_nav.as_mut() {
            nav.clear_answered();
        }
        if let Some(nav) = self.first_word_nav.as_mut() {
            nav.clear_answered();
        }
        if let Some(nav) = self.text_nav.as_mut() {
            nav.clear_answered();
        }
        if let Some(nav) = self.meaning_nav.as_mut() {
            nav.clear_answered();
        }
        if let Some(nav) = self.chapter_nav.as_mut() {
            nav.clear_answered();
        }
    }

    /// Distinct answered keys across all topics this round.
    pub fn answered_total(&self) -> usize {
        [
            self.last_word_nav.as_ref().map_or(0, Navigator::answered_count),
            self.first_word_nav.as_ref().map_or(0, Navigator::answered_count),
            self.text_nav.as_ref().map_or(0, Navigator::answered_count),
            self.meaning_nav.as_ref().map_or(0, Navigator::answered_count),
            self.chapter_nav.as_ref().map_or(0, Navigator::answered_count),
        ]
        .iter()
        .sum()
    }
}

/// An empty topic list gets no navigator; the topic is simply absent from
/// this round.
fn navigator_for<T: Clone, R: Rng>(list: &[T], rng: &mut R) -> Option<Navigator<T>> {
    Navigator::new(list.to_vec(), rng).ok()
}
