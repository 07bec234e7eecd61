use std::fmt;
use serde::{Deserialize, Serialize};

/// Default cap on the number of entries in each topic pool.
pub const DEFAULT_MAX_PER_POOL: usize = 15;

// ---------------------------------------------------------------------------
// Corpus entities
// ---------------------------------------------------------------------------

/// A single Thirukkural couplet with its quiz-relevant metadata.
///
/// Couplets arrive fully materialized from the host's data layer, already
/// filtered to the active age group. The engine reads them and never mutates
/// or re-parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couplet {
    /// Unique sequential number (1..=1330 in the full corpus).
    pub number: u32,
    /// The two verse lines.
    pub lines: [String; 2],
    /// Ordered tokenized words from both lines. Non-empty for well-formed input.
    pub words: Vec<String>,
    /// Age-group tags this couplet is shown under.
    pub groups: Vec<String>,
    /// Owning chapter (athigaram) name.
    pub chapter: String,
    /// One or more alternate prose meanings.
    pub meanings: Vec<String>,
}

impl Couplet {
    /// First tokenized word, or `None` for a malformed word-less couplet.
    pub fn first_word(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Final tokenized word, or `None` for a malformed word-less couplet.
    pub fn last_word(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }
}

impl fmt::Display for Couplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} / {}", self.number, self.lines[0], self.lines[1])
    }
}

// ---------------------------------------------------------------------------
// Quiz topics
// ---------------------------------------------------------------------------

/// The five pool-backed quiz topics.
///
/// The host UI also offers an "all couplets" browse mode, but that one reads
/// the filtered corpus directly and never goes through a pool or navigator,
/// so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizTopic {
    LastWord,
    FirstWord,
    CoupletText,
    Meaning,
    Chapter,
}

impl QuizTopic {
    /// All five topics in extraction-priority order.
    pub const ALL: [QuizTopic; 5] = [
        QuizTopic::LastWord,
        QuizTopic::FirstWord,
        QuizTopic::CoupletText,
        QuizTopic::Meaning,
        QuizTopic::Chapter,
    ];
}

impl fmt::Display for QuizTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizTopic::LastWord    => "Last Word",
            QuizTopic::FirstWord   => "First Word",
            QuizTopic::CoupletText => "Couplet",
            QuizTopic::Meaning     => "Meaning",
            QuizTopic::Chapter     => "Chapter",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Pool request / result types
// ---------------------------------------------------------------------------

/// Parameters for one pool build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolRequest {
    /// Cap on the entries per topic pool.
    pub max_per_pool: usize,
    /// Seed for the sampling steps. `None` draws from entropy, so two
    /// unseeded builds over the same corpus may differ in their sampled
    /// pools (the word-frequency pools are deterministic either way).
    pub rng_seed: Option<u64>,
}

impl PoolRequest {
    /// Default request: `DEFAULT_MAX_PER_POOL` entries, entropy seeding.
    pub fn new() -> Self {
        PoolRequest {
            max_per_pool: DEFAULT_MAX_PER_POOL,
            rng_seed: None,
        }
    }
}

impl Default for PoolRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// The five disjoint topic pools extracted from one corpus.
///
/// Pools are value snapshots: a corpus or group change rebuilds the whole
/// struct rather than mutating it, and every navigator built from it is
/// reconstructed at the same time.
///
/// A pool shorter than `max_per_pool` means the corpus could not fill it.
/// That is an expected condition, not an error — the topic simply offers
/// fewer questions, and an empty topic is hidden by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPool {
    /// Most frequent final words.
    pub last_words: Vec<String>,
    /// Most frequent first words, drawn after the last-word pool.
    pub first_words: Vec<String>,
    /// Randomly sampled couplets asked by their text.
    pub text_couplets: Vec<Couplet>,
    /// Randomly sampled couplets asked by their meaning.
    pub meaning_couplets: Vec<Couplet>,
    /// Distinct chapter names in sample order.
    pub chapters: Vec<String>,
}

impl QuestionPool {
    /// Number of questions available for `topic`.
    pub fn topic_len(&self, topic: QuizTopic) -> usize {
        match topic {
            QuizTopic::LastWord    => self.last_words.len(),
            QuizTopic::FirstWord   => self.first_words.len(),
            QuizTopic::CoupletText => self.text_couplets.len(),
            QuizTopic::Meaning     => self.meaning_couplets.len(),
            QuizTopic::Chapter     => self.chapters.len(),
        }
    }

    /// Questions available across all five topics.
    pub fn total_len(&self) -> usize {
        QuizTopic::ALL.iter().map(|&t| self.topic_len(t)).sum()
    }

    /// True when `topic` has at least one question.
    pub fn has_topic(&self, topic: QuizTopic) -> bool {
        self.topic_len(topic) > 0
    }
}
