//! Circular randomized traversal over a fixed target list.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use rand::Rng;

use crate::quiz_engine::shuffle::random_permutation;

/// Construction-time misuse of [`Navigator`].
///
/// Both variants signal a caller bug: a topic whose pool came out empty must
/// be hidden by the UI, never navigated. Surfaced fail-fast, never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorError {
    /// The target list was empty.
    EmptyTargets,
    /// The explicit starting index was outside the target list.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigatorError::EmptyTargets => {
                write!(f, "navigator requires a non-empty target list")
            }
            NavigatorError::IndexOutOfRange { index, len } => {
                write!(f, "initial index {index} out of range for {len} targets")
            }
        }
    }
}

impl std::error::Error for NavigatorError {}

/// Per-topic traversal engine.
///
/// Visits every target exactly once per cycle before any repeat, stepping
/// forward or backward over one shared rotation queue. The queue fills
/// lazily on the first advance: a fresh random permutation of all indices
/// with the current index relocated to the tail, so the item already on
/// screen comes around last.
///
/// Forward rotates the front of the queue to the back; backward rotates the
/// back to the front. Both directions share the queue — stepping backward
/// undoes a step along the same sequence rather than generating an
/// independent reverse-random one, so prev/next on the same control behave
/// the way the original application did.
///
/// The target list is fixed for the navigator's lifetime. When the
/// underlying pool changes, the owner constructs a new navigator instead of
/// swapping targets under a live one.
#[derive(Debug, Clone)]
pub struct Navigator<T> {
    targets: Vec<T>,
    current_index: usize,
    order: VecDeque<usize>,
    answered_keys: HashSet<String>,
}

impl<T> Navigator<T> {
    /// Create a navigator starting at a uniformly random index.
    pub fn new<R: Rng>(targets: Vec<T>, rng: &mut R) -> Result<Self, NavigatorError> {
        if targets.is_empty() {
            return Err(NavigatorError::EmptyTargets);
        }
        let current_index = rng.gen_range(0..targets.len());
        Ok(Navigator {
            targets,
            current_index,
            order: VecDeque::new(),
            answered_keys: HashSet::new(),
        })
    }

    /// Create a navigator starting at a fixed index.
    pub fn with_initial_index(
        targets: Vec<T>,
        initial_index: usize,
    ) -> Result<Self, NavigatorError> {
        if targets.is_empty() {
            return Err(NavigatorError::EmptyTargets);
        }
        if initial_index >= targets.len() {
            return Err(NavigatorError::IndexOutOfRange {
                index: initial_index,
                len: targets.len(),
            });
        }
        Ok(Navigator {
            targets,
            current_index: initial_index,
            order: VecDeque::new(),
            answered_keys: HashSet::new(),
        })
    }

    /// Step to the next target and return its index.
    ///
    /// Across `len()` consecutive calls every index appears exactly once,
    /// after which the same relative order repeats.
    pub fn advance_forward<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.ensure_order(rng);
        if let Some(next) = self.order.pop_front() {
            self.order.push_back(next);
            self.current_index = next;
        }
        self.current_index
    }

    /// Step back along the shared rotation queue and return the new index.
    ///
    /// Immediately after a forward step this returns to the previous item.
    /// Further backward steps keep unwinding the same queue, which may
    /// surface targets the forward direction has not shown yet.
    pub fn advance_backward<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.ensure_order(rng);
        if let Some(tail) = self.order.pop_back() {
            self.order.push_front(tail);
        }
        if let Some(&tail) = self.order.back() {
            self.current_index = tail;
        }
        self.current_index
    }

    /// Fill the rotation queue at the start of a cycle: a random permutation
    /// of all indices with the current index moved to the tail.
    fn ensure_order<R: Rng>(&mut self, rng: &mut R) {
        if !self.order.is_empty() {
            return;
        }
        let mut order = random_permutation(self.targets.len(), rng);
        order.retain(|&index| index != self.current_index);
        order.push(self.current_index);
        self.order = order.into();
    }

    /// The target currently shown.
    pub fn current(&self) -> &T {
        &self.targets[self.current_index]
    }

    /// Index of the target currently shown.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The full target list.
    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Number of targets. Always at least 1.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always false: construction rejects empty target lists.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Record an answered target under an opaque caller-supplied key.
    ///
    /// Idempotent; returns whether the key was newly inserted. The navigator
    /// never interprets the key — scoring lives in the host.
    pub fn mark_answered(&mut self, key: impl Into<String>) -> bool {
        self.answered_keys.insert(key.into())
    }

    /// True when `key` was marked answered in the current round.
    pub fn is_answered(&self, key: &str) -> bool {
        self.answered_keys.contains(key)
    }

    /// Number of distinct answered keys this round.
    pub fn answered_count(&self) -> usize {
        self.answered_keys.len()
    }

    /// Forget all answered keys (new round or timer restart). The rotation
    /// queue and current index are untouched.
    pub fn clear_answered(&mut self) {
        self.answered_keys.clear();
    }
}
