//! Question-pool construction.
//!
//! `build_pools` partitions a corpus into the five topic pools in a fixed
//! priority order: the word-frequency pools claim couplets first, then the
//! sampled couplet pools, then the chapter pool. Each step draws only from
//! the remainder the previous steps left behind, which is what makes the
//! pools disjoint without any cross-checking.

use std::collections::HashMap;

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    models::{Couplet, PoolRequest, QuestionPool},
    shuffle::shuffle,
};

/// Build the five topic pools from a corpus already filtered to the active
/// age group.
///
/// Total over any corpus: an empty or undersized corpus produces shorter
/// (possibly empty) pools and never errors.
pub fn build_pools(corpus: &[Couplet], request: &PoolRequest) -> QuestionPool {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    build_pools_with_rng(corpus, request.max_per_pool, &mut rng)
}

/// Same as [`build_pools`] for callers that thread their own RNG.
pub fn build_pools_with_rng<R: Rng>(
    corpus: &[Couplet],
    max_per_pool: usize,
    rng: &mut R,
) -> QuestionPool {
    let mut remaining: Vec<Couplet> = corpus.to_vec();

    // Most frequent final words. Every couplet sharing a selected word is
    // consumed, so this step usually removes far more couplets than
    // `max_per_pool`.
    let last_words = top_words(&remaining, max_per_pool, Couplet::last_word);
    remaining.retain(|c| {
        c.last_word()
            .map_or(true, |w| !last_words.iter().any(|s| s == w))
    });
    debug!(
        "pool-build: last-word pool size={} remaining={}",
        last_words.len(),
        remaining.len()
    );

    // Most frequent first words over the new remainder.
    let first_words = top_words(&remaining, max_per_pool, Couplet::first_word);
    remaining.retain(|c| {
        c.first_word()
            .map_or(true, |w| !first_words.iter().any(|s| s == w))
    });
    debug!(
        "pool-build: first-word pool size={} remaining={}",
        first_words.len(),
        remaining.len()
    );

    // Random couplet samples. Draining the front of a shuffled remainder
    // removes exactly the sampled couplets, nothing more.
    shuffle(&mut remaining, rng);
    let take = max_per_pool.min(remaining.len());
    let text_couplets: Vec<Couplet> = remaining.drain(..take).collect();
    debug!(
        "pool-build: text pool size={} remaining={}",
        text_couplets.len(),
        remaining.len()
    );

    shuffle(&mut remaining, rng);
    let take = max_per_pool.min(remaining.len());
    let meaning_couplets: Vec<Couplet> = remaining.drain(..take).collect();
    debug!(
        "pool-build: meaning pool size={} remaining={}",
        meaning_couplets.len(),
        remaining.len()
    );

    // Distinct chapter names in shuffle order, then every couplet under a
    // selected chapter is consumed.
    shuffle(&mut remaining, rng);
    let mut chapters: Vec<String> = Vec::new();
    for couplet in &remaining {
        if chapters.len() == max_per_pool {
            break;
        }
        if !chapters.contains(&couplet.chapter) {
            chapters.push(couplet.chapter.clone());
        }
    }
    remaining.retain(|c| !chapters.contains(&c.chapter));
    debug!(
        "pool-build: chapter pool size={} remaining={}",
        chapters.len(),
        remaining.len()
    );

    QuestionPool {
        last_words,
        first_words,
        text_couplets,
        meaning_couplets,
        chapters,
    }
}

/// Top `limit` distinct words by descending frequency.
///
/// Counting preserves first-encounter order and the sort is stable, so ties
/// resolve to whichever word appeared first in the input.
fn top_words<F>(couplets: &[Couplet], limit: usize, word_of: F) -> Vec<String>
where
    F: Fn(&Couplet) -> Option<&str>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for couplet in couplets {
        let Some(word) = word_of(couplet) else { continue };
        match slots.get(word) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect()
}
