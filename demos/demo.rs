//! End-to-end walkthrough of the quiz engine.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows how `kural_quiz_gen` works end to end:
//!
//! 1. **Pool building** — a synthetic corpus is partitioned into the five
//!    disjoint topic pools and summarized the way the quiz client sees it.
//! 2. **Cycle traversal** — one topic is walked for a full cycle, proving
//!    every question appears once before any repeat.
//! 3. **Prev/next** — forward and backward share one rotation queue, so
//!    stepping back returns to the previous question.
//! 4. **Answer tracking** — questions are marked under opaque keys and the
//!    round is reset without disturbing the traversal order.
//!
//! Seeds are fixed throughout, so the output is reproducible. Set
//! `RUST_LOG=debug` to watch the per-step pool sizes.

use rand::{rngs::StdRng, SeedableRng};

use kural_quiz_gen::{pool_summary, Couplet, QuizSession, QuizTopic};

/// A corpus shaped like the real one: repeated final and first words across
/// chapters, so the frequency pools have genuine sharers.
fn sample_corpus() -> Vec<Couplet> {
    (1..=120)
        .map(|n| Couplet {
            number: n,
            lines: [
                format!("mudhal vari ennum {n}"),
                format!("irandaam vari mudiyum v{}", n % 29),
            ],
            words: vec![
                format!("w{}", n % 31),
                "vari".to_string(),
                "ennum".to_string(),
                format!("v{}", n % 29),
            ],
            groups: vec!["primary".to_string()],
            chapter: format!("Athigaram {}", n % 11),
            meanings: vec![format!("prose meaning of couplet {n}")],
        })
        .collect()
}

fn main() {
    env_logger::init();

    let corpus = sample_corpus();

    // ── Pool building ────────────────────────────────────────────────────────
    // One seeded build; the summary is what the client's topic menu renders.
    println!();
    println!("══ Pool building: {} couplets, cap 15 ══", corpus.len());
    println!();

    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = QuizSession::with_rng(&corpus, 15, &mut rng);

    for topic in QuizTopic::ALL {
        println!("  {:<12} {:>2} questions", topic.to_string(), session.topic_len(topic));
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&pool_summary(session.pool())).unwrap());

    // ── Cycle traversal ──────────────────────────────────────────────────────
    // A full cycle over the last-word topic: every entry exactly once.
    println!();
    println!("══ One full last-word cycle ══");
    println!();

    if let Some(nav) = session.last_word_nav() {
        let len = nav.len();
        for step in 1..=len {
            let index = nav.advance_forward(&mut rng);
            println!("  step {step:>2}: complete the couplet ending in '{}'", nav.targets()[index]);
        }
    }

    // ── Prev/next on one control ─────────────────────────────────────────────
    println!();
    println!("══ Forward twice, back twice ══");
    println!();

    if let Some(nav) = session.text_nav() {
        let a = nav.advance_forward(&mut rng);
        println!("  next     → {}", nav.targets()[a]);
        let b = nav.advance_forward(&mut rng);
        println!("  next     → {}", nav.targets()[b]);
        let back = nav.advance_backward(&mut rng);
        println!("  previous → {}", nav.targets()[back]);
        let back = nav.advance_backward(&mut rng);
        println!("  previous → {}", nav.targets()[back]);
    }

    // ── Answer tracking ──────────────────────────────────────────────────────
    println!();
    println!("══ Answer tracking ══");
    println!();

    if let Some(nav) = session.meaning_nav() {
        for _ in 0..3 {
            let index = nav.advance_forward(&mut rng);
            let number = nav.targets()[index].number;
            nav.mark_answered(format!("meaning:{number}"));
        }
        println!("  answered this round: {}", nav.answered_count());
    }
    println!("  answered across topics: {}", session.answered_total());

    session.reset_answers();
    println!("  after round restart:    {}", session.answered_total());
}
