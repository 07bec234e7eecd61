use serde_json::{json, Value};

use crate::quiz_engine::models::{Couplet, QuestionPool, QuizTopic};

/// Deserialize the statically bundled corpus file.
///
/// The engine never fetches or parses raw data on its own; the host hands
/// the JSON text in and gets typed couplets back.
pub fn couplets_from_json(json_text: &str) -> serde_json::Result<Vec<Couplet>> {
    serde_json::from_str(json_text)
}

/// Build one topic entry for the front-end menu.
fn topic_entry(topic: QuizTopic, size: usize) -> Value {
    json!({
        "topic": topic.to_string(),
        "size": size,
        "enabled": size > 0
    })
}

/// Map a [`QuestionPool`] to the topic-menu JSON the quiz client renders.
///
/// A topic whose pool came out empty ships `enabled: false` so the client
/// disables it instead of ever navigating an empty list.
pub fn pool_summary(pool: &QuestionPool) -> Value {
    let topics: Vec<Value> = QuizTopic::ALL
        .iter()
        .map(|&topic| topic_entry(topic, pool.topic_len(topic)))
        .collect();

    json!({
        "topics": topics,
        "total_questions": pool.total_len()
    })
}
