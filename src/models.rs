use std::collections::{BTreeMap, HashMap};
use serde::{Deserialize, Serialize};
use crate::services::engine::GuessEngine;

/// A loaded vocabulary and when it was built
pub struct Topic {
    pub engine: GuessEngine,
    pub loaded_at: String,
}

/// Application state shared across all handlers
pub struct AppState {
    pub topics: HashMap<String, Topic>,
    pub default_topic: String,
}

/// A guess request as sent by the presentation layer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub current_word_state: Option<String>,
    pub guessed_letters: Option<Vec<String>>,
    pub guesses_remaining: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub next_guess: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicInfo {
    pub code: String,
    pub word_count: usize,
    pub loaded_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub word_count: usize,
    pub max_word_length: usize,
    pub letter_frequency: BTreeMap<char, usize>,
    pub position_frequency: Vec<BTreeMap<char, usize>>,
}
