use std::fs::File;
use std::io::{self, BufRead};
use log::{info, warn};

/// Topic whose vocabulary ships inside the binary
pub const BUILTIN_TOPIC: &str = "airline";

const BUILTIN_LEXICON: &str = include_str!("../../share/words/airline/lexicon.txt");

/// Parse one word per line, keeping order and duplicates
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Load words from a plain text file (one word per line)
pub fn load_words(file_path: &str) -> io::Result<Vec<String>> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_lowercase());
        }
    }

    Ok(words)
}

/// The airline vocabulary compiled into the binary
pub fn builtin_words() -> Vec<String> {
    parse_words(BUILTIN_LEXICON)
}

/// Load a topic's lexicon, append its insertions and drop its deletions
pub fn load_filtered_words(base_dir: &str, topic: &str) -> Vec<String> {
    let topic_dir = format!("{}/words/{}", base_dir, topic);

    let lexicon_path = format!("{}/lexicon.txt", topic_dir);
    let insertions_path = format!("{}/insertions.txt", topic_dir);
    let deletions_path = format!("{}/deletions.txt", topic_dir);

    let mut words = match load_words(&lexicon_path) {
        Ok(words) => words,
        Err(_) if topic == BUILTIN_TOPIC => {
            info!("No lexicon for {} at {}, using built-in words.", topic, lexicon_path);
            builtin_words()
        }
        Err(_) => {
            warn!("Failed to load lexicon for {} at {}.", topic, lexicon_path);
            Vec::new()
        }
    };

    if let Ok(insertions) = load_words(&insertions_path) {
        info!("Inserted {} words into {} vocabulary.", insertions.len(), topic);
        words.extend(insertions);
    }

    if let Ok(deletions) = load_words(&deletions_path) {
        info!("Deleted {} words from {} vocabulary.", deletions.len(), topic);
        words.retain(|word| !deletions.contains(word));
    }

    info!("Total words for {}: {}", topic, words.len());
    words
}
