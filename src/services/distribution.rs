use std::collections::HashMap;

/// Calculate letter frequency across every word in the vocabulary
pub fn calculate_distribution(words: &[String]) -> HashMap<char, usize> {
    let mut freq = HashMap::new();
    for word in words {
        for c in word.chars() {
            if c.is_alphabetic() {
                *freq.entry(c.to_ascii_lowercase()).or_insert(0) += 1;
            }
        }
    }
    freq
}

/// Count, for each index up to the longest word, how many words carry each letter there
pub fn calculate_position_distribution(words: &[String]) -> Vec<HashMap<char, usize>> {
    let max_len = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    let mut positions = vec![HashMap::new(); max_len];

    for word in words {
        for (i, c) in word.chars().enumerate() {
            if c.is_alphabetic() {
                *positions[i].entry(c.to_ascii_lowercase()).or_insert(0) += 1;
            }
        }
    }

    positions
}
