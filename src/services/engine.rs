//! Letter selection for hangman.
//!
//! The engine narrows its vocabulary to the words consistent with what the
//! player has seen so far, then picks the un-guessed letter that appears in
//! the most of those words, nudged toward letters common across the whole
//! vocabulary. Ties resolve alphabetically.

use std::collections::{BTreeMap, HashMap, HashSet};
use log::{debug, info, warn};
use crate::error::GuessError;
use crate::services::distribution::{calculate_distribution, calculate_position_distribution};
use crate::utils::{available_letters, Pattern};

/// Returned when every letter has already been guessed
pub const DEFAULT_GUESS: char = 'a';

/// Guesses remaining when a request does not say
pub const DEFAULT_GUESSES_REMAINING: u32 = 6;

/// Fixed vocabulary plus the letter statistics derived from it
#[derive(Debug, Clone)]
pub struct GuessEngine {
    words: Vec<String>,
    letter_freq: HashMap<char, usize>,
    position_freq: Vec<HashMap<char, usize>>,
}

impl GuessEngine {
    /// Build an engine over `words`. Words are lowercased; duplicates are kept.
    pub fn new<I, S>(words: I) -> Result<Self, GuessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();

        if words.is_empty() {
            return Err(GuessError::EmptyVocabulary);
        }

        let letter_freq = calculate_distribution(&words);
        // Kept for reporting only; scoring never reads it.
        let position_freq = calculate_position_distribution(&words);

        info!(
            "Built guess engine over {} words ({} distinct letters, longest word {})",
            words.len(),
            letter_freq.len(),
            position_freq.len()
        );

        Ok(GuessEngine {
            words,
            letter_freq,
            position_freq,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn max_word_length(&self) -> usize {
        self.position_freq.len()
    }

    pub fn global_frequency(&self) -> &HashMap<char, usize> {
        &self.letter_freq
    }

    pub fn position_frequency(&self) -> &[HashMap<char, usize>] {
        &self.position_freq
    }

    fn frequency_of(&self, letter: char) -> usize {
        self.letter_freq.get(&letter).copied().unwrap_or(0)
    }

    /// Vocabulary words still consistent with the pattern and the guess history.
    ///
    /// A guessed letter that is not shown anywhere in the pattern counts as a
    /// miss, and any word containing it is dropped. Guessed letters are
    /// compared case-insensitively.
    pub fn candidates(&self, pattern: &Pattern, guessed: &HashSet<char>) -> Vec<&str> {
        let revealed = pattern.revealed_letters();
        let misses: Vec<char> = guessed
            .iter()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| !revealed.contains(c))
            .collect();

        self.words
            .iter()
            .filter(|word| pattern.matches(word))
            .filter(|word| !misses.iter().any(|&miss| word.contains(miss)))
            .map(String::as_str)
            .collect()
    }

    /// Score each un-guessed letter that occurs in at least one candidate.
    ///
    /// A letter earns one point per candidate containing it, scaled by
    /// `1 + ln(global_frequency + 1) / 10`.
    pub fn letter_scores(&self, candidates: &[&str], guessed: &HashSet<char>) -> BTreeMap<char, f64> {
        let guessed: HashSet<char> = guessed.iter().map(|c| c.to_ascii_lowercase()).collect();
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for word in candidates {
            let letters: HashSet<char> = word.chars().collect();
            for c in letters {
                if c.is_ascii_lowercase() && !guessed.contains(&c) {
                    *counts.entry(c).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .map(|(c, count)| {
                let boost = 1.0 + ((self.frequency_of(c) + 1) as f64).ln() / 10.0;
                (c, count as f64 * boost)
            })
            .collect()
    }

    /// Pick the next letter to guess.
    ///
    /// `guesses_remaining` is accepted for callers that track it but does not
    /// affect the choice.
    pub fn next_guess(&self, pattern: &Pattern, guessed: &HashSet<char>, guesses_remaining: u32) -> char {
        let guessed: HashSet<char> = guessed.iter().map(|c| c.to_ascii_lowercase()).collect();
        let available = available_letters(&guessed);

        if available.is_empty() {
            warn!("All letters already guessed for pattern {}, returning '{}'", pattern, DEFAULT_GUESS);
            return DEFAULT_GUESS;
        }

        let candidates = self.candidates(pattern, &guessed);
        debug!(
            "Pattern {} with {} guessed ({} remaining): {} candidates",
            pattern,
            guessed.len(),
            guesses_remaining,
            candidates.len()
        );

        if candidates.is_empty() {
            let guess = self.most_frequent(&available);
            debug!("No candidates, falling back to global frequency: {}", guess);
            return guess;
        }

        let scores = self.letter_scores(&candidates, &guessed);

        // BTreeMap iterates alphabetically, so the first of equal scores wins.
        let mut best: Option<(char, f64)> = None;
        for (&c, &score) in &scores {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((c, score));
            }
        }

        match best {
            Some((guess, score)) => {
                debug!("Guessing '{}' with score {:.3}", guess, score);
                guess
            }
            None => {
                debug!("Candidates hold no un-guessed letters, taking first available");
                available[0]
            }
        }
    }

    /// Highest global frequency among `available`, alphabetical on ties.
    fn most_frequent(&self, available: &[char]) -> char {
        let mut best = available[0];
        for &c in &available[1..] {
            if self.frequency_of(c) > self.frequency_of(best) {
                best = c;
            }
        }
        best
    }
}
