use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use crate::error::GuessError;

/// Marks a position in the word that has not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Every letter the engine is allowed to guess, in tie-break order
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// The partially revealed word, one slot per letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

impl Pattern {
    /// A pattern of `len` unrevealed positions
    pub fn unrevealed(len: usize) -> Self {
        Pattern { slots: vec![None; len] }
    }

    pub fn from_slots(slots: Vec<Option<char>>) -> Self {
        let slots = slots
            .into_iter()
            .map(|slot| slot.map(|c| c.to_ascii_lowercase()))
            .collect();
        Pattern { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Letters already shown somewhere in the word
    pub fn revealed_letters(&self) -> HashSet<char> {
        self.slots.iter().flatten().copied().collect()
    }

    /// True when `word` has the same length and agrees on every revealed slot
    pub fn matches(&self, word: &str) -> bool {
        if word.chars().count() != self.slots.len() {
            return false;
        }
        word.chars()
            .zip(self.slots.iter())
            .all(|(c, slot)| slot.map_or(true, |revealed| revealed == c))
    }
}

impl FromStr for Pattern {
    type Err = GuessError;

    /// Parse "_ _ e _ a n" style input. Whitespace separators are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut slots = Vec::new();
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            if ch == PLACEHOLDER {
                slots.push(None);
            } else if ch.is_ascii_alphabetic() {
                slots.push(Some(ch.to_ascii_lowercase()));
            } else {
                return Err(GuessError::malformed(format!(
                    "unexpected character '{}' in word state",
                    ch
                )));
            }
        }
        Ok(Pattern { slots })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}

/// Lowercase a collection of guessed letters into a set
pub fn normalize_guessed<I>(letters: I) -> HashSet<char>
where
    I: IntoIterator<Item = char>,
{
    letters.into_iter().map(|c| c.to_ascii_lowercase()).collect()
}

/// Parse the wire form of guessed letters, each entry a single letter
pub fn parse_guessed_letters(entries: &[String]) -> Result<HashSet<char>, GuessError> {
    let mut guessed = HashSet::new();
    for entry in entries {
        let mut chars = entry.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                guessed.insert(c.to_ascii_lowercase());
            }
            _ => {
                return Err(GuessError::malformed(format!(
                    "guessed letter '{}' is not a single letter",
                    entry
                )))
            }
        }
    }
    Ok(guessed)
}

/// Letters of the alphabet not yet guessed, in alphabetical order
pub fn available_letters(guessed: &HashSet<char>) -> Vec<char> {
    ALPHABET.iter().copied().filter(|c| !guessed.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_strips_separators() {
        let pattern: Pattern = "_ _ e _ a n".parse().unwrap();
        assert_eq!(pattern.len(), 6);
        assert_eq!(pattern.slots()[2], Some('e'));
        assert_eq!(pattern.slots()[0], None);
        assert_eq!(pattern.to_string(), "__e_an");
    }

    #[test]
    fn test_parse_pattern_lowercases() {
        let pattern: Pattern = "C _ T".parse().unwrap();
        assert_eq!(pattern.slots(), &[Some('c'), None, Some('t')]);
    }

    #[test]
    fn test_parse_pattern_rejects_junk() {
        assert!(matches!(
            "c*t".parse::<Pattern>(),
            Err(GuessError::MalformedRequest(_))
        ));
        assert!(matches!(
            "c1t".parse::<Pattern>(),
            Err(GuessError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_pattern_matches() {
        let pattern: Pattern = "c_t".parse().unwrap();
        assert!(pattern.matches("cat"));
        assert!(pattern.matches("cut"));
        assert!(!pattern.matches("car")); // wrong letter at revealed slot
        assert!(!pattern.matches("cats")); // wrong length
        assert!(Pattern::unrevealed(3).matches("dog"));
    }

    #[test]
    fn test_from_slots_lowercases() {
        let pattern = Pattern::from_slots(vec![None, Some('A'), None]);
        assert_eq!(pattern, "_a_".parse::<Pattern>().unwrap());
    }

    #[test]
    fn test_revealed_letters() {
        let pattern: Pattern = "a__a_e".parse().unwrap();
        let revealed = pattern.revealed_letters();
        assert_eq!(revealed.len(), 2);
        assert!(revealed.contains(&'a'));
        assert!(revealed.contains(&'e'));
    }

    #[test]
    fn test_parse_guessed_letters() {
        let entries = vec!["A".to_string(), "b".to_string(), "a".to_string()];
        let guessed = parse_guessed_letters(&entries).unwrap();
        assert_eq!(guessed.len(), 2);
        assert!(guessed.contains(&'a'));

        assert!(parse_guessed_letters(&["ab".to_string()]).is_err());
        assert!(parse_guessed_letters(&["".to_string()]).is_err());
        assert!(parse_guessed_letters(&["7".to_string()]).is_err());
    }

    #[test]
    fn test_available_letters() {
        let guessed = normalize_guessed(['A', 'z']);
        let available = available_letters(&guessed);
        assert_eq!(available.len(), 24);
        assert_eq!(available[0], 'b');
        assert!(!available.contains(&'z'));

        let all = normalize_guessed(ALPHABET);
        assert!(available_letters(&all).is_empty());
    }
}
