//! Request handling at the edge of the engine.
//!
//! Callers get a `GuessResponse` back no matter what they send. A bad
//! request still yields the default guess, with the problem described in
//! `error`.

use std::collections::HashSet;
use log::warn;
use crate::error::GuessError;
use crate::models::{GuessRequest, GuessResponse};
use crate::services::engine::{GuessEngine, DEFAULT_GUESS, DEFAULT_GUESSES_REMAINING};
use crate::utils::{parse_guessed_letters, Pattern};

/// A request whose fields have all been checked
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRequest {
    pub pattern: Pattern,
    pub guessed: HashSet<char>,
    pub guesses_remaining: u32,
}

impl GuessRequest {
    pub fn validate(&self) -> Result<ValidRequest, GuessError> {
        let state = self
            .current_word_state
            .as_deref()
            .ok_or_else(|| GuessError::malformed("missing currentWordState"))?;
        let pattern: Pattern = state.parse()?;
        if pattern.is_empty() {
            return Err(GuessError::malformed("currentWordState is empty"));
        }

        let letters = self
            .guessed_letters
            .as_ref()
            .ok_or_else(|| GuessError::malformed("missing guessedLetters"))?;
        let guessed = parse_guessed_letters(letters)?;

        let guesses_remaining = match self.guesses_remaining {
            None => DEFAULT_GUESSES_REMAINING,
            Some(n) => u32::try_from(n).map_err(|_| {
                GuessError::malformed(format!("guessesRemaining {} is out of range", n))
            })?,
        };

        Ok(ValidRequest {
            pattern,
            guessed,
            guesses_remaining,
        })
    }
}

impl From<Result<char, GuessError>> for GuessResponse {
    fn from(result: Result<char, GuessError>) -> Self {
        match result {
            Ok(guess) => GuessResponse {
                next_guess: guess.to_string(),
                error: None,
            },
            Err(e) => GuessResponse {
                next_guess: DEFAULT_GUESS.to_string(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Validate a structured request and pick a letter
pub fn try_guess(engine: &GuessEngine, request: &GuessRequest) -> Result<char, GuessError> {
    let valid = request.validate()?;
    Ok(engine.next_guess(&valid.pattern, &valid.guessed, valid.guesses_remaining))
}

/// Answer a structured request
pub fn process_request(engine: &GuessEngine, request: &GuessRequest) -> GuessResponse {
    let result = try_guess(engine, request);
    if let Err(e) = &result {
        warn!("Rejected guess request: {}", e);
    }
    result.into()
}

/// Answer a request given as JSON text
pub fn process_input(engine: &GuessEngine, input: &str) -> GuessResponse {
    match serde_json::from_str::<GuessRequest>(input) {
        Ok(request) => process_request(engine, &request),
        Err(e) => {
            warn!("Unparseable guess request: {}", e);
            GuessResponse::from(Err::<char, _>(GuessError::malformed(e.to_string())))
        }
    }
}
