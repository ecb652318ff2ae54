//! Hangman letter guessing.
//!
//! [`GuessEngine`] picks the next letter for a partially revealed word.
//! [`process_request`] and [`process_input`] wrap it for callers that must
//! always get an answer back, even from a malformed request.

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use error::GuessError;
pub use models::{GuessRequest, GuessResponse};
pub use services::boundary::{process_input, process_request, try_guess};
pub use services::engine::GuessEngine;
pub use utils::Pattern;
