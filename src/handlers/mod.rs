pub mod guess;
pub mod topics;
