pub mod boundary;
pub mod distribution;
pub mod engine;
pub mod word_loader;
