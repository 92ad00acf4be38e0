//! Opener: the whole decision tree, from process probe to the single open call.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::OpenError;
