//! Window activator: pick a reusable editor window and bring it to the front.

pub mod handler;
pub mod matching;
pub mod types;

pub use types::ActivationSettings;
